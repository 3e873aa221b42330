//! Binding and event data for the shortcut dispatcher.

use std::fmt;

use crate::infra::platform::{self, PrimaryModifier};

/// One key-down notification from the host.
///
/// `in_scope` is computed by the host when the dispatcher is scoped to a
/// subtree: it answers "did this event originate inside the scope root".
/// Unscoped dispatchers ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Logical key value (`"k"`, `" "`, `"ArrowLeft"`, `">"`).
    pub key: String,
    /// Physical key code (`"KeyK"`, `"Space"`).
    pub code: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    /// Auto-repeat from a held key.
    pub repeat: bool,
    /// The event target is a text-editing element.
    pub from_editable: bool,
    pub in_scope: bool,
}

impl Default for KeyEvent {
    fn default() -> Self {
        Self {
            key: String::new(),
            code: String::new(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
            repeat: false,
            from_editable: false,
            in_scope: true,
        }
    }
}

impl KeyEvent {
    /// Plain press of a logical key, no modifiers.
    pub fn from_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_repeat(mut self) -> Self {
        self.repeat = true;
        self
    }
}

/// Required modifier states for a trigger.
///
/// Matching is exact: a modifier not requested here must be *absent* on the
/// event for the trigger to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierSpec {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl ModifierSpec {
    /// No modifiers held.
    pub const NONE: ModifierSpec = ModifierSpec {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const fn shift() -> Self {
        ModifierSpec {
            ctrl: false,
            alt: false,
            shift: true,
            meta: false,
        }
    }

    /// The platform-conventional shortcut modifier: Command on Apple
    /// platforms, Control elsewhere. Resolved once per process.
    pub fn primary() -> Self {
        Self::for_primary(platform::primary_modifier())
    }

    /// Deterministic variant of [`primary`](Self::primary) for callers that
    /// already know the platform convention.
    pub const fn for_primary(primary: PrimaryModifier) -> Self {
        match primary {
            PrimaryModifier::Command => ModifierSpec {
                ctrl: false,
                alt: false,
                shift: false,
                meta: true,
            },
            PrimaryModifier::Control => ModifierSpec {
                ctrl: true,
                alt: false,
                shift: false,
                meta: false,
            },
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.ctrl == event.ctrl
            && self.alt == event.alt
            && self.shift == event.shift
            && self.meta == event.meta
    }
}

/// Repeat-event admission policy for a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatPolicy {
    /// Only the initial (non-repeat) press matches.
    Initial,
    /// Only auto-repeat events match.
    RepeatOnly,
    /// Either.
    #[default]
    Allow,
}

/// One way a binding can be satisfied: a key value and/or physical code,
/// required modifiers, and a repeat policy.
///
/// Key values compare ASCII case-insensitively so letter bindings survive
/// CapsLock; codes compare exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTrigger {
    pub key: Option<String>,
    pub code: Option<String>,
    pub modifiers: ModifierSpec,
    pub repeat: RepeatPolicy,
}

impl KeyTrigger {
    /// Trigger on a logical key value with no modifiers.
    pub fn key(value: &str) -> Self {
        Self {
            key: Some(value.to_string()),
            code: None,
            modifiers: ModifierSpec::NONE,
            repeat: RepeatPolicy::default(),
        }
    }

    /// Trigger on a physical key code with no modifiers.
    pub fn code(value: &str) -> Self {
        Self {
            key: None,
            code: Some(value.to_string()),
            modifiers: ModifierSpec::NONE,
            repeat: RepeatPolicy::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: ModifierSpec) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_repeat(mut self, repeat: RepeatPolicy) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        // A trigger with neither key nor code matches nothing.
        if self.key.is_none() && self.code.is_none() {
            return false;
        }
        if let Some(key) = &self.key
            && !key.eq_ignore_ascii_case(&event.key)
        {
            return false;
        }
        if let Some(code) = &self.code
            && code != &event.code
        {
            return false;
        }
        if !self.modifiers.matches(event) {
            return false;
        }
        match self.repeat {
            RepeatPolicy::Initial => !event.repeat,
            RepeatPolicy::RepeatOnly => event.repeat,
            RepeatPolicy::Allow => true,
        }
    }
}

/// A registered shortcut: one or more triggers producing one command, with
/// an optional guard and a priority (higher wins; registration order breaks
/// ties).
pub struct KeyBinding<C> {
    pub triggers: Vec<KeyTrigger>,
    pub command: C,
    pub guard: Option<Box<dyn Fn() -> bool>>,
    pub priority: i32,
}

impl<C> KeyBinding<C> {
    pub fn new(triggers: Vec<KeyTrigger>, command: C) -> Self {
        Self {
            triggers,
            command,
            guard: None,
            priority: 0,
        }
    }

    /// Single-trigger convenience constructor.
    pub fn single(trigger: KeyTrigger, command: C) -> Self {
        Self::new(vec![trigger], command)
    }

    pub fn with_guard(mut self, guard: impl Fn() -> bool + 'static) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the binding is currently eligible (guard passes or absent).
    pub fn is_enabled(&self) -> bool {
        self.guard.as_ref().is_none_or(|guard| guard())
    }
}

// Manual Debug implementation since the guard is an opaque closure
impl<C: fmt::Debug> fmt::Debug for KeyBinding<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBinding")
            .field("triggers", &self.triggers)
            .field("command", &self.command)
            .field("guard", &self.guard.as_ref().map(|_| "<guard>"))
            .field("priority", &self.priority)
            .finish()
    }
}

/// What the host should do with the browser event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// A binding matched and its command was applied.
    pub matched: bool,
    /// Call preventDefault/stopPropagation on the event.
    pub prevent_default: bool,
}
