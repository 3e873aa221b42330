//! Prioritized binding scan with early exit.

use super::types::{DispatchOutcome, KeyBinding, KeyEvent};

/// Dispatcher-wide switches.
///
/// `capture` records which listener phase the host should attach in; the
/// listener itself (window or scope root, attach at mount, detach with the
/// matching flag) is host lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutOptions {
    pub enabled: bool,
    /// Drop events originating from text-editing elements.
    pub ignore_editable: bool,
    /// Only accept events flagged as inside the scope root.
    pub scoped: bool,
    pub capture: bool,
}

impl Default for ShortcutOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            ignore_editable: true,
            scoped: false,
            capture: false,
        }
    }
}

/// Ordered set of [`KeyBinding`]s evaluated per key-down event.
#[derive(Debug)]
pub struct ShortcutDispatcher<C> {
    bindings: Vec<KeyBinding<C>>,
    options: ShortcutOptions,
}

impl<C> ShortcutDispatcher<C> {
    /// Register the bindings, ordering them by descending priority. The
    /// sort is stable, so equal priorities keep registration order.
    pub fn new(mut bindings: Vec<KeyBinding<C>>, options: ShortcutOptions) -> Self {
        bindings.sort_by_key(|binding| std::cmp::Reverse(binding.priority));
        Self { bindings, options }
    }

    pub fn options(&self) -> &ShortcutOptions {
        &self.options
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    /// First eligible binding whose triggers match the event.
    ///
    /// Returns `None` when the dispatcher is disabled, the event is out of
    /// scope or from an editable element (per options), a guard vetoes its
    /// binding, or nothing matches.
    pub fn resolve(&self, event: &KeyEvent) -> Option<&C> {
        if !self.options.enabled {
            return None;
        }
        if self.options.scoped && !event.in_scope {
            return None;
        }
        if self.options.ignore_editable && event.from_editable {
            return None;
        }
        self.bindings
            .iter()
            .filter(|binding| binding.is_enabled())
            .find(|binding| binding.triggers.iter().any(|trigger| trigger.matches(event)))
            .map(|binding| &binding.command)
    }

    /// Resolve and apply in one step.
    ///
    /// `apply` returning `false` reports the command as deliberately
    /// unhandled: the match still wins (no later binding runs) but the
    /// outcome leaves the browser default alone.
    pub fn dispatch(
        &self,
        event: &KeyEvent,
        mut apply: impl FnMut(&C, &KeyEvent) -> bool,
    ) -> DispatchOutcome {
        match self.resolve(event) {
            Some(command) => DispatchOutcome {
                matched: true,
                prevent_default: apply(command, event),
            },
            None => DispatchOutcome::default(),
        }
    }
}
