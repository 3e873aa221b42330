//! Default shortcut catalogue
//!
//! The one place that knows which physical keys drive which player
//! intents. The session applies the resulting [`PlayerCommand`]s.

use super::types::{KeyBinding, KeyTrigger, ModifierSpec, RepeatPolicy};

/// User intents the default shortcut set can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    TogglePlayPause,
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    VolumeUp,
    VolumeDown,
    ToggleMute,
    ToggleFullscreen,
    SpeedUp,
    SpeedDown,
    ResetSpeed,
    ShowShortcutHelp,
}

/// Shifted-or-not triggers for keys that sit on a shifted position on
/// common layouts (`>`, `<`, `?`): the binding fires either way.
fn shifted_pair(key: &str) -> Vec<KeyTrigger> {
    vec![
        KeyTrigger::key(key),
        KeyTrigger::key(key).with_modifiers(ModifierSpec::shift()),
    ]
}

/// The standard player bindings.
///
/// `help_available` guards the `?` binding: it only matches while the host
/// has a help display wired up.
pub fn default_bindings(
    help_available: impl Fn() -> bool + 'static,
) -> Vec<KeyBinding<PlayerCommand>> {
    vec![
        KeyBinding::new(
            vec![
                KeyTrigger::key(" ").with_repeat(RepeatPolicy::Initial),
                KeyTrigger::code("Space").with_repeat(RepeatPolicy::Initial),
                KeyTrigger::key("k").with_repeat(RepeatPolicy::Initial),
            ],
            PlayerCommand::TogglePlayPause,
        ),
        KeyBinding::single(KeyTrigger::key("ArrowLeft"), PlayerCommand::PrevPage),
        KeyBinding::single(KeyTrigger::key("ArrowRight"), PlayerCommand::NextPage),
        KeyBinding::single(KeyTrigger::key("Home"), PlayerCommand::FirstPage),
        KeyBinding::single(KeyTrigger::key("End"), PlayerCommand::LastPage),
        KeyBinding::single(KeyTrigger::key("ArrowUp"), PlayerCommand::VolumeUp),
        KeyBinding::single(KeyTrigger::key("ArrowDown"), PlayerCommand::VolumeDown),
        KeyBinding::single(
            KeyTrigger::key("m").with_repeat(RepeatPolicy::Initial),
            PlayerCommand::ToggleMute,
        ),
        KeyBinding::single(
            KeyTrigger::key("f").with_repeat(RepeatPolicy::Initial),
            PlayerCommand::ToggleFullscreen,
        ),
        KeyBinding::new(shifted_pair(">"), PlayerCommand::SpeedUp),
        KeyBinding::new(shifted_pair("<"), PlayerCommand::SpeedDown),
        KeyBinding::new(
            vec![
                KeyTrigger::key("0").with_repeat(RepeatPolicy::Initial),
                KeyTrigger::key("=").with_repeat(RepeatPolicy::Initial),
            ],
            PlayerCommand::ResetSpeed,
        ),
        KeyBinding::new(
            shifted_pair("?")
                .into_iter()
                .map(|trigger| trigger.with_repeat(RepeatPolicy::Initial))
                .collect(),
            PlayerCommand::ShowShortcutHelp,
        )
        .with_guard(help_available),
    ]
}
