//! Keyboard shortcut routing
//!
//! A generalized key-combo matcher: prioritized bindings with guards,
//! repeat policy, and exact modifier matching, scanned in order with early
//! exit. The host owns the actual DOM listener; it feeds key-down events in
//! and honors the returned outcome (preventDefault/stopPropagation).

pub mod catalogue;
pub mod dispatcher;
pub mod types;

// Re-export key types
pub use catalogue::{PlayerCommand, default_bindings};
pub use dispatcher::{ShortcutDispatcher, ShortcutOptions};
pub use types::{DispatchOutcome, KeyBinding, KeyEvent, KeyTrigger, ModifierSpec, RepeatPolicy};
