//! One-shot platform sniffing.

use once_cell::sync::Lazy;

/// Platform-conventional shortcut modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryModifier {
    /// Control key (Windows, Linux, everything non-Apple).
    Control,
    /// Command key (macOS, iOS).
    Command,
}

static PRIMARY_MODIFIER: Lazy<PrimaryModifier> = Lazy::new(detect_primary_modifier);

fn detect_primary_modifier() -> PrimaryModifier {
    match std::env::consts::OS {
        "macos" | "ios" => PrimaryModifier::Command,
        _ => PrimaryModifier::Control,
    }
}

/// The primary modifier for this process, sniffed once.
pub fn primary_modifier() -> PrimaryModifier {
    *PRIMARY_MODIFIER
}
