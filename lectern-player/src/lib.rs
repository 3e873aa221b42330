//! Lectern player engine
//!
//! This crate is the headless core of the lecture player: it keeps play
//! position, page index, search state, and transport controls consistent
//! with each other and with a host media element. Rendering, theming,
//! dialogs, and persistence live with the host; the engine only exposes the
//! state machinery they drive.
//!
//! Notes
//! - The engine is single-threaded and event-loop-cooperative: every
//!   mutation happens synchronously inside a host callback (key event,
//!   media-element notification, timer tick).
//! - Host platform capabilities (the media element, fullscreen, the wake
//!   lock) are reached through traits so the engine stays testable without
//!   a browser.

pub mod domains;
pub mod infra;
pub mod session;

pub use lectern_model::{Page, RawPage, format_timecode};

pub use domains::content::{ContentStore, SearchState};
pub use domains::playback::store::PlaybackStore;
pub use domains::playback::surface::{
    MediaEvent, MediaEventKind, MediaSurface, SubscriptionId, SurfaceError,
};
pub use domains::playback::{PlaybackPhase, PlaybackState};
pub use domains::shell::fullscreen::{DisplaySurface, FullscreenController};
pub use domains::shortcuts::catalogue::{PlayerCommand, default_bindings};
pub use domains::shortcuts::dispatcher::{ShortcutDispatcher, ShortcutOptions};
pub use domains::shortcuts::types::{
    DispatchOutcome, KeyBinding, KeyEvent, KeyTrigger, ModifierSpec, RepeatPolicy,
};
pub use infra::wake_lock::{WakeLockBackend, WakeLockController, WakeLockError};
pub use session::PlayerSession;
