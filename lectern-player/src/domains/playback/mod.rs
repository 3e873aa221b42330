//! Playback domain
//!
//! Transport state, the exclusive binding to the host media surface, and
//! the page↔time mapping that keeps the slide cursor in step with the
//! recording.

pub mod state;
pub mod store;
pub mod surface;
pub mod sync;

// Re-export key types
pub use state::{PlaybackPhase, PlaybackState};
pub use store::PlaybackStore;
