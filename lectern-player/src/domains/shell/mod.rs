//! Shell domain
//!
//! Window-level concerns shared by every consumer of the player chrome:
//! fullscreen mode and auto-hiding controls.

pub mod fullscreen;

// Re-export key types
pub use fullscreen::{DisplaySurface, FullscreenController};
