//! Engine domains
//!
//! Each domain owns one slice of player state: transport control and the
//! live media binding (`playback`), the page list and search (`content`),
//! keyboard routing (`shortcuts`), and fullscreen/controls visibility
//! (`shell`). Cross-domain flows are mediated by [`crate::session`].

pub mod content;
pub mod playback;
pub mod shell;
pub mod shortcuts;
