//! Content domain
//!
//! Owns the loaded page list and the in-lecture text search. Seeks are
//! requested through the playback store, never the other way around.

pub mod loader;
pub mod state;
pub mod store;

// Re-export key types
pub use state::SearchState;
pub use store::ContentStore;
