//! Convenience re-exports for downstream crates.

pub use crate::page::{Page, RawPage};
pub use crate::timecode::format_timecode;
