//! Page↔time mapping
//!
//! The page list is sorted ascending by timestamp, so the current page for
//! a playback position is a binary search away. The inverse lookup backs
//! explicit page navigation.

use lectern_model::Page;

/// 1-based index of the last page whose timestamp is `<= time_ms`.
///
/// Returns page 1 when the list is empty or the position precedes every
/// page.
pub fn page_for_timestamp(pages: &[Page], time_ms: f64) -> usize {
    if pages.is_empty() {
        return 1;
    }
    let preceding = pages.partition_point(|page| (page.timestamp_ms as f64) <= time_ms);
    preceding.max(1)
}

/// Timestamp to seek to for an explicit move to the given 1-based page.
///
/// A stored timestamp of exactly 0 reads as "no known timestamp" and
/// yields `None`, leaving the transport where it is.
pub fn timestamp_for_page(pages: &[Page], page: usize) -> Option<u64> {
    let entry = pages.get(page.checked_sub(1)?)?;
    match entry.timestamp_ms {
        0 => None,
        timestamp => Some(timestamp),
    }
}
