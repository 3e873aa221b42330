//! Content payload loader
//!
//! The external data source hands over an array of `{time, text, thumb}`
//! entries with base64-encoded slide text; this module turns it into the
//! in-memory page list. One bad entry degrades to readable-or-empty text
//! with a log line and never aborts the load. Whether the payload arrived
//! inline or was fetched from a URL is the host's concern; the contract
//! here is identical for both.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::warn;
use thiserror::Error;

use lectern_model::{Page, RawPage};

/// Errors from decoding the payload envelope itself.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed content payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode the JSON payload envelope into raw page entries.
pub fn parse_payload(bytes: &[u8]) -> Result<Vec<RawPage>, PayloadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode raw entries into [`Page`]s. Infallible: timestamps and thumbnail
/// references pass through unchanged, text decodes with per-entry
/// fallbacks.
pub fn decode_pages(raw: Vec<RawPage>) -> Vec<Page> {
    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| Page {
            timestamp_ms: entry.time,
            text: decode_text(index, &entry.text),
            image_ref: entry.thumb,
        })
        .collect()
}

/// Base64 → UTF-8 with the degrade path: empty stays empty, bad base64
/// becomes empty, bad UTF-8 keeps the lossy reading of the raw bytes.
fn decode_text(index: usize, encoded: &str) -> String {
    if encoded.is_empty() {
        return String::new();
    }
    match BASE64.decode(encoded) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!("page {index}: text is not valid UTF-8, keeping the lossy reading");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        },
        Err(err) => {
            warn!("page {index}: undecodable text field: {err}");
            String::new()
        }
    }
}
