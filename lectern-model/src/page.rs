//! Lecture page entries: one slide plus the point in the recording where it
//! appears.

/// One unit of lecture content after decoding.
///
/// Pages are ordered ascending by [`timestamp_ms`](Page::timestamp_ms); the
/// ordering is assumed by consumers, not verified here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Playback position at which this page becomes current, in milliseconds.
    pub timestamp_ms: u64,
    /// Opaque thumbnail reference, passed through for the host to render.
    pub image_ref: String,
    /// Extracted slide text, decoded to UTF-8. May be empty.
    pub text: String,
}

/// Wire shape of one page entry as supplied by the external data source.
///
/// `text` carries base64-encoded UTF-8; the player crate's loader turns a
/// sequence of these into [`Page`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RawPage {
    /// Playback position in milliseconds.
    pub time: u64,
    /// Base64-encoded slide text. Absent entries decode to an empty string.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    /// Opaque thumbnail reference.
    pub thumb: String,
}
