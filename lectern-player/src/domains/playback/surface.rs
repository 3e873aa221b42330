//! Host media surface abstraction
//!
//! The engine never touches a real media element; it drives this trait and
//! receives [`MediaEvent`]s back through
//! [`PlaybackStore::handle_media_event`](super::store::PlaybackStore::handle_media_event).
//! Subscriptions are explicit handles: detach tears down exactly the list
//! that attach registered, nothing stays behind on a replaced element.

use thiserror::Error;

/// Errors reported by a host media surface.
#[derive(Debug, Clone, Error)]
pub enum SurfaceError {
    /// The host rejected a play request (autoplay policy, missing source).
    #[error("playback request rejected: {0}")]
    PlaybackRejected(String),
    /// The underlying element reported a media error.
    #[error("media error: {0}")]
    Media(String),
}

/// Identifies one event subscription on a media surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Event categories a surface can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEventKind {
    TimeUpdate,
    DurationChange,
    Play,
    Pause,
    Ended,
    Error,
    VolumeChange,
    RateChange,
}

impl MediaEventKind {
    /// Every kind the playback store subscribes to on attach.
    pub const ALL: [MediaEventKind; 8] = [
        MediaEventKind::TimeUpdate,
        MediaEventKind::DurationChange,
        MediaEventKind::Play,
        MediaEventKind::Pause,
        MediaEventKind::Ended,
        MediaEventKind::Error,
        MediaEventKind::VolumeChange,
        MediaEventKind::RateChange,
    ];
}

/// Notifications delivered from the surface into the playback store.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    TimeUpdate { position_ms: f64 },
    /// May carry a non-finite duration while the host has no usable value.
    DurationChange { duration_ms: f64 },
    Play,
    Pause,
    Ended,
    Error { message: String },
    VolumeChange { volume: f64, muted: bool },
    RateChange { rate: f64 },
}

/// Control surface of the one live media element.
///
/// Volume is expressed as the host element expects it, 0.0..=1.0; the
/// store keeps its own 0..=100 integer percent and converts at the edge.
#[cfg_attr(test, mockall::automock)]
pub trait MediaSurface {
    fn play(&mut self) -> Result<(), SurfaceError>;
    fn pause(&mut self);
    /// Position requests are pre-clamped to `>= 0` by the store.
    fn seek_to(&mut self, position_ms: f64);
    fn position_ms(&self) -> f64;
    /// May return a non-finite value while the host has no usable duration.
    fn duration_ms(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
    fn set_rate(&mut self, rate: f64);
    fn subscribe(&mut self, kind: MediaEventKind) -> SubscriptionId;
    fn unsubscribe(&mut self, subscription: SubscriptionId);
}
