use crate::infra::constants::player::volume::DEFAULT_VOLUME;

/// Lifecycle of the bound media surface.
///
/// `Paused ⇄ Playing` through user or programmatic play/pause; `Ended` when
/// the surface signals end-of-stream; `Error` when a play attempt is
/// rejected or the surface reports a media error. A later successful play
/// recovers from `Ended` and `Error` alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    #[default]
    Paused,
    Playing,
    Ended,
    Error,
}

/// Transport and page-cursor state mirrored between the engine and the
/// host media surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Stored volume percent, 0..=100.
    pub volume: u8,
    pub muted: bool,
    /// Last nonzero volume, restored on unmute.
    pub prev_volume: u8,
    /// Playback rate, 0.25..=2.0.
    pub speed: f64,
    /// Current position in milliseconds. Deliberately not clamped by
    /// `seek_to`, so it can transiently sit below zero while the bound
    /// surface is pinned at the start.
    pub current_time_ms: f64,
    /// Total duration in milliseconds; 0 while the surface reports a
    /// non-finite duration.
    pub total_time_ms: f64,
    pub phase: PlaybackPhase,
    /// Set while the user drags the position control; suspends the
    /// surface→store time channel.
    pub seeking: bool,
    /// 1-based page cursor, within `[1, page_count]` whenever
    /// `page_count > 0`.
    pub current_page: usize,
    pub page_count: usize,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            muted: false,
            prev_volume: DEFAULT_VOLUME,
            speed: 1.0,
            current_time_ms: 0.0,
            total_time_ms: 0.0,
            phase: PlaybackPhase::default(),
            seeking: false,
            current_page: 1,
            page_count: 0,
        }
    }
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    /// Volume as perceived by the user: muting forces 0 regardless of the
    /// stored numeric volume.
    pub fn effective_volume(&self) -> u8 {
        if self.muted { 0 } else { self.volume }
    }
}
