//! Playback/control store
//!
//! Owns the transport state and the exclusive binding to the one live
//! media surface. Store mutations push onto the surface; surface
//! notifications flow back through [`PlaybackStore::handle_media_event`].
//! Host-API failures are logged and folded into state, never raised.

use std::fmt;

use log::{debug, trace, warn};

use super::state::{PlaybackPhase, PlaybackState};
use super::surface::{MediaEvent, MediaEventKind, MediaSurface, SubscriptionId};
use crate::infra::constants::player::speed::{SPEED_MAX, SPEED_MIN, SPEED_STEP};
use crate::infra::constants::player::volume::{DEFAULT_UNMUTE_VOLUME, VOLUME_STEP};

/// Exclusive association between the store and one media surface, together
/// with the subscriptions registered on it.
struct MediaBinding {
    surface: Box<dyn MediaSurface>,
    subscriptions: Vec<SubscriptionId>,
}

// Manual Debug implementation since the surface is an opaque host handle
impl fmt::Debug for MediaBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaBinding")
            .field("surface", &"<media surface>")
            .field("subscriptions", &self.subscriptions)
            .finish()
    }
}

/// Store owning volume, mute, speed, play state, position, and the page
/// cursor, mirrored against the bound media surface.
#[derive(Debug, Default)]
pub struct PlaybackStore {
    state: PlaybackState,
    binding: Option<MediaBinding>,
}

impl PlaybackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn is_attached(&self) -> bool {
        self.binding.is_some()
    }

    /// Bind to a concrete media surface.
    ///
    /// Any previously attached surface is fully detached first, so exactly
    /// one set of live subscriptions exists no matter how often this is
    /// called. The store's volume/mute/speed are pushed onto the new
    /// surface, and its position is moved to the store's current time when
    /// that is nonzero.
    pub fn attach(&mut self, mut surface: Box<dyn MediaSurface>) {
        self.detach();

        surface.set_volume(f64::from(self.state.volume) / 100.0);
        surface.set_muted(self.state.muted);
        surface.set_rate(self.state.speed);
        if self.state.current_time_ms != 0.0 {
            surface.seek_to(self.state.current_time_ms.max(0.0));
        }

        let subscriptions = MediaEventKind::ALL
            .iter()
            .map(|kind| surface.subscribe(*kind))
            .collect();
        self.binding = Some(MediaBinding {
            surface,
            subscriptions,
        });
        debug!("media surface attached");
    }

    /// Drop the current binding, unsubscribing everything that attach
    /// registered. Safe to call with nothing attached.
    pub fn detach(&mut self) {
        if let Some(mut binding) = self.binding.take() {
            for subscription in binding.subscriptions.drain(..) {
                binding.surface.unsubscribe(subscription);
            }
            debug!("media surface detached");
        }
    }

    /// Request playback. A rejected request moves the phase to `Error` and
    /// is otherwise swallowed; the host learns about it from the phase.
    pub fn play(&mut self) {
        let Some(binding) = self.binding.as_mut() else {
            return;
        };
        match binding.surface.play() {
            Ok(()) => self.state.phase = PlaybackPhase::Playing,
            Err(err) => {
                warn!("play request rejected: {err}");
                self.state.phase = PlaybackPhase::Error;
            }
        }
    }

    pub fn pause(&mut self) {
        if let Some(binding) = self.binding.as_mut() {
            binding.surface.pause();
            self.state.phase = PlaybackPhase::Paused;
        }
    }

    /// Play when paused or ended, pause otherwise.
    pub fn toggle_play_pause(&mut self) {
        match self.state.phase {
            PlaybackPhase::Paused | PlaybackPhase::Ended => self.play(),
            PlaybackPhase::Playing | PlaybackPhase::Error => self.pause(),
        }
    }

    /// Move the surface position. Non-finite targets are rejected.
    ///
    /// The surface is clamped to `>= 0`; the store's own field is not and
    /// may transiently hold a negative value.
    pub fn seek_to(&mut self, position_ms: f64) {
        if !position_ms.is_finite() {
            return;
        }
        if let Some(binding) = self.binding.as_mut() {
            binding.surface.seek_to(position_ms.max(0.0));
        }
        self.state.current_time_ms = position_ms;
    }

    /// Relative seek over [`seek_to`](Self::seek_to).
    pub fn seek_by(&mut self, delta_ms: f64) {
        if !delta_ms.is_finite() {
            return;
        }
        self.seek_to(self.state.current_time_ms + delta_ms);
    }

    /// Set the stored volume, rounded and clamped to 0..=100. Always
    /// unmutes; a nonzero result is remembered for the next unmute.
    pub fn set_volume(&mut self, volume: f64) {
        if !volume.is_finite() {
            return;
        }
        let clamped = volume.round().clamp(0.0, 100.0) as u8;
        self.state.volume = clamped;
        self.state.muted = false;
        if clamped > 0 {
            self.state.prev_volume = clamped;
        }
        if let Some(binding) = self.binding.as_mut() {
            binding.surface.set_volume(f64::from(clamped) / 100.0);
            binding.surface.set_muted(false);
        }
    }

    pub fn volume_up(&mut self) {
        self.set_volume(f64::from(self.state.volume) + VOLUME_STEP);
    }

    pub fn volume_down(&mut self) {
        self.set_volume(f64::from(self.state.volume) - VOLUME_STEP);
    }

    /// Flip the muted flag.
    ///
    /// Muting records the current nonzero volume and flips the surface's
    /// muted flag while leaving its numeric volume untouched. Unmuting
    /// restores the remembered volume, falling back to the current volume
    /// and finally to a mid default when both are zero.
    pub fn toggle_mute(&mut self) {
        if self.state.muted {
            let restored = if self.state.prev_volume > 0 {
                self.state.prev_volume
            } else if self.state.volume > 0 {
                self.state.volume
            } else {
                DEFAULT_UNMUTE_VOLUME
            };
            self.state.volume = restored;
            self.state.muted = false;
            if let Some(binding) = self.binding.as_mut() {
                binding.surface.set_volume(f64::from(restored) / 100.0);
                binding.surface.set_muted(false);
            }
        } else {
            if self.state.volume > 0 {
                self.state.prev_volume = self.state.volume;
            }
            self.state.muted = true;
            if let Some(binding) = self.binding.as_mut() {
                binding.surface.set_muted(true);
            }
        }
    }

    /// Set the playback rate, clamped to 0.25..=2.0.
    pub fn set_speed(&mut self, speed: f64) {
        if !speed.is_finite() {
            return;
        }
        let clamped = speed.clamp(SPEED_MIN, SPEED_MAX);
        self.state.speed = clamped;
        if let Some(binding) = self.binding.as_mut() {
            binding.surface.set_rate(clamped);
        }
    }

    pub fn speed_up(&mut self) {
        self.set_speed(self.state.speed + SPEED_STEP);
    }

    pub fn speed_down(&mut self) {
        self.set_speed(self.state.speed - SPEED_STEP);
    }

    pub fn reset_speed(&mut self) {
        self.set_speed(1.0);
    }

    /// Suspend the surface→store time channel while the user drags the
    /// position control.
    pub fn start_seeking(&mut self) {
        self.state.seeking = true;
    }

    /// End a drag and resynchronize the position from the live surface.
    pub fn stop_seeking(&mut self) {
        self.state.seeking = false;
        if let Some(binding) = self.binding.as_ref() {
            self.state.current_time_ms = binding.surface.position_ms();
        }
    }

    /// Record the page count of freshly loaded content and reset the
    /// cursor to the first page.
    pub fn configure_pages(&mut self, count: usize) {
        self.state.page_count = count;
        self.state.current_page = 1;
    }

    /// Bounds-checked page cursor move. Rejected (no mutation, `false`)
    /// when there are no pages, the target is the current page, or the
    /// target falls outside `[1, page_count]`.
    pub fn set_page(&mut self, page: usize) -> bool {
        if self.state.page_count == 0 {
            return false;
        }
        if page == self.state.current_page {
            return false;
        }
        if page < 1 || page > self.state.page_count {
            return false;
        }
        self.state.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.state.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        if self.state.current_page <= 1 {
            return false;
        }
        self.set_page(self.state.current_page - 1)
    }

    /// Detach and return every field to its default, for a content reload.
    pub fn reset(&mut self) {
        self.detach();
        self.state = PlaybackState::default();
    }

    /// Surface→store synchronization.
    ///
    /// Time updates are dropped while a drag is in progress; a non-finite
    /// duration is stored as 0; volume and rate echoes of our own pushes
    /// are filtered out so they cannot loop.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        if self.binding.is_none() {
            trace!("media event {event:?} ignored: nothing attached");
            return;
        }
        match event {
            MediaEvent::TimeUpdate { position_ms } => {
                if !self.state.seeking {
                    self.state.current_time_ms = position_ms;
                }
            }
            MediaEvent::DurationChange { duration_ms } => {
                self.state.total_time_ms = if duration_ms.is_finite() {
                    duration_ms
                } else {
                    0.0
                };
            }
            MediaEvent::Play => self.state.phase = PlaybackPhase::Playing,
            MediaEvent::Pause => self.state.phase = PlaybackPhase::Paused,
            MediaEvent::Ended => self.state.phase = PlaybackPhase::Ended,
            MediaEvent::Error { message } => {
                warn!("media surface reported an error: {message}");
                self.state.phase = PlaybackPhase::Error;
            }
            MediaEvent::VolumeChange { volume, muted } => {
                let percent = (volume * 100.0).round().clamp(0.0, 100.0) as u8;
                if percent != self.state.volume || muted != self.state.muted {
                    self.state.volume = percent;
                    self.state.muted = muted;
                }
            }
            MediaEvent::RateChange { rate } => {
                if rate.is_finite() && (rate - self.state.speed).abs() > f64::EPSILON {
                    self.state.speed = rate;
                }
            }
        }
    }
}
