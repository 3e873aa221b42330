//! Session glue
//!
//! `PlayerSession` composes the stores and controllers and mediates the
//! flows that cross domain lines: key events become commands, media events
//! re-derive the page cursor and the wake-lock state, page navigation
//! turns into seeks.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

use lectern_model::RawPage;

use crate::domains::content::{ContentStore, loader};
use crate::domains::playback::store::PlaybackStore;
use crate::domains::playback::surface::MediaEvent;
use crate::domains::playback::sync;
use crate::domains::shell::fullscreen::{DisplaySurface, FullscreenController};
use crate::domains::shortcuts::catalogue::{PlayerCommand, default_bindings};
use crate::domains::shortcuts::dispatcher::{ShortcutDispatcher, ShortcutOptions};
use crate::domains::shortcuts::types::{DispatchOutcome, KeyEvent};
use crate::infra::wake_lock::{WakeLockBackend, WakeLockController};

/// One player instance: stores, controllers, and the default shortcut map.
pub struct PlayerSession {
    playback: PlaybackStore,
    content: ContentStore,
    fullscreen: FullscreenController,
    wake_lock: WakeLockController,
    shortcuts: ShortcutDispatcher<PlayerCommand>,
    help_callback: Option<Box<dyn FnMut()>>,
    help_armed: Rc<Cell<bool>>,
}

// Manual Debug implementation since the help callback is an opaque closure
impl fmt::Debug for PlayerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerSession")
            .field("playback", &self.playback)
            .field("content", &self.content)
            .field("fullscreen", &self.fullscreen)
            .field("wake_lock", &self.wake_lock)
            .field("help_armed", &self.help_armed.get())
            .finish()
    }
}

impl PlayerSession {
    pub fn new(display: Box<dyn DisplaySurface>, wake_backend: Box<dyn WakeLockBackend>) -> Self {
        let help_armed = Rc::new(Cell::new(false));
        let guard = help_armed.clone();
        let shortcuts = ShortcutDispatcher::new(
            default_bindings(move || guard.get()),
            ShortcutOptions::default(),
        );
        Self {
            playback: PlaybackStore::new(),
            content: ContentStore::new(),
            fullscreen: FullscreenController::new(display),
            wake_lock: WakeLockController::new(wake_backend),
            shortcuts,
            help_callback: None,
            help_armed,
        }
    }

    pub fn playback(&self) -> &PlaybackStore {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut PlaybackStore {
        &mut self.playback
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn fullscreen(&self) -> &FullscreenController {
        &self.fullscreen
    }

    pub fn fullscreen_mut(&mut self) -> &mut FullscreenController {
        &mut self.fullscreen
    }

    pub fn wake_lock(&self) -> &WakeLockController {
        &self.wake_lock
    }

    pub fn shortcuts_mut(&mut self) -> &mut ShortcutDispatcher<PlayerCommand> {
        &mut self.shortcuts
    }

    /// Install the host's shortcut-help display. This arms the `?` binding.
    pub fn set_help_callback(&mut self, callback: impl FnMut() + 'static) {
        self.help_armed.set(true);
        self.help_callback = Some(Box::new(callback));
    }

    /// Decode a fresh payload and swap it in: the content store takes the
    /// pages, the playback store learns the page count.
    pub fn load_content(&mut self, raw: Vec<RawPage>) {
        let pages = loader::decode_pages(raw);
        self.playback.configure_pages(pages.len());
        self.content.load(pages);
    }

    /// Route one key-down event through the shortcut map.
    pub fn handle_key(&mut self, event: &KeyEvent) -> DispatchOutcome {
        let Some(&command) = self.shortcuts.resolve(event) else {
            return DispatchOutcome::default();
        };
        let handled = self.apply(command);
        DispatchOutcome {
            matched: true,
            prevent_default: handled,
        }
    }

    /// Apply one player command. Returns false only when the command had
    /// nowhere to go (help with no display installed), so the caller can
    /// leave the browser default alone.
    pub fn apply(&mut self, command: PlayerCommand) -> bool {
        let handled = match command {
            PlayerCommand::TogglePlayPause => {
                self.playback.toggle_play_pause();
                true
            }
            PlayerCommand::PrevPage => {
                self.prev_page();
                true
            }
            PlayerCommand::NextPage => {
                self.next_page();
                true
            }
            PlayerCommand::FirstPage => {
                self.first_page();
                true
            }
            PlayerCommand::LastPage => {
                self.last_page();
                true
            }
            PlayerCommand::VolumeUp => {
                self.playback.volume_up();
                true
            }
            PlayerCommand::VolumeDown => {
                self.playback.volume_down();
                true
            }
            PlayerCommand::ToggleMute => {
                self.playback.toggle_mute();
                true
            }
            PlayerCommand::ToggleFullscreen => {
                self.fullscreen.toggle_fullscreen(Instant::now());
                true
            }
            PlayerCommand::SpeedUp => {
                self.playback.speed_up();
                true
            }
            PlayerCommand::SpeedDown => {
                self.playback.speed_down();
                true
            }
            PlayerCommand::ResetSpeed => {
                self.playback.reset_speed();
                true
            }
            PlayerCommand::ShowShortcutHelp => match self.help_callback.as_mut() {
                Some(callback) => {
                    callback();
                    true
                }
                None => false,
            },
        };
        self.reconcile_wake_lock();
        handled
    }

    /// Forward a media-surface notification, then re-derive the page
    /// cursor from the new position and settle the wake lock against the
    /// possibly-changed phase.
    pub fn on_media_event(&mut self, event: MediaEvent) {
        self.playback.handle_media_event(event);
        self.sync_page_from_time();
        self.reconcile_wake_lock();
    }

    /// Explicit move to a 1-based page: bounds-checked cursor move, then a
    /// seek to the page's timestamp. A page with no known timestamp (a
    /// stored 0) moves the cursor but leaves the transport where it is.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if !self.playback.set_page(page) {
            return false;
        }
        if let Some(timestamp) = sync::timestamp_for_page(self.content.pages(), page) {
            self.playback.seek_to(timestamp as f64);
        }
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.playback.state().current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        let current = self.playback.state().current_page;
        if current <= 1 {
            return false;
        }
        self.go_to_page(current - 1)
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.playback.state().page_count)
    }

    /// Case-insensitive text search over the loaded pages; hits seek the
    /// transport.
    pub fn search(&mut self, query: &str) {
        self.content.search(query, &mut self.playback);
    }

    pub fn find_next(&mut self) {
        self.content.find_next(&mut self.playback);
    }

    pub fn find_prev(&mut self) {
        self.content.find_prev(&mut self.playback);
    }

    pub fn cancel_search(&mut self) {
        self.content.cancel_search();
    }

    /// Page visibility changed: hidden pages drop the wake lock, a visible
    /// page re-acquires it while the lecture is playing.
    pub fn handle_visibility_change(&mut self, visible: bool) {
        let playing = self.playback.state().is_playing();
        self.wake_lock.handle_visibility_change(visible, playing);
    }

    /// The platform revoked the wake lock on its own.
    pub fn handle_wake_lock_released(&mut self) {
        self.wake_lock.handle_unsolicited_release();
    }

    fn sync_page_from_time(&mut self) {
        let state = self.playback.state();
        let page = sync::page_for_timestamp(self.content.pages(), state.current_time_ms);
        if page != state.current_page {
            self.playback.set_page(page);
        }
    }

    fn reconcile_wake_lock(&mut self) {
        let playing = self.playback.state().is_playing();
        self.wake_lock.reconcile(playing);
    }
}
