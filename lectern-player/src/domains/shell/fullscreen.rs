//! Fullscreen mode and controls auto-hide
//!
//! One fullscreen flag and one controls-visible flag are shared across
//! every consumer of the player chrome. Consumers reference-count the
//! controller: the first `acquire` attaches the host's activity listeners,
//! the last `release` detaches them. While fullscreen, pointer/touch
//! activity keeps the controls visible; a quiet spell hides them.
//!
//! The current time is always passed in by the caller.

use std::fmt;
use std::time::{Duration, Instant};

use log::debug;

use crate::infra::constants::player::shell::CONTROLS_HIDE_DELAY_MS;

/// Host window/document surface the controller drives.
///
/// `set_simulated_fullscreen` is the fallback for platforms without a
/// native fullscreen call: the host toggles a viewport-filling class
/// instead.
pub trait DisplaySurface {
    fn supports_native_fullscreen(&self) -> bool;
    fn set_native_fullscreen(&mut self, fullscreen: bool);
    fn set_simulated_fullscreen(&mut self, fullscreen: bool);
    fn attach_activity_listeners(&mut self);
    fn detach_activity_listeners(&mut self);
}

/// Shared fullscreen/controls-visibility state.
pub struct FullscreenController {
    surface: Box<dyn DisplaySurface>,
    consumers: usize,
    fullscreen: bool,
    controls_visible: bool,
    hide_deadline: Option<Instant>,
}

// Manual Debug implementation since the surface is an opaque host handle
impl fmt::Debug for FullscreenController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullscreenController")
            .field("surface", &"<display surface>")
            .field("consumers", &self.consumers)
            .field("fullscreen", &self.fullscreen)
            .field("controls_visible", &self.controls_visible)
            .field("hide_deadline", &self.hide_deadline)
            .finish()
    }
}

impl FullscreenController {
    pub fn new(surface: Box<dyn DisplaySurface>) -> Self {
        Self {
            surface,
            consumers: 0,
            fullscreen: false,
            controls_visible: true,
            hide_deadline: None,
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Register a consumer. The first one attaches the host listeners.
    pub fn acquire(&mut self) {
        self.consumers += 1;
        if self.consumers == 1 {
            self.surface.attach_activity_listeners();
        }
    }

    /// Deregister a consumer. The last one detaches the host listeners;
    /// surplus releases are ignored.
    pub fn release(&mut self) {
        match self.consumers {
            0 => {}
            1 => {
                self.consumers = 0;
                self.surface.detach_activity_listeners();
            }
            _ => self.consumers -= 1,
        }
    }

    pub fn enter_fullscreen(&mut self, now: Instant) {
        if self.fullscreen {
            return;
        }
        if self.surface.supports_native_fullscreen() {
            self.surface.set_native_fullscreen(true);
        } else {
            debug!("no native fullscreen on this platform, using simulated mode");
            self.surface.set_simulated_fullscreen(true);
        }
        self.fullscreen = true;
        self.controls_visible = true;
        self.arm_hide_deadline(now);
    }

    pub fn exit_fullscreen(&mut self) {
        if !self.fullscreen {
            return;
        }
        if self.surface.supports_native_fullscreen() {
            self.surface.set_native_fullscreen(false);
        } else {
            self.surface.set_simulated_fullscreen(false);
        }
        self.fullscreen = false;
        self.hide_deadline = None;
        self.controls_visible = true;
    }

    pub fn toggle_fullscreen(&mut self, now: Instant) {
        if self.fullscreen {
            self.exit_fullscreen();
        } else {
            self.enter_fullscreen(now);
        }
    }

    /// Pointer or touch activity: while fullscreen, re-show the controls
    /// and push the hide deadline out.
    pub fn note_activity(&mut self, now: Instant) {
        if !self.fullscreen {
            return;
        }
        self.controls_visible = true;
        self.arm_hide_deadline(now);
    }

    /// Timer tick from the host: hide the controls once the deadline has
    /// passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.hide_deadline
            && now >= deadline
        {
            self.controls_visible = false;
            self.hide_deadline = None;
        }
    }

    fn arm_hide_deadline(&mut self, now: Instant) {
        self.hide_deadline = Some(now + Duration::from_millis(CONTROLS_HIDE_DELAY_MS));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Default)]
    struct DisplayLog {
        native: bool,
        attached: usize,
        detached: usize,
        native_calls: Vec<bool>,
        simulated_calls: Vec<bool>,
    }

    struct RecordingDisplay {
        log: Rc<RefCell<DisplayLog>>,
    }

    impl DisplaySurface for RecordingDisplay {
        fn supports_native_fullscreen(&self) -> bool {
            self.log.borrow().native
        }

        fn set_native_fullscreen(&mut self, fullscreen: bool) {
            self.log.borrow_mut().native_calls.push(fullscreen);
        }

        fn set_simulated_fullscreen(&mut self, fullscreen: bool) {
            self.log.borrow_mut().simulated_calls.push(fullscreen);
        }

        fn attach_activity_listeners(&mut self) {
            self.log.borrow_mut().attached += 1;
        }

        fn detach_activity_listeners(&mut self) {
            self.log.borrow_mut().detached += 1;
        }
    }

    fn controller(native: bool) -> (FullscreenController, Rc<RefCell<DisplayLog>>) {
        let log = Rc::new(RefCell::new(DisplayLog {
            native,
            ..DisplayLog::default()
        }));
        (
            FullscreenController::new(Box::new(RecordingDisplay { log: log.clone() })),
            log,
        )
    }

    fn later(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn listeners_attach_on_first_consumer_and_detach_on_last() {
        let (mut fs, log) = controller(true);
        fs.acquire();
        fs.acquire();
        assert_eq!(log.borrow().attached, 1);

        fs.release();
        assert_eq!(log.borrow().detached, 0);
        fs.release();
        assert_eq!(log.borrow().detached, 1);

        // surplus release stays put
        fs.release();
        assert_eq!(log.borrow().detached, 1);

        // a fresh consumer re-attaches
        fs.acquire();
        assert_eq!(log.borrow().attached, 2);
    }

    #[test]
    fn entering_fullscreen_shows_controls_and_arms_the_timer() {
        let (mut fs, log) = controller(true);
        let start = Instant::now();

        fs.enter_fullscreen(start);
        assert!(fs.is_fullscreen());
        assert!(fs.controls_visible());
        assert_eq!(log.borrow().native_calls, vec![true]);

        fs.tick(later(start, CONTROLS_HIDE_DELAY_MS - 1));
        assert!(fs.controls_visible());
        fs.tick(later(start, CONTROLS_HIDE_DELAY_MS));
        assert!(!fs.controls_visible());
    }

    #[test]
    fn activity_reshows_controls_and_resets_the_deadline() {
        let (mut fs, _) = controller(true);
        let start = Instant::now();
        fs.enter_fullscreen(start);
        fs.tick(later(start, CONTROLS_HIDE_DELAY_MS));
        assert!(!fs.controls_visible());

        let moved = later(start, CONTROLS_HIDE_DELAY_MS + 100);
        fs.note_activity(moved);
        assert!(fs.controls_visible());

        fs.tick(later(moved, CONTROLS_HIDE_DELAY_MS - 1));
        assert!(fs.controls_visible());
        fs.tick(later(moved, CONTROLS_HIDE_DELAY_MS));
        assert!(!fs.controls_visible());
    }

    #[test]
    fn exiting_fullscreen_cancels_the_timer_and_forces_controls_visible() {
        let (mut fs, _) = controller(true);
        let start = Instant::now();
        fs.enter_fullscreen(start);

        fs.exit_fullscreen();
        assert!(!fs.is_fullscreen());
        assert!(fs.controls_visible());

        // stale deadline no longer fires
        fs.tick(later(start, CONTROLS_HIDE_DELAY_MS * 2));
        assert!(fs.controls_visible());
    }

    #[test]
    fn activity_outside_fullscreen_is_ignored() {
        let (mut fs, _) = controller(true);
        let start = Instant::now();
        fs.note_activity(start);
        fs.tick(later(start, CONTROLS_HIDE_DELAY_MS * 2));
        assert!(fs.controls_visible());
    }

    #[test]
    fn missing_native_api_falls_back_to_simulated_mode() {
        let (mut fs, log) = controller(false);
        let start = Instant::now();

        fs.toggle_fullscreen(start);
        assert!(fs.is_fullscreen());
        fs.toggle_fullscreen(start);
        assert!(!fs.is_fullscreen());

        assert!(log.borrow().native_calls.is_empty());
        assert_eq!(log.borrow().simulated_calls, vec![true, false]);
    }

    #[test]
    fn repeated_enter_is_a_no_op() {
        let (mut fs, log) = controller(true);
        let start = Instant::now();
        fs.enter_fullscreen(start);
        fs.enter_fullscreen(later(start, 50));
        assert_eq!(log.borrow().native_calls, vec![true]);
    }
}
