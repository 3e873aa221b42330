//! Shared fixtures for the integration tests: hand-rolled host fakes and
//! the sample lecture payload.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use lectern_model::RawPage;
use lectern_player::domains::playback::surface::{
    MediaEventKind, MediaSurface, SubscriptionId, SurfaceError,
};
use lectern_player::domains::shell::fullscreen::DisplaySurface;
use lectern_player::infra::wake_lock::{WakeLockBackend, WakeLockError};
use lectern_player::session::PlayerSession;

static LOGGER: Once = Once::new();

/// Initialize test logging once per binary.
pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Observable state of a [`FakeMediaSurface`], shared with the test body.
#[derive(Debug, Default)]
pub struct FakeSurfaceState {
    pub subscribed: usize,
    pub unsubscribed: usize,
    pub next_subscription: u64,
    pub position_ms: f64,
    pub duration_ms: f64,
    pub seeks: Vec<f64>,
    pub volume: f64,
    pub muted: bool,
    pub rate: f64,
    pub playing: bool,
    pub reject_play: bool,
}

impl FakeSurfaceState {
    pub fn live_listeners(&self) -> usize {
        self.subscribed - self.unsubscribed
    }
}

pub struct FakeMediaSurface {
    state: Rc<RefCell<FakeSurfaceState>>,
}

pub fn fake_surface() -> (Box<dyn MediaSurface>, Rc<RefCell<FakeSurfaceState>>) {
    let state = Rc::new(RefCell::new(FakeSurfaceState::default()));
    (
        Box::new(FakeMediaSurface {
            state: state.clone(),
        }),
        state,
    )
}

impl MediaSurface for FakeMediaSurface {
    fn play(&mut self) -> Result<(), SurfaceError> {
        let mut state = self.state.borrow_mut();
        if state.reject_play {
            return Err(SurfaceError::PlaybackRejected("autoplay blocked".into()));
        }
        state.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.state.borrow_mut().playing = false;
    }

    fn seek_to(&mut self, position_ms: f64) {
        let mut state = self.state.borrow_mut();
        state.seeks.push(position_ms);
        state.position_ms = position_ms;
    }

    fn position_ms(&self) -> f64 {
        self.state.borrow().position_ms
    }

    fn duration_ms(&self) -> f64 {
        self.state.borrow().duration_ms
    }

    fn set_volume(&mut self, volume: f64) {
        self.state.borrow_mut().volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        self.state.borrow_mut().muted = muted;
    }

    fn set_rate(&mut self, rate: f64) {
        self.state.borrow_mut().rate = rate;
    }

    fn subscribe(&mut self, _kind: MediaEventKind) -> SubscriptionId {
        let mut state = self.state.borrow_mut();
        state.subscribed += 1;
        state.next_subscription += 1;
        SubscriptionId(state.next_subscription)
    }

    fn unsubscribe(&mut self, _subscription: SubscriptionId) {
        self.state.borrow_mut().unsubscribed += 1;
    }
}

/// Observable state of a [`FakeDisplay`].
#[derive(Debug)]
pub struct FakeDisplayState {
    pub supports_native: bool,
    pub attached: usize,
    pub detached: usize,
    pub native_calls: Vec<bool>,
    pub simulated_calls: Vec<bool>,
}

impl Default for FakeDisplayState {
    fn default() -> Self {
        Self {
            supports_native: true,
            attached: 0,
            detached: 0,
            native_calls: Vec::new(),
            simulated_calls: Vec::new(),
        }
    }
}

pub struct FakeDisplay {
    state: Rc<RefCell<FakeDisplayState>>,
}

pub fn fake_display() -> (Box<dyn DisplaySurface>, Rc<RefCell<FakeDisplayState>>) {
    let state = Rc::new(RefCell::new(FakeDisplayState::default()));
    (
        Box::new(FakeDisplay {
            state: state.clone(),
        }),
        state,
    )
}

impl DisplaySurface for FakeDisplay {
    fn supports_native_fullscreen(&self) -> bool {
        self.state.borrow().supports_native
    }

    fn set_native_fullscreen(&mut self, fullscreen: bool) {
        self.state.borrow_mut().native_calls.push(fullscreen);
    }

    fn set_simulated_fullscreen(&mut self, fullscreen: bool) {
        self.state.borrow_mut().simulated_calls.push(fullscreen);
    }

    fn attach_activity_listeners(&mut self) {
        self.state.borrow_mut().attached += 1;
    }

    fn detach_activity_listeners(&mut self) {
        self.state.borrow_mut().detached += 1;
    }
}

/// Observable state of a [`FakeWakeLock`].
#[derive(Debug)]
pub struct FakeWakeState {
    pub supported: bool,
    pub requests: usize,
    pub releases: usize,
    pub fail_requests: bool,
}

impl Default for FakeWakeState {
    fn default() -> Self {
        Self {
            supported: true,
            requests: 0,
            releases: 0,
            fail_requests: false,
        }
    }
}

pub struct FakeWakeLock {
    state: Rc<RefCell<FakeWakeState>>,
}

pub fn fake_wake_lock() -> (Box<dyn WakeLockBackend>, Rc<RefCell<FakeWakeState>>) {
    let state = Rc::new(RefCell::new(FakeWakeState::default()));
    (
        Box::new(FakeWakeLock {
            state: state.clone(),
        }),
        state,
    )
}

impl WakeLockBackend for FakeWakeLock {
    fn is_supported(&self) -> bool {
        self.state.borrow().supported
    }

    fn request(&mut self) -> Result<(), WakeLockError> {
        let mut state = self.state.borrow_mut();
        if state.fail_requests {
            return Err(WakeLockError::Request("denied".into()));
        }
        state.requests += 1;
        Ok(())
    }

    fn release(&mut self) -> Result<(), WakeLockError> {
        self.state.borrow_mut().releases += 1;
        Ok(())
    }
}

/// The sample lecture: four pages with timestamps and extracted text.
pub fn lecture_payload() -> Vec<RawPage> {
    [
        (0u64, "intro"),
        (1000, "topic A"),
        (2000, "topic A detail"),
        (3000, "summary"),
    ]
    .into_iter()
    .map(|(time, text)| RawPage {
        time,
        text: BASE64.encode(text),
        thumb: format!("thumb-{time}.webp"),
    })
    .collect()
}

/// A session wired to fakes, with handles on the fakes' state.
pub struct SessionFixture {
    pub session: PlayerSession,
    pub display: Rc<RefCell<FakeDisplayState>>,
    pub wake: Rc<RefCell<FakeWakeState>>,
}

pub fn session_fixture() -> SessionFixture {
    init_logging();
    let (display, display_state) = fake_display();
    let (wake, wake_state) = fake_wake_lock();
    SessionFixture {
        session: PlayerSession::new(display, wake),
        display: display_state,
        wake: wake_state,
    }
}
