//! Display wake lock
//!
//! Keeps the screen awake while the lecture plays. The platform call sits
//! behind [`WakeLockBackend`]; the controller adds the idempotence and
//! visibility policy. Backend failures are logged and absorbed.

use std::fmt;

use log::{debug, warn};
use thiserror::Error;

/// Errors from the platform wake-lock API.
#[derive(Debug, Clone, Error)]
pub enum WakeLockError {
    #[error("wake lock request failed: {0}")]
    Request(String),
    #[error("wake lock release failed: {0}")]
    Release(String),
}

/// Platform wake-lock capability.
///
/// A granted lock may be revoked by the platform at any time (tab switch,
/// lid close); the host is expected to forward that notification to
/// [`WakeLockController::handle_unsolicited_release`].
#[cfg_attr(test, mockall::automock)]
pub trait WakeLockBackend {
    fn is_supported(&self) -> bool;
    fn request(&mut self) -> Result<(), WakeLockError>;
    fn release(&mut self) -> Result<(), WakeLockError>;
}

/// Wake-lock lifecycle tied to playback and page visibility.
pub struct WakeLockController {
    backend: Box<dyn WakeLockBackend>,
    active: bool,
}

// Manual Debug implementation since the backend is an opaque host handle
impl fmt::Debug for WakeLockController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WakeLockController")
            .field("backend", &"<wake lock backend>")
            .field("active", &self.active)
            .finish()
    }
}

impl WakeLockController {
    pub fn new(backend: Box<dyn WakeLockBackend>) -> Self {
        Self {
            backend,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Acquire the lock. Returns false without side effects when the
    /// platform lacks support, the lock is already held, or the request
    /// fails (logged).
    pub fn request_wake_lock(&mut self) -> bool {
        if !self.backend.is_supported() || self.active {
            return false;
        }
        match self.backend.request() {
            Ok(()) => {
                debug!("wake lock acquired");
                self.active = true;
                true
            }
            Err(err) => {
                warn!("{err}");
                false
            }
        }
    }

    /// Release the lock. Idempotent; release failures are logged and the
    /// flag clears regardless.
    pub fn release_wake_lock(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(err) = self.backend.release() {
            warn!("{err}");
        } else {
            debug!("wake lock released");
        }
    }

    /// The platform revoked the lock on its own; just note it.
    pub fn handle_unsolicited_release(&mut self) {
        if self.active {
            debug!("wake lock released by the platform");
            self.active = false;
        }
    }

    /// Page visibility policy: hidden pages hold no lock; on return the
    /// lock is re-requested only if the caller still wants it held.
    pub fn handle_visibility_change(&mut self, visible: bool, should_be_active: bool) {
        if !visible {
            self.release_wake_lock();
        } else if should_be_active {
            self.request_wake_lock();
        }
    }

    /// Desired-state reconciliation, driven by the playback phase.
    pub fn reconcile(&mut self, should_be_active: bool) {
        if should_be_active {
            self.request_wake_lock();
        } else {
            self.release_wake_lock();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported_backend() -> MockWakeLockBackend {
        let mut backend = MockWakeLockBackend::new();
        backend.expect_is_supported().return_const(true);
        backend
    }

    #[test]
    fn unsupported_platform_never_requests() {
        let mut backend = MockWakeLockBackend::new();
        backend.expect_is_supported().return_const(false);
        backend.expect_request().times(0);

        let mut lock = WakeLockController::new(Box::new(backend));
        assert!(!lock.request_wake_lock());
        assert!(!lock.is_active());
    }

    #[test]
    fn request_is_a_no_op_while_already_active() {
        let mut backend = supported_backend();
        backend.expect_request().times(1).returning(|| Ok(()));

        let mut lock = WakeLockController::new(Box::new(backend));
        assert!(lock.request_wake_lock());
        assert!(!lock.request_wake_lock());
        assert!(lock.is_active());
    }

    #[test]
    fn failed_request_is_reported_and_leaves_the_lock_inactive() {
        let mut backend = supported_backend();
        backend
            .expect_request()
            .returning(|| Err(WakeLockError::Request("denied".into())));

        let mut lock = WakeLockController::new(Box::new(backend));
        assert!(!lock.request_wake_lock());
        assert!(!lock.is_active());
    }

    #[test]
    fn release_is_idempotent() {
        let mut backend = supported_backend();
        backend.expect_request().returning(|| Ok(()));
        backend.expect_release().times(1).returning(|| Ok(()));

        let mut lock = WakeLockController::new(Box::new(backend));
        lock.release_wake_lock();
        lock.request_wake_lock();
        lock.release_wake_lock();
        lock.release_wake_lock();
        assert!(!lock.is_active());
    }

    #[test]
    fn unsolicited_release_clears_the_flag_without_a_backend_call() {
        let mut backend = supported_backend();
        backend.expect_request().times(2).returning(|| Ok(()));
        backend.expect_release().times(0);

        let mut lock = WakeLockController::new(Box::new(backend));
        lock.request_wake_lock();
        lock.handle_unsolicited_release();
        assert!(!lock.is_active());

        // a later request re-acquires
        assert!(lock.request_wake_lock());
    }

    #[test]
    fn hidden_page_releases_and_return_re_requests_when_still_wanted() {
        let mut backend = supported_backend();
        backend.expect_request().times(2).returning(|| Ok(()));
        backend.expect_release().times(1).returning(|| Ok(()));

        let mut lock = WakeLockController::new(Box::new(backend));
        lock.request_wake_lock();

        lock.handle_visibility_change(false, true);
        assert!(!lock.is_active());

        lock.handle_visibility_change(true, true);
        assert!(lock.is_active());
    }

    #[test]
    fn return_to_a_paused_player_leaves_the_lock_released() {
        let mut backend = supported_backend();
        backend.expect_request().times(1).returning(|| Ok(()));
        backend.expect_release().times(1).returning(|| Ok(()));

        let mut lock = WakeLockController::new(Box::new(backend));
        lock.request_wake_lock();
        lock.handle_visibility_change(false, false);
        lock.handle_visibility_change(true, false);
        assert!(!lock.is_active());
    }

    #[test]
    fn reconcile_follows_the_desired_state() {
        let mut backend = supported_backend();
        backend.expect_request().times(1).returning(|| Ok(()));
        backend.expect_release().times(1).returning(|| Ok(()));

        let mut lock = WakeLockController::new(Box::new(backend));
        lock.reconcile(true);
        lock.reconcile(true);
        assert!(lock.is_active());
        lock.reconcile(false);
        lock.reconcile(false);
        assert!(!lock.is_active());
    }
}
