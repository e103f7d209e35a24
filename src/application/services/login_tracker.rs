//! Fixed-window tracker for failed login attempts, keyed by client IP.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
struct AttemptWindow {
    started_at: DateTime<Utc>,
    failures: u32,
}

/// Per-process counter of failed login attempts.
///
/// Only failed attempts count toward the limit; a successful login clears
/// the caller's window. Once the limit is reached, further attempts from
/// that address are refused until the window expires, and the refusal
/// message carries the reset time.
///
/// State is process-local and bounded by the set of addresses seen within
/// one window; expired windows are dropped on the next touch from the same
/// address.
pub struct LoginTracker {
    max_attempts: u32,
    window: Duration,
    attempts: Mutex<HashMap<IpAddr, AttemptWindow>>,
}

impl LoginTracker {
    pub fn new(max_attempts: u32, window_seconds: u64) -> Self {
        Self {
            max_attempts,
            window: Duration::seconds(window_seconds as i64),
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Refuses the attempt when the address has exhausted its window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] with the window reset time.
    pub fn check(&self, addr: IpAddr) -> Result<(), AppError> {
        self.check_at(addr, Utc::now())
    }

    /// Records a failed attempt for the address.
    pub fn record_failure(&self, addr: IpAddr) {
        self.record_failure_at(addr, Utc::now());
    }

    /// Clears the address's window after a successful login.
    pub fn record_success(&self, addr: IpAddr) {
        let mut attempts = self.attempts.lock().expect("login tracker lock poisoned");
        attempts.remove(&addr);
    }

    fn check_at(&self, addr: IpAddr, now: DateTime<Utc>) -> Result<(), AppError> {
        let mut attempts = self.attempts.lock().expect("login tracker lock poisoned");

        let Some(window) = attempts.get(&addr).copied() else {
            return Ok(());
        };

        let reset_at = window.started_at + self.window;
        if now >= reset_at {
            attempts.remove(&addr);
            return Ok(());
        }

        if window.failures >= self.max_attempts {
            return Err(AppError::forbidden(format!(
                "Too many failed login attempts, try again at {}",
                reset_at.format("%Y-%m-%d %H:%M:%S UTC")
            )));
        }

        Ok(())
    }

    fn record_failure_at(&self, addr: IpAddr, now: DateTime<Utc>) {
        let mut attempts = self.attempts.lock().expect("login tracker lock poisoned");

        let window = attempts.entry(addr).or_insert(AttemptWindow {
            started_at: now,
            failures: 0,
        });

        // The window is fixed: it does not slide on repeated failures.
        if now >= window.started_at + self.window {
            window.started_at = now;
            window.failures = 0;
        }

        window.failures += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(last: u8) -> IpAddr {
        IpAddr::from([127, 0, 0, last])
    }

    #[test]
    fn test_fresh_address_is_allowed() {
        let tracker = LoginTracker::new(5, 1800);
        assert!(tracker.check(addr(1)).is_ok());
    }

    #[test]
    fn test_limit_reached_after_max_failures() {
        let tracker = LoginTracker::new(5, 1800);
        let now = Utc::now();

        for _ in 0..4 {
            tracker.record_failure_at(addr(1), now);
            assert!(tracker.check_at(addr(1), now).is_ok());
        }

        tracker.record_failure_at(addr(1), now);
        let err = tracker.check_at(addr(1), now).unwrap_err();
        assert!(matches!(err, AppError::Forbidden { .. }));
    }

    #[test]
    fn test_refusal_message_carries_reset_time() {
        let tracker = LoginTracker::new(1, 1800);
        let now = Utc::now();

        tracker.record_failure_at(addr(1), now);
        let err = tracker.check_at(addr(1), now).unwrap_err();

        let reset_at = (now + Duration::seconds(1800)).format("%Y-%m-%d %H:%M:%S UTC");
        match err {
            AppError::Forbidden { message } => {
                assert!(message.contains(&reset_at.to_string()))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_window_expiry_resets_the_count() {
        let tracker = LoginTracker::new(2, 60);
        let now = Utc::now();

        tracker.record_failure_at(addr(1), now);
        tracker.record_failure_at(addr(1), now);
        assert!(tracker.check_at(addr(1), now).is_err());

        let later = now + Duration::seconds(61);
        assert!(tracker.check_at(addr(1), later).is_ok());
    }

    #[test]
    fn test_success_clears_the_window() {
        let tracker = LoginTracker::new(2, 1800);
        let now = Utc::now();

        tracker.record_failure_at(addr(1), now);
        tracker.record_success(addr(1));
        tracker.record_failure_at(addr(1), now);

        // Only one failure on the books again.
        assert!(tracker.check_at(addr(1), now).is_ok());
    }

    #[test]
    fn test_addresses_are_tracked_independently() {
        let tracker = LoginTracker::new(1, 1800);
        let now = Utc::now();

        tracker.record_failure_at(addr(1), now);
        assert!(tracker.check_at(addr(1), now).is_err());
        assert!(tracker.check_at(addr(2), now).is_ok());
    }

    #[test]
    fn test_failures_after_expiry_start_a_new_window() {
        let tracker = LoginTracker::new(2, 60);
        let now = Utc::now();

        tracker.record_failure_at(addr(1), now);
        tracker.record_failure_at(addr(1), now);

        let later = now + Duration::seconds(120);
        tracker.record_failure_at(addr(1), later);

        // The stale window was replaced, not extended.
        assert!(tracker.check_at(addr(1), later).is_ok());
    }
}
