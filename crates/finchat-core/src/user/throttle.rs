//! Sliding-window login attempt throttle.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default number of failed attempts tolerated inside one window.
const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Default sliding window length.
const DEFAULT_WINDOW: Duration = Duration::from_secs(300);

/// Per-identity login attempt throttle.
///
/// Tracks failed login attempts per identity over a sliding time window and
/// rejects further attempts once the limit is reached. A successful login
/// clears the identity's history. State is in-memory only and scoped to one
/// process; it is not a distributed rate limiter.
#[derive(Debug)]
pub struct LoginThrottle {
    max_attempts: usize,
    window: Duration,
    failures: HashMap<String, Vec<Instant>>,
}

impl Default for LoginThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_WINDOW)
    }
}

impl LoginThrottle {
    /// Creates a throttle allowing `max_attempts` failures per `window`.
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            failures: HashMap::new(),
        }
    }

    /// Returns `true` when the identity may attempt a login right now.
    pub fn check(&mut self, identity: &str) -> bool {
        self.prune(identity);
        self.failures
            .get(identity)
            .map(|attempts| attempts.len() < self.max_attempts)
            .unwrap_or(true)
    }

    /// Records a failed attempt for the identity.
    pub fn record_failure(&mut self, identity: &str) {
        self.failures
            .entry(identity.to_string())
            .or_default()
            .push(Instant::now());
    }

    /// Clears the identity's failure history after a successful login.
    pub fn record_success(&mut self, identity: &str) {
        self.failures.remove(identity);
    }

    /// Drops failures that have aged out of the window.
    fn prune(&mut self, identity: &str) {
        if let Some(attempts) = self.failures.get_mut(identity) {
            let window = self.window;
            attempts.retain(|at| at.elapsed() < window);
            if attempts.is_empty() {
                self.failures.remove(identity);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_identity_is_allowed() {
        let mut throttle = LoginThrottle::default();
        assert!(throttle.check("ana@example.com"));
    }

    #[test]
    fn test_locks_out_after_max_failures() {
        let mut throttle = LoginThrottle::new(3, Duration::from_secs(60));
        for _ in 0..3 {
            assert!(throttle.check("ana@example.com"));
            throttle.record_failure("ana@example.com");
        }
        assert!(!throttle.check("ana@example.com"));
        // Other identities are unaffected.
        assert!(throttle.check("luis@example.com"));
    }

    #[test]
    fn test_success_resets_history() {
        let mut throttle = LoginThrottle::new(2, Duration::from_secs(60));
        throttle.record_failure("ana@example.com");
        throttle.record_failure("ana@example.com");
        assert!(!throttle.check("ana@example.com"));

        throttle.record_success("ana@example.com");
        assert!(throttle.check("ana@example.com"));
    }

    #[test]
    fn test_failures_expire_with_window() {
        // Zero-length window: every failure is already expired.
        let mut throttle = LoginThrottle::new(1, Duration::ZERO);
        throttle.record_failure("ana@example.com");
        assert!(throttle.check("ana@example.com"));
    }
}
