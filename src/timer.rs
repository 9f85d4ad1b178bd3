// SPDX-License-Identifier: MPL-2.0
//! Cancellable single-shot dismiss timer.
//!
//! The controller owns exactly one `DismissTimer` slot. Arming hands back a
//! unique `TimerToken`; the runtime delivers that token back when the delay
//! elapses and the timer only accepts the fire if the token still matches
//! the armed slot. Cancellation therefore guarantees that a superseded
//! timer can never drive a state change, even if its delayed event is
//! already in flight.

use std::time::Duration;

/// Identity of one arming of the dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// One-shot delayed-callback slot. At most one arming is live at a time.
#[derive(Debug, Default)]
pub struct DismissTimer {
    armed: Option<Armed>,
}

#[derive(Debug)]
struct Armed {
    token: TimerToken,
    after: Duration,
}

impl DismissTimer {
    /// Creates a disarmed timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer for `after`, implicitly cancelling any previous
    /// arming, and returns the token identifying this arming.
    pub fn arm(&mut self, after: Duration) -> TimerToken {
        let token = TimerToken::next();
        self.armed = Some(Armed { token, after });
        token
    }

    /// Disarms the timer. Idempotent; safe to call after firing.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Accepts a fire event for `token`.
    ///
    /// Returns `true` and disarms if the token matches the live arming.
    /// Stale tokens (cancelled, superseded, or already fired) return
    /// `false` and leave the slot untouched.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match &self.armed {
            Some(armed) if armed.token == token => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    /// Returns whether an arming is currently live.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Returns the delay of the live arming, if any.
    #[must_use]
    pub fn armed_delay(&self) -> Option<Duration> {
        self.armed.as_ref().map(|a| a.after)
    }
}
