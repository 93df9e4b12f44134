//! Per-level countdown.
//!
//! The countdown holds remaining milliseconds and is decremented only by
//! the session, only while the phase is `Playing`. It never ticks on its
//! own, so leaving `Playing` stops it with no background leakage.

/// Countdown toward the end of a timed level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining_ms: u64,
}

impl Countdown {
    /// Start a countdown from a budget in seconds.
    #[must_use]
    pub fn from_secs(secs: u64) -> Self {
        Self {
            remaining_ms: secs * 1000,
        }
    }

    /// Burn `ms` off the clock, clamped at zero.
    ///
    /// Returns `true` when this call crossed into expiry.
    pub fn advance(&mut self, ms: u64) -> bool {
        if self.remaining_ms == 0 {
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(ms);
        self.remaining_ms == 0
    }

    /// Milliseconds left.
    #[must_use]
    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Whole seconds left, rounded down (what the view shows).
    #[must_use]
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_ms / 1000
    }

    /// Whether the countdown has hit zero.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining_ms == 0
    }
}
