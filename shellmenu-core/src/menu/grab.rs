// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deferred input capture
//!
//! A menu takes keyboard and pointer capture a short delay after it becomes
//! visible. The delay is a one-shot timer driven by the host's event loop
//! through [DeferredGrab::poll]; cancelling it guarantees the callback never
//! runs against a torn-down view.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GrabState {
    /// Nothing scheduled.
    Idle,
    /// Waiting for the deadline.
    Pending { grab_at: Instant },
    /// Fired once; stays here until rescheduled.
    Fired,
}

/// A cancellable one-shot timer.
#[derive(Debug, Clone)]
pub struct DeferredGrab {
    delay: Duration,
    state: GrabState,
}

impl DeferredGrab {
    /// Create an idle timer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: GrabState::Idle,
        }
    }

    /// Arm the timer relative to `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.state = GrabState::Pending {
            grab_at: now + self.delay,
        };
    }

    /// Disarm the timer. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = GrabState::Idle;
        was_pending
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            GrabState::Pending { grab_at } if now >= grab_at => {
                self.state = GrabState::Fired;
                true
            },
            _ => false,
        }
    }

    /// Whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, GrabState::Pending { .. })
    }
}
