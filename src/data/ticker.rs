//! Fixed-period tick source driven by frame polling.
//!
//! egui only runs `update` when it repaints, so the window polls a [`Ticker`]
//! each frame and replays however many periods have elapsed since the last
//! tick. A long stall (minimized window, blocking dialog) would otherwise
//! produce a burst of samples; the backlog is capped and the remainder dropped,
//! the same way an OS timer coalesces missed timeouts.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    max_catch_up: u32,
    last: Instant,
}

impl Ticker {
    /// Create a ticker whose first period starts at `now`.
    ///
    /// A zero `period` is bumped to one millisecond.
    pub fn new(period: Duration, max_catch_up: u32, now: Instant) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            max_catch_up: max_catch_up.max(1),
            last: now,
        }
    }

    /// Number of ticks due at `now`. Consumes them.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        let due = elapsed.as_nanos() / self.period.as_nanos();
        if due == 0 {
            return 0;
        }
        if due > u128::from(self.max_catch_up) {
            log::debug!(
                "dropping {} overdue ticks",
                due - u128::from(self.max_catch_up)
            );
            self.last = now;
            return self.max_catch_up;
        }
        // `due` is at most `max_catch_up` here, so it fits in u32.
        let due = due as u32;
        self.last += self.period * due;
        due
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        (self.last + self.period).saturating_duration_since(now)
    }
}
