use std::time::{Duration, Instant};

/// Repeating fixed-interval timer. Acquired when a game starts and released
/// exactly once through [`Ticker::cancel`].
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: Some(now + interval),
        }
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// True when a tick is due at `now`; the next one is then scheduled.
    /// A loop that fell behind gets one tick, not a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let next = due + self.interval;
                self.next_due = Some(if next > now { next } else { now + self.interval });
                true
            }
            _ => false,
        }
    }

    /// How long input polling may block before the next tick. `None` once
    /// cancelled.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Stops the timer. Returns true only for the call that actually
    /// released it.
    pub fn cancel(&mut self) -> bool {
        self.next_due.take().is_some()
    }
}
