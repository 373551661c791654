//! Recurring-tick abstraction for the periodic waveform redraw.
//!
//! egui has no timers; the app owns a [`TickScheduler`] and polls it from
//! `update()`, pairing it with `ctx.request_repaint_after` so a frame is
//! guaranteed to arrive when the next tick is due. Dropping the scheduler
//! with the window cancels the recurring task.

use std::time::{Duration, Instant};

/// Fires at a fixed interval when polled with [`TickScheduler::due`].
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    last_fire: Option<Instant>,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: None,
        }
    }

    pub fn every_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` (and consumes the tick) if the interval has elapsed
    /// since the last fire. The first poll always fires.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.last_fire {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_fire = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_fires_immediately() {
        let mut ticker = TickScheduler::every_millis(100);
        assert!(ticker.due(Instant::now()));
    }

    #[test]
    fn fires_once_per_interval() {
        let mut ticker = TickScheduler::every_millis(100);
        let t0 = Instant::now();
        assert!(ticker.due(t0));
        assert!(!ticker.due(t0 + Duration::from_millis(50)));
        assert!(!ticker.due(t0 + Duration::from_millis(99)));
        assert!(ticker.due(t0 + Duration::from_millis(100)));
        assert!(!ticker.due(t0 + Duration::from_millis(150)));
        assert!(ticker.due(t0 + Duration::from_millis(205)));
    }
}
