//! Fixed-cadence tick scheduling.
//!
//! [`FrameScheduler`] tracks when the next motion tick is due. The event loop sleeps until
//! [`FrameScheduler::deadline`] and then calls [`FrameScheduler::poll`]. A late wake-up still
//! yields exactly one tick; the missed time is dropped, never replayed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    next_tick: Instant,
    ticks: u64,
}

impl FrameScheduler {
    /// Creates a scheduler whose first tick is due at `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now,
            ticks: 0,
        }
    }

    /// When the next tick is due.
    pub fn deadline(&self) -> Instant {
        self.next_tick
    }

    /// Number of ticks fired so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns `true` if a tick is due at `now` and reschedules the next one `interval` later.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        self.next_tick = now + self.interval;
        self.ticks += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    #[test]
    fn test_first_tick_is_immediate() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(TICK, start);
        assert!(scheduler.poll(start));
        assert_eq!(scheduler.deadline(), start + TICK);
    }

    /// Polling before the deadline does nothing.
    #[test]
    fn test_early_poll_is_ignored() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(TICK, start);
        assert!(scheduler.poll(start));
        assert!(!scheduler.poll(start + Duration::from_millis(5)));
        assert_eq!(scheduler.ticks(), 1);
        assert!(scheduler.poll(start + TICK));
        assert_eq!(scheduler.ticks(), 2);
    }

    /// A late wake-up fires once and reschedules from the actual wake time.
    #[test]
    fn test_late_poll_does_not_catch_up() {
        let start = Instant::now();
        let mut scheduler = FrameScheduler::new(TICK, start);
        assert!(scheduler.poll(start));

        let late = start + Duration::from_millis(200);
        assert!(scheduler.poll(late));
        assert!(!scheduler.poll(late));
        assert_eq!(scheduler.deadline(), late + TICK);
        assert_eq!(scheduler.ticks(), 2);
    }
}
