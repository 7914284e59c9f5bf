use std::time::{Duration, Instant};

/// Fixed-rate gate between the frame loop and the simulation.
///
/// Frames run as often as the loop spins; ticks fire at most once per
/// `interval`, measured from the previous tick.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    last_tick: Instant,
}

impl TickClock {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    /// Returns true when a tick is due at `now` and restarts the interval.
    pub fn should_tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) < self.interval {
            return false;
        }

        self.last_tick = now;
        true
    }

    /// Restarts the interval so the next tick is a full interval away.
    pub fn restart(&mut self, now: Instant) {
        self.last_tick = now;
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickClock;

    #[test]
    fn ticks_only_after_a_full_interval() {
        let start = Instant::now();
        let mut clock = TickClock::new(Duration::from_millis(125), start);

        assert!(!clock.should_tick(start + Duration::from_millis(16)));
        assert!(!clock.should_tick(start + Duration::from_millis(124)));
        assert!(clock.should_tick(start + Duration::from_millis(125)));
    }

    #[test]
    fn interval_is_measured_from_the_last_tick() {
        let start = Instant::now();
        let mut clock = TickClock::new(Duration::from_millis(125), start);

        assert!(clock.should_tick(start + Duration::from_millis(200)));
        assert!(!clock.should_tick(start + Duration::from_millis(300)));
        assert!(clock.should_tick(start + Duration::from_millis(325)));
    }

    #[test]
    fn frame_rate_does_not_change_tick_rate() {
        let start = Instant::now();
        let mut clock = TickClock::new(Duration::from_millis(125), start);

        let ticks = (1..=1000)
            .filter(|frame| clock.should_tick(start + Duration::from_millis(*frame)))
            .count();

        assert_eq!(ticks, 8);
    }

    #[test]
    fn restart_postpones_the_next_tick() {
        let start = Instant::now();
        let mut clock = TickClock::new(Duration::from_millis(125), start);

        clock.restart(start + Duration::from_millis(100));

        assert!(!clock.should_tick(start + Duration::from_millis(150)));
        assert!(clock.should_tick(start + Duration::from_millis(225)));
    }
}
