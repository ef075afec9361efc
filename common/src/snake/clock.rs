use std::time::Duration;

pub fn interval_for_speed(ticks_per_second: f64) -> Result<Duration, String> {
    if !ticks_per_second.is_finite() || ticks_per_second <= 0.0 {
        return Err(format!(
            "speed must be a positive number of ticks per second, got {}",
            ticks_per_second
        ));
    }
    Ok(Duration::from_secs_f64(1.0 / ticks_per_second))
}

/// Fixed-interval tick gate sampled once per frame. At most one tick is due
/// per sample: time lost to a stalled host is not caught up.
#[derive(Clone, Debug)]
pub struct TickClock {
    interval: Duration,
    last_tick_at: Duration,
}

impl TickClock {
    pub fn new(ticks_per_second: f64) -> Result<Self, String> {
        Ok(Self {
            interval: interval_for_speed(ticks_per_second)?,
            last_tick_at: Duration::ZERO,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_tick_at(&self) -> Duration {
        self.last_tick_at
    }

    pub fn set_speed(&mut self, ticks_per_second: f64) -> Result<(), String> {
        self.interval = interval_for_speed(ticks_per_second)?;
        Ok(())
    }

    pub fn reset(&mut self, now: Duration) {
        self.last_tick_at = now;
    }

    pub fn is_due(&self, now: Duration) -> bool {
        now.saturating_sub(self.last_tick_at) >= self.interval
    }

    pub fn due_ticks(&self, now: Duration) -> u32 {
        u32::from(self.is_due(now))
    }

    pub fn mark(&mut self, now: Duration) {
        self.last_tick_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_reciprocal_of_speed() {
        let clock = TickClock::new(8.0).unwrap();

        assert_eq!(clock.interval(), Duration::from_millis(125));
    }

    #[test]
    fn test_invalid_speed_is_rejected() {
        assert!(TickClock::new(0.0).is_err());
        assert!(TickClock::new(-3.0).is_err());
        assert!(TickClock::new(f64::NAN).is_err());
        assert!(TickClock::new(f64::INFINITY).is_err());

        let mut clock = TickClock::new(8.0).unwrap();
        assert!(clock.set_speed(0.0).is_err());
        assert_eq!(clock.interval(), Duration::from_millis(125));
    }

    #[test]
    fn test_frames_accumulate_until_interval_reached() {
        let mut clock = TickClock::new(8.0).unwrap();
        clock.reset(Duration::ZERO);

        let mut ticks = Vec::new();
        for frame in 1..=16u64 {
            let now = Duration::from_millis(frame * 16);
            if clock.is_due(now) {
                clock.mark(now);
                ticks.push(frame);
            }
        }

        // 8 * 16 = 128ms is the first sample past 125ms; the next is 128 + 128.
        assert_eq!(ticks, vec![8, 16]);
    }

    #[test]
    fn test_large_gap_yields_single_tick() {
        let mut clock = TickClock::new(8.0).unwrap();
        clock.reset(Duration::ZERO);

        let now = Duration::from_secs(10);
        assert_eq!(clock.due_ticks(now), 1);
        clock.mark(now);
        assert_eq!(clock.due_ticks(now + Duration::from_millis(16)), 0);
    }

    #[test]
    fn test_clock_going_backwards_is_not_due() {
        let mut clock = TickClock::new(8.0).unwrap();
        clock.reset(Duration::from_secs(5));

        assert!(!clock.is_due(Duration::from_secs(1)));
    }

    #[test]
    fn test_speed_change_applies_to_next_comparison() {
        let mut clock = TickClock::new(8.0).unwrap();
        clock.reset(Duration::ZERO);
        assert!(!clock.is_due(Duration::from_millis(60)));

        clock.set_speed(16.0).unwrap();

        assert!(clock.is_due(Duration::from_millis(63)));
    }
}
