use std::time::Duration;

use super::types::{Cell, RunState};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoodView {
    pub cell: Cell,
    /// Time since the food appeared; only drives the pulse animation.
    pub age: Duration,
}

impl FoodView {
    /// Oscillates in `[0, 1]` roughly once per second.
    pub fn pulse(&self) -> f32 {
        ((self.age.as_secs_f32() * 6.0).sin() + 1.0) / 2.0
    }
}

/// Read-only view of a session, sampled once per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub state: RunState,
    pub player: Option<String>,
    pub score: u32,
    pub high_score: u32,
    pub elapsed: Duration,
    pub grid_size: u32,
    pub wrap: bool,
    pub speed: f64,
    pub snake_cells: Vec<Cell>,
    pub food: Option<FoodView>,
}

impl Snapshot {
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.as_secs()
    }

    pub fn clock(&self) -> String {
        format_clock(self.elapsed)
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake_cells.first().copied()
    }
}

pub fn format_clock(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_millis(59_999)), "00:59");
        assert_eq!(format_clock(Duration::from_secs(61)), "01:01");
        assert_eq!(format_clock(Duration::from_secs(3600)), "60:00");
    }

    #[test]
    fn test_pulse_stays_in_unit_range() {
        for millis in (0..2000).step_by(37) {
            let food = FoodView {
                cell: Cell::new(1, 1),
                age: Duration::from_millis(millis),
            };
            let pulse = food.pulse();
            assert!((0.0..=1.0).contains(&pulse));
        }
    }
}
