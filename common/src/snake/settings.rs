use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::grid::GridConfig;

pub const MIN_GRID_SIZE: u32 = 6;
pub const MAX_GRID_SIZE: u32 = 200;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GameSettings {
    /// Cells per side of the square grid.
    pub grid_size: u32,
    /// Ticks per second.
    pub speed: f64,
    /// Leaving one edge re-enters the opposite one instead of ending the run.
    #[serde(default)]
    pub wrap: bool,
}

impl GameSettings {
    pub fn grid(&self) -> GridConfig {
        GridConfig::new(self.grid_size, self.wrap)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        // The spawn segment and the inset food area both need room.
        if self.grid_size < MIN_GRID_SIZE {
            return Err(format!("grid_size must be at least {}", MIN_GRID_SIZE));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(format!("grid_size must not exceed {}", MAX_GRID_SIZE));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err("speed must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: 20,
            speed: 8.0,
            wrap: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_grid_size_bounds() {
        let small = GameSettings { grid_size: 5, ..GameSettings::default() };
        let large = GameSettings { grid_size: 201, ..GameSettings::default() };
        let smallest = GameSettings { grid_size: MIN_GRID_SIZE, ..GameSettings::default() };

        assert!(small.validate().is_err());
        assert!(large.validate().is_err());
        assert!(smallest.validate().is_ok());
    }

    #[test]
    fn test_speed_must_be_positive() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let settings = GameSettings { speed, ..GameSettings::default() };
            assert!(settings.validate().is_err(), "speed {} should be rejected", speed);
        }
    }

    #[test]
    fn test_fast_speeds_are_valid() {
        for speed in [0.5, 60.0, 120.0, 240.0] {
            let settings = GameSettings { speed, ..GameSettings::default() };
            assert!(settings.validate().is_ok(), "speed {} should be accepted", speed);
        }
    }

    #[test]
    fn test_wrap_defaults_to_off_when_missing() {
        let settings: GameSettings =
            serde_yaml_ng::from_str("grid_size: 30\nspeed: 12.5\n").unwrap();

        assert_eq!(settings.grid_size, 30);
        assert!(!settings.wrap);
    }
}
