//! Frame clock for the host render loop
//!
//! Turns raw wall-clock frame deltas into the game delta handed to the camera.
//! The camera itself never clamps its delta; clamping happens here, once.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Configuration for frame timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// How many game seconds pass per real second
    pub time_scale: f32,
    /// Maximum delta handed to the game per frame (frame stall guard)
    pub max_delta_time: f32,
    /// Target frame duration used by the headless host loop
    pub target_frame_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_delta_time: 0.25,
            target_frame_time: 1.0 / 60.0,
        }
    }
}

impl TimeConfig {
    /// Check that timing values can drive a frame loop
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.time_scale >= 0.0) {
            return Err(ConfigError::Negative {
                name: "time_scale",
                value: self.time_scale,
            });
        }
        if !(self.max_delta_time > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "max_delta_time",
                value: self.max_delta_time,
            });
        }
        if !(self.target_frame_time > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "target_frame_time",
                value: self.target_frame_time,
            });
        }
        Ok(())
    }
}

/// Per-frame time tracking
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Configuration
    pub config: TimeConfig,
    /// Game time elapsed since start, in seconds
    pub total_time: f64,
    /// Delta for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Delta for this frame before time scaling
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Whether game time is frozen
    pub paused: bool,
}

impl FrameClock {
    /// Create a clock with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance the clock by the raw delta of the previous frame and return the game delta
    pub fn advance(&mut self, raw_delta: f32) -> f32 {
        self.unscaled_delta_time = raw_delta.clamp(0.0, self.config.max_delta_time);
        self.frame_count += 1;

        if self.paused {
            self.delta_time = 0.0;
            return 0.0;
        }

        self.delta_time = self.unscaled_delta_time * self.config.time_scale;
        self.total_time += self.delta_time as f64;
        self.delta_time
    }

    /// Freeze game time (cutscene menus, focus loss)
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume game time
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_advances() {
        let mut clock = FrameClock::default();
        let dt = clock.advance(0.016);

        assert!((dt - 0.016).abs() < f32::EPSILON);
        assert_eq!(clock.frame_count, 1);

        clock.pause();
        assert_eq!(clock.advance(0.016), 0.0);
        assert_eq!(clock.frame_count, 2);
    }

    #[test]
    fn test_frame_stall_is_clamped() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(3.0), 0.25);
        assert_eq!(clock.advance(-1.0), 0.0);
    }

    #[test]
    fn test_time_scale() {
        let mut clock = FrameClock::default();
        clock.set_time_scale(0.5);
        assert!((clock.advance(0.1) - 0.05).abs() < 1e-6);

        clock.set_time_scale(-2.0);
        assert_eq!(clock.config.time_scale, 0.0);
    }

    #[test]
    fn test_time_config_validation() {
        assert!(TimeConfig::default().validate().is_ok());

        let config = TimeConfig {
            max_delta_time: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "max_delta_time", .. })
        ));
    }
}
