//! Camera configuration

use serde::{Deserialize, Serialize};
use vigil_core::{ConfigError, Viewport};

use crate::hint::HintConfig;

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Fixed render target size
    pub viewport: Viewport,
    /// Blend rate toward the anchor, per second (both axes)
    pub anchor_rate: f32,
    /// Blend rate toward the pointer, per second (horizontal only)
    pub pointer_rate: f32,
    /// Fraction of the viewport height the camera sits above the anchor
    pub vertical_offset_fraction: f32,
    /// Number of weapon slots cycled by the scroll wheel
    pub weapon_slots: usize,
    /// Interaction hint timing
    pub hint: HintConfig,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            anchor_rate: 4.0,
            pointer_rate: 0.4,
            vertical_offset_fraction: 0.25,
            weapon_slots: 3,
            hint: HintConfig::default(),
        }
    }
}

impl CameraConfig {
    /// Check that every value can drive the camera
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport.validate()?;
        for (name, value) in [
            ("anchor_rate", self.anchor_rate),
            ("pointer_rate", self.pointer_rate),
            ("vertical_offset_fraction", self.vertical_offset_fraction),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if self.weapon_slots == 0 {
            return Err(ConfigError::NoSlots);
        }
        self.hint.validate()
    }

    /// Vertical distance the camera keeps above its anchor
    pub fn vertical_offset(&self) -> f32 {
        self.viewport.height * self.vertical_offset_fraction
    }
}
