//! Core types shared by the camera and its host

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Size of the fixed low-resolution render target, in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Half of the viewport, i.e. the offset from the top-left corner to the centre
    pub fn half_extents(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Convert a world position to screen space for a camera centred on `camera`
    pub fn world_to_screen(&self, world: Vec2, camera: Vec2) -> Vec2 {
        world - camera + self.half_extents()
    }

    /// Check that both dimensions are positive and finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(320.0, 180.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_screen_centres_camera() {
        let viewport = Viewport::default();
        let camera = Vec2::new(100.0, 50.0);
        assert_eq!(viewport.world_to_screen(camera, camera), Vec2::new(160.0, 90.0));
        assert_eq!(
            viewport.world_to_screen(Vec2::new(110.0, 40.0), camera),
            Vec2::new(170.0, 80.0)
        );
    }

    #[test]
    fn test_viewport_validation() {
        assert!(Viewport::default().validate().is_ok());
        assert_eq!(
            Viewport::new(0.0, 180.0).validate(),
            Err(ConfigError::InvalidViewport {
                width: 0.0,
                height: 180.0
            })
        );
        assert!(Viewport::new(320.0, f32::NAN).validate().is_err());
    }
}
