//! Damped two-target follow
//!
//! The camera chases the player quickly on both axes, then drifts a little
//! toward the cursor horizontally so the player can see where they aim.

use glam::Vec2;
use vigil_core::lerp;

use super::CameraConfig;

/// Snapshot of the entity the camera follows, supplied fresh each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorState {
    /// World position
    pub position: Vec2,
    /// Whether the entity accepts player control this frame
    pub can_move: bool,
    /// Whether a cutscene owns the entity (camera holds still)
    pub in_cutscene: bool,
}

impl AnchorState {
    /// A freely controllable anchor at `position`
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            can_move: true,
            in_cutscene: false,
        }
    }
}

/// Computes the next camera position from the previous one and the two targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowBlender {
    /// Blend rate toward the anchor, per second
    pub anchor_rate: f32,
    /// Blend rate toward the pointer, per second (x only)
    pub pointer_rate: f32,
    /// Fraction of the viewport height kept above the anchor
    pub vertical_offset_fraction: f32,
}

impl FollowBlender {
    /// Build a blender from camera configuration
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            anchor_rate: config.anchor_rate,
            pointer_rate: config.pointer_rate,
            vertical_offset_fraction: config.vertical_offset_fraction,
        }
    }

    /// Compute the camera position for this frame.
    ///
    /// Returns `prev` unchanged when there is no anchor or the anchor is in a cutscene.
    /// The pointer bias is applied to the already anchor-blended x, so the order matters.
    pub fn compute(
        &self,
        prev: Vec2,
        anchor: Option<&AnchorState>,
        pointer: Vec2,
        viewport_height: f32,
        delta: f32,
    ) -> Vec2 {
        let Some(anchor) = anchor else {
            return prev;
        };
        if anchor.in_cutscene {
            return prev;
        }

        let offset = viewport_height * self.vertical_offset_fraction;

        let x = lerp(prev.x, anchor.position.x, delta * self.anchor_rate);
        let x = lerp(x, pointer.x, delta * self.pointer_rate);
        let y = lerp(prev.y, anchor.position.y - offset, delta * self.anchor_rate);

        Vec2::new(x, y)
    }
}

impl Default for FollowBlender {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
