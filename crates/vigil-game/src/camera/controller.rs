//! Camera controller combining follow, hint, occlusion gate and slot selection

use glam::Vec2;
use vigil_core::Viewport;

use crate::hint::{HintIcon, HintScheduler};
use crate::input::ScrollCommand;
use crate::occlusion::MotionChangeGate;
use crate::slots::SlotSelector;

use super::{AnchorState, CameraConfig, FollowBlender};

/// Everything the controller reads from its collaborators in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// The followed entity, if one exists
    pub anchor: Option<AnchorState>,
    /// Cursor position in world space
    pub pointer: Vec2,
    /// Whether an inventory or other overlay has focus
    pub inventory_open: bool,
    /// Whether a line occluder is configured for field-of-view
    pub occluder_present: bool,
}

impl FrameInput {
    /// Input with a freely moving anchor and no overlay or occluder
    pub fn following(anchor: Vec2, pointer: Vec2) -> Self {
        Self {
            anchor: Some(AnchorState::at(anchor)),
            pointer,
            inventory_open: false,
            occluder_present: false,
        }
    }

    /// Whether the anchor accepts player control
    pub fn can_move(&self) -> bool {
        self.anchor.is_some_and(|a| a.can_move)
    }
}

/// Result of one controller update, handed back to the host for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Camera centre in world space
    pub camera_position: Vec2,
    /// Whether the hint is drawn
    pub hint_visible: bool,
    /// Hint opacity (0-1)
    pub hint_opacity: f32,
    /// Hint position in world space
    pub hint_world_position: Vec2,
    /// Hint position relative to the top-left corner of the viewport
    pub hint_screen_position: Vec2,
    /// Selected weapon slot
    pub selected_slot: usize,
    /// Whether the occlusion recompute should run this frame
    pub occlusion_recompute: bool,
}

/// 2D follow camera
pub struct CameraController {
    /// Configuration, mirrored into the parts below by `set_config`
    config: CameraConfig,
    follow: FollowBlender,
    hint: HintScheduler,
    gate: MotionChangeGate,
    slots: SlotSelector,
    /// Camera centre in world space
    position: Vec2,
}

impl CameraController {
    /// Create a new camera controller
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    /// Create a camera controller with custom config
    pub fn with_config(config: CameraConfig) -> Self {
        Self {
            follow: FollowBlender::from_config(&config),
            hint: HintScheduler::with_config(config.hint.clone()),
            gate: MotionChangeGate::default(),
            slots: SlotSelector::new(config.weapon_slots),
            position: Vec2::ZERO,
            config,
        }
    }

    /// Camera centre in world space
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current configuration
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Replace the configuration at runtime (settings menu, level overrides).
    ///
    /// Takes effect on the next `update`. A running hint keeps its countdown and
    /// the selected slot is wrapped into the new slot range.
    pub fn set_config(&mut self, config: CameraConfig) {
        self.follow = FollowBlender::from_config(&config);
        self.hint.config = config.hint.clone();
        self.slots.set_slot_count(config.weapon_slots);
        self.config = config;
    }

    /// Viewport the camera renders into
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Selected weapon slot
    pub fn selected_slot(&self) -> usize {
        self.slots.selected()
    }

    /// Read access to the hint
    pub fn hint(&self) -> &HintScheduler {
        &self.hint
    }

    /// Read access to the occlusion gate
    pub fn gate(&self) -> &MotionChangeGate {
        &self.gate
    }

    /// Move the camera instantly without counting it as motion (level loads, respawns)
    pub fn snap_to(&mut self, position: Vec2) {
        self.position = position;
        self.gate.reset(position);
    }

    /// Show the interaction hint. Returns `true` if the icon changed.
    pub fn show_hint(&mut self, label: impl Into<String>, icon: HintIcon, world_position: Vec2) -> bool {
        self.hint.show(label, icon, world_position)
    }

    /// Hide the interaction hint
    pub fn hide_hint(&mut self) {
        self.hint.hide();
    }

    /// Handle a scroll command. Returns `true` if the selection changed.
    pub fn on_scroll(&mut self, command: ScrollCommand, can_move: bool, inventory_open: bool) -> bool {
        self.slots.on_scroll(command, can_move, inventory_open)
    }

    /// Update the camera (call each frame)
    pub fn update(&mut self, delta: f32, input: &FrameInput) -> FrameOutput {
        self.position = self.follow.compute(
            self.position,
            input.anchor.as_ref(),
            input.pointer,
            self.config.viewport.height,
            delta,
        );

        // A cutscene holds the hint animation still; the countdown keeps running.
        if input.anchor.is_some_and(|a| a.in_cutscene) {
            self.hint.tick_frozen(delta);
        } else {
            self.hint.tick(delta);
        }

        let occlusion_recompute = self.gate.check(self.position, input.occluder_present);

        let hint_world_position = self.hint.world_position();
        FrameOutput {
            camera_position: self.position,
            hint_visible: self.hint.is_visible(),
            hint_opacity: self.hint.opacity(),
            hint_world_position,
            hint_screen_position: self
                .config
                .viewport
                .world_to_screen(hint_world_position, self.position),
            selected_slot: self.slots.selected(),
            occlusion_recompute,
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_camera_controller_creation() {
        let camera = CameraController::new();
        assert_eq!(camera.position(), Vec2::ZERO);
        assert_eq!(camera.selected_slot(), 0);
        assert!(!camera.hint().is_visible());
    }

    #[test]
    fn test_update_follows_anchor() {
        let mut camera = CameraController::new();
        let input = FrameInput::following(Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0));

        for _ in 0..600 {
            camera.update(DT, &input);
        }
        let pos = camera.position();
        assert!((pos.x - 100.0).abs() < 0.01);
        assert!((pos.y - 55.0).abs() < 0.01);
    }

    #[test]
    fn test_cutscene_freezes_camera() {
        let mut camera = CameraController::new();
        camera.snap_to(Vec2::new(7.0, 7.0));
        let mut input = FrameInput::following(Vec2::new(100.0, 100.0), Vec2::ZERO);
        input.anchor = input.anchor.map(|a| AnchorState {
            in_cutscene: true,
            ..a
        });

        let out = camera.update(0.1, &input);
        assert_eq!(out.camera_position, Vec2::new(7.0, 7.0));
    }

    #[test]
    fn test_missing_anchor_still_runs_hint() {
        let mut camera = CameraController::new();
        camera.show_hint("Door", HintIcon::Hand, Vec2::new(10.0, 10.0));
        let input = FrameInput {
            anchor: None,
            pointer: Vec2::ZERO,
            inventory_open: false,
            occluder_present: true,
        };

        let out = camera.update(0.5, &input);
        assert_eq!(out.camera_position, Vec2::ZERO);
        assert!(!out.hint_visible);
        assert_eq!(out.hint_opacity, 0.0);
        assert!(!out.occlusion_recompute);
    }

    #[test]
    fn test_recompute_only_when_moving() {
        let mut camera = CameraController::new();
        let mut input = FrameInput::following(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0));
        input.occluder_present = true;

        assert!(camera.update(DT, &input).occlusion_recompute);

        // Same position twice in a row: a stationary frame must not fire
        camera.snap_to(Vec2::new(20.0, 20.0));
        let still = FrameInput {
            anchor: None,
            ..input
        };
        assert!(!camera.update(DT, &still).occlusion_recompute);
        assert!(!camera.update(DT, &still).occlusion_recompute);
    }

    #[test]
    fn test_no_occluder_no_recompute() {
        let mut camera = CameraController::new();
        let input = FrameInput::following(Vec2::new(50.0, 50.0), Vec2::ZERO);
        assert!(!camera.update(DT, &input).occlusion_recompute);
    }

    #[test]
    fn test_hint_screen_position() {
        let mut camera = CameraController::new();
        camera.snap_to(Vec2::new(100.0, 100.0));
        camera.show_hint("Chest", HintIcon::Hand, Vec2::new(110.0, 90.0));

        let input = FrameInput {
            anchor: None,
            pointer: Vec2::ZERO,
            inventory_open: false,
            occluder_present: false,
        };
        let out = camera.update(0.1, &input);
        assert!(out.hint_visible);
        assert!((out.hint_opacity - 0.8).abs() < 1e-5);
        assert_eq!(out.hint_world_position, Vec2::new(110.0, 90.0));
        assert_eq!(out.hint_screen_position, Vec2::new(170.0, 80.0));
    }

    #[test]
    fn test_scroll_reported_in_output() {
        let mut camera = CameraController::new();
        assert!(camera.on_scroll(ScrollCommand::Down, true, false));
        assert!(!camera.on_scroll(ScrollCommand::Down, true, true));

        let out = camera.update(DT, &FrameInput::following(Vec2::ZERO, Vec2::ZERO));
        assert_eq!(out.selected_slot, 2);
    }

    #[test]
    fn test_set_config_takes_effect() {
        let mut camera = CameraController::new();
        let mut config = camera.config().clone();
        config.anchor_rate = 0.0;
        config.pointer_rate = 0.0;
        config.weapon_slots = 2;
        config.hint.max_duration = 1.0;
        camera.on_scroll(ScrollCommand::Down, true, false);
        assert_eq!(camera.selected_slot(), 2);

        camera.set_config(config);
        assert_eq!(camera.selected_slot(), 0);

        let out = camera.update(0.1, &FrameInput::following(Vec2::new(100.0, 0.0), Vec2::ZERO));
        assert_eq!(out.camera_position, Vec2::ZERO);

        camera.show_hint("Door", HintIcon::Hand, Vec2::ZERO);
        assert_eq!(camera.hint().remaining(), 1.0);
    }

    #[test]
    fn test_cutscene_freezes_hint_fade() {
        let mut camera = CameraController::new();
        camera.show_hint("Door", HintIcon::Hand, Vec2::ZERO);
        let input = FrameInput::following(Vec2::ZERO, Vec2::ZERO);
        let faded = camera.update(0.1, &input).hint_opacity;

        let cutscene = FrameInput {
            anchor: Some(AnchorState {
                in_cutscene: true,
                ..AnchorState::at(Vec2::ZERO)
            }),
            ..input
        };
        let out = camera.update(0.2, &cutscene);
        assert_eq!(out.hint_opacity, faded);
        assert!((camera.hint().remaining() - 0.2).abs() < 1e-6);

        let out = camera.update(0.3, &cutscene);
        assert!(!out.hint_visible);
        assert_eq!(out.hint_opacity, 0.0);
    }

    #[test]
    fn test_frame_input_can_move() {
        let input = FrameInput::following(Vec2::ZERO, Vec2::ZERO);
        assert!(input.can_move());
        let input = FrameInput { anchor: None, ..input };
        assert!(!input.can_move());
    }
}
