//! Camera rig wired to its collaborators
//!
//! The host builds a [`CameraRig`] once, handing it the objects that know
//! where the player and cursor are, whether an overlay is open, which
//! occluder drives field-of-view and which weapons sit in which slot.
//! The rig then pulls everything it needs each frame.

use glam::Vec2;
use tracing::debug;

use crate::camera::{AnchorState, CameraConfig, CameraController, FrameInput, FrameOutput};
use crate::hint::HintIcon;
use crate::input::ScrollCommand;
use crate::occlusion::OcclusionTarget;
use crate::slots::{ItemId, WeaponRack};

/// Supplies the entity the camera follows
pub trait AnchorProvider {
    /// Current anchor state, or `None` when there is no player in the scene
    fn anchor(&self) -> Option<AnchorState>;
}

/// Supplies the cursor position in world space
pub trait PointerProvider {
    fn pointer_world_position(&self) -> Vec2;
}

/// Reports whether an inventory or other overlay currently has focus
pub trait UiStateProvider {
    fn is_inventory_open(&self) -> bool;
}

/// Camera controller driven by injected collaborators
pub struct CameraRig {
    controller: CameraController,
    anchor: Box<dyn AnchorProvider>,
    pointer: Box<dyn PointerProvider>,
    ui: Box<dyn UiStateProvider>,
    occluder: Option<Box<dyn OcclusionTarget>>,
    weapons: Option<Box<dyn WeaponRack>>,
    selected_weapon: Option<ItemId>,
}

impl CameraRig {
    /// Create a rig with the required collaborators
    pub fn new(
        config: CameraConfig,
        anchor: Box<dyn AnchorProvider>,
        pointer: Box<dyn PointerProvider>,
        ui: Box<dyn UiStateProvider>,
    ) -> Self {
        Self {
            controller: CameraController::with_config(config),
            anchor,
            pointer,
            ui,
            occluder: None,
            weapons: None,
            selected_weapon: None,
        }
    }

    /// Attach the occluder whose visibility is rebuilt when the camera moves
    pub fn with_occluder(mut self, occluder: Box<dyn OcclusionTarget>) -> Self {
        self.occluder = Some(occluder);
        self
    }

    /// Attach the weapon rack used to resolve the selected slot
    pub fn with_weapon_rack(mut self, weapons: Box<dyn WeaponRack>) -> Self {
        self.weapons = Some(weapons);
        self
    }

    /// Replace or remove the occluder (level changes)
    pub fn set_occluder(&mut self, occluder: Option<Box<dyn OcclusionTarget>>) {
        self.occluder = occluder;
    }

    /// Advance one frame
    pub fn tick(&mut self, delta: f32) -> FrameOutput {
        let input = self.gather_input();
        let output = self.controller.update(delta, &input);

        if output.occlusion_recompute {
            if let Some(occluder) = self.occluder.as_mut() {
                occluder.recompute();
            }
        }

        if input.can_move() {
            self.refresh_selected_weapon();
        }

        output
    }

    /// Handle a scroll command from the input dispatcher.
    ///
    /// Returns `true` if the selected slot changed.
    pub fn handle_scroll(&mut self, command: ScrollCommand) -> bool {
        let can_move = self.can_move();
        let inventory_open = self.is_inventory_open();
        self.controller.on_scroll(command, can_move, inventory_open)
    }

    /// Show the interaction hint. Returns `true` if the icon changed.
    pub fn show_hint(&mut self, label: impl Into<String>, icon: HintIcon, world_position: Vec2) -> bool {
        self.controller.show_hint(label, icon, world_position)
    }

    /// Hide the interaction hint
    pub fn hide_hint(&mut self) {
        self.controller.hide_hint();
    }

    /// Move the camera instantly without requesting an occlusion recompute
    pub fn snap_to(&mut self, position: Vec2) {
        self.controller.snap_to(position);
    }

    /// Selected weapon slot
    pub fn selected_slot(&self) -> usize {
        self.controller.selected_slot()
    }

    /// Weapon in the selected slot as of the last frame the player could move
    pub fn selected_weapon(&self) -> Option<&ItemId> {
        self.selected_weapon.as_ref()
    }

    /// Camera centre in world space
    pub fn camera_position(&self) -> Vec2 {
        self.controller.position()
    }

    /// Whether the followed entity accepts player control
    pub fn can_move(&self) -> bool {
        self.anchor.anchor().is_some_and(|a| a.can_move)
    }

    /// Whether an overlay currently has focus
    pub fn is_inventory_open(&self) -> bool {
        self.ui.is_inventory_open()
    }

    /// Read access to the underlying controller
    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    fn gather_input(&self) -> FrameInput {
        FrameInput {
            anchor: self.anchor.anchor(),
            pointer: self.pointer.pointer_world_position(),
            inventory_open: self.ui.is_inventory_open(),
            occluder_present: self.occluder.is_some(),
        }
    }

    fn refresh_selected_weapon(&mut self) {
        let Some(weapons) = self.weapons.as_ref() else {
            return;
        };
        let weapon = weapons.weapon_in_slot(self.controller.selected_slot());
        if weapon != self.selected_weapon {
            debug!(
                slot = self.controller.selected_slot(),
                weapon = weapon.as_ref().map(ItemId::as_str),
                "Selected weapon changed"
            );
            self.selected_weapon = weapon;
        }
    }
}
