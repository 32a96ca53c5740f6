//! Scripted stand-ins for the game's collaborators
//!
//! The headless host has no scene tree, so the player, cursor, inventory UI,
//! field-of-view occluder and weapon rack are simulated here and shared with
//! the camera rig through a single handle.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use vigil_game::{
    AnchorProvider, AnchorState, HintIcon, ItemId, OcclusionTarget, PointerProvider,
    UiStateProvider, WeaponRack,
};

/// Something the player can interact with, showing a hint while in range
#[derive(Debug, Clone)]
pub struct Interactable {
    pub label: String,
    pub icon: HintIcon,
    pub position: Vec2,
    pub radius: f32,
}

impl Interactable {
    pub fn new(label: &str, icon: HintIcon, position: Vec2) -> Self {
        Self {
            label: label.to_string(),
            icon,
            position,
            radius: 24.0,
        }
    }
}

#[derive(Debug, Default)]
struct WorldState {
    player: Option<AnchorState>,
    cursor: Vec2,
    inventory_open: bool,
    fov_rebuilds: u64,
    weapons: Vec<Option<ItemId>>,
}

/// Shared handle to the simulated world; each clone is one collaborator
#[derive(Debug, Clone, Default)]
pub struct SimWorld {
    state: Rc<RefCell<WorldState>>,
}

impl SimWorld {
    pub fn new(weapons: Vec<Option<ItemId>>) -> Self {
        let world = Self::default();
        world.state.borrow_mut().weapons = weapons;
        world
    }

    /// Place the player (or remove it with `None`)
    pub fn set_player(&self, player: Option<AnchorState>) {
        self.state.borrow_mut().player = player;
    }

    pub fn set_cursor(&self, cursor: Vec2) {
        self.state.borrow_mut().cursor = cursor;
    }

    pub fn set_inventory_open(&self, open: bool) {
        self.state.borrow_mut().inventory_open = open;
    }

    /// Number of field-of-view rebuilds requested so far
    pub fn fov_rebuilds(&self) -> u64 {
        self.state.borrow().fov_rebuilds
    }
}

impl AnchorProvider for SimWorld {
    fn anchor(&self) -> Option<AnchorState> {
        self.state.borrow().player
    }
}

impl PointerProvider for SimWorld {
    fn pointer_world_position(&self) -> Vec2 {
        self.state.borrow().cursor
    }
}

impl UiStateProvider for SimWorld {
    fn is_inventory_open(&self) -> bool {
        self.state.borrow().inventory_open
    }
}

impl OcclusionTarget for SimWorld {
    fn recompute(&mut self) {
        self.state.borrow_mut().fov_rebuilds += 1;
    }
}

impl WeaponRack for SimWorld {
    fn weapon_in_slot(&self, slot: usize) -> Option<ItemId> {
        self.state.borrow().weapons.get(slot).cloned().flatten()
    }
}

/// Player walk: right along a corridor, pause, then back; frozen in a short cutscene
pub fn player_at(time: f32) -> AnchorState {
    let x = if time < 4.0 {
        time * 40.0
    } else if time < 6.0 {
        160.0
    } else {
        160.0 - (time - 6.0) * 40.0
    };
    AnchorState {
        position: Vec2::new(x, 100.0),
        can_move: true,
        in_cutscene: (4.5..5.5).contains(&time),
    }
}

/// Cursor sweeps left and right of the player
pub fn cursor_at(time: f32, player: Vec2) -> Vec2 {
    player + Vec2::new((time * 1.5).sin() * 120.0, -30.0)
}

/// The first interactable within reach of `position`
pub fn nearest_in_range(interactables: &[Interactable], position: Vec2) -> Option<&Interactable> {
    interactables
        .iter()
        .filter(|i| i.position.distance(position) <= i.radius)
        .min_by(|a, b| {
            a.position
                .distance(position)
                .total_cmp(&b.position.distance(position))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_path() {
        assert_eq!(player_at(0.0).position.x, 0.0);
        assert_eq!(player_at(5.0).position.x, 160.0);
        assert!(player_at(5.0).in_cutscene);
        assert!(!player_at(3.0).in_cutscene);
        assert_eq!(player_at(7.0).position.x, 120.0);
    }

    #[test]
    fn test_nearest_in_range() {
        let items = vec![
            Interactable::new("Door", HintIcon::Hand, Vec2::new(0.0, 0.0)),
            Interactable::new("Sign", HintIcon::Eye, Vec2::new(30.0, 0.0)),
        ];
        assert_eq!(
            nearest_in_range(&items, Vec2::new(20.0, 0.0)).map(|i| i.label.as_str()),
            Some("Sign")
        );
        assert!(nearest_in_range(&items, Vec2::new(100.0, 0.0)).is_none());
    }

    #[test]
    fn test_world_collaborators_share_state() {
        let world = SimWorld::new(vec![Some(ItemId::new("knife"))]);
        let mut occluder = world.clone();

        occluder.recompute();
        world.set_inventory_open(true);

        assert_eq!(world.fov_rebuilds(), 1);
        assert!(occluder.is_inventory_open());
        assert_eq!(world.weapon_in_slot(0), Some(ItemId::new("knife")));
        assert_eq!(world.weapon_in_slot(2), None);
    }
}
