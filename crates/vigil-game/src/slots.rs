//! Weapon slot selection
//!
//! The scroll wheel cycles through a small, fixed number of weapon slots.
//! Selection wraps around in both directions.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vigil_core::wrap;

use crate::input::ScrollCommand;

/// Identifier of an inventory item, as known by the inventory UI
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Looks up which weapon is equipped in a slot (owned by the inventory UI)
pub trait WeaponRack {
    fn weapon_in_slot(&self, slot: usize) -> Option<ItemId>;
}

/// Wrapped slot index driven by scroll commands
#[derive(Debug, Clone)]
pub struct SlotSelector {
    selected: usize,
    slot_count: usize,
}

impl SlotSelector {
    /// Create a selector over `slot_count` slots, starting at slot 0.
    ///
    /// A count of zero is treated as a single slot.
    pub fn new(slot_count: usize) -> Self {
        Self {
            selected: 0,
            slot_count: slot_count.max(1),
        }
    }

    /// Apply a scroll command.
    ///
    /// Ignored while the player cannot move or an inventory overlay is open.
    /// Returns `true` if the command was accepted.
    pub fn on_scroll(&mut self, command: ScrollCommand, can_move: bool, inventory_open: bool) -> bool {
        if !can_move || inventory_open {
            return false;
        }

        let next = self.selected as i64 + command.step();
        self.selected = wrap(next, 0, self.slot_count as i64) as usize;
        debug!(slot = self.selected, ?command, "Selected weapon slot");
        true
    }

    /// Change the number of slots, wrapping the current selection into range
    pub fn set_slot_count(&mut self, slot_count: usize) {
        self.slot_count = slot_count.max(1);
        self.selected %= self.slot_count;
    }

    /// Currently selected slot
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of slots
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }
}

impl Default for SlotSelector {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_from_zero_wraps() {
        let mut slots = SlotSelector::default();
        assert!(slots.on_scroll(ScrollCommand::Down, true, false));
        assert_eq!(slots.selected(), 2);
    }

    #[test]
    fn test_scroll_up_wraps_to_zero() {
        let mut slots = SlotSelector::default();
        slots.on_scroll(ScrollCommand::Up, true, false);
        slots.on_scroll(ScrollCommand::Up, true, false);
        assert_eq!(slots.selected(), 2);
        slots.on_scroll(ScrollCommand::Up, true, false);
        assert_eq!(slots.selected(), 0);
    }

    #[test]
    fn test_selection_stays_in_range() {
        let mut slots = SlotSelector::default();
        let pattern = [
            ScrollCommand::Down,
            ScrollCommand::Down,
            ScrollCommand::Up,
            ScrollCommand::Down,
            ScrollCommand::Down,
            ScrollCommand::Down,
            ScrollCommand::Up,
        ];
        for command in pattern.iter().cycle().take(100) {
            slots.on_scroll(*command, true, false);
            assert!(slots.selected() < 3);
        }
    }

    #[test]
    fn test_ignored_when_blocked() {
        let mut slots = SlotSelector::default();
        assert!(!slots.on_scroll(ScrollCommand::Up, false, false));
        assert!(!slots.on_scroll(ScrollCommand::Up, true, true));
        assert_eq!(slots.selected(), 0);
    }

    #[test]
    fn test_shrinking_slot_count_wraps_selection() {
        let mut slots = SlotSelector::default();
        slots.on_scroll(ScrollCommand::Down, true, false);
        slots.set_slot_count(2);
        assert_eq!(slots.selected(), 0);
        slots.on_scroll(ScrollCommand::Down, true, false);
        assert_eq!(slots.selected(), 1);
    }

    #[test]
    fn test_zero_slots_clamped_to_one() {
        let mut slots = SlotSelector::new(0);
        assert_eq!(slots.slot_count(), 1);
        slots.on_scroll(ScrollCommand::Down, true, false);
        assert_eq!(slots.selected(), 0);
    }
}
