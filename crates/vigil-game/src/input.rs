//! Discrete scroll commands
//!
//! Raw wheel events become `ScrollCommand`s before they reach game logic.
//! Line deltas map one-to-one; pixel deltas (touchpads) are accumulated
//! until a full notch has been scrolled.

use serde::{Deserialize, Serialize};
use winit::event::MouseScrollDelta;

/// Pixels per wheel notch for pixel-based scroll devices
pub const PIXELS_PER_NOTCH: f32 = 120.0;

/// Most commands a single wheel event can produce; larger deltas are truncated
pub const MAX_NOTCHES_PER_EVENT: usize = 8;

/// A discrete scroll step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollCommand {
    /// Wheel rolled away from the user
    Up,
    /// Wheel rolled toward the user
    Down,
}

impl ScrollCommand {
    /// Signed slot step for this command
    pub fn step(&self) -> i64 {
        match self {
            ScrollCommand::Up => 1,
            ScrollCommand::Down => -1,
        }
    }

    /// Convert a notch count into a command (zero yields none)
    pub fn from_notches(notches: f32) -> Option<Self> {
        if notches > 0.0 {
            Some(ScrollCommand::Up)
        } else if notches < 0.0 {
            Some(ScrollCommand::Down)
        } else {
            None
        }
    }

    /// Convert a single wheel event, ignoring its magnitude
    pub fn from_wheel(delta: MouseScrollDelta) -> Option<Self> {
        Self::from_notches(notches(delta))
    }
}

fn notches(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_NOTCH,
    }
}

/// Turns a stream of wheel events into whole-notch commands
#[derive(Debug, Clone, Default)]
pub struct ScrollAccumulator {
    pending: f32,
}

impl ScrollAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a wheel event and collect the commands it completes
    pub fn push(&mut self, delta: MouseScrollDelta) -> Vec<ScrollCommand> {
        self.push_notches(notches(delta))
    }

    /// Feed a raw notch amount (positive = up).
    ///
    /// Emits at most [`MAX_NOTCHES_PER_EVENT`] commands; whole notches beyond that are dropped.
    pub fn push_notches(&mut self, amount: f32) -> Vec<ScrollCommand> {
        if !amount.is_finite() {
            return Vec::new();
        }
        self.pending += amount;

        let whole = self.pending.trunc();
        self.pending -= whole;

        let count = (whole.abs() as usize).min(MAX_NOTCHES_PER_EVENT);
        match ScrollCommand::from_notches(whole) {
            Some(command) => vec![command; count],
            None => Vec::new(),
        }
    }

    /// Drop any partial notch (call when focus changes)
    pub fn clear(&mut self) {
        self.pending = 0.0;
    }
}
