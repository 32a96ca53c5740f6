//! Occlusion recompute gate
//!
//! The field-of-view polygon is expensive to rebuild and only changes when the
//! camera moves, so the rebuild is requested on frames where the camera
//! position actually differs from the previous frame.

use glam::Vec2;
use tracing::trace;

/// An external consumer that rebuilds visibility when the camera moves
pub trait OcclusionTarget {
    /// Rebuild visibility for the new camera position
    fn recompute(&mut self);
}

/// Remembers the last camera position and fires the recompute only on change
#[derive(Debug, Clone, Default)]
pub struct MotionChangeGate {
    previous: Vec2,
    /// Number of recomputes requested so far
    fired: u64,
}

impl MotionChangeGate {
    /// Create a gate primed at `position`
    pub fn new(position: Vec2) -> Self {
        Self {
            previous: position,
            fired: 0,
        }
    }

    /// Compare against the previous position and record `current`.
    ///
    /// Returns `true` when the camera moved and an occluder is present.
    /// Equality is exact on both axes.
    pub fn check(&mut self, current: Vec2, occluder_present: bool) -> bool {
        let moved = current != self.previous;
        self.previous = current;

        let fire = moved && occluder_present;
        if fire {
            self.fired += 1;
            trace!(x = current.x, y = current.y, "Camera moved, requesting occlusion recompute");
        }
        fire
    }

    /// Like [`check`](Self::check), invoking the occluder directly when it fires
    pub fn tick(&mut self, current: Vec2, occluder: Option<&mut dyn OcclusionTarget>) -> bool {
        let fire = self.check(current, occluder.is_some());
        if fire {
            if let Some(occluder) = occluder {
                occluder.recompute();
            }
        }
        fire
    }

    /// Re-prime the gate without requesting a recompute (teleports, level loads)
    pub fn reset(&mut self, position: Vec2) {
        self.previous = position;
    }

    /// Position recorded on the last tick
    pub fn previous(&self) -> Vec2 {
        self.previous
    }

    /// Number of recomputes requested so far
    pub fn fired_count(&self) -> u64 {
        self.fired
    }
}
