//! Camera system module
//!
//! Provides the 2D follow camera that tracks the player and leans toward the cursor.

mod config;
mod controller;
mod follow;

pub use config::CameraConfig;
pub use controller::{CameraController, FrameInput, FrameOutput};
pub use follow::{AnchorState, FollowBlender};
