//! Vigil Core - Core types and utilities for the Vigil camera
//!
//! This crate provides the foundational types shared by the game crate and the host:
//! - Mathematical primitives (re-exported from glam) and damping helpers
//! - Viewport description for the fixed low-resolution render target
//! - Frame clock for turning raw frame deltas into game deltas
//! - Configuration error type

pub mod error;
pub mod math;
pub mod time;
pub mod types;

pub use error::ConfigError;
pub use glam::Vec2;
pub use math::{lerp, wrap};
pub use time::{FrameClock, TimeConfig};
pub use types::Viewport;
