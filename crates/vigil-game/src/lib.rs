//! Vigil Game - Camera and interaction glue for a 2D top-down game
//!
//! Provides the damped follow camera, the transient interaction hint,
//! the occlusion recompute gate, weapon slot selection and the
//! collaborator-driven rig that a host render loop owns.

pub mod camera;
pub mod hint;
pub mod input;
pub mod occlusion;
pub mod rig;
pub mod slots;

pub use camera::{AnchorState, CameraConfig, CameraController, FollowBlender, FrameInput, FrameOutput};
pub use hint::{HintConfig, HintIcon, HintScheduler};
pub use input::{ScrollAccumulator, ScrollCommand};
pub use occlusion::{MotionChangeGate, OcclusionTarget};
pub use rig::{AnchorProvider, CameraRig, PointerProvider, UiStateProvider};
pub use slots::{ItemId, SlotSelector, WeaponRack};
