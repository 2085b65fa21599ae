//! Camera module - state, targets, smoothing and manual orbit control
//!
//! Re-exports only. All logic in submodules.

mod animator;
mod orbit;
mod state;
mod target;

pub use animator::{CameraAnimator, ROTATION_SMOOTHING, ZOOM_SMOOTHING};
pub use orbit::OrbitControls;
pub use state::{CameraState, ControlBounds, Viewport};
pub use target::CameraTarget;
