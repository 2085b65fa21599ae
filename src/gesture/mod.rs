//! Gesture module - hand observations and the calibration/interpretation pipeline
//!
//! Re-exports only. All logic in submodules.

mod calibration;
mod interpreter;
mod observation;

pub use calibration::{CalibrationState, CalibrationStep, ReferenceFrame};
pub use interpreter::GestureInterpreter;
pub use observation::{
    HandLandmark, HandObservation, FLAT_LEN, INDEX_DIP, INDEX_MCP, INDEX_PIP, INDEX_TIP,
    LANDMARK_COUNT, MIDDLE_DIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, PINKY_DIP, PINKY_MCP,
    PINKY_PIP, PINKY_TIP, RING_DIP, RING_MCP, RING_PIP, RING_TIP, THUMB_CMC, THUMB_IP, THUMB_MCP,
    THUMB_TIP, WRIST,
};
