//! Handgraph Web - gesture-controlled 3D graph viewer
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The JS side owns the hand-landmark detector, the webcam and the text
//! overlay; this crate owns the gesture interpretation, the camera and
//! the graph geometry.

mod bridge;
pub mod camera;
pub mod gesture;
#[cfg(target_arch = "wasm32")]
mod renderer;
pub mod scene;
pub mod view;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    adjust_label_scale, calibration_prompt, label_placements, load_graph, on_resize, orbit_drag,
    orbit_zoom, set_gesture_enabled, set_inverse_rotation, set_relation_filter, shutdown,
    update_hand_landmarks,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize WebGPU - must be called before render_frame. Failure here
/// disables rendering only; the view and orbit entry points stay usable.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;
    console_log!("✅ WebGPU initialized; graph view ready");
    Ok(())
}

/// Render one frame: advance the camera, rebuild and draw the scene
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_frame() {
    renderer::render_graph();
}
