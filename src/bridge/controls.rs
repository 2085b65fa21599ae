//! User-facing control bridge - gesture toggles, orbit input, lifecycle

use wasm_bindgen::prelude::*;

use super::store::with_view;

/// Toggle gesture camera control. Enabling enters calibration; disabling
/// returns the camera to manual orbit control.
#[wasm_bindgen]
pub fn set_gesture_enabled(enabled: bool) {
    with_view(|view| view.set_gesture_enabled(enabled));
}

/// Flip the rotation sign of the gesture mapping.
#[wasm_bindgen]
pub fn set_inverse_rotation(inverse: bool) {
    with_view(|view| view.set_inverse_rotation(inverse));
}

/// Prompt the calibration overlay should display, if any.
#[wasm_bindgen]
pub fn calibration_prompt() -> Option<String> {
    with_view(|view| view.calibration_prompt().map(str::to_owned))
}

/// Pointer drag in pixels, from the canvas event handlers.
#[wasm_bindgen]
pub fn orbit_drag(dx: f32, dy: f32) {
    with_view(|view| view.orbit_drag(dx, dy));
}

/// Wheel delta; positive zooms out.
#[wasm_bindgen]
pub fn orbit_zoom(delta: f32) {
    with_view(|view| view.orbit_zoom(delta));
}

/// Viewport resize, from the window resize listener.
#[wasm_bindgen]
pub fn on_resize(width: f32, height: f32) {
    let active = with_view(|view| {
        view.resize(width, height);
        !view.is_stopped()
    });
    if active {
        #[cfg(target_arch = "wasm32")]
        crate::renderer::resize_surface(width as u32, height as u32);
    }
}

/// Tear the view down. Render and detection callbacks arriving after
/// this are no-ops.
#[wasm_bindgen]
pub fn shutdown() {
    with_view(|view| view.stop());
    web_sys::console::log_1(&"Graph view stopped".into());
}
