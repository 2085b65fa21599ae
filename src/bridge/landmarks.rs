//! Detection-loop bridge
//!
//! Receives hand landmarks from the JS detection loop and feeds them
//! through the gesture interpreter. The detector itself (model, camera,
//! video) stays on the JS side.

use wasm_bindgen::prelude::*;

use super::store::with_view;
use crate::gesture::{HandObservation, FLAT_LEN};

/// Called from JavaScript once per completed hand detection with a flat
/// Float32Array of 63 values per hand (21 landmarks x 3 coordinates).
/// Zero hands means tracking was lost. Only the first hand is used.
#[wasm_bindgen]
pub fn update_hand_landmarks(data: &[f32], num_hands: usize) {
    if num_hands == 0 {
        with_view(|view| view.on_predictions(&[]));
        return;
    }

    let head = &data[..data.len().min(FLAT_LEN)];
    let Some(observation) = HandObservation::from_flat(head) else {
        // Malformed detector output: skip this cycle, keep the last
        // published target.
        web_sys::console::warn_1(
            &format!(
                "Malformed hand landmark data: {} values ({} expected per hand)",
                data.len(),
                FLAT_LEN
            )
            .into(),
        );
        return;
    };

    with_view(|view| {
        let was_calibrated = view.calibration_state().is_calibrated();
        view.on_predictions(&[observation]);
        if !was_calibrated && view.calibration_state().is_calibrated() {
            web_sys::console::log_1(&"🖐️ Hand calibrated; gesture control active".into());
        }
    });
}
