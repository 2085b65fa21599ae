//! Bridge module - JS <-> Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod controls;
mod graph_data;
mod landmarks;
mod store;

pub use controls::{
    calibration_prompt, on_resize, orbit_drag, orbit_zoom, set_gesture_enabled,
    set_inverse_rotation, shutdown,
};
pub use graph_data::{adjust_label_scale, label_placements, load_graph, set_relation_filter};
pub use landmarks::update_hand_landmarks;

#[cfg(target_arch = "wasm32")]
pub(crate) use store::frame_vertices;
