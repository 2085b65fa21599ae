//! Graph data bridge - loading, filtering and label export

use wasm_bindgen::prelude::*;

use super::store::{with_scene, with_view};
use crate::scene::{build_label_placements, GraphData, RelationKind, MIN_LABEL_SCALE};

/// Load or replace the graph from its JSON description.
#[wasm_bindgen]
pub fn load_graph(json: &str) -> Result<(), JsValue> {
    let graph = GraphData::from_json(json)
        .map_err(|err| JsValue::from_str(&format!("Invalid graph data: {err}")))?;
    with_scene(|scene| scene.graph = graph);
    Ok(())
}

/// Toggle one relation kind's visibility. Unknown names are ignored.
#[wasm_bindgen]
pub fn set_relation_filter(relation: &str, visible: bool) {
    match RelationKind::parse(relation) {
        Some(kind) => with_scene(|scene| scene.filter.set(kind, visible)),
        None => web_sys::console::warn_1(&format!("Unknown relation kind: {relation}").into()),
    }
}

/// Step the label scale by the filter panel's +/-0.1 increments.
/// Returns the new scale, floored at the minimum.
#[wasm_bindgen]
pub fn adjust_label_scale(delta: f32) -> f32 {
    with_scene(|scene| {
        scene.label_scale = (scene.label_scale + delta).max(MIN_LABEL_SCALE);
        scene.label_scale
    })
}

/// Screen-space label placements for the text overlay, as JSON.
#[wasm_bindgen]
pub fn label_placements() -> String {
    let (camera, viewport) = with_view(|view| (*view.camera(), view.viewport()));
    with_scene(|scene| {
        let placements = build_label_placements(
            &scene.graph,
            &scene.filter,
            &camera,
            viewport,
            scene.label_scale,
        );
        serde_json::to_string(&placements).unwrap_or_else(|_| "[]".to_owned())
    })
}
