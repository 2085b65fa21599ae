//! Shared session storage for the wasm bridge
//!
//! Thread-local storage (WASM is single-threaded). The view session and
//! the scene store are separate cells: the detection and render loops
//! touch the view, the filter panel touches the scene.

use std::cell::RefCell;

use crate::scene::{GraphData, RelationFilter};
use crate::view::ViewState;

pub(crate) struct SceneStore {
    pub graph: GraphData,
    pub filter: RelationFilter,
    pub label_scale: f32,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self {
            graph: GraphData::default(),
            filter: RelationFilter::new(),
            label_scale: 1.0,
        }
    }
}

thread_local! {
    static VIEW: RefCell<ViewState> = RefCell::new(ViewState::new());
    static SCENE: RefCell<SceneStore> = RefCell::new(SceneStore::default());
}

pub(crate) fn with_view<R>(f: impl FnOnce(&mut ViewState) -> R) -> R {
    VIEW.with(|cell| f(&mut cell.borrow_mut()))
}

pub(crate) fn with_scene<R>(f: impl FnOnce(&mut SceneStore) -> R) -> R {
    SCENE.with(|cell| f(&mut cell.borrow_mut()))
}

/// Per-frame camera advance plus scene vertex build; `None` once the
/// view is stopped and nothing may render.
#[cfg(target_arch = "wasm32")]
pub(crate) fn frame_vertices() -> Option<Vec<crate::scene::Vertex>> {
    let (camera, viewport) = with_view(|view| {
        if view.tick() {
            Some((*view.camera(), view.viewport()))
        } else {
            None
        }
    })?;

    Some(with_scene(|scene| {
        crate::scene::build_frame_vertices(&scene.graph, &scene.filter, &camera, viewport)
    }))
}
