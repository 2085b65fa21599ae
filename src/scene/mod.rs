//! Scene module - graph model, projection and per-frame geometry
//!
//! Re-exports only. All logic in submodules.

mod graph;
mod mesh;
mod projection;

pub use graph::{filtered, GraphData, GraphEdge, GraphNode, RelationFilter, RelationKind};
pub use mesh::{
    build_frame_vertices, build_label_placements, LabelPlacement, Vertex, MIN_LABEL_SCALE,
};
pub use projection::{ClipPoint, FrameProjection};
