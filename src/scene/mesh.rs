//! Per-frame vertex building for the graph scene
//!
//! One filled circle billboard per visible node, colored by relation;
//! one thin line quad per surviving edge. All geometry is rebuilt in
//! clip space each frame from the live camera, plus the screen-space
//! label placements the overlay draws text at.

use serde::Serialize;

use super::graph::{filtered, GraphData, GraphNode, RelationFilter};
use super::projection::{ClipPoint, FrameProjection};
use crate::camera::{CameraState, Viewport};

/// World-space node sphere radius.
const NODE_RADIUS: f32 = 0.75;
const NODE_SEGMENTS: u32 = 24;
/// Clip-space half-width of edge lines.
const EDGE_HALF_WIDTH: f32 = 0.0015;
const EDGE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// World-space height of a label billboard at labelScale 1.0.
const LABEL_WORLD_HEIGHT: f32 = 2.0;
/// Label scale floor; the filter panel adjusts in 0.1 steps above it.
pub const MIN_LABEL_SCALE: f32 = 0.5;

/// Vertex for colored 2D shapes in clip space.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Where the overlay should draw one node label, in screen pixels.
#[derive(Clone, Debug, Serialize)]
pub struct LabelPlacement {
    pub label: String,
    pub x: f32,
    pub y: f32,
    /// Font size in pixels, already scaled by labelScale and depth.
    pub size: f32,
}

/// Build the frame's vertices: edges first so nodes draw on top.
pub fn build_frame_vertices(
    graph: &GraphData,
    filter: &RelationFilter,
    camera: &CameraState,
    viewport: Viewport,
) -> Vec<Vertex> {
    let projection = FrameProjection::new(camera, viewport);
    let (nodes, edges) = filtered(graph, filter);

    let mut vertices = Vec::with_capacity(edges.len() * 6 + nodes.len() * NODE_SEGMENTS as usize * 3);

    for (source, target) in edges {
        let (Some(a), Some(b)) = (
            projection.to_clip(source.position),
            projection.to_clip(target.position),
        ) else {
            continue;
        };
        push_line(&mut vertices, a, b, EDGE_HALF_WIDTH, EDGE_COLOR);
    }

    for node in nodes {
        let Some(clip) = projection.to_clip(node.position) else {
            continue;
        };
        let radius = projection.billboard_radius(NODE_RADIUS, clip.w);
        push_circle(&mut vertices, clip, radius, node.relation.color());
    }

    vertices
}

/// Screen-space label placements for the visible nodes.
pub fn build_label_placements(
    graph: &GraphData,
    filter: &RelationFilter,
    camera: &CameraState,
    viewport: Viewport,
    label_scale: f32,
) -> Vec<LabelPlacement> {
    let projection = FrameProjection::new(camera, viewport);
    let (nodes, _) = filtered(graph, filter);
    let label_scale = label_scale.max(MIN_LABEL_SCALE);

    nodes
        .into_iter()
        .filter_map(|node: &GraphNode| {
            let clip = projection.to_clip(node.position)?;
            let (x, y) = projection.to_screen(clip);
            let size =
                projection.billboard_height_px(LABEL_WORLD_HEIGHT * label_scale, clip.w);
            Some(LabelPlacement {
                label: node.label.clone(),
                x,
                y,
                size,
            })
        })
        .collect()
}

/// Triangle-fan circle around a projected node center.
fn push_circle(vertices: &mut Vec<Vertex>, center: ClipPoint, radius: f32, color: [f32; 4]) {
    for i in 0..NODE_SEGMENTS {
        let a0 = (i as f32 / NODE_SEGMENTS as f32) * std::f32::consts::TAU;
        let a1 = ((i + 1) as f32 / NODE_SEGMENTS as f32) * std::f32::consts::TAU;

        vertices.push(Vertex {
            position: [center.x, center.y],
            color,
        });
        vertices.push(Vertex {
            position: [center.x + radius * a0.cos(), center.y + radius * a0.sin()],
            color,
        });
        vertices.push(Vertex {
            position: [center.x + radius * a1.cos(), center.y + radius * a1.sin()],
            color,
        });
    }
}

/// Thin quad between two projected endpoints.
fn push_line(vertices: &mut Vec<Vertex>, a: ClipPoint, b: ClipPoint, half_width: f32, color: [f32; 4]) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-6 {
        return;
    }

    let px = -dy / len * half_width;
    let py = dx / len * half_width;

    vertices.push(Vertex { position: [a.x - px, a.y - py], color });
    vertices.push(Vertex { position: [a.x + px, a.y + py], color });
    vertices.push(Vertex { position: [b.x + px, b.y + py], color });

    vertices.push(Vertex { position: [a.x - px, a.y - py], color });
    vertices.push(Vertex { position: [b.x + px, b.y + py], color });
    vertices.push(Vertex { position: [b.x - px, b.y - py], color });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::graph::RelationKind;

    fn two_node_graph() -> GraphData {
        GraphData::from_json(
            r#"{
                "nodes": [
                    {"id": "a", "label": "alpha", "relation": "Noun", "position": [0.0, 0.0, 0.0]},
                    {"id": "b", "label": "beta", "relation": "Event", "position": [5.0, 0.0, 0.0]}
                ],
                "edges": [{"source": "a", "target": "b"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn frame_has_one_line_and_two_circles() {
        let vertices = build_frame_vertices(
            &two_node_graph(),
            &RelationFilter::new(),
            &CameraState::new(),
            Viewport::default(),
        );
        let expected = 6 + 2 * NODE_SEGMENTS as usize * 3;
        assert_eq!(vertices.len(), expected);
        // Edge vertices come first and are white.
        assert_eq!(vertices[0].color, EDGE_COLOR);
        // The last circle belongs to the Event node.
        assert_eq!(vertices.last().unwrap().color, RelationKind::Event.color());
    }

    #[test]
    fn hidden_nodes_produce_no_geometry() {
        let mut filter = RelationFilter::new();
        filter.set(RelationKind::Noun, false);
        filter.set(RelationKind::Event, false);
        let vertices = build_frame_vertices(
            &two_node_graph(),
            &filter,
            &CameraState::new(),
            Viewport::default(),
        );
        assert!(vertices.is_empty());
    }

    #[test]
    fn label_placements_follow_the_projection() {
        let placements = build_label_placements(
            &two_node_graph(),
            &RelationFilter::new(),
            &CameraState::new(),
            Viewport::default(),
            1.0,
        );
        assert_eq!(placements.len(), 2);
        let alpha = &placements[0];
        assert_eq!(alpha.label, "alpha");
        // The origin node sits at the viewport center.
        assert!((alpha.x - 400.0).abs() < 1e-2);
        assert!((alpha.y - 300.0).abs() < 1e-2);
        assert!(alpha.size > 0.0);
    }

    #[test]
    fn label_scale_is_floored_at_the_minimum() {
        let graph = two_node_graph();
        let at_floor = build_label_placements(
            &graph,
            &RelationFilter::new(),
            &CameraState::new(),
            Viewport::default(),
            MIN_LABEL_SCALE,
        );
        let below_floor = build_label_placements(
            &graph,
            &RelationFilter::new(),
            &CameraState::new(),
            Viewport::default(),
            0.1,
        );
        assert!((at_floor[0].size - below_floor[0].size).abs() < 1e-5);

        let doubled = build_label_placements(
            &graph,
            &RelationFilter::new(),
            &CameraState::new(),
            Viewport::default(),
            2.0 * MIN_LABEL_SCALE,
        );
        assert!((doubled[0].size - 2.0 * at_floor[0].size).abs() < 1e-3);
    }
}
