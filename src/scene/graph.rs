//! Graph data model - nodes, edges, relation kinds and filtering

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

/// Relation categories a node can belong to. Each has a fixed display
/// color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum RelationKind {
    Noun,
    Organization,
    Acronym,
    Event,
    Industry,
    Profession,
    Year,
}

impl RelationKind {
    pub const ALL: [RelationKind; 7] = [
        RelationKind::Noun,
        RelationKind::Organization,
        RelationKind::Acronym,
        RelationKind::Event,
        RelationKind::Industry,
        RelationKind::Profession,
        RelationKind::Year,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RelationKind::Noun => "Noun",
            RelationKind::Organization => "Organization",
            RelationKind::Acronym => "Acronym",
            RelationKind::Event => "Event",
            RelationKind::Industry => "Industry",
            RelationKind::Profession => "Profession",
            RelationKind::Year => "Year",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Fixed relation-to-color table (rgba, 0-1).
    pub fn color(&self) -> [f32; 4] {
        match self {
            RelationKind::Noun => rgb(0x1a75ff),
            RelationKind::Organization => rgb(0xff3333),
            RelationKind::Acronym => rgb(0x33ff33),
            RelationKind::Event => rgb(0xffff33),
            RelationKind::Industry => rgb(0xff8000),
            RelationKind::Profession => rgb(0x8000ff),
            RelationKind::Year => rgb(0x00b3b3),
        }
    }
}

fn rgb(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub relation: RelationKind,
    pub position: [f32; 3],
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Per-relation visibility toggles. Everything is visible by default.
#[derive(Clone, Debug, Default)]
pub struct RelationFilter {
    hidden: HashSet<RelationKind>,
}

impl RelationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, kind: RelationKind, visible: bool) {
        if visible {
            self.hidden.remove(&kind);
        } else {
            self.hidden.insert(kind);
        }
    }

    pub fn is_visible(&self, kind: RelationKind) -> bool {
        !self.hidden.contains(&kind)
    }
}

/// Visible nodes plus the edges whose endpoints both survive the filter.
/// Edges referencing a hidden or unknown node are dropped.
pub fn filtered<'a>(
    graph: &'a GraphData,
    filter: &RelationFilter,
) -> (Vec<&'a GraphNode>, Vec<(&'a GraphNode, &'a GraphNode)>) {
    let nodes: Vec<&GraphNode> = graph
        .nodes
        .iter()
        .filter(|node| filter.is_visible(node.relation))
        .collect();

    let by_id: HashMap<&str, &GraphNode> =
        nodes.iter().map(|node| (node.id.as_str(), *node)).collect();

    let edges = graph
        .edges
        .iter()
        .filter_map(|edge| {
            let source = by_id.get(edge.source.as_str())?;
            let target = by_id.get(edge.target.as_str())?;
            Some((*source, *target))
        })
        .collect();

    (nodes, edges)
}
