pub mod render;

pub use self::render::{DotGraphWriter, GraphRenderer, JsonGraphWriter};

use crate::error::BfResult;
use crate::instance::Instance;
use crate::layout::Layout;
use crate::scorer::engine::check_layout;
use crate::scorer::SpanTable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    /// Raw calls from `from` to `to`.
    pub weight: f64,
    /// `total_size - span` between the two positions. Larger means the
    /// blocks should attract each other more strongly.
    pub distance_hint: f64,
}

/// Directed interaction graph of one layout. Nodes are block ids; there is
/// one edge per pair of positions, oriented from the earlier position to
/// the later one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionGraph {
    pub nodes: Vec<usize>,
    pub edges: Vec<GraphEdge>,
}

impl InteractionGraph {
    pub fn build(instance: &Instance, layout: &Layout) -> BfResult<Self> {
        check_layout(instance, layout)?;

        let n = layout.len();
        let spans = SpanTable::new(instance, layout);
        let total = instance.total_size();

        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            let from = layout.block_at(i);
            for j in (i + 1)..n {
                let to = layout.block_at(j);
                edges.push(GraphEdge {
                    from,
                    to,
                    weight: instance.calls(from, to),
                    distance_hint: total - spans.span(i, j),
                });
            }
        }

        Ok(Self {
            nodes: (0..n).collect(),
            edges,
        })
    }

    pub fn edge(&self, from: usize, to: usize) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.from == from && e.to == to)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
