pub mod contributions;
pub mod engine;
pub mod span;

pub use self::contributions::{breakdown, contributions, size_weights, BlockContribution};
pub use self::engine::{fitness, fitness_batch};
pub use self::span::SpanTable;

use crate::config::SizeScale;
use crate::error::BfResult;
use crate::graph::InteractionGraph;
use crate::instance::Instance;
use crate::layout::Layout;

/// Evaluates layouts against one instance.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    instance: &'a Instance,
}

impl<'a> Scorer<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Whole-layout fitness (larger is better).
    pub fn score(&self, layout: &Layout) -> BfResult<f64> {
        engine::fitness(self.instance, layout)
    }

    pub fn score_identity(&self) -> f64 {
        // Identity always matches the block count.
        engine::fitness(self.instance, &Layout::identity(self.instance.block_count()))
            .unwrap_or_default()
    }

    pub fn score_batch(&self, layouts: &[Layout]) -> BfResult<Vec<f64>> {
        engine::fitness_batch(self.instance, layouts)
    }

    pub fn contributions(&self, layout: &Layout) -> BfResult<Vec<f64>> {
        contributions::contributions(self.instance, layout)
    }

    pub fn breakdown(&self, layout: &Layout, scale: SizeScale) -> BfResult<Vec<BlockContribution>> {
        contributions::breakdown(self.instance, layout, scale)
    }

    pub fn graph(&self, layout: &Layout) -> BfResult<InteractionGraph> {
        InteractionGraph::build(self.instance, layout)
    }
}
