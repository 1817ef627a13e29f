use super::engine::check_layout;
use super::span::SpanTable;
use crate::config::SizeScale;
use crate::error::BfResult;
use crate::instance::Instance;
use crate::layout::Layout;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One row of the per-block breakdown, in layout order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockContribution {
    pub position: usize,
    pub block: usize,
    pub size: f64,
    pub size_weight: f64,
    pub contribution: f64,
}

/// Per-position share of the fitness.
///
/// Entry `p` belongs to the block at position `p`. It sums
/// `(C[e][b] + C[b][e]) * (total_size - span(p, j))` over every other
/// position `j`, where `e` is the block at `p` and `b` the block at `j`.
/// Each unordered pair is counted from both sides, so the entries add up
/// to twice [`fitness`](super::engine::fitness).
pub fn contributions(instance: &Instance, layout: &Layout) -> BfResult<Vec<f64>> {
    check_layout(instance, layout)?;

    let n = layout.len();
    let spans = SpanTable::new(instance, layout);
    let total = instance.total_size();

    let mut out = Vec::with_capacity(n);
    for p in 0..n {
        let e = layout.block_at(p);
        let mut acc = 0.0;
        for j in 0..n {
            if j == p {
                continue;
            }
            let calls = instance.interaction(e, layout.block_at(j));
            if calls == 0.0 {
                continue;
            }
            acc += calls * (total - spans.span(p, j));
        }
        out.push(acc);
    }

    Ok(out)
}

/// Display weight in `[0, 1]` for every block id, min-max normalized.
/// Equal sizes give a constant `1.0`.
pub fn size_weights(instance: &Instance, scale: SizeScale) -> Vec<f64> {
    let scaled: Vec<f64> = instance
        .sizes()
        .iter()
        .map(|&s| match scale {
            SizeScale::Log => s.ln(),
            SizeScale::Linear => s,
        })
        .collect();

    let min = scaled.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if !(range.is_finite() && range > 0.0) {
        if scaled.len() > 1 {
            warn!("All blocks share one size; using a constant display weight.");
        }
        return vec![1.0; scaled.len()];
    }

    scaled.iter().map(|v| (v - min) / range).collect()
}

pub fn breakdown(
    instance: &Instance,
    layout: &Layout,
    scale: SizeScale,
) -> BfResult<Vec<BlockContribution>> {
    let values = contributions(instance, layout)?;
    let weights = size_weights(instance, scale);

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(position, contribution)| {
            let block = layout.block_at(position);
            BlockContribution {
                position,
                block,
                size: instance.size(block),
                size_weight: weights[block],
                contribution,
            }
        })
        .collect())
}
