use super::span::SpanTable;
use crate::error::{BfResult, BlockForgeError};
use crate::instance::Instance;
use crate::layout::Layout;
use rayon::prelude::*;

pub(crate) fn check_layout(instance: &Instance, layout: &Layout) -> BfResult<()> {
    if layout.len() != instance.block_count() {
        return Err(BlockForgeError::validation(format!(
            "layout has {} entries but the instance has {} blocks",
            layout.len(),
            instance.block_count()
        )));
    }
    Ok(())
}

/// Whole-layout fitness.
///
/// Every pair of positions `i < j` adds
/// `(C[a][b] + C[b][a]) * (total_size - span(i, j))` where `a` and `b` are
/// the blocks placed there. Pairs are visited with `i` ascending, then `j`
/// ascending, so the result is reproducible bit for bit.
pub fn fitness(instance: &Instance, layout: &Layout) -> BfResult<f64> {
    check_layout(instance, layout)?;

    let n = layout.len();
    if n < 2 {
        return Ok(0.0);
    }

    let spans = SpanTable::new(instance, layout);
    let total = instance.total_size();
    let mut f = 0.0;

    for i in 0..n - 1 {
        let a = layout.block_at(i);
        for j in (i + 1)..n {
            let calls = instance.interaction(a, layout.block_at(j));
            if calls == 0.0 {
                continue;
            }
            f += calls * (total - spans.span(i, j));
        }
    }

    Ok(f)
}

/// Scores many layouts of the same instance in parallel.
/// Results come back in input order; any invalid layout fails the batch.
pub fn fitness_batch(instance: &Instance, layouts: &[Layout]) -> BfResult<Vec<f64>> {
    layouts
        .par_iter()
        .map(|layout| fitness(instance, layout))
        .collect()
}
