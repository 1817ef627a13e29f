use crate::instance::Instance;
use crate::layout::Layout;

/// Cumulative block sizes along a layout, so any span is one subtraction.
///
/// `prefix[p]` holds the total size of the blocks at positions `0..p`.
#[derive(Debug, Clone)]
pub struct SpanTable {
    prefix: Vec<f64>,
}

impl SpanTable {
    pub fn new(instance: &Instance, layout: &Layout) -> Self {
        let mut prefix = Vec::with_capacity(layout.len() + 1);
        let mut acc = 0.0;
        prefix.push(acc);
        for &block in layout.as_slice() {
            acc += instance.size(block);
            prefix.push(acc);
        }
        Self { prefix }
    }

    /// Total size of the blocks at positions `a..=b` (order-agnostic).
    #[inline(always)]
    pub fn span(&self, a: usize, b: usize) -> f64 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.prefix[hi + 1] - self.prefix[lo]
    }
}
