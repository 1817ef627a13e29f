use crate::error::{BfResult, BlockForgeError};

/// Profiling data for one function: a square call-count matrix and the size
/// of every block, both indexed by block id.
///
/// The matrix is stored flattened row-major (`calls[from * n + to]`).
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    block_count: usize,
    calls: Vec<f64>,
    sizes: Vec<f64>,
    total_size: f64,
}

impl Instance {
    /// Validates and builds an instance.
    ///
    /// Fails if the matrix is not square, its dimension differs from the
    /// number of sizes, a call count is negative or non-finite, or a size is
    /// not strictly positive, or the sizes sum to a non-finite total.
    pub fn new(calls: Vec<Vec<f64>>, sizes: Vec<f64>) -> BfResult<Self> {
        let n = sizes.len();

        if calls.len() != n {
            return Err(BlockForgeError::validation(format!(
                "call matrix has {} rows but there are {} block sizes",
                calls.len(),
                n
            )));
        }

        let mut flat = Vec::with_capacity(n * n);
        for (i, row) in calls.iter().enumerate() {
            if row.len() != n {
                return Err(BlockForgeError::validation(format!(
                    "call matrix is not square: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, &c) in row.iter().enumerate() {
                if !c.is_finite() || c < 0.0 {
                    return Err(BlockForgeError::validation(format!(
                        "invalid call count C[{}][{}] = {}",
                        i, j, c
                    )));
                }
                flat.push(c);
            }
        }

        for (k, &s) in sizes.iter().enumerate() {
            if !s.is_finite() || s <= 0.0 {
                return Err(BlockForgeError::validation(format!(
                    "block {} has non-positive size {}",
                    k, s
                )));
            }
        }

        let total_size: f64 = sizes.iter().sum();
        if !total_size.is_finite() {
            return Err(BlockForgeError::validation(format!(
                "total block size overflows: {}",
                total_size
            )));
        }

        Ok(Self {
            block_count: n,
            calls: flat,
            sizes,
            total_size,
        })
    }

    #[inline(always)]
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    #[inline(always)]
    pub fn total_size(&self) -> f64 {
        self.total_size
    }

    /// Calls from block `from` to block `to`.
    #[inline(always)]
    pub fn calls(&self, from: usize, to: usize) -> f64 {
        self.calls[from * self.block_count + to]
    }

    /// Calls between two blocks in both directions.
    #[inline(always)]
    pub fn interaction(&self, a: usize, b: usize) -> f64 {
        self.calls(a, b) + self.calls(b, a)
    }

    #[inline(always)]
    pub fn size(&self, block: usize) -> f64 {
        self.sizes[block]
    }

    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// True when no block calls any other block. Self-calls are ignored
    /// since they never enter a pairwise sum.
    pub fn is_zeros(&self) -> bool {
        let n = self.block_count;
        (0..n).all(|i| (0..n).all(|j| i == j || self.calls(i, j) == 0.0))
    }

    /// Row-by-row copy of the call matrix.
    pub fn call_rows(&self) -> Vec<Vec<f64>> {
        if self.block_count == 0 {
            return Vec::new();
        }
        self.calls
            .chunks(self.block_count)
            .map(|row| row.to_vec())
            .collect()
    }
}
