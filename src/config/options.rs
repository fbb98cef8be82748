//! Options for the row-parallel matrix product.
//!
//! `ParallelConfig` decides when `par_mul` hands rows to rayon and when it
//! stays on the serial kernel. Small products are faster serially because the
//! per-task overhead dominates the `O(n·m·k)` work.

/// Row-parallel product parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum number of output rows before the product is split across threads.
    pub parallel_threshold: usize,
}

impl ParallelConfig {
    /// Config that parallelises from `threshold` output rows upward.
    pub fn with_threshold(threshold: usize) -> Self {
        Self {
            parallel_threshold: threshold,
        }
    }

    /// Whether a product with `rows` output rows should run in parallel.
    pub fn should_parallelize(&self, rows: usize) -> bool {
        rows >= self.parallel_threshold
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}
