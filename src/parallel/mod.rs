//! Row-parallel matrix product.
//!
//! Output rows are independent, so they can be computed on separate threads.
//! Every cell is still accumulated serially in ascending `k`, which keeps the
//! result identical to the serial kernel even when `plus` is not commutative.
//! Without the `rayon` feature everything runs on the serial kernel.

use crate::config::ParallelConfig;
use crate::core::traits::Semiring;
use crate::matrix::kernels;

#[cfg(feature = "rayon")]
mod rayon_rows;

/// `out = lhs * rhs`, split by output row when `config` allows it.
pub(crate) fn product_into<T>(
    lhs: &[T::Value],
    rhs: &[T::Value],
    inner: usize,
    rhs_cols: usize,
    out: &mut [T::Value],
    config: &ParallelConfig,
) where
    T: Semiring,
    T::Value: Send + Sync,
{
    let rows = out.len() / rhs_cols;
    #[cfg(feature = "rayon")]
    {
        if config.should_parallelize(rows) {
            tracing::trace!(rows, threshold = config.parallel_threshold, "parallel product");
            rayon_rows::product_into::<T>(lhs, rhs, inner, rhs_cols, out);
            return;
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = config;
    tracing::trace!(rows, "serial product");
    kernels::product_into::<T>(lhs, rhs, inner, rhs_cols, out);
}
