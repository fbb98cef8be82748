// rayon-based row partitioning for the matrix product

use rayon::prelude::*;

use crate::core::traits::Semiring;
use crate::matrix::kernels;

/// Each rayon task owns one output row and runs the serial row kernel on it.
pub(crate) fn product_into<T>(
    lhs: &[T::Value],
    rhs: &[T::Value],
    inner: usize,
    rhs_cols: usize,
    out: &mut [T::Value],
) where
    T: Semiring,
    T::Value: Send + Sync,
{
    out.par_chunks_mut(rhs_cols)
        .zip(lhs.par_chunks(inner))
        .for_each(|(out_row, lhs_row)| kernels::product_row::<T>(lhs_row, rhs, out_row));
}
