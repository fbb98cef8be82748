//! Row-major algorithms shared by `Matrix` and `DynMatrix`.
//!
//! Every kernel writes into a caller-provided output slice, so the fixed and
//! dynamic matrices differ only in how they own their storage and when they
//! check shapes. Shapes are assumed valid here.

use crate::core::traits::{Group, Monoid, Semiring};

/// `out[i] = plus(lhs[i], rhs[i])`.
pub(crate) fn plus_into<T: Monoid>(lhs: &[T::Value], rhs: &[T::Value], out: &mut [T::Value]) {
    debug_assert_eq!(lhs.len(), rhs.len());
    debug_assert_eq!(lhs.len(), out.len());
    for ((o, a), b) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = T::plus(a, b);
    }
}

/// `out[i] = plus(lhs[i], neg(rhs[i]))`.
pub(crate) fn minus_into<T: Group>(lhs: &[T::Value], rhs: &[T::Value], out: &mut [T::Value]) {
    debug_assert_eq!(lhs.len(), rhs.len());
    debug_assert_eq!(lhs.len(), out.len());
    for ((o, a), b) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = T::minus(a, b);
    }
}

/// `out[i] = neg(src[i])`.
pub(crate) fn neg_into<T: Group>(src: &[T::Value], out: &mut [T::Value]) {
    debug_assert_eq!(src.len(), out.len());
    for (o, a) in out.iter_mut().zip(src) {
        *o = T::neg(a);
    }
}

/// One output row of `lhs * rhs`.
///
/// `lhs_row` has `inner` entries, `rhs` is `inner x out_row.len()`. Each cell
/// accumulates from `zero()` in ascending `k`, which keeps non-commutative
/// `plus` correct.
pub(crate) fn product_row<T: Semiring>(
    lhs_row: &[T::Value],
    rhs: &[T::Value],
    out_row: &mut [T::Value],
) {
    let rhs_cols = out_row.len();
    for (j, cell) in out_row.iter_mut().enumerate() {
        let mut acc = T::zero();
        for (k, a) in lhs_row.iter().enumerate() {
            acc = T::plus(&acc, &T::mul(a, &rhs[k * rhs_cols + j]));
        }
        *cell = acc;
    }
}

/// `out = lhs * rhs` for `lhs: n x inner`, `rhs: inner x rhs_cols`.
pub(crate) fn product_into<T: Semiring>(
    lhs: &[T::Value],
    rhs: &[T::Value],
    inner: usize,
    rhs_cols: usize,
    out: &mut [T::Value],
) {
    debug_assert_eq!(rhs.len(), inner * rhs_cols);
    for (lhs_row, out_row) in lhs.chunks_exact(inner).zip(out.chunks_exact_mut(rhs_cols)) {
        product_row::<T>(lhs_row, rhs, out_row);
    }
}

/// Writes `one()` on the diagonal of an `n x n` buffer already holding `zero()`.
pub(crate) fn set_diagonal_one<T: Semiring>(n: usize, out: &mut [T::Value]) {
    debug_assert_eq!(out.len(), n * n);
    for i in 0..n {
        out[i * n + i] = T::one();
    }
}

/// `out[j][i] = src[i][j]` for `src: rows x cols`.
pub(crate) fn transpose_into<V: Clone>(src: &[V], rows: usize, cols: usize, out: &mut [V]) {
    debug_assert_eq!(src.len(), rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            out[j * rows + i] = src[i * cols + j].clone();
        }
    }
}

/// Repeated squaring: `base^exp`, with `base^0 = identity`.
pub(crate) fn power<X, F>(base: &X, exp: u64, identity: X, mul: F) -> X
where
    X: Clone,
    F: Fn(&X, &X) -> X,
{
    let mut result = identity;
    if exp == 0 {
        return result;
    }
    let mut base = base.clone();
    let mut exp = exp;
    let mut steps = 0u32;
    loop {
        if exp & 1 == 1 {
            result = mul(&result, &base);
        }
        exp >>= 1;
        if exp == 0 {
            break;
        }
        base = mul(&base, &base);
        steps += 1;
    }
    tracing::trace!(squarings = steps, "power by repeated squaring");
    result
}
