//! Matrices whose dimensions are chosen at construction.
//!
//! `DynMatrix<T>` follows the same contract as `Matrix<T, N, M>` and runs the
//! same kernels. Capability requirements are still trait bounds; shape
//! requirements are checked at call time instead. Every checked operation has
//! a `try_*` form returning `MoError`, and the operator / non-`try` form
//! panics with the error's message.
//!
//! ```
//! use monokit::{Additive, DynMatrix};
//!
//! let m = DynMatrix::<Additive<i32>>::from_rows(vec![vec![4, -1]]);
//! assert_eq!(m.try_sub(&m).unwrap(), DynMatrix::new(1, 2));
//! ```
//!
//! Capabilities are not deferred to run time: a monoid without inverses has
//! no `try_sub` at all.
//!
//! ```compile_fail
//! use monokit::{DynMatrix, Max};
//!
//! let m = DynMatrix::<Max<i32>>::new(2, 2);
//! let _ = m.try_sub(&m);
//! ```

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::config::ParallelConfig;
use crate::core::traits::{Group, Monoid, Semiring};
use crate::error::MoError;
use crate::matrix::fixed::Matrix;
use crate::matrix::kernels;
use crate::parallel;

/// Dense `rows x cols` matrix over the structure `T`, row-major.
pub struct DynMatrix<T: Monoid> {
    values: Vec<T::Value>,
    rows: usize,
    cols: usize,
}

fn check_dims(rows: usize, cols: usize) -> Result<(), MoError> {
    if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
        tracing::debug!(rows, cols, "rejected matrix dimensions");
        return Err(MoError::InvalidDimension { rows, cols });
    }
    Ok(())
}

fn ragged(row: usize, expected: usize, found: usize) -> MoError {
    tracing::debug!(row, expected, found, "rejected ragged rows");
    MoError::RaggedRows {
        row,
        expected,
        found,
    }
}

fn mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> MoError {
    tracing::debug!(op, ?lhs, ?rhs, "rejected mismatched operands");
    MoError::DimensionMismatch { op, lhs, rhs }
}

impl<T: Monoid> DynMatrix<T> {
    /// `rows x cols` matrix with every cell `T::zero()`.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, MoError> {
        check_dims(rows, cols)?;
        Ok(Self::zeroed(rows, cols))
    }

    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::try_new(rows, cols).unwrap_or_else(|err| panic!("{err}"))
    }

    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            values: (0..rows * cols).map(|_| T::zero()).collect(),
            rows,
            cols,
        }
    }

    /// Builds a matrix from a list of equally long rows.
    pub fn try_from_rows(rows: Vec<Vec<T::Value>>) -> Result<Self, MoError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        check_dims(num_rows, num_cols)?;
        let mut values = Vec::with_capacity(num_rows * num_cols);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != num_cols {
                return Err(ragged(row, num_cols, entries.len()));
            }
            values.extend(entries);
        }
        Ok(Self {
            values,
            rows: num_rows,
            cols: num_cols,
        })
    }

    /// # Panics
    ///
    /// Panics on empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<T::Value>>) -> Self {
        Self::try_from_rows(rows).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T::Value> {
        if row < self.rows && col < self.cols {
            Some(&self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// All entries, row-major.
    pub fn as_slice(&self) -> &[T::Value] {
        &self.values
    }

    /// Returns a slice of the specified row.
    pub fn row(&self, row: usize) -> &[T::Value] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::zeroed(self.cols, self.rows);
        kernels::transpose_into(&self.values, self.rows, self.cols, &mut out.values);
        out
    }

    /// Cellwise `plus`.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MoError> {
        if self.shape() != rhs.shape() {
            return Err(mismatch("add", self.shape(), rhs.shape()));
        }
        let mut out = Self::zeroed(self.rows, self.cols);
        kernels::plus_into::<T>(&self.values, &rhs.values, &mut out.values);
        Ok(out)
    }
}

impl<T: Group> DynMatrix<T> {
    /// Cellwise `plus(a, neg(b))`.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MoError> {
        if self.shape() != rhs.shape() {
            return Err(mismatch("sub", self.shape(), rhs.shape()));
        }
        let mut out = Self::zeroed(self.rows, self.cols);
        kernels::minus_into::<T>(&self.values, &rhs.values, &mut out.values);
        Ok(out)
    }
}

impl<T: Semiring> DynMatrix<T> {
    /// `n x n` matrix with `one()` on the diagonal.
    pub fn try_identity(n: usize) -> Result<Self, MoError> {
        check_dims(n, n)?;
        let mut out = Self::zeroed(n, n);
        kernels::set_diagonal_one::<T>(n, &mut out.values);
        Ok(out)
    }

    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn identity(n: usize) -> Self {
        Self::try_identity(n).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Matrix product; requires `self.cols() == rhs.rows()`.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, MoError> {
        if self.cols != rhs.rows {
            return Err(mismatch("mul", self.shape(), rhs.shape()));
        }
        let mut out = Self::zeroed(self.rows, rhs.cols);
        kernels::product_into::<T>(&self.values, &rhs.values, self.cols, rhs.cols, &mut out.values);
        Ok(out)
    }

    /// `try_mul`, splitting output rows across rayon workers when `config`
    /// allows it.
    pub fn try_par_mul(&self, rhs: &Self, config: &ParallelConfig) -> Result<Self, MoError>
    where
        T::Value: Send + Sync,
    {
        if self.cols != rhs.rows {
            return Err(mismatch("mul", self.shape(), rhs.shape()));
        }
        let mut out = Self::zeroed(self.rows, rhs.cols);
        parallel::product_into::<T>(
            &self.values,
            &rhs.values,
            self.cols,
            rhs.cols,
            &mut out.values,
            config,
        );
        Ok(out)
    }

    /// `self` raised to `exp`; requires a square matrix and `exp >= 0`.
    pub fn try_pow(&self, exp: i64) -> Result<Self, MoError> {
        if !self.is_square() {
            tracing::debug!(
                rows = self.rows,
                cols = self.cols,
                "rejected pow on non-square matrix"
            );
            return Err(MoError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let exp = u64::try_from(exp).map_err(|_| {
            tracing::debug!(exp, "rejected negative exponent");
            MoError::NegativeExponent(exp)
        })?;
        let identity = Self::identity(self.rows);
        Ok(kernels::power(self, exp, identity, |a: &Self, b: &Self| a * b))
    }

    /// # Panics
    ///
    /// Panics if the matrix is not square or `exp` is negative.
    pub fn pow(&self, exp: i64) -> Self {
        self.try_pow(exp).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Monoid> Clone for DynMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Monoid> PartialEq for DynMatrix<T>
where
    T::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.values == other.values
    }
}

impl<T: Monoid> Eq for DynMatrix<T> where T::Value: Eq {}

impl<T: Monoid> fmt::Debug for DynMatrix<T>
where
    T::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynMatrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("values", &self.values)
            .finish()
    }
}

impl<T: Monoid> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T::Value;

    fn index(&self, (row, col): (usize, usize)) -> &T::Value {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.values[row * self.cols + col]
    }
}

impl<T: Monoid> IndexMut<(usize, usize)> for DynMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T::Value {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.values[row * self.cols + col]
    }
}

impl<T: Monoid> Add for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn add(self, rhs: Self) -> DynMatrix<T> {
        self.try_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Monoid> Add for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn add(self, rhs: Self) -> DynMatrix<T> {
        &self + &rhs
    }
}

impl<T: Group> Sub for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn sub(self, rhs: Self) -> DynMatrix<T> {
        self.try_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Group> Sub for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn sub(self, rhs: Self) -> DynMatrix<T> {
        &self - &rhs
    }
}

impl<T: Group> Neg for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn neg(self) -> DynMatrix<T> {
        let mut out = DynMatrix::zeroed(self.rows, self.cols);
        kernels::neg_into::<T>(&self.values, &mut out.values);
        out
    }
}

impl<T: Group> Neg for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn neg(self) -> DynMatrix<T> {
        -&self
    }
}

impl<T: Semiring> Mul for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: Self) -> DynMatrix<T> {
        self.try_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: Semiring> Mul for DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: Self) -> DynMatrix<T> {
        &self * &rhs
    }
}

impl<T: Monoid, const N: usize, const M: usize> From<Matrix<T, N, M>> for DynMatrix<T> {
    fn from(matrix: Matrix<T, N, M>) -> Self {
        Self {
            values: matrix.into_rows().into_iter().flatten().collect(),
            rows: N,
            cols: M,
        }
    }
}

impl<T: Monoid, const N: usize, const M: usize> TryFrom<DynMatrix<T>> for Matrix<T, N, M> {
    type Error = MoError;

    fn try_from(matrix: DynMatrix<T>) -> Result<Self, MoError> {
        if matrix.shape() != (N, M) {
            return Err(mismatch("convert", matrix.shape(), (N, M)));
        }
        let mut out = Matrix::<T, N, M>::new();
        for (cell, value) in out.as_mut_slice().iter_mut().zip(matrix.values) {
            *cell = value;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::structures::{Arithmetic, Max};

    type Z = Arithmetic<i64>;

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            DynMatrix::<Z>::try_new(0, 3).unwrap_err(),
            MoError::InvalidDimension { rows: 0, cols: 3 }
        );
        assert!(DynMatrix::<Z>::try_identity(0).is_err());
        assert!(DynMatrix::<Z>::try_from_rows(Vec::new()).is_err());
    }

    #[test]
    fn overflowing_shape_is_rejected() {
        assert_eq!(
            DynMatrix::<Z>::try_new(usize::MAX, 2).unwrap_err(),
            MoError::InvalidDimension {
                rows: usize::MAX,
                cols: 2
            }
        );
        assert!(DynMatrix::<Z>::try_identity(1 << (usize::BITS / 2)).is_err());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = DynMatrix::<Z>::try_from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            MoError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn shape_checks() {
        let a = DynMatrix::<Z>::new(2, 3);
        let b = DynMatrix::<Z>::new(3, 2);
        assert!(matches!(
            a.try_add(&b),
            Err(MoError::DimensionMismatch { op: "add", .. })
        ));
        assert!(matches!(
            a.try_sub(&b),
            Err(MoError::DimensionMismatch { op: "sub", .. })
        ));
        assert!(a.try_mul(&a).is_err());
        assert_eq!(a.try_mul(&b).map(|m| m.shape()), Ok((2, 2)));
        assert_eq!(
            a.try_pow(2).unwrap_err(),
            MoError::NotSquare { rows: 2, cols: 3 }
        );
        assert_eq!(
            DynMatrix::<Z>::identity(2).try_pow(-4).unwrap_err(),
            MoError::NegativeExponent(-4)
        );
    }

    #[test]
    #[should_panic(expected = "dimension mismatch in add")]
    fn add_operator_panics_on_mismatch() {
        let _ = &DynMatrix::<Z>::new(1, 2) + &DynMatrix::<Z>::new(2, 1);
    }

    #[test]
    #[should_panic(expected = "invalid matrix dimensions")]
    fn new_panics_on_zero() {
        let _ = DynMatrix::<Z>::new(3, 0);
    }

    #[test]
    fn bare_monoid_construction() {
        let m = DynMatrix::<Max<u8>>::new(2, 2);
        assert!(m.as_slice().iter().all(|&v| v == 0));
        let sum = &m + &DynMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(sum.row(1), &[3, 4]);
    }

    #[test]
    fn conversion_round_trip() {
        let fixed = Matrix::<Z, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]);
        let dynamic = DynMatrix::from(fixed.clone());
        assert_eq!(dynamic.shape(), (2, 3));
        assert_eq!(dynamic[(1, 0)], 4);
        let back: Matrix<Z, 2, 3> = dynamic.clone().try_into().unwrap();
        assert_eq!(back, fixed);
        let wrong: Result<Matrix<Z, 3, 2>, _> = dynamic.try_into();
        assert!(wrong.is_err());
    }

    #[test]
    fn transpose_shape() {
        let a = DynMatrix::<Z>::from_rows(vec![vec![1, 2, 3]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 1));
        assert_eq!(t.as_slice(), &[1, 2, 3]);
        assert_eq!(a.get(0, 3), None);
    }
}
