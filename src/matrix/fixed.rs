//! Matrices whose dimensions are const generics.
//!
//! `Matrix<T, N, M>` stores `N x M` values of `T::Value` inline, row-major.
//! Which operations exist depends on the structure `T`:
//!
//! | operation            | bound on `T` | shape                         |
//! |----------------------|--------------|-------------------------------|
//! | `new`, `+`           | `Monoid`     | any                           |
//! | `-` (binary, unary)  | `Group`      | any                           |
//! | `*`                  | `Semiring`   | `N x M * M x K -> N x K`      |
//! | `identity`, `pow`    | `Semiring`   | square (`Matrix<T, N, N>`)    |
//!
//! Shape errors are type errors. A zero dimension fails when the constructor
//! is monomorphised.
//!
//! ```
//! use monokit::{Arithmetic, Matrix};
//!
//! let fib = Matrix::<Arithmetic<i64>, 2, 2>::from_rows([[1, 1], [1, 0]]);
//! assert_eq!(fib.pow(10)[(0, 1)], 55);
//! ```
//!
//! A non-square matrix has neither an identity nor powers:
//!
//! ```compile_fail
//! use monokit::{Arithmetic, Matrix};
//!
//! let _ = Matrix::<Arithmetic<i64>, 2, 3>::identity();
//! ```
//!
//! ```compile_fail
//! use monokit::{Arithmetic, Matrix};
//!
//! let m = Matrix::<Arithmetic<i64>, 2, 3>::new();
//! let _ = m.pow(2);
//! ```
//!
//! and an empty dimension is rejected at build time:
//!
//! ```compile_fail
//! use monokit::{Arithmetic, Matrix};
//!
//! let _ = Matrix::<Arithmetic<i64>, 0, 2>::new();
//! ```

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::config::ParallelConfig;
use crate::core::traits::{Group, Monoid, Semiring};
use crate::error::MoError;
use crate::matrix::kernels;
use crate::parallel;

/// Dense `N x M` matrix over the structure `T`.
pub struct Matrix<T: Monoid, const N: usize, const M: usize> {
    values: [[T::Value; M]; N],
}

/// Square `N x N` matrix.
pub type SquareMatrix<T, const N: usize> = Matrix<T, N, N>;

impl<T: Monoid, const N: usize, const M: usize> Matrix<T, N, M> {
    const NONEMPTY: () = assert!(N > 0 && M > 0, "matrix dimensions must be at least 1");

    /// Matrix with every cell `T::zero()`.
    pub fn new() -> Self {
        let () = Self::NONEMPTY;
        Self {
            values: std::array::from_fn(|_| std::array::from_fn(|_| T::zero())),
        }
    }

    /// Matrix holding `rows`, row-major.
    pub fn from_rows(rows: [[T::Value; M]; N]) -> Self {
        let () = Self::NONEMPTY;
        Self { values: rows }
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        N
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        M
    }

    pub const fn is_square(&self) -> bool {
        N == M
    }

    /// Entry at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T::Value> {
        self.values.get(row).and_then(|r| r.get(col))
    }

    /// All entries, row-major.
    pub fn as_slice(&self) -> &[T::Value] {
        self.values.as_flattened()
    }

    pub fn row(&self, row: usize) -> &[T::Value; M] {
        &self.values[row]
    }

    pub fn into_rows(self) -> [[T::Value; M]; N] {
        self.values
    }

    pub fn transpose(&self) -> Matrix<T, M, N> {
        let mut out = Matrix::<T, M, N>::new();
        kernels::transpose_into(self.as_slice(), N, M, out.values.as_flattened_mut());
        out
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T::Value] {
        self.values.as_flattened_mut()
    }
}

impl<T: Semiring, const N: usize, const M: usize> Matrix<T, N, M> {
    /// `self * rhs`, splitting output rows across rayon workers when
    /// `config` allows it. Equal to `self * rhs` cell for cell.
    pub fn par_mul<const K: usize>(
        &self,
        rhs: &Matrix<T, M, K>,
        config: &ParallelConfig,
    ) -> Matrix<T, N, K>
    where
        T::Value: Send + Sync,
    {
        let mut out = Matrix::<T, N, K>::new();
        parallel::product_into::<T>(
            self.as_slice(),
            rhs.as_slice(),
            M,
            K,
            out.as_mut_slice(),
            config,
        );
        out
    }
}

impl<T: Semiring, const N: usize> Matrix<T, N, N> {
    /// `one()` on the diagonal, `zero()` elsewhere.
    pub fn identity() -> Self {
        let mut out = Self::new();
        kernels::set_diagonal_one::<T>(N, out.as_mut_slice());
        out
    }

    /// `self` raised to `exp` by repeated squaring; `pow(0)` is the identity.
    ///
    /// # Panics
    ///
    /// Panics if `exp` is negative.
    pub fn pow(&self, exp: i64) -> Self {
        self.try_pow(exp).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like `pow`, but reports a negative exponent as an error.
    pub fn try_pow(&self, exp: i64) -> Result<Self, MoError> {
        let exp = u64::try_from(exp).map_err(|_| {
            tracing::debug!(exp, "rejected negative exponent");
            MoError::NegativeExponent(exp)
        })?;
        Ok(kernels::power(self, exp, Self::identity(), |a: &Self, b: &Self| a * b))
    }
}

impl<T: Monoid, const N: usize, const M: usize> Default for Matrix<T, N, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Monoid, const N: usize, const M: usize> Clone for Matrix<T, N, M> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T: Monoid, const N: usize, const M: usize> PartialEq for Matrix<T, N, M>
where
    T::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Monoid, const N: usize, const M: usize> Eq for Matrix<T, N, M> where T::Value: Eq {}

impl<T: Monoid, const N: usize, const M: usize> fmt::Debug for Matrix<T, N, M>
where
    T::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &N)
            .field("cols", &M)
            .field("values", &self.values)
            .finish()
    }
}

impl<T: Monoid, const N: usize, const M: usize> Index<(usize, usize)> for Matrix<T, N, M> {
    type Output = T::Value;

    fn index(&self, (row, col): (usize, usize)) -> &T::Value {
        &self.values[row][col]
    }
}

impl<T: Monoid, const N: usize, const M: usize> IndexMut<(usize, usize)> for Matrix<T, N, M> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T::Value {
        &mut self.values[row][col]
    }
}

impl<T: Monoid, const N: usize, const M: usize> Add for &Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    fn add(self, rhs: Self) -> Matrix<T, N, M> {
        let mut out = Matrix::new();
        kernels::plus_into::<T>(self.as_slice(), rhs.as_slice(), out.as_mut_slice());
        out
    }
}

impl<T: Monoid, const N: usize, const M: usize> Add for Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    fn add(self, rhs: Self) -> Matrix<T, N, M> {
        &self + &rhs
    }
}

impl<T: Group, const N: usize, const M: usize> Sub for &Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    fn sub(self, rhs: Self) -> Matrix<T, N, M> {
        let mut out = Matrix::new();
        kernels::minus_into::<T>(self.as_slice(), rhs.as_slice(), out.as_mut_slice());
        out
    }
}

impl<T: Group, const N: usize, const M: usize> Sub for Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    fn sub(self, rhs: Self) -> Matrix<T, N, M> {
        &self - &rhs
    }
}

impl<T: Group, const N: usize, const M: usize> Neg for &Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    fn neg(self) -> Matrix<T, N, M> {
        let mut out = Matrix::new();
        kernels::neg_into::<T>(self.as_slice(), out.as_mut_slice());
        out
    }
}

impl<T: Group, const N: usize, const M: usize> Neg for Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    fn neg(self) -> Matrix<T, N, M> {
        -&self
    }
}

impl<'a, T: Semiring, const N: usize, const M: usize, const K: usize> Mul<&'a Matrix<T, M, K>>
    for &Matrix<T, N, M>
{
    type Output = Matrix<T, N, K>;

    fn mul(self, rhs: &'a Matrix<T, M, K>) -> Matrix<T, N, K> {
        let mut out = Matrix::new();
        kernels::product_into::<T>(self.as_slice(), rhs.as_slice(), M, K, out.as_mut_slice());
        out
    }
}

impl<T: Semiring, const N: usize, const M: usize, const K: usize> Mul<Matrix<T, M, K>>
    for Matrix<T, N, M>
{
    type Output = Matrix<T, N, K>;

    fn mul(self, rhs: Matrix<T, M, K>) -> Matrix<T, N, K> {
        &self * &rhs
    }
}
