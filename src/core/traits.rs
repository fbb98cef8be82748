//! Algebraic capability traits for monokit.
//!
//! A structure is a zero-sized type naming an element type and the
//! operations on it. Data structures take the structure as a type parameter
//! and bound it by the weakest capability they need:
//!
//! ```text
//! Monoid
//!  ├── Group ──────┐
//!  └── Semiring ───┴── Ring
//! ```
//!
//! None of the laws below are checked; the matrices and the segment tree
//! rely on them silently.
//!
//! # Capability gating
//!
//! An operation the structure cannot support does not exist on the matrix
//! type. A bare monoid such as `Max` adds:
//!
//! ```
//! use monokit::{Matrix, Max};
//!
//! let m = Matrix::<Max<i32>, 2, 2>::from_rows([[1, 5], [7, 2]]);
//! assert_eq!((&m + &m)[(0, 1)], 5);
//! ```
//!
//! but has no inverse, so neither subtraction nor negation compile:
//!
//! ```compile_fail
//! use monokit::{Matrix, Max};
//!
//! let m = Matrix::<Max<i32>, 2, 2>::new();
//! let _ = &m - &m;
//! ```
//!
//! ```compile_fail
//! use monokit::{Matrix, Max};
//!
//! let m = Matrix::<Max<i32>, 2, 2>::new();
//! let _ = -&m;
//! ```
//!
//! `Additive` is a group but not a semiring, so it has no product:
//!
//! ```compile_fail
//! use monokit::{Additive, Matrix};
//!
//! let a = Matrix::<Additive<i64>, 2, 2>::new();
//! let b = Matrix::<Additive<i64>, 2, 2>::new();
//! let _ = &a * &b;
//! ```

/// An associative `plus` with two-sided identity `zero`.
///
/// # Laws
///
/// - `plus(plus(a, b), c) == plus(a, plus(b, c))`
/// - `plus(zero(), a) == a == plus(a, zero())`
///
/// Commutativity is not assumed.
pub trait Monoid {
    /// Element type carried by the structure.
    type Value: Clone;

    /// Identity for `plus`.
    fn zero() -> Self::Value;

    /// The associative binary operation.
    fn plus(lhs: &Self::Value, rhs: &Self::Value) -> Self::Value;

    /// Left-to-right fold of `values`, starting from `zero()`.
    fn fold<'a, I>(values: I) -> Self::Value
    where
        I: IntoIterator<Item = &'a Self::Value>,
        Self::Value: 'a,
    {
        values
            .into_iter()
            .fold(Self::zero(), |acc, v| Self::plus(&acc, v))
    }
}

/// A monoid in which every element has an inverse.
///
/// # Laws
///
/// - `plus(a, neg(a)) == zero() == plus(neg(a), a)`
pub trait Group: Monoid {
    /// Inverse under `plus`.
    fn neg(value: &Self::Value) -> Self::Value;

    /// `plus(lhs, neg(rhs))`. Never assumes a primitive minus on the element.
    fn minus(lhs: &Self::Value, rhs: &Self::Value) -> Self::Value {
        Self::plus(lhs, &Self::neg(rhs))
    }
}

/// A monoid under `plus` together with a monoid under `mul`.
///
/// # Laws
///
/// - `mul` is associative with two-sided identity `one()`
/// - `mul` distributes over `plus` on both sides
/// - `zero()` absorbs under `mul`
pub trait Semiring: Monoid {
    /// Identity for `mul`.
    fn one() -> Self::Value;

    /// The multiplicative operation.
    fn mul(lhs: &Self::Value, rhs: &Self::Value) -> Self::Value;
}

/// A group under `plus` that is also a semiring.
pub trait Ring: Group + Semiring {}

impl<T: Group + Semiring> Ring for T {}

#[cfg(test)]
mod tests {
    use super::*;

    // string concatenation: a deliberately non-commutative monoid
    struct Cat;

    impl Monoid for Cat {
        type Value = String;
        fn zero() -> String {
            String::new()
        }
        fn plus(lhs: &String, rhs: &String) -> String {
            format!("{lhs}{rhs}")
        }
    }

    struct Z5;

    impl Monoid for Z5 {
        type Value = u8;
        fn zero() -> u8 {
            0
        }
        fn plus(lhs: &u8, rhs: &u8) -> u8 {
            (lhs + rhs) % 5
        }
    }

    impl Group for Z5 {
        fn neg(value: &u8) -> u8 {
            (5 - value) % 5
        }
    }

    #[test]
    fn fold_keeps_left_to_right_order() {
        let parts = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        assert_eq!(Cat::fold(&parts), "xyz");
        assert_eq!(Cat::fold(&Vec::<String>::new()), "");
    }

    #[test]
    fn minus_is_plus_of_inverse() {
        for a in 0..5u8 {
            for b in 0..5u8 {
                assert_eq!(Z5::plus(&Z5::minus(&a, &b), &b), a);
            }
            assert_eq!(Z5::minus(&a, &a), Z5::zero());
        }
    }
}
