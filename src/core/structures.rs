//! Ready-made algebraic structures over `num-traits` numbers and strings.
//!
//! These are the descriptors most callers reach for:
//! - `Additive<T>`: `(T, +, 0)`, a group when `T` has negation.
//! - `Multiplicative<T>`: `(T, *, 1)`.
//! - `Max<T, S>` / `Min<T, S>`: max/min with an identity sentinel chosen by the caller.
//! - `Concat`: string concatenation, the canonical non-commutative monoid.
//! - `Arithmetic<T>`: `(T, +, *, 0, 1)`, a ring when `T` has negation.
//! - `MaxPlus<T>`: the tropical semiring `(max, +)`.
//!
//! # References
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use std::marker::PhantomData;
use std::ops::Neg;

use num_traits::{Bounded, One, Zero};

use crate::core::traits::{Group, Monoid, Semiring};

/// Supplies a constant element of `T`, used as the identity of `Max`/`Min`.
pub trait Sentinel<T> {
    fn value() -> T;
}

/// Sentinel at `T::min_value()`, the default identity for `Max`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinValue;

/// Sentinel at `T::max_value()`, the default identity for `Min`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxValue;

impl<T: Bounded> Sentinel<T> for MinValue {
    #[inline]
    fn value() -> T {
        T::min_value()
    }
}

impl<T: Bounded> Sentinel<T> for MaxValue {
    #[inline]
    fn value() -> T {
        T::max_value()
    }
}

/// `(T, +, 0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Additive<T>(PhantomData<T>);

impl<T: Zero + Clone> Monoid for Additive<T> {
    type Value = T;

    #[inline]
    fn zero() -> T {
        T::zero()
    }

    #[inline]
    fn plus(lhs: &T, rhs: &T) -> T {
        lhs.clone() + rhs.clone()
    }
}

impl<T: Zero + Clone + Neg<Output = T>> Group for Additive<T> {
    #[inline]
    fn neg(value: &T) -> T {
        -value.clone()
    }
}

/// `(T, *, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplicative<T>(PhantomData<T>);

impl<T: One + Clone> Monoid for Multiplicative<T> {
    type Value = T;

    #[inline]
    fn zero() -> T {
        T::one()
    }

    #[inline]
    fn plus(lhs: &T, rhs: &T) -> T {
        lhs.clone() * rhs.clone()
    }
}

/// Maximum, with identity `S::value()`.
///
/// `S` defaults to `MinValue`; pass your own `Sentinel` when the element
/// domain has a tighter lower bound, e.g. `Max<i64, NegBillion>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max<T, S = MinValue>(PhantomData<(T, S)>);

impl<T: PartialOrd + Clone, S: Sentinel<T>> Monoid for Max<T, S> {
    type Value = T;

    #[inline]
    fn zero() -> T {
        S::value()
    }

    #[inline]
    fn plus(lhs: &T, rhs: &T) -> T {
        if rhs > lhs { rhs.clone() } else { lhs.clone() }
    }
}

/// Minimum, with identity `S::value()` (defaults to `MaxValue`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Min<T, S = MaxValue>(PhantomData<(T, S)>);

impl<T: PartialOrd + Clone, S: Sentinel<T>> Monoid for Min<T, S> {
    type Value = T;

    #[inline]
    fn zero() -> T {
        S::value()
    }

    #[inline]
    fn plus(lhs: &T, rhs: &T) -> T {
        if rhs < lhs { rhs.clone() } else { lhs.clone() }
    }
}

/// String concatenation with identity `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Concat;

impl Monoid for Concat {
    type Value = String;

    #[inline]
    fn zero() -> String {
        String::new()
    }

    fn plus(lhs: &String, rhs: &String) -> String {
        let mut out = String::with_capacity(lhs.len() + rhs.len());
        out.push_str(lhs);
        out.push_str(rhs);
        out
    }
}

/// Ordinary arithmetic `(T, +, *, 0, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic<T>(PhantomData<T>);

impl<T: Zero + One + Clone> Monoid for Arithmetic<T> {
    type Value = T;

    #[inline]
    fn zero() -> T {
        T::zero()
    }

    #[inline]
    fn plus(lhs: &T, rhs: &T) -> T {
        lhs.clone() + rhs.clone()
    }
}

impl<T: Zero + One + Clone + Neg<Output = T>> Group for Arithmetic<T> {
    #[inline]
    fn neg(value: &T) -> T {
        -value.clone()
    }
}

impl<T: Zero + One + Clone> Semiring for Arithmetic<T> {
    #[inline]
    fn one() -> T {
        T::one()
    }

    #[inline]
    fn mul(lhs: &T, rhs: &T) -> T {
        lhs.clone() * rhs.clone()
    }
}

/// Tropical semiring: `plus = max`, `mul = +`, `zero = min_value()` (standing
/// in for -inf), `one = 0`.
///
/// `min_value()` is absorbing under `mul`, so sums never step past it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxPlus<T>(PhantomData<T>);

impl<T: Bounded + Zero + PartialOrd + Clone> Monoid for MaxPlus<T> {
    type Value = T;

    #[inline]
    fn zero() -> T {
        T::min_value()
    }

    #[inline]
    fn plus(lhs: &T, rhs: &T) -> T {
        if rhs > lhs { rhs.clone() } else { lhs.clone() }
    }
}

impl<T: Bounded + Zero + PartialOrd + Clone> Semiring for MaxPlus<T> {
    #[inline]
    fn one() -> T {
        T::zero()
    }

    fn mul(lhs: &T, rhs: &T) -> T {
        let floor = T::min_value();
        if *lhs == floor || *rhs == floor {
            floor
        } else {
            lhs.clone() + rhs.clone()
        }
    }
}
