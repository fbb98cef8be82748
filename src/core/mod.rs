//! Core algebraic traits and ready-made structures.

pub mod structures;
pub mod traits;

pub use structures::{
    Additive, Arithmetic, Concat, Max, MaxPlus, MaxValue, Min, MinValue, Multiplicative, Sentinel,
};
pub use traits::{Group, Monoid, Ring, Semiring};
