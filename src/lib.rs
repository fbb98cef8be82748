//! monokit: matrices and segment trees over algebraic structures
//!
//! This crate provides generic data structures parameterised by a monoid, group, semiring or ring,
//! exposing each operation only when the structure supports it:
//! - `Matrix<T, N, M>` with const-generic dimensions and `DynMatrix<T>` with runtime dimensions,
//!   supporting `+`, `-`, unary `-`, `*` and fast exponentiation.
//! - `SegTree<M>`, an iterative segment tree with point assignment, point accumulation and
//!   order-preserving range folds.

mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod segtree;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use segtree::*;
