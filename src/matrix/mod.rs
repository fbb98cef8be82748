//! Matrix module: fixed-size and dynamic matrices over algebraic structures.

pub mod dynamic;
pub mod fixed;
pub(crate) mod kernels;

pub use dynamic::DynMatrix;
pub use fixed::{Matrix, SquareMatrix};
