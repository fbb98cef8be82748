//! Tunable options for matrix operations.

pub mod options;
pub use options::ParallelConfig;
