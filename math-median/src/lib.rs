//! Median Finding and Order Statistics
//!
//! Quickselect over `f64` slices with pluggable pivot selection. The
//! deterministic [`MedianOfMedians`] strategy gives the classical
//! worst-case O(n) selection; [`RandomPivot`] gives the simpler expected
//! O(n) variant.
//!
//! # Example
//! ```
//! use math_median::median;
//!
//! let nums = vec![7.0, 1.0, 5.0, 3.0, 9.0];
//! assert_eq!(median(&nums).unwrap(), 5.0);
//! ```

mod pivot;
mod select;

pub use pivot::{MedianOfMedians, PivotStrategy, RandomPivot};
pub use select::{median, median_with, naive_median, select_kth};

/// Error types for selection operations
#[derive(Debug, thiserror::Error)]
pub enum MedianError {
    #[error("Input must contain at least one element")]
    EmptyInput,

    #[error("Rank {rank} is out of range for {len} elements")]
    RankOutOfRange { rank: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, MedianError>;
