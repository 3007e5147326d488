//! Weighted Interval Scheduling
//!
//! Given weighted time intervals, finds a pairwise-compatible subset of
//! maximal combined weight. Intervals are sorted by finish time, each
//! interval's previous compatible interval is located by binary search,
//! and a dynamic program over prefix maxima is traced back to recover the
//! chosen subset. O(n log n) overall.
//!
//! # Example
//! ```
//! use math_interval_scheduling::{Interval, solve};
//!
//! let intervals = vec![
//!     Interval::new(0.0, 3.0, 2.0),
//!     Interval::new(1.0, 4.0, 4.0),
//!     Interval::new(4.0, 6.0, 3.0),
//! ];
//!
//! let schedule = solve(&intervals).unwrap();
//! assert_eq!(schedule.max_weight, 7.0);
//! ```

mod schedule;
mod types;

pub use schedule::solve;
pub use types::{Interval, Schedule};

/// Error types for interval scheduling
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Interval {index} finishes at {finish} before it starts at {start}")]
    InvalidInterval {
        index: usize,
        start: f64,
        finish: f64,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
