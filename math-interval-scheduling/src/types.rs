//! Core data types for interval scheduling

use serde::{Deserialize, Serialize};
use std::fmt;

/// A weighted time interval `[start, finish]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub finish: f64,
    pub weight: f64,
}

impl Interval {
    /// Create a new interval
    pub fn new(start: f64, finish: f64, weight: f64) -> Self {
        Self {
            start,
            finish,
            weight,
        }
    }

    /// Two intervals are compatible when they do not overlap; touching
    /// endpoints are allowed.
    pub fn compatible_with(&self, other: &Interval) -> bool {
        self.finish <= other.start || other.finish <= self.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}] (w = {:.3})",
            self.start, self.finish, self.weight
        )
    }
}

/// The result of a scheduling run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Maximal combined weight over all compatible subsets
    pub max_weight: f64,
    /// The chosen intervals, in ascending finish-time order
    pub intervals: Vec<Interval>,
}
