//! 2D Convex Hull via Divide and Conquer
//!
//! This library computes the convex hull of a set of points in the plane
//! with the classical divide-and-conquer algorithm: sort once by
//! x-coordinate, recurse on index halves down to a brute-force base case,
//! and merge sub-hulls with a two-finger tangent search followed by a
//! cut-and-paste walk around both rings.
//!
//! Input is assumed to be in general position: no two points share an
//! x-coordinate and no three points are collinear. Violating either
//! assumption leaves the result unspecified; the implementation performs
//! no defensive validation beyond rejecting empty input.
//!
//! # Example
//! ```
//! use math_hull2d::{ConvexHull2D, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 4.0),
//!     Point::new(0.0, 4.0),
//!     Point::new(2.0, 2.0),
//! ];
//!
//! let hull = ConvexHull2D::build(&points, 5).unwrap();
//! assert_eq!(hull.num_points(), 4); // the interior point is dropped
//! ```

mod divide;
mod geometry;
mod types;

pub use geometry::Orientation;
pub use types::{ConvexHull2D, Point};

/// Error types for convex hull operations
#[derive(Debug, thiserror::Error)]
pub enum HullError {
    #[error("At least one point is required")]
    InsufficientPoints,

    #[error("Base case size must be at least 1")]
    InvalidBaseCaseSize,
}

pub type Result<T> = std::result::Result<T, HullError>;

/// Numerical tolerance for floating-point comparisons
/// Used for point-in-hull containment checks
pub(crate) const EPSILON: f64 = 1e-10;
