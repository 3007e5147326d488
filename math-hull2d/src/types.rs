//! Core data types for 2D convex hull computation

use crate::geometry::Orientation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Subtract another point
    pub fn sub(&self, other: &Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Dot product with another point
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z-component of the 2D cross product with another point
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let d = self.sub(other);
        d.dot(&d).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// A circular sequence of hull points backed by a contiguous vector.
///
/// Rotation is a logical start-offset change, so rotating a ring to a new
/// anchor point is O(1) in element moves and does not alter membership or
/// cyclic order.
#[derive(Debug, Clone)]
pub(crate) struct Ring {
    points: Vec<Point>,
    start: usize,
}

impl Ring {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        Self { points, start: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    /// Point at logical index `i`, wrapping modulo the ring size
    pub(crate) fn get(&self, i: usize) -> Point {
        self.points[(self.start + i) % self.points.len()]
    }

    /// Logical index of `p`, if present
    pub(crate) fn position(&self, p: Point) -> Option<usize> {
        let n = self.points.len();
        (0..n).find(|&i| self.get(i) == p)
    }

    /// Rotate so that `anchor` becomes the point at logical index 0.
    ///
    /// No-op if `anchor` is not on the ring; callers guarantee it is
    /// (the extreme point of a partition is always a hull vertex).
    pub(crate) fn rotate_to(&mut self, anchor: Point) {
        if let Some(pos) = self.points.iter().position(|p| *p == anchor) {
            self.start = pos;
        }
    }

    /// Materialize the points in logical traversal order
    pub(crate) fn to_vec(&self) -> Vec<Point> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}

/// The result of a convex hull computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvexHull2D {
    /// Hull points in clockwise traversal order
    points: Vec<Point>,
}

impl ConvexHull2D {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build the convex hull of `points` by divide and conquer.
    ///
    /// `base_case_size` is the sub-problem size at or below which the
    /// O(n^3) brute-force enumeration is used instead of further recursion.
    /// Its value affects performance only; the resulting point set is the
    /// same for any valid choice.
    pub fn build(points: &[Point], base_case_size: usize) -> crate::Result<Self> {
        crate::divide::divide_and_conquer(points, base_case_size)
    }

    /// Hull points in clockwise order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Hull points traversed in the requested rotational direction.
    ///
    /// Reversing a clockwise cycle yields a valid anti-clockwise
    /// traversal of the same polygon.
    pub fn points_in(&self, orientation: Orientation) -> Vec<Point> {
        match orientation {
            Orientation::Clockwise => self.points.clone(),
            Orientation::AntiClockwise => self.points.iter().rev().copied().collect(),
        }
    }

    /// Number of hull points
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Area of the hull polygon (shoelace formula)
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }

        let mut twice_area = 0.0;
        for i in 0..n {
            let p = &self.points[i];
            let q = &self.points[(i + 1) % n];
            twice_area += p.cross(q);
        }

        twice_area.abs() / 2.0
    }

    /// Perimeter of the hull polygon
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }

        (0..n)
            .map(|i| self.points[i].distance(&self.points[(i + 1) % n]))
            .sum()
    }

    /// Check whether a point lies on or inside the hull boundary
    ///
    /// For a clockwise polygon every interior point lies to the right of
    /// each directed edge, i.e. the edge cross product is non-positive.
    pub fn contains_point(&self, p: &Point) -> bool {
        let n = self.points.len();
        if n == 1 {
            return self.points[0].distance(p) < crate::EPSILON;
        }

        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let edge = b.sub(&a);
            let to_p = p.sub(&a);
            if edge.cross(&to_p) > crate::EPSILON {
                return false;
            }
        }

        true
    }
}
