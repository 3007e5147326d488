//! Divide-and-conquer convex hull construction
//!
//! The driver sorts the input by x-coordinate once, then recurses on index
//! halves. Sub-problems at or below the base-case size are solved by an
//! O(n^3) tangent-line enumeration; larger sub-problems are solved by
//! merging the two sub-hulls along their upper and lower tangents, which
//! are located with a two-finger hill-climb over y-intercepts at the
//! vertical divider between the partitions.

use crate::geometry::{Orientation, polar_sort, vertical_intercept};
use crate::types::{ConvexHull2D, Point, Ring};
use crate::{HullError, Result};

/// Entry point: validate, sort once by x, recurse.
pub(crate) fn divide_and_conquer(points: &[Point], base_case_size: usize) -> Result<ConvexHull2D> {
    if points.is_empty() {
        return Err(HullError::InsufficientPoints);
    }
    if base_case_size == 0 {
        return Err(HullError::InvalidBaseCaseSize);
    }

    log::debug!(
        "computing 2D hull of {} points (base case size {})",
        points.len(),
        base_case_size
    );

    // Sort once and for all; every recursive step below partitions by
    // index and relies on this order.
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let hull = recurse(&sorted, base_case_size);
    Ok(ConvexHull2D::new(hull.to_vec()))
}

fn recurse(points: &[Point], base_case_size: usize) -> Ring {
    if points.len() <= base_case_size {
        return brute_force(points);
    }

    // DIVIDE: split by index, both halves stay x-sorted
    let mid = points.len() / 2;
    let (left_points, right_points) = points.split_at(mid);
    let vertical = compute_vertical(left_points, right_points);

    let mut left_hull = recurse(left_points, base_case_size);
    let mut right_hull = recurse(right_points, base_case_size);

    // CONQUER: anchor each sub-hull at its canonical reference point
    // before the tangent search. The extreme point of a partition is
    // always a hull vertex, so both rotations succeed.
    left_hull.rotate_to(left_points[left_points.len() - 1]);
    right_hull.rotate_to(right_points[0]);

    log::debug!(
        "merging sub-hulls of {} and {} points at divider x = {}",
        left_hull.len(),
        right_hull.len(),
        vertical
    );

    let (upper, lower) = two_finger(&left_hull, &right_hull, vertical);
    cut_and_paste(&left_hull, &right_hull, upper, lower)
}

/// Midpoint x-coordinate between the rightmost point of the left partition
/// and the leftmost point of the right partition
fn compute_vertical(left: &[Point], right: &[Point]) -> f64 {
    (left[left.len() - 1].x + right[0].x) / 2.0
}

/// O(n^3) base case: a segment is a hull edge iff every other point lies
/// strictly on one side of its supporting line.
///
/// The side test compares a point's x-coordinate against the line's
/// x-value at that point's y-coordinate (inverse line equation
/// `x = (y - b) / m`), so the input must not contain vertical segments;
/// distinct x-coordinates guarantee that.
fn brute_force(points: &[Point]) -> Ring {
    // One or two points are their own hull; the pair enumeration below
    // needs a third point to take sides.
    if points.len() <= 2 {
        return Ring::new(points.to_vec());
    }

    let mut subhull: Vec<Point> = Vec::new();
    for i in 0..points.len() - 1 {
        let p1 = points[i];
        for &p2 in &points[i + 1..] {
            if is_hull_edge(&p1, &p2, points) {
                if !subhull.contains(&p1) {
                    subhull.push(p1);
                }
                if !subhull.contains(&p2) {
                    subhull.push(p2);
                }
            }
        }
    }

    polar_sort(&mut subhull, Orientation::Clockwise);
    Ring::new(subhull)
}

fn is_hull_edge(p1: &Point, p2: &Point, points: &[Point]) -> bool {
    // Inverse line equation through the segment: x = (y - b) / m
    let m = (p2.y - p1.y) / (p2.x - p1.x);
    let b = -m * p2.x + p2.y;
    let line_x = |y: f64| (y - b) / m;

    let mut seen_left = false;
    let mut seen_right = false;
    for p in points {
        if p == p1 || p == p2 {
            continue;
        }
        if line_x(p.y) > p.x {
            seen_left = true;
        } else {
            seen_right = true;
        }
        if seen_left && seen_right {
            return false;
        }
    }

    true
}

/// Two-finger tangent search.
///
/// Both rings must already be rotated so that logical index 0 is the
/// canonical reference point: the rightmost point of the left hull and the
/// leftmost point of the right hull. Each search is a hill-climb over the
/// y-intercept at the divider; the right-finger move is checked before the
/// left-finger move, and the loop converges when neither improves.
fn two_finger(left: &Ring, right: &Ring, vertical: f64) -> ((Point, Point), (Point, Point)) {
    let ln = left.len();
    let rn = right.len();

    // Upper tangent: maximize the intercept. The right finger advances
    // clockwise (+1), the left finger retreats anti-clockwise (-1).
    let mut i = 0;
    let mut j = 0;
    let upper = loop {
        let y1 = vertical_intercept(&left.get(i), &right.get((j + 1) % rn), vertical);
        let y2 = vertical_intercept(&left.get(i), &right.get(j), vertical);
        let y3 = vertical_intercept(&left.get((i + ln - 1) % ln), &right.get(j), vertical);
        if y1 > y2 {
            j = (j + 1) % rn;
        } else if y3 > y2 {
            i = (i + ln - 1) % ln;
        } else {
            break (left.get(i), right.get(j));
        }
    };

    // Lower tangent: symmetric search minimizing the intercept, fingers
    // moving in the opposite rotational sense.
    let mut i = 0;
    let mut j = 0;
    let lower = loop {
        let y1 = vertical_intercept(&left.get(i), &right.get((j + rn - 1) % rn), vertical);
        let y2 = vertical_intercept(&left.get(i), &right.get(j), vertical);
        let y3 = vertical_intercept(&left.get((i + 1) % ln), &right.get(j), vertical);
        if y1 < y2 {
            j = (j + rn - 1) % rn;
        } else if y3 < y2 {
            i = (i + 1) % ln;
        } else {
            break (left.get(i), right.get(j));
        }
    };

    (upper, lower)
}

/// Merge two sub-hulls along their tangents.
///
/// Starting at the upper tangent's left point, walk the right ring
/// clockwise from the upper tangent's right point through the lower
/// tangent's right point, then the left ring clockwise from the lower
/// tangent's left point back up to (excluding) the upper tangent's left
/// point. Every surviving point is emitted exactly once, clockwise.
fn cut_and_paste(
    left: &Ring,
    right: &Ring,
    upper: (Point, Point),
    lower: (Point, Point),
) -> Ring {
    let mut hull = vec![upper.0];

    // Tangent endpoints are ring members by construction.
    let mut j = right.position(upper.1).unwrap_or(0);
    while right.get(j) != lower.1 {
        hull.push(right.get(j));
        j = (j + 1) % right.len();
    }
    hull.push(right.get(j));

    let mut i = left.position(lower.0).unwrap_or(0);
    while left.get(i) != upper.0 {
        hull.push(left.get(i));
        i = (i + 1) % left.len();
    }

    Ring::new(hull)
}
