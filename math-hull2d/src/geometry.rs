//! Geometric primitives shared by the base case and the merge step

use crate::types::Point;

/// Rotational direction of a polygon traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    AntiClockwise,
}

/// Arithmetic mean of a set of points
pub(crate) fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let mut center = Point::new(0.0, 0.0);
    for p in points {
        center.x += p.x;
        center.y += p.y;
    }
    Point::new(center.x / n, center.y / n)
}

/// Angle from `center` to `p`, normalized to [0, 2*pi)
fn theta(center: &Point, p: &Point) -> f64 {
    let angle = (p.y - center.y).atan2(p.x - center.x);
    if angle < 0.0 {
        angle + 2.0 * std::f64::consts::PI
    } else {
        angle
    }
}

/// Sort points into a consistent cyclic traversal order around their
/// centroid.
///
/// Clockwise traversal corresponds to descending angle. The sort is stable,
/// but hull points in general position have pairwise-distinct angles from
/// the centroid, so the order is unambiguous.
pub(crate) fn polar_sort(points: &mut [Point], orientation: Orientation) {
    let center = centroid(points);
    match orientation {
        Orientation::Clockwise => {
            points.sort_by(|a, b| theta(&center, b).total_cmp(&theta(&center, a)));
        }
        Orientation::AntiClockwise => {
            points.sort_by(|a, b| theta(&center, a).total_cmp(&theta(&center, b)));
        }
    }
}

/// y-coordinate where the line through `p1` and `p2` crosses the vertical
/// line `x = vertical`.
///
/// `p1` and `p2` come from opposite sides of the divider, so their
/// x-coordinates differ and the slope is finite.
pub(crate) fn vertical_intercept(p1: &Point, p2: &Point, vertical: f64) -> f64 {
    let m = (p2.y - p1.y) / (p2.x - p1.x);
    let b = p1.y - m * p1.x;
    m * vertical + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];

        let c = centroid(&points);
        assert!((c.x - 2.0).abs() < 1e-12);
        assert!((c.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_polar_sort_clockwise_square() {
        let mut points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];

        polar_sort(&mut points, Orientation::Clockwise);

        // Descending angle from the centroid (2, 2): bottom-right first,
        // then around the square clockwise.
        assert_eq!(
            points,
            vec![
                Point::new(4.0, 0.0),
                Point::new(0.0, 0.0),
                Point::new(0.0, 4.0),
                Point::new(4.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_polar_sort_anticlockwise_is_reverse() {
        let mut cw = vec![
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-1.0, 0.2),
            Point::new(0.1, -1.0),
        ];
        let mut acw = cw.clone();

        polar_sort(&mut cw, Orientation::Clockwise);
        polar_sort(&mut acw, Orientation::AntiClockwise);

        acw.reverse();
        // Same cyclic order up to the starting point
        let offset = cw.iter().position(|p| *p == acw[0]).unwrap();
        for (i, p) in acw.iter().enumerate() {
            assert_eq!(*p, cw[(offset + i) % cw.len()]);
        }
    }

    #[test]
    fn test_vertical_intercept() {
        // Line through (0, 0) and (4, 4) is y = x
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(4.0, 4.0);
        assert!((vertical_intercept(&p1, &p2, 2.0) - 2.0).abs() < 1e-12);

        // Line through (0, 1) and (2, 5) is y = 2x + 1
        let p1 = Point::new(0.0, 1.0);
        let p2 = Point::new(2.0, 5.0);
        assert!((vertical_intercept(&p1, &p2, 3.0) - 7.0).abs() < 1e-12);
    }
}
