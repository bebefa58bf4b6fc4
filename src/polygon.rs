//! Polygon utilities for object erasure: bounding box, the closing trick
//! that lets a sliding window of three points cover every edge, and the
//! same-side containment test. Grounded on
//! `original_source/project1/cmd/erase_object_cmd.go`.

use crate::error::CarveError;

/// An integer point in raster coordinates.
pub type Point = (i64, i64);

/// Close a polygon by duplicating its first two points onto the tail,
/// so every edge (including the one that wraps back to the start) is
/// covered by some consecutive triple.
pub fn close_polygon(points: &[Point]) -> Result<Vec<Point>, CarveError> {
    if points.len() < 3 {
        return Err(CarveError::InputParse {
            message: format!("a polygon needs at least 3 points, got {}", points.len()),
        });
    }
    let mut closed = points.to_vec();
    closed.push(points[0]);
    closed.push(points[1]);
    Ok(closed)
}

/// The bounding box of a point set: `(min_x, min_y, max_x, max_y)`.
pub fn bounding_box(points: &[Point]) -> (i64, i64, i64, i64) {
    let mut min_x = points[0].0;
    let mut max_x = points[0].0;
    let mut min_y = points[0].1;
    let mut max_y = points[0].1;
    for &(x, y) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    (min_x, min_y, max_x, max_y)
}

/// Same-side point-in-polygon test. For each consecutive triple `(a, b,
/// c)` of the closed polygon, two cross products are compared; the point
/// is rejected as soon as they disagree in sign. Correct for convex
/// polygons; not defended against non-convex input, matching the
/// reference.
pub fn contains(point: Point, closed: &[Point]) -> bool {
    let (x, y) = point;
    for i in 2..closed.len() {
        let (ax, ay) = closed[i - 2];
        let (bx, by) = closed[i - 1];
        let (cx, cy) = closed[i];
        let dir1 = (x - ax) * (y - by) - (y - ay) * (x - bx);
        let dir2 = (x - bx) * (y - cy) - (y - by) * (x - cx);
        if dir1 * dir2 < 0 {
            return false;
        }
    }
    true
}

/// Rotate a closed polygon's points 90° clockwise, matching
/// `crate::flipper::rotate_clockwise`'s pixel transform exactly:
/// `(x, y) -> (y, width - 1 - x)`.
pub fn rotate_clockwise(points: &[Point], width: i64) -> Vec<Point> {
    points.iter().map(|&(x, y)| (y, width - 1 - x)).collect()
}
