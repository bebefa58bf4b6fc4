//! Minimum-error boundary cut through an overlap strip, hiding the seam
//! between an already-placed neighbour and a newly chosen patch.
//! Grounded on
//! `original_source/project2/cmd/enlarge.go::findVerticallySplit`/
//! `findHorizontallySplit`, reusing the same DP-with-backpointer shape
//! as `seam::dynamics`.

use crate::twodmap::TwoDimensionalMap;

/// Find the minimum-error cut between two same-shaped overlap strips.
/// Returns one split value per column (length `width`), each in
/// `[0, height)`: a composited pixel at `(x, y)` is "new" once `y`
/// exceeds the split for its column `x`.
///
/// The recurrence runs along the `width` axis: the cost to reach
/// `(x, y)` is the squared luma difference at `(x, y)` plus the minimum
/// cost among `(x-1, y-1)`, `(x-1, y)`, `(x-1, y+1)` -- ties broken in
/// that evaluation order (straight across first, then up, then down).
pub fn minimum_error_cut(a: &TwoDimensionalMap<f64>, b: &TwoDimensionalMap<f64>) -> Vec<i64> {
    let (width, height) = (a.width, a.height);
    debug_assert_eq!((width, height), (b.width, b.height));

    let mut cost: TwoDimensionalMap<f64> = TwoDimensionalMap::new(width, height);
    let mut from: TwoDimensionalMap<u32> = TwoDimensionalMap::new(width, height);

    for y in 0..height {
        let d = a[(0, y)] - b[(0, y)];
        cost[(0, y)] = d * d;
    }

    let max_y = height - 1;
    for x in 1..width {
        for y in 0..height {
            let mut best = cost[(x - 1, y)];
            let mut best_from = y;
            if y > 0 && cost[(x - 1, y - 1)] < best {
                best = cost[(x - 1, y - 1)];
                best_from = y - 1;
            }
            if y < max_y && cost[(x - 1, y + 1)] < best {
                best = cost[(x - 1, y + 1)];
                best_from = y + 1;
            }
            let d = a[(x, y)] - b[(x, y)];
            cost[(x, y)] = d * d + best;
            from[(x, y)] = best_from;
        }
    }

    let mut end_y = 0u32;
    for y in 1..height {
        if cost[(width - 1, y)] < cost[(width - 1, end_y)] {
            end_y = y;
        }
    }

    let mut split = vec![0i64; width as usize];
    let mut y = end_y;
    for x in (0..width).rev() {
        split[x as usize] = y as i64;
        y = from[(x, y)];
    }
    split
}

/// Rotate a luma field 90° clockwise, the same transform as
/// `flipper::rotate_clockwise`.
fn rotate_field(field: &TwoDimensionalMap<f64>) -> TwoDimensionalMap<f64> {
    let (width, height) = (field.width, field.height);
    let mut out = TwoDimensionalMap::new(height, width);
    for y in 0..height {
        for x in 0..width {
            out[(y, width - 1 - x)] = field[(x, y)];
        }
    }
    out
}

/// The same cut, but for a horizontal boundary: the strips are rotated
/// 90° first (so `minimum_error_cut`'s width-axis recurrence runs along
/// what was the strip's height), and the returned positions are mapped
/// back into the original strip's coordinate space via
/// `overlap_width - split - 1`.
pub fn horizontal_cut(a: &TwoDimensionalMap<f64>, b: &TwoDimensionalMap<f64>) -> Vec<i64> {
    let overlap_width = a.width as i64;
    let rotated_split = minimum_error_cut(&rotate_field(a), &rotate_field(b));
    rotated_split
        .into_iter()
        .map(|v| overlap_width - v - 1)
        .collect()
}

/// The "no neighbour here" split: every position is `-1`, meaning
/// "nothing to preserve, copy everything."
pub fn no_cut(len: u32) -> Vec<i64> {
    vec![-1; len as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_prefers_the_quietest_path() {
        // A 3-wide, 3-tall strip where column 1 is identical between a
        // and b (zero cost) and the other columns differ a lot. The cut
        // should run straight through row 1 the whole way.
        let mut a = TwoDimensionalMap::new(3, 3);
        let mut b = TwoDimensionalMap::new(3, 3);
        for x in 0..3u32 {
            for y in 0..3u32 {
                a[(x, y)] = 10.0;
                b[(x, y)] = if y == 1 { 10.0 } else { 0.0 };
            }
        }
        let split = minimum_error_cut(&a, &b);
        assert_eq!(split, vec![1, 1, 1]);
    }

    #[test]
    fn no_cut_disables_masking() {
        assert_eq!(no_cut(4), vec![-1, -1, -1, -1]);
    }

    #[test]
    fn horizontal_cut_matches_rotated_vertical_cut_shape() {
        let mut a = TwoDimensionalMap::new(2, 4); // overlap=2 wide, block=4 tall
        let mut b = TwoDimensionalMap::new(2, 4);
        for x in 0..2u32 {
            for y in 0..4u32 {
                a[(x, y)] = (x + y) as f64;
                b[(x, y)] = (x * 2 + y) as f64;
            }
        }
        let split = horizontal_cut(&a, &b);
        assert_eq!(split.len(), 4); // one entry per row of the block
        for &v in &split {
            assert!((0..2).contains(&v));
        }
    }
}
