//! Greedy vertical seam search: pick the cheapest cell in the top row,
//! then descend one row at a time always stepping to whichever of
//! `{x-1, x, x+1}` is cheapest. Grounded on the reference's
//! `findOneVerticalGreedy`.

use crate::seamfinder::SeamFinder;
use crate::twodmap::TwoDimensionalMap;

/// The greedy, locally-optimal seam finder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Greedy;

impl SeamFinder for Greedy {
    fn find_one(&mut self, energy: &TwoDimensionalMap<f64>) -> Vec<u32> {
        find_one(energy)
    }
}

/// Same tie-break order as the dynamic-programming finder: straight
/// down first, then left, then right, each only replacing the running
/// choice on a strictly lower energy.
pub fn find_one(energy: &TwoDimensionalMap<f64>) -> Vec<u32> {
    let (width, height) = (energy.width, energy.height);
    let mut col = 0u32;
    for x in 1..width {
        if energy[(x, 0)] < energy[(col, 0)] {
            col = x;
        }
    }

    let max_x = width - 1;
    let mut seam = Vec::with_capacity(height as usize);
    seam.push(col);
    for y in 1..height {
        let mut next = col;
        if col > 0 && energy[(col - 1, y)] < energy[(next, y)] {
            next = col - 1;
        }
        if col < max_x && energy[(col + 1, y)] < energy[(next, y)] {
            next = col + 1;
        }
        seam.push(next);
        col = next;
    }
    seam
}
