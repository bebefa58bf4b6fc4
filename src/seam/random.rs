//! Random vertical seam walk: start at a uniformly random column, then
//! at each row step by `{-1, 0, 1}` uniformly at random, re-rolling any
//! step that would leave the field. Grounded on the reference's
//! `findOneVerticalRandom`. The PRNG is always an explicit parameter --
//! never a process-global -- so a run is reproducible end to end.

use crate::seamfinder::SeamFinder;
use crate::twodmap::TwoDimensionalMap;
use rand::Rng;

/// The random-walk seam finder. Owns its PRNG so repeated calls (e.g.
/// across every seam of a shrink operation) continue the same stream.
#[derive(Debug)]
pub struct Random<R: Rng> {
    rng: R,
}

impl<R: Rng> Random<R> {
    /// Wrap a PRNG as a seam finder.
    pub fn new(rng: R) -> Self {
        Random { rng }
    }
}

impl<R: Rng> SeamFinder for Random<R> {
    fn find_one(&mut self, energy: &TwoDimensionalMap<f64>) -> Vec<u32> {
        find_one(energy, &mut self.rng)
    }
}

/// Walk one random, 8-connected vertical seam across `energy`.
pub fn find_one<R: Rng + ?Sized>(energy: &TwoDimensionalMap<f64>, rng: &mut R) -> Vec<u32> {
    let (width, height) = (energy.width, energy.height);
    let mut col = rng.gen_range(0..width);
    let mut seam = Vec::with_capacity(height as usize);
    seam.push(col);
    for _ in 1..height {
        loop {
            let delta = rng.gen_range(0..3) as i64 - 1;
            let candidate = col as i64 + delta;
            if candidate >= 0 && candidate < width as i64 {
                col = candidate as u32;
                break;
            }
        }
        seam.push(col);
    }
    seam
}
