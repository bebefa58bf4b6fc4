//! Seam-finding policies: exact (dynamic programming), greedy, and
//! random. Each is grounded on a distinct corner of the corpus -- the
//! dynamic-programming shape comes from the teacher, greedy and random
//! from the reference implementation's `findOneVertical*` family.

pub mod dynamics;
pub mod greedy;
pub mod random;

use crate::twodmap::TwoDimensionalMap;
use rand::Rng;

/// Which policy `find_one` uses to pick a seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeamMode {
    /// Exact minimum-energy seam via dynamic programming.
    Dynamics,
    /// Single top-row minimum, then locally greedy descent.
    Greedy,
    /// A random walk, re-rolled whenever it would leave the field.
    Random,
}

/// Dispatch to the policy named by `mode`. `rng` is only consumed by
/// `SeamMode::Random`.
pub fn find_one<R: Rng>(energy: &TwoDimensionalMap<f64>, mode: SeamMode, rng: &mut R) -> Vec<u32> {
    match mode {
        SeamMode::Dynamics => dynamics::find_one(energy),
        SeamMode::Greedy => greedy::find_one(energy),
        SeamMode::Random => random::find_one(energy, rng),
    }
}
