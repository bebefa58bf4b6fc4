use crate::twodmap::TwoDimensionalMap;

/// This trait defines how we will return seams from an energy field.
/// It's a primitive interface, just enough to make room for multiple
/// seam-finding policies sharing one driver.
///
/// Horizontal seams are not a second method here: the driver gets them
/// by rotating the raster and its energy field 90° and calling
/// `find_one` again, the same trick the teacher's `Flipper` exists for.
pub trait SeamFinder {
    /// Given an energy field, return one 8-connected, top-to-bottom,
    /// low-energy vertical seam: one column index per row.
    fn find_one(&mut self, energy: &TwoDimensionalMap<f64>) -> Vec<u32>;
}
