use std::ops::{Index, IndexMut};

/// Defines the basic two-dimensional map: An addressable two-dimensional
/// field containing an object that represents one of several possible
/// objects during processing: an `f64` for a luma or energy field, or an
/// energy value + parent address, for the seam digraph.
#[derive(Debug, Clone)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    /// The number of addressable columns.
    pub width: u32,
    /// The number of addressable rows.
    pub height: u32,
    energy: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new (abstract) two-dimensional map. The content type must
    /// implement the Default trait.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            energy: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a map directly from a `(y, x)`-major vector of cells.
    pub fn from_cells(width: u32, height: u32, cells: Vec<P>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        TwoDimensionalMap {
            width,
            height,
            energy: cells,
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the value at a single pixel's address.
    pub fn get_pt(&self, x: u32, y: u32) -> P {
        self.energy[self.get_index(x, y)]
    }

    /// Get a mutable reference to the value at a single pixel's address.
    pub fn get_pt_mut(&mut self, x: u32, y: u32) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.energy[index]
    }

    /// Set a value at a single pixel's address.
    pub fn put_pt(&mut self, x: u32, y: u32, e: P) {
        *self.get_pt_mut(x, y) = e
    }

    /// Borrow the backing store, in storage (`y`-major) order.
    pub fn as_slice(&self) -> &[P] {
        &self.energy
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.energy[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.energy[index]
    }
}

/// The cell type used by the dynamic-programming seam finder: the
/// accumulated energy to reach this cell, plus the parent column in the
/// row above it, used to retrace the seam once the bottom row is reached.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct EnergyAndBackPointer {
    /// Accumulated energy to reach this cell from the first row.
    pub energy: f64,
    /// The column, in the row above, this cell's minimum came from.
    pub parent: u32,
}

impl EnergyAndBackPointer {
    /// Build a cell from its accumulated energy and parent column.
    pub fn new(energy: f64, parent: u32) -> Self {
        EnergyAndBackPointer { energy, parent }
    }
}
