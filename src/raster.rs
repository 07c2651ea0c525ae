// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A dense two-dimensional grid of samples
//!
//! Every structure the carver works with is one of these: the image
//! itself (three `f64` channels per cell), the energy map (one `f64`
//! per cell), and the predecessor table built during seam finding
//! (one column index per cell).

use std::ops::{Index, IndexMut};

/// The working representation of a decoded image: three real-valued
/// color channels per pixel.  Channel values are only quantized back
/// to the output format's range at the encoding boundary.
pub type ColorRaster = Raster<[f64; 3]>;

/// An addressable two-dimensional field of copyable samples, stored
/// row-major in a single flat vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Raster<P> {
    /// Allocate a raster with every cell set to the sample type's
    /// default value.
    pub fn new(width: u32, height: u32) -> Self {
        Raster {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a raster from an existing row-major sample vector.  The
    /// vector length must match the requested dimensions.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(cells.len(), width as usize * height as usize);
        Raster {
            width,
            height,
            cells,
        }
    }

    // The number one rule of this game is to keep the index math in a
    // single location and never, ever duplicate it.  Same row-major
    // layout as image.rs uses for its buffers.
    fn cell_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Iterate over all samples in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &P> {
        self.cells.iter()
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Raster<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.cell_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Raster<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.cell_index(x, y);
        &mut self.cells[index]
    }
}
