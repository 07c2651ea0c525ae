// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image raster, calculate a same-shaped map in which every
//! cell holds the local gradient magnitude of the pixel under it:
//! for each color channel, the horizontal and vertical derivatives
//! under a 3x3 Scharr stencil, absolute values summed, then summed
//! across channels.  High energy marks content a seam should avoid.

use crate::cq;
use crate::raster::{ColorRaster, Raster};

// Image -> Energy Map

/// Compute the energy of every pixel in an image.  Pure: the input
/// raster is only read, and the same input always produces the same
/// map, bit for bit.  Sampling off the edge of the image replicates
/// the border pixel, so border cells are as well-defined as interior
/// ones.
pub fn compute_energy(image: &ColorRaster) -> Raster<f64> {
    let (width, height) = (image.width, image.height);
    let (mw, mh) = (width - 1, height - 1);

    let mut emap = Raster::new(width, height);
    for y in 0..height {
        let yu = cq!(y == 0, 0, y - 1);
        let yd = cq!(y >= mh, mh, y + 1);
        for x in 0..width {
            let xl = cq!(x == 0, 0, x - 1);
            let xr = cq!(x >= mw, mw, x + 1);

            let mut cell = 0.0;
            for channel in 0..3 {
                let tl = image[(xl, yu)][channel];
                let tc = image[(x, yu)][channel];
                let tr = image[(xr, yu)][channel];
                let ml = image[(xl, y)][channel];
                let mr = image[(xr, y)][channel];
                let bl = image[(xl, yd)][channel];
                let bc = image[(x, yd)][channel];
                let br = image[(xr, yd)][channel];

                // Scharr pair: +-3 on the corners, +-10 on the axis.
                let dx = 3.0 * (tr - tl) + 10.0 * (mr - ml) + 3.0 * (br - bl);
                let dy = 3.0 * (bl - tl) + 10.0 * (bc - tc) + 3.0 * (br - tr);
                cell += dx.abs() + dy.abs();
            }
            emap[(x, y)] = cell;
        }
    }
    emap
}
