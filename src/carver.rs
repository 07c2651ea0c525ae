// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - the removal and the driving loop
//!
//! `remove_vertical_seam` excises one previously-found seam from an
//! image.  `SeamCarver` owns the image and runs the full pipeline,
//! energy map to seam to removal, once per column to be dropped.

use crate::cq;
use crate::energy::compute_energy;
use crate::error::CarveError;
use crate::raster::{ColorRaster, Raster};
use crate::seam::find_vertical_seam;

// Rejects anything that is not a genuine seam of this image: a
// column-per-row list that stays in range and never jumps more than
// one column between rows.  The carver can only hand us a valid one,
// so a rejection here means the carver is broken, not the input.
fn check_seam(image: &ColorRaster, seam: &[u32]) -> Result<(), CarveError> {
    let (width, height) = (image.width, image.height);
    if seam.len() != height as usize {
        return Err(CarveError::InvalidSeam {
            detail: format!("seam covers {} rows, image has {}", seam.len(), height),
        });
    }
    for (y, &col) in seam.iter().enumerate() {
        if col >= width {
            return Err(CarveError::InvalidSeam {
                detail: format!("row {}: column {} is outside a {}-column image", y, col, width),
            });
        }
        if y > 0 {
            let above = seam[y - 1];
            let wander = cq!(col > above, col - above, above - col);
            if wander > 1 {
                return Err(CarveError::InvalidSeam {
                    detail: format!(
                        "row {}: column {} is not adjacent to column {} in the row above",
                        y, col, above
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Copy an image into a fresh buffer one column narrower, dropping
/// the seam's pixel in every row and shifting the pixels to its right
/// one place left.  The input image is never touched; the narrower
/// replacement is a new allocation.
pub fn remove_vertical_seam(
    image: &ColorRaster,
    seam: &[u32],
) -> Result<ColorRaster, CarveError> {
    let (width, height) = (image.width, image.height);
    if width < 2 {
        return Err(CarveError::Unsupported {
            current: width,
            target: width.saturating_sub(1),
        });
    }
    check_seam(image, seam)?;

    let mut narrowed = Raster::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        for x in 0..width - 1 {
            narrowed[(x, y)] = image[(cq!(x < cut, x, x + 1), y)];
        }
    }
    Ok(narrowed)
}

/// Drives the carving loop.  The image is owned here and replaced
/// wholesale on every iteration, so no buffer is ever aliased between
/// the pre- and post-removal grids.
pub struct SeamCarver {
    image: ColorRaster,
}

impl SeamCarver {
    /// Take ownership of an image to be carved.
    pub fn new(image: ColorRaster) -> Self {
        SeamCarver { image }
    }

    /// Repeatedly carve the cheapest vertical seam out of the image
    /// until it is exactly `target_width` columns wide.  Each
    /// iteration recomputes the energy of the already-narrowed image,
    /// so iterations are strictly sequential.
    ///
    /// Only strict width reduction is supported.  A target equal to
    /// the current width is refused rather than treated as a no-op,
    /// and a target of zero columns is refused outright.
    pub fn carve_to_width(mut self, target_width: u32) -> Result<ColorRaster, CarveError> {
        let width = self.image.width;
        if target_width < 1 || target_width >= width {
            return Err(CarveError::Unsupported {
                current: width,
                target: target_width,
            });
        }
        for _ in 0..width - target_width {
            let energy = compute_energy(&self.image);
            let seam = find_vertical_seam(&energy);
            self.image = remove_vertical_seam(&self.image, &seam)?;
        }
        Ok(self.image)
    }
}
