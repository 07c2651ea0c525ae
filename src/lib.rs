// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image width reduction
//!
//! Narrow an image one column at a time by removing its cheapest
//! vertical seam: compute an energy map, find the minimum-cost
//! connected top-to-bottom path through it, excise that path, and
//! repeat until the image is as narrow as requested.  The important
//! content, the high-energy regions, survives; the boring pixels go.

pub mod ternary;

pub mod raster;
pub use raster::{ColorRaster, Raster};

pub mod error;
pub use error::CarveError;

pub mod energy;
pub use energy::compute_energy;

pub mod seam;
pub use seam::find_vertical_seam;

pub mod carver;
pub use carver::{remove_vertical_seam, SeamCarver};

pub mod convert;
pub use convert::{energy_to_image, raster_from_image, raster_to_image};
