// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Crossing the codec boundary
//!
//! The carver works on real-valued rasters and never sees a file.
//! Decoded pixels are widened to `f64` on the way in, and quantized
//! back to 8-bit samples, rounded and clamped, only on the way out.
//! There is also a grayscale dump of an energy map for eyeballing
//! what the carver considers important.

use crate::cq;
use crate::raster::{ColorRaster, Raster};
use image::{GenericImageView, GrayImage, ImageBuffer, Pixel, Primitive, RgbImage};
use itertools::iproduct;
use num_traits::{clamp, NumCast};

fn widen<S: Primitive + 'static>(channel: S) -> f64 {
    NumCast::from(channel).unwrap()
}

fn quantize(value: f64) -> u8 {
    clamp(value.round(), 0.0, 255.0) as u8
}

/// Widen any decoded image into a three-channel `f64` raster.
pub fn raster_from_image<I, P, S>(image: &I) -> ColorRaster
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut raster = Raster::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let rgb = image.get_pixel(x, y).to_rgb();
        let c = rgb.channels();
        raster[(x, y)] = [widen(c[0]), widen(c[1]), widen(c[2])];
    }
    raster
}

/// Quantize a carved raster back into an 8-bit RGB buffer for
/// encoding.
pub fn raster_to_image(raster: &ColorRaster) -> RgbImage {
    let mut out: RgbImage = ImageBuffer::new(raster.width, raster.height);
    for (y, x) in iproduct!(0..raster.height, 0..raster.width) {
        let cell = raster[(x, y)];
        let samples = [quantize(cell[0]), quantize(cell[1]), quantize(cell[2])];
        out.put_pixel(x, y, *Pixel::from_slice(&samples));
    }
    out
}

/// Render an energy map as an 8-bit grayscale image, scaled so the
/// hottest cell is white.  A map with no energy at all dumps as
/// black.
pub fn energy_to_image(energy: &Raster<f64>) -> GrayImage {
    let peak = energy.cells().fold(0.0f64, |a, &c| a.max(c));
    let mut out: GrayImage = ImageBuffer::new(energy.width, energy.height);
    for (y, x) in iproduct!(0..energy.height, 0..energy.width) {
        let scaled = cq!(peak > 0.0, energy[(x, y)] * 255.0 / peak, 0.0);
        let sample = [quantize(scaled)];
        out.put_pixel(x, y, *Pixel::from_slice(&sample));
    }
    out
}
