// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Luma projection and Sobel energy field.
//!
//! Two stages, kept separate so the driver can recompute one without the
//! other: `luma_field` turns a raster into a scalar grid, and
//! `sobel_energy` turns a luma grid into a gradient-magnitude field. The
//! split mirrors the reference's `GetGrayImage`/`SobelFilter` pair.

use crate::twodmap::TwoDimensionalMap;
use image::{Rgba, RgbaImage};

const LUMA_R: f64 = 0.2989;
const LUMA_G: f64 = 0.5870;
const LUMA_B: f64 = 0.1140;

// Channels arrive as 8-bit samples; extend them to the 16-bit range the
// same way image.Color.RGBA() does (v * 257), so this matches the
// reference bit-for-bit rather than merely approximating it.
const EXTEND_16: f64 = 257.0;

const SOBEL_GX: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_GY: [[f64; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Project an RGBA raster down to a scalar luma field using the BT.601
/// coefficients. Alpha is ignored.
pub fn luma_field(image: &RgbaImage) -> TwoDimensionalMap<f64> {
    let (width, height) = image.dimensions();
    let mut field = TwoDimensionalMap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let Rgba([r, g, b, _a]) = *image.get_pixel(x, y);
            field[(x, y)] = LUMA_R * (r as f64 * EXTEND_16)
                + LUMA_G * (g as f64 * EXTEND_16)
                + LUMA_B * (b as f64 * EXTEND_16);
        }
    }
    field
}

/// Sobel gradient magnitude over a luma field. The one-pixel border is
/// left at zero: the kernels never sample outside the field, so there's
/// no reflection or clamping to get wrong at the edges.
pub fn sobel_energy(luma: &TwoDimensionalMap<f64>) -> TwoDimensionalMap<f64> {
    let (width, height) = (luma.width, luma.height);
    let mut energy = TwoDimensionalMap::new(width, height);
    if width < 3 || height < 3 {
        return energy;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let gx = kernel_sum(&SOBEL_GX, luma, x, y);
            let gy = kernel_sum(&SOBEL_GY, luma, x, y);
            energy[(x, y)] = (gx * gx + gy * gy).sqrt();
        }
    }
    energy
}

/// Compute a full luma-then-Sobel energy field for a raster directly.
pub fn energy_field(image: &RgbaImage) -> TwoDimensionalMap<f64> {
    sobel_energy(&luma_field(image))
}

// `g[i+1][j+1]` indexes the kernel the same way the reference's
// CartesianProductSum does: the first axis walks the x-offset, the
// second the y-offset.
fn kernel_sum(g: &[[f64; 3]; 3], luma: &TwoDimensionalMap<f64>, x: u32, y: u32) -> f64 {
    let mut sum = 0.0;
    for i in -1i32..=1 {
        for j in -1i32..=1 {
            let px = (x as i32 + i) as u32;
            let py = (y as i32 + j) as u32;
            sum += g[(i + 1) as usize][(j + 1) as usize] * luma[(px, py)];
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
        RgbaImage::from_fn(width, height, |_, _| Rgba(pixel))
    }

    #[test]
    fn luma_of_white_is_max() {
        let img = solid(2, 2, [255, 255, 255, 255]);
        let field = luma_field(&img);
        assert!((field[(0, 0)] - 65535.0).abs() < 1e-6);
    }

    #[test]
    fn luma_of_black_is_zero() {
        let img = solid(2, 2, [0, 0, 0, 255]);
        let field = luma_field(&img);
        assert_eq!(field[(0, 0)], 0.0);
    }

    #[test]
    fn sobel_is_zero_on_a_flat_field() {
        let img = solid(6, 6, [128, 64, 32, 255]);
        let energy = energy_field(&img);
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(energy[(x, y)], 0.0, "nonzero energy at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn sobel_border_is_always_zero() {
        // A checkerboard has plenty of gradient in the interior, but the
        // one-pixel border must stay zero regardless.
        let img = RgbaImage::from_fn(5, 5, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        let energy = energy_field(&img);
        for x in 0..5 {
            assert_eq!(energy[(x, 0)], 0.0);
            assert_eq!(energy[(x, 4)], 0.0);
        }
        for y in 0..5 {
            assert_eq!(energy[(0, y)], 0.0);
            assert_eq!(energy[(4, y)], 0.0);
        }
        // But the interior of a checkerboard is not flat.
        assert!(energy[(2, 2)] > 0.0);
    }

    #[test]
    fn sobel_marks_the_seam_between_two_solid_halves() {
        // Two solid halves side by side: the vertical edge between them
        // should carry energy, while a column deep inside either half
        // stays flat.
        let img = RgbaImage::from_fn(6, 6, |x, _| {
            if x < 3 {
                Rgba([10, 10, 10, 255])
            } else {
                Rgba([250, 250, 250, 255])
            }
        });
        let energy = energy_field(&img);
        assert_eq!(energy[(1, 2)], 0.0);
        assert!(energy[(2, 2)] > 0.0 || energy[(3, 2)] > 0.0);
    }
}
