// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! Rotates a raster 90° clockwise into a freshly-owned buffer, swapping
//! width and height and mapping every `x` to `y` and vice versa. Every
//! horizontal seam-carving operation (shrink/grow height, rotate-then-mask
//! for object erasure) is implemented by rotating with this module,
//! running the vertical version, and rotating back, rather than by
//! writing a second, horizontal copy of each algorithm.

use image::RgbaImage;

/// Rotate a raster 90° clockwise into a freshly-owned buffer:
/// `(x, y) -> (y, width - 1 - x)`. Used by the driver wherever a
/// horizontal operation is implemented by rotating, running the
/// vertical version, and rotating back -- and by object erasure to
/// rotate a polygon's bounding raster the same way
/// `polygon::rotate_clockwise` rotates its points.
pub fn rotate_clockwise(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mut out = RgbaImage::new(height, width);
    for y in 0..height {
        for x in 0..width {
            out.put_pixel(y, width - 1 - x, *image.get_pixel(x, y));
        }
    }
    out
}

/// Apply `rotate_clockwise` `n` times. The driver uses this to undo a
/// single rotation (`n == 3`) without special-casing a counter-clockwise
/// transform.
pub fn rotate_clockwise_n(image: &RgbaImage, n: u32) -> RgbaImage {
    let mut out = image.clone();
    for _ in 0..n {
        out = rotate_clockwise(&out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn four_rotations_return_to_the_original() {
        let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([(x + y * 10) as u8, 0, 0, 255]));
        assert_eq!(rotate_clockwise_n(&img, 4), img);
    }

    #[test]
    fn one_rotation_swaps_dimensions() {
        let img = RgbaImage::new(3, 5);
        let rotated = rotate_clockwise(&img);
        assert_eq!(rotated.dimensions(), (5, 3));
    }
}
