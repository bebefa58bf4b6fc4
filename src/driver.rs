// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam-carving driver: shrink, grow, amplify, and erase, built on
//! top of `energy`, `seam`, and `seammutator`.
//!
//! `shrink_to`'s width/height-interleaving loop is a direct
//! generalization of the teacher's `SeamCarver::carve`; growth batching
//! is grounded on `original_source/project1/cmd/resize_cmds.go`;
//! amplification on `amplification_cmd.go`; object erasure on
//! `erase_object_cmd.go`.

use crate::energy::{luma_field, sobel_energy};
use crate::error::CarveError;
use crate::fenwick::Fenwick;
use crate::flipper;
use crate::polygon::{self, Point};
use crate::seam::{self, SeamMode};
use crate::seammutator::{delete_seam, insert_seam};
use crate::twodmap::TwoDimensionalMap;
use image::{imageops::FilterType, RgbaImage};
use rand::Rng;

/// Energy assigned to pixels inside an erase polygon, so any seam
/// passing through the mask always wins. Stays in place (and shifts
/// along with its column) exactly like any other energy cell -- no
/// attempt is made to keep the mask "pinned" as seams are removed.
const ERASE_MASK_ENERGY: f64 = -1.0e7;

fn validate_seam(seam: &[u32], expected_height: u32) -> Result<(), CarveError> {
    if seam.len() as u32 != expected_height {
        return Err(CarveError::InvariantFailure {
            message: format!(
                "seam has {} entries, expected {} (one per row)",
                seam.len(),
                expected_height
            ),
        });
    }
    Ok(())
}

/// Shrink an image's width by `amount` columns. One energy field is
/// computed up front and carried, stale, across every deletion.
pub fn shrink_width<R: Rng>(
    image: &RgbaImage,
    amount: u32,
    mode: SeamMode,
    rng: &mut R,
) -> Result<RgbaImage, CarveError> {
    if amount >= image.width() {
        return Err(CarveError::DomainViolation {
            message: format!(
                "cannot shrink width by {} on a {}-wide image",
                amount,
                image.width()
            ),
        });
    }
    let mut img = image.clone();
    let mut energy = sobel_energy(&luma_field(&img));
    for _ in 0..amount {
        let path = seam::find_one(&energy, mode, rng);
        validate_seam(&path, img.height())?;
        let (next_img, next_energy) = delete_seam(&img, &energy, &path);
        img = next_img;
        energy = next_energy;
    }
    Ok(img)
}

/// Shrink an image's height by `amount` rows, by rotating, shrinking
/// width, and rotating back.
pub fn shrink_height<R: Rng>(
    image: &RgbaImage,
    amount: u32,
    mode: SeamMode,
    rng: &mut R,
) -> Result<RgbaImage, CarveError> {
    if amount >= image.height() {
        return Err(CarveError::DomainViolation {
            message: format!(
                "cannot shrink height by {} on a {}-tall image",
                amount,
                image.height()
            ),
        });
    }
    let rotated = flipper::rotate_clockwise(image);
    let carved = shrink_width(&rotated, amount, mode, rng)?;
    Ok(flipper::rotate_clockwise_n(&carved, 3))
}

/// Shrink to an exact target size, interleaving width and height seam
/// removal one seam at a time until one dimension reaches its target,
/// then finishing the other -- the same interleaving the teacher's
/// `SeamCarver::carve` used for its single (shrink-only) operation.
pub fn shrink_to<R: Rng>(
    image: &RgbaImage,
    new_width: u32,
    new_height: u32,
    mode: SeamMode,
    rng: &mut R,
) -> Result<RgbaImage, CarveError> {
    let (width, height) = image.dimensions();
    if width < new_width || height < new_height {
        return Err(CarveError::DomainViolation {
            message: "target size exceeds the source image's dimensions".into(),
        });
    }
    let mut img = image.clone();
    let mut vertical_turn = true;
    while img.width() > new_width && img.height() > new_height {
        img = if vertical_turn {
            shrink_width(&img, 1, mode, rng)?
        } else {
            shrink_height(&img, 1, mode, rng)?
        };
        vertical_turn = !vertical_turn;
        log::debug!("shrink_to: now {}x{}", img.width(), img.height());
    }
    if img.width() > new_width {
        img = shrink_width(&img, img.width() - new_width, mode, rng)?;
    }
    if img.height() > new_height {
        img = shrink_height(&img, img.height() - new_height, mode, rng)?;
    }
    Ok(img)
}

/// How aggressively a single growth batch may proceed: at most
/// `current_dimension / max_increase_div` seams per batch, so a single
/// pass never tries to duplicate more of the image than it can support.
fn batch_cap(current_dimension: u32, max_increase_div: u32) -> u32 {
    (current_dimension / max_increase_div.max(1)).max(1)
}

/// Grow an image's width by `amount` columns, in throttled batches.
/// Each batch discovers `batch` seams by deleting them from a disposable
/// auxiliary raster (phase 1), then replays them as insertions against
/// the real, growing raster, remapping each seam's columns through a
/// per-row Fenwick tree so that repeated columns fan out into runs
/// rather than colliding (phase 2).
pub fn grow_width<R: Rng>(
    image: &RgbaImage,
    amount: u32,
    mode: SeamMode,
    max_increase_div: u32,
    rng: &mut R,
) -> Result<RgbaImage, CarveError> {
    let mut img = image.clone();
    let mut remaining = amount;
    while remaining > 0 {
        let batch = remaining.min(batch_cap(img.width(), max_increase_div));
        img = grow_width_batch(&img, batch, mode, rng)?;
        remaining -= batch;
        log::debug!("grow_width: now {} wide, {} remaining", img.width(), remaining);
    }
    Ok(img)
}

fn grow_width_batch<R: Rng>(
    image: &RgbaImage,
    batch: u32,
    mode: SeamMode,
    rng: &mut R,
) -> Result<RgbaImage, CarveError> {
    let mut aux = image.clone();
    let mut energy = sobel_energy(&luma_field(&aux));
    let mut seams: Vec<Vec<u32>> = Vec::with_capacity(batch as usize);
    for _ in 0..batch {
        let path = seam::find_one(&energy, mode, rng);
        validate_seam(&path, aux.height())?;
        let (next_aux, next_energy) = delete_seam(&aux, &energy, &path);
        seams.push(path);
        aux = next_aux;
        energy = next_energy;
    }

    let height = image.height() as usize;
    let row_len = image.width() as usize + batch as usize + 1;
    let mut trees: Vec<Fenwick> = (0..height).map(|_| Fenwick::new(row_len)).collect();

    let mut out = image.clone();
    for path in seams {
        let mut remapped = path;
        for (y, col) in remapped.iter_mut().enumerate() {
            let shift = trees[y].query(*col as usize) as u32;
            *col += shift;
        }
        out = insert_seam(&out, &remapped);
        for (y, col) in remapped.iter().enumerate() {
            trees[y].update(*col as usize, 1);
        }
    }
    Ok(out)
}

/// Grow an image's height by `amount` rows, by rotating, growing width,
/// and rotating back.
pub fn grow_height<R: Rng>(
    image: &RgbaImage,
    amount: u32,
    mode: SeamMode,
    max_increase_div: u32,
    rng: &mut R,
) -> Result<RgbaImage, CarveError> {
    let rotated = flipper::rotate_clockwise(image);
    let grown = grow_width(&rotated, amount, mode, max_increase_div, rng)?;
    Ok(flipper::rotate_clockwise_n(&grown, 3))
}

/// Amplify: resample both dimensions up by `percent`, then shrink back
/// to the original size via content-aware removal, so the enlargement
/// favours whatever content the seam carver considers important.
pub fn amplify<R: Rng>(
    image: &RgbaImage,
    percent: u32,
    mode: SeamMode,
    rng: &mut R,
) -> Result<RgbaImage, CarveError> {
    let (width, height) = image.dimensions();
    let grown_width = width + (width as u64 * percent as u64 / 100) as u32;
    let grown_height = height + (height as u64 * percent as u64 / 100) as u32;
    let resized = image::imageops::resize(image, grown_width, grown_height, FilterType::Lanczos3);
    shrink_to(&resized, width, height, mode, rng)
}

/// Erase the object bounded by `polygon` by masking its interior to the
/// lowest possible energy and carving exactly as many seams as the
/// bounding box's minimum extent requires -- rotating first when the
/// box is wider than it is tall, so the carve always runs along the
/// shorter axis.
pub fn erase_object<R: Rng>(
    image: &RgbaImage,
    points: &[Point],
    mode: SeamMode,
    rng: &mut R,
) -> Result<RgbaImage, CarveError> {
    let closed = polygon::close_polygon(points)?;
    let (min_x, min_y, max_x, max_y) = polygon::bounding_box(points);
    let bbox_width = max_x - min_x;
    let bbox_height = max_y - min_y;
    if bbox_width <= 0 || bbox_height <= 0 {
        return Err(CarveError::DomainViolation {
            message: "polygon has zero width or height".into(),
        });
    }

    let rotate = bbox_width > bbox_height;
    let (mut img, work_polygon) = if rotate {
        (
            flipper::rotate_clockwise(image),
            polygon::rotate_clockwise(&closed, image.width() as i64),
        )
    } else {
        (image.clone(), closed)
    };

    let seams_to_carve = if rotate { bbox_height } else { bbox_width } as u32;

    let mut energy = sobel_energy(&luma_field(&img));
    mask_polygon(&mut energy, &work_polygon);

    for _ in 0..seams_to_carve {
        let path = seam::find_one(&energy, mode, rng);
        validate_seam(&path, img.height())?;
        let (next_img, next_energy) = delete_seam(&img, &energy, &path);
        img = next_img;
        energy = next_energy;
    }

    if rotate {
        img = flipper::rotate_clockwise_n(&img, 3);
    }
    Ok(img)
}

fn mask_polygon(energy: &mut TwoDimensionalMap<f64>, closed_polygon: &[Point]) {
    let (width, height) = (energy.width, energy.height);
    for y in 0..height {
        for x in 0..width {
            if polygon::contains((x as i64, y as i64), closed_polygon) {
                energy[(x, y)] = ERASE_MASK_ENERGY;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn checkerboard(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        })
    }

    #[test]
    fn shrink_width_reduces_exactly_by_amount() {
        let img = checkerboard(10, 8);
        let mut rng = StdRng::seed_from_u64(1);
        let out = shrink_width(&img, 3, SeamMode::Dynamics, &mut rng).unwrap();
        assert_eq!(out.dimensions(), (7, 8));
    }

    #[test]
    fn shrink_to_hits_the_exact_target() {
        let img = checkerboard(12, 9);
        let mut rng = StdRng::seed_from_u64(2);
        let out = shrink_to(&img, 8, 6, SeamMode::Greedy, &mut rng).unwrap();
        assert_eq!(out.dimensions(), (8, 6));
    }

    #[test]
    fn shrink_width_rejects_shrinking_past_zero() {
        let img = checkerboard(3, 3);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(shrink_width(&img, 3, SeamMode::Dynamics, &mut rng).is_err());
    }

    #[test]
    fn grow_width_increases_exactly_by_amount() {
        let img = checkerboard(10, 6);
        let mut rng = StdRng::seed_from_u64(4);
        let out = grow_width(&img, 4, SeamMode::Dynamics, 2, &mut rng).unwrap();
        assert_eq!(out.dimensions(), (14, 6));
    }

    #[test]
    fn grow_height_increases_exactly_by_amount() {
        let img = checkerboard(6, 10);
        let mut rng = StdRng::seed_from_u64(5);
        let out = grow_height(&img, 4, SeamMode::Dynamics, 2, &mut rng).unwrap();
        assert_eq!(out.dimensions(), (6, 14));
    }

    #[test]
    fn amplify_returns_to_the_original_size() {
        let img = checkerboard(10, 10);
        let mut rng = StdRng::seed_from_u64(6);
        let out = amplify(&img, 20, SeamMode::Dynamics, &mut rng).unwrap();
        assert_eq!(out.dimensions(), (10, 10));
    }

    #[test]
    fn erase_object_removes_exactly_the_bbox_extent() {
        let img = checkerboard(10, 10);
        let mut rng = StdRng::seed_from_u64(7);
        let polygon = [(2, 2), (6, 2), (6, 6), (2, 6)];
        let out = erase_object(&img, &polygon, SeamMode::Dynamics, &mut rng).unwrap();
        // A 4x4 square bbox: width == height, so no rotation, and
        // exactly 4 vertical seams are removed.
        assert_eq!(out.dimensions(), (6, 10));
    }

    #[test]
    fn erase_object_rotates_for_a_wide_box() {
        let img = checkerboard(20, 20);
        let mut rng = StdRng::seed_from_u64(8);
        // A box 10 wide and 2 tall: wider than tall, so this should
        // rotate and remove only 2 seams (the minimum extent).
        let polygon = [(2, 2), (12, 2), (12, 4), (2, 4)];
        let out = erase_object(&img, &polygon, SeamMode::Dynamics, &mut rng).unwrap();
        assert_eq!(out.dimensions(), (20, 18));
    }
}
