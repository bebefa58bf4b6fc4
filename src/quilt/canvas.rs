//! Grid placement: lay sampled patches onto a fresh canvas one slot at a
//! time, tracking each slot's left and top neighbour for overlap-error
//! selection and boundary cutting. Grounded on
//! `original_source/project2/cmd/enlarge.go::createImage`/
//! `addBlockToImage`.
//!
//! The reference names these neighbours `upLastBlock`/`leftLastBlock` in
//! a way that, read literally, swaps the usual sense of "up" and
//! "left"; this module names them for what they spatially are --
//! `left_id` is the previously placed patch one stride to the left
//! (paired with the `x_max`/`x_min` overlap), `top_id` is the one stride
//! above (paired with `y_max`/`y_min`) -- while reproducing the exact
//! same neighbour relationships.

use crate::quilt::cut::{horizontal_cut, minimum_error_cut, no_cut};
use crate::quilt::patch::Patch;
use crate::quilt::select::{overlap_error, select_index, transfer_error};
use crate::twodmap::TwoDimensionalMap;
use image::RgbaImage;
use rand::Rng;

/// Lay `patches` onto a fresh `width x height` canvas, stepping by
/// `patch_size - overlap`. `texture` carries an optional driving luma
/// field and blend weight for texture transfer; without it, plain
/// quilting selection is used.
#[allow(clippy::too_many_arguments)]
pub fn synthesize<R: Rng>(
    patches: &[Patch],
    width: u32,
    height: u32,
    patch_size: u32,
    overlap: u32,
    accept_all: bool,
    use_cut: bool,
    texture: Option<(&TwoDimensionalMap<f64>, f64)>,
    rng: &mut R,
) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    let stride = patch_size - overlap;
    let row_slots = (height / stride) as usize + 2;
    let mut prev_row_slot = vec![-1i64; row_slots];

    let mut x = 0u32;
    while x < width {
        let mut top_id: i64 = -1;
        let mut slot = 0usize;
        let mut y = 0u32;
        while y < height {
            let left_id = prev_row_slot[slot];
            let chosen = choose_patch(patches, left_id, top_id, texture, accept_all, x, y, rng);
            place_patch(&mut canvas, patches, chosen, left_id, top_id, x, y, patch_size, use_cut);
            prev_row_slot[slot] = chosen as i64;
            top_id = chosen as i64;
            slot += 1;
            y += stride;
        }
        x += stride;
    }
    canvas
}

#[allow(clippy::too_many_arguments)]
fn choose_patch<R: Rng>(
    patches: &[Patch],
    left_id: i64,
    top_id: i64,
    texture: Option<(&TwoDimensionalMap<f64>, f64)>,
    accept_all: bool,
    x: u32,
    y: u32,
    rng: &mut R,
) -> usize {
    if left_id < 0 && top_id < 0 {
        return rng.gen_range(0..patches.len());
    }
    let errors: Vec<f64> = patches
        .iter()
        .map(|candidate| {
            let err = overlap_error(
                (left_id >= 0).then(|| &patches[left_id as usize].x_max),
                &candidate.x_min,
                (top_id >= 0).then(|| &patches[top_id as usize].y_max),
                &candidate.y_min,
            );
            match texture {
                Some((driving_luma, alpha)) => {
                    let target = crop_clamped(driving_luma, x, y, candidate.complete_gray.width, candidate.complete_gray.height);
                    transfer_error(err, &candidate.complete_gray, &target, alpha)
                }
                None => err,
            }
        })
        .collect();
    select_index(&errors, accept_all, rng)
}

fn crop_clamped(source: &TwoDimensionalMap<f64>, x: u32, y: u32, width: u32, height: u32) -> TwoDimensionalMap<f64> {
    let mut out = TwoDimensionalMap::new(width, height);
    for j in 0..height {
        for i in 0..width {
            let sx = (x + i).min(source.width - 1);
            let sy = (y + j).min(source.height - 1);
            out[(i, j)] = source[(sx, sy)];
        }
    }
    out
}

#[allow(clippy::too_many_arguments)]
fn place_patch(
    canvas: &mut RgbaImage,
    patches: &[Patch],
    chosen: usize,
    left_id: i64,
    top_id: i64,
    x: u32,
    y: u32,
    patch_size: u32,
    use_cut: bool,
) {
    let patch = &patches[chosen];

    let (vertical_split, horizontal_split) = if use_cut {
        let vertical_split = if top_id >= 0 {
            minimum_error_cut(&patches[top_id as usize].y_max, &patch.y_min)
        } else {
            no_cut(patch_size)
        };
        let horizontal_split = if left_id >= 0 {
            horizontal_cut(&patches[left_id as usize].x_max, &patch.x_min)
        } else {
            no_cut(patch_size)
        };
        (vertical_split, horizontal_split)
    } else {
        (no_cut(patch_size), no_cut(patch_size))
    };

    for i in 0..patch_size {
        for j in 0..patch_size {
            if (j as i64) > vertical_split[i as usize] && (i as i64) > horizontal_split[j as usize] {
                let (cx, cy) = (x + i, y + j);
                if cx < canvas.width() && cy < canvas.height() {
                    canvas.put_pixel(cx, cy, *patch.complete.get_pixel(i, j));
                }
            }
        }
    }
}
