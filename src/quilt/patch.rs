//! Candidate patch sampling: a full RGBA block plus its four luma
//! overlap strips, cropped from uniformly random, border-guarded
//! origins. Grounded on
//! `original_source/project2/cmd/enlarge.go::getRandomBlocks`/
//! `defineBlockPart`.

use crate::energy::luma_field;
use crate::error::CarveError;
use crate::twodmap::TwoDimensionalMap;
use image::RgbaImage;
use rand::Rng;

/// One sampled candidate: the full block plus its left (`x_min`), right
/// (`x_max`), top (`y_min`), and bottom (`y_max`) overlap strips in
/// luma, and the full block's luma (only needed for texture transfer).
#[derive(Debug, Clone)]
pub struct Patch {
    /// The full RGBA block.
    pub complete: RgbaImage,
    /// Luma of the full block, used only by texture transfer.
    pub complete_gray: TwoDimensionalMap<f64>,
    /// Luma of the left edge, `overlap` wide.
    pub x_min: TwoDimensionalMap<f64>,
    /// Luma of the right edge, `overlap` wide.
    pub x_max: TwoDimensionalMap<f64>,
    /// Luma of the top edge, `overlap` tall.
    pub y_min: TwoDimensionalMap<f64>,
    /// Luma of the bottom edge, `overlap` tall.
    pub y_max: TwoDimensionalMap<f64>,
}

impl Patch {
    fn extract(
        source: &RgbaImage,
        source_luma: &TwoDimensionalMap<f64>,
        x0: u32,
        y0: u32,
        patch_size: u32,
        overlap: u32,
    ) -> Patch {
        Patch {
            complete: crop_rgba(source, x0, y0, patch_size, patch_size),
            complete_gray: crop_luma(source_luma, x0, y0, patch_size, patch_size),
            x_min: crop_luma(source_luma, x0, y0, overlap, patch_size),
            x_max: crop_luma(source_luma, x0 + patch_size - overlap, y0, overlap, patch_size),
            y_min: crop_luma(source_luma, x0, y0, patch_size, overlap),
            y_max: crop_luma(source_luma, x0, y0 + patch_size - overlap, patch_size, overlap),
        }
    }
}

fn crop_luma(source: &TwoDimensionalMap<f64>, x0: u32, y0: u32, width: u32, height: u32) -> TwoDimensionalMap<f64> {
    let mut out = TwoDimensionalMap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            out[(x, y)] = source[(x0 + x, y0 + y)];
        }
    }
    out
}

fn crop_rgba(source: &RgbaImage, x0: u32, y0: u32, width: u32, height: u32) -> RgbaImage {
    let mut out = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            out.put_pixel(x, y, *source.get_pixel(x0 + x, y0 + y));
        }
    }
    out
}

/// Sample `count` candidate patches of `patch_size` (with `overlap`-wide
/// strips), from origins kept at least `border` pixels from every edge
/// of `source`.
pub fn sample_patches<R: Rng>(
    source: &RgbaImage,
    count: u32,
    patch_size: u32,
    overlap: u32,
    border: u32,
    rng: &mut R,
) -> Result<Vec<Patch>, CarveError> {
    let (width, height) = source.dimensions();
    if patch_size + 2 * border >= width || patch_size + 2 * border >= height {
        return Err(CarveError::DomainViolation {
            message: format!(
                "patch size {} with border {} does not fit a {}x{} source",
                patch_size, border, width, height
            ),
        });
    }
    if overlap >= patch_size {
        return Err(CarveError::DomainViolation {
            message: format!("overlap {} must be smaller than patch size {}", overlap, patch_size),
        });
    }

    let luma = luma_field(source);
    let max_x = width - patch_size - border;
    let max_y = height - patch_size - border;
    Ok((0..count)
        .map(|_| {
            let x0 = rng.gen_range(border..max_x);
            let y0 = rng.gen_range(border..max_y);
            Patch::extract(source, &luma, x0, y0, patch_size, overlap)
        })
        .collect())
}
