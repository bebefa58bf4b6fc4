//! Image quilting: non-parametric texture synthesis by stitching
//! together randomly sampled patches of a source texture, and texture
//! transfer, which biases that same process toward a driving image's
//! content. Grounded on `original_source/project2/cmd/enlarge.go` and
//! `texture.go`; no Rust example in the corpus implements this, so the
//! DP/backpointer idiom is carried over from the teacher's own
//! seam-finding code instead.

pub mod canvas;
pub mod cut;
pub mod patch;
pub mod select;

use crate::energy::luma_field;
use crate::error::CarveError;
use image::RgbaImage;
use patch::sample_patches;
use rand::Rng;

/// Parameters shared by both quilting commands.
#[derive(Debug, Clone, Copy)]
pub struct QuiltConfig {
    /// How many candidate patches to sample per slot.
    pub patches: u32,
    /// The side length of a (square) patch.
    pub patch_size: u32,
    /// The width of the overlap strip shared with each neighbour.
    pub overlap: u32,
    /// The minimum distance a sampled patch must keep from the source
    /// image's edges.
    pub border: u32,
    /// 0: uniform random pick, no tolerance band, no cut (baseline).
    /// 1: overlap-SSD selection with a tolerance band, no cut.
    /// 2: overlap-SSD selection with a tolerance band, plus the
    ///    minimum-error boundary cut.
    pub algorithm: u8,
}

impl QuiltConfig {
    fn accept_all(&self) -> bool {
        self.algorithm == 0
    }

    fn use_cut(&self) -> bool {
        self.algorithm == 2
    }
}

/// Enlarge `source` to `width x height` by non-parametric texture
/// synthesis.
pub fn enlarge<R: Rng>(
    source: &RgbaImage,
    width: u32,
    height: u32,
    config: QuiltConfig,
    rng: &mut R,
) -> Result<RgbaImage, CarveError> {
    let patches = sample_patches(source, config.patches, config.patch_size, config.overlap, config.border, rng)?;
    Ok(canvas::synthesize(
        &patches,
        width,
        height,
        config.patch_size,
        config.overlap,
        config.accept_all(),
        config.use_cut(),
        None,
        rng,
    ))
}

/// One texture-transfer iteration: synthesize a canvas the size of
/// `driving`, sampling patches from `texture_source`, biased toward
/// `driving`'s content by `alpha`.
pub fn texture_transfer_step<R: Rng>(
    texture_source: &RgbaImage,
    driving: &RgbaImage,
    alpha: f64,
    config: QuiltConfig,
    rng: &mut R,
) -> Result<RgbaImage, CarveError> {
    let patches = sample_patches(texture_source, config.patches, config.patch_size, config.overlap, config.border, rng)?;
    let driving_luma = luma_field(driving);
    let (width, height) = driving.dimensions();
    Ok(canvas::synthesize(
        &patches,
        width,
        height,
        config.patch_size,
        config.overlap,
        config.accept_all(),
        config.use_cut(),
        Some((&driving_luma, alpha)),
        rng,
    ))
}

/// Run `steps` iterations of texture transfer, feeding each iteration's
/// output back in as the next iteration's texture source while keeping
/// `driving` and `alpha` fixed throughout.
pub fn texture_transfer<R: Rng>(
    initial_texture: &RgbaImage,
    driving: &RgbaImage,
    alpha: f64,
    steps: u32,
    config: QuiltConfig,
    rng: &mut R,
) -> Result<RgbaImage, CarveError> {
    let mut texture = initial_texture.clone();
    let mut result = texture.clone();
    for step in 0..steps {
        result = texture_transfer_step(&texture, driving, alpha, config, rng)?;
        texture = result.clone();
        log::debug!("texture_transfer: step {}/{} complete", step + 1, steps);
    }
    Ok(result)
}
