// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line surface: six subcommands over the driver and quilting
//! operations. Grounded on the teacher's `bin/pnmseam.rs` for the
//! overall open/run/save shape, enriched with a derive-based,
//! multi-subcommand `clap` layout since the teacher's own CLI is a
//! single trivial command, not representative of this crate's surface.

use clap::{Parser, Subcommand, ValueEnum};

/// Content-aware image resizing and texture synthesis.
#[derive(Parser, Debug)]
#[command(name = "imgcarve", version, about)]
pub struct Cli {
    /// Input image path.
    #[arg(short, long)]
    pub input: String,

    /// Output image path.
    #[arg(short, long)]
    pub output: String,

    /// Seam-finding policy, used by every operation that removes seams.
    #[arg(long, value_enum, default_value_t = SeamModeArg::Dynamics)]
    pub mode: SeamModeArg,

    /// PRNG seed; omit for a nondeterministic run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Growth throttling divisor: a single batch grows by at most
    /// current-dimension / this value.
    #[arg(long, default_value_t = 2)]
    pub max_increase_div: u32,

    /// Write the Sobel energy field alongside the output, as a
    /// grayscale PNG, for debugging.
    #[arg(long)]
    pub dump_magnitude: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Which seam-finding policy a run uses.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeamModeArg {
    /// Exact, dynamic-programming seam search.
    Dynamics,
    /// Greedy descent from the cheapest top-row cell.
    Greedy,
    /// A re-rolled random walk.
    Random,
}

impl From<SeamModeArg> for crate::seam::SeamMode {
    fn from(mode: SeamModeArg) -> Self {
        match mode {
            SeamModeArg::Dynamics => crate::seam::SeamMode::Dynamics,
            SeamModeArg::Greedy => crate::seam::SeamMode::Greedy,
            SeamModeArg::Random => crate::seam::SeamMode::Random,
        }
    }
}

/// Shared quilting parameters, repeated on both quilting subcommands.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct QuiltArgs {
    /// How many candidate patches to sample per slot.
    #[arg(long, default_value_t = 20)]
    pub patches: u32,

    /// The side length of a (square) patch.
    #[arg(long, default_value_t = 36)]
    pub patch_size: u32,

    /// The width of the overlap strip shared with each neighbour.
    #[arg(long, default_value_t = 6)]
    pub overlap: u32,

    /// The minimum distance a sampled patch must keep from the source
    /// image's edges.
    #[arg(long, default_value_t = 2)]
    pub border: u32,

    /// 0: uniform random pick. 1: overlap-SSD selection with a
    /// tolerance band. 2: selection plus the minimum-error boundary
    /// cut.
    #[arg(long, default_value_t = 2)]
    pub algorithm: u8,
}

impl From<QuiltArgs> for crate::quilt::QuiltConfig {
    fn from(args: QuiltArgs) -> Self {
        crate::quilt::QuiltConfig {
            patches: args.patches,
            patch_size: args.patch_size,
            overlap: args.overlap,
            border: args.border,
            algorithm: args.algorithm,
        }
    }
}

/// The six operations this crate exposes.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shrink an image by removing `dw` columns and `dh` rows of
    /// low-energy seams.
    Decrease {
        /// Columns to remove.
        dw: u32,
        /// Rows to remove.
        dh: u32,
    },

    /// Grow an image by inserting `dw` columns and `dh` rows of
    /// low-energy seams.
    Increase {
        /// Columns to add.
        dw: u32,
        /// Rows to add.
        dh: u32,
    },

    /// Resample both dimensions up by a percentage, then shrink back to
    /// the original size via content-aware removal.
    Amplification {
        /// Percentage to grow each dimension by before shrinking back.
        percent: u32,
    },

    /// Erase the object bounded by a polygon.
    Erase {
        /// Polygon coordinates as a flat list: x1 y1 x2 y2 ... (at
        /// least 3 points, so at least 6 numbers).
        #[arg(num_args = 6.., allow_hyphen_values = true)]
        polygon: Vec<i64>,
    },

    /// Enlarge an image by non-parametric texture synthesis, scaling both
    /// dimensions by `scale`.
    Enlarge {
        /// Factor to multiply the source's width and height by.
        scale: f64,
        #[command(flatten)]
        quilt: QuiltArgs,
    },

    /// Transfer a texture onto the shape of the driving image given by
    /// `--input`.
    AddTexture {
        /// Path to the texture source, which donates the content that
        /// gets stitched together; `--input` supplies the output shape.
        texture: String,
        /// How strongly to weight similarity to the driving image
        /// against overlap quality; 0.0 ignores the driving image
        /// entirely, 1.0 relies on overlap quality alone.
        #[arg(long, default_value_t = 0.8)]
        alpha: f64,
        /// How many texture-transfer iterations to run, each feeding
        /// its output back in as the next iteration's source.
        #[arg(long, default_value_t = 1)]
        steps: u32,
        #[command(flatten)]
        quilt: QuiltArgs,
    },
}
