#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing and texture synthesis.
//!
//! Two families of operation share one foundation:
//!
//! - **Seam carving** ([`driver`]) removes or inserts meandering paths
//!   of low-energy pixels to shrink, grow, amplify, or selectively erase
//!   part of an image, doing far less damage to its content than a
//!   uniform crop or resample would.
//! - **Image quilting** ([`quilt`]) synthesizes new, larger textures (or
//!   transfers a texture onto a driving image's shape) by stitching
//!   together overlapping patches sampled from a source image.

extern crate image;

/// Luma projection and the Sobel energy field seam carving runs on.
pub mod energy;

/// A proxy and an owned-buffer transform that rotate an image 90°, so
/// horizontal operations can reuse the vertical implementation.
pub mod flipper;

/// Trait and policies (dynamic programming, greedy, random) for turning
/// an energy field into one removable seam.
pub mod seam;

/// Trait defining how an energy field becomes a seam.
pub mod seamfinder;
pub use seamfinder::SeamFinder;

/// Some simple macros.
pub mod ternary;

/// A generic two-dimensional map, used to hold intermediate data.
pub mod twodmap;

/// Deleting and inserting a single seam in a raster and its energy
/// field.
pub mod seammutator;

/// A binary-indexed tree used to remap seam-insertion coordinates
/// during batched growth.
pub mod fenwick;

/// Bounding box and point-in-polygon utilities for object erasure.
pub mod polygon;

/// The crate's error taxonomy.
pub mod error;
pub use error::CarveError;

/// Shrink, grow, amplify, and erase: the seam-carving operations built
/// on `energy`, `seam`, and `seammutator`.
pub mod driver;

/// Image quilting and texture transfer.
pub mod quilt;

/// The `imgcarve` command-line surface.
pub mod cli;
