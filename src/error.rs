// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error taxonomy surfaced at every crate boundary.

use failure::Fail;

/// Every error this crate can return. Library code always returns this
/// as a `Result`, never panics or aborts on its own; only the CLI
/// binary decides that an `InvariantFailure` is fatal.
#[derive(Debug, Fail)]
pub enum CarveError {
    /// Reading or writing a file failed.
    #[fail(display = "I/O error on '{}': {}", path, source)]
    InputIo {
        /// The path that was being read or written.
        path: String,
        /// The underlying I/O failure.
        #[cause]
        source: std::io::Error,
    },

    /// The `image` crate could not decode or encode a raster.
    #[fail(display = "could not decode/encode image '{}': {}", path, source)]
    ImageCodec {
        /// The path that was being decoded or encoded.
        path: String,
        /// The underlying codec failure.
        #[cause]
        source: image::ImageError,
    },

    /// A command-line argument was malformed (wrong arity, not a number,
    /// too few polygon points).
    #[fail(display = "invalid argument: {}", message)]
    InputParse {
        /// A human-readable description of what was wrong.
        message: String,
    },

    /// A well-formed request is out of range for its input (e.g. asking
    /// to shrink an image wider than it is).
    #[fail(display = "domain violation: {}", message)]
    DomainViolation {
        /// A human-readable description of the violated constraint.
        message: String,
    },

    /// An internal invariant was violated -- a bug in this crate, not a
    /// bad request.
    #[fail(display = "internal invariant violated: {}", message)]
    InvariantFailure {
        /// A human-readable description of the violated invariant.
        message: String,
    },
}
