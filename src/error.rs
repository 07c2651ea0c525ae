// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Carving failures
//!
//! Decode and encode failures belong to the codec layer and pass
//! through the binary untouched.  The library itself can only fail in
//! the two ways below, and neither is ever retried: a bad request is
//! refused before any work starts, and a bad seam means the carver
//! itself is defective.

use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// The requested target width cannot be reached by removing
    /// seams.  Raised before any processing, so no partial output
    /// exists.
    #[fail(
        display = "cannot carve a {}-column image to {} columns: the target must be at least 1 and strictly smaller than the current width",
        current, target
    )]
    Unsupported { current: u32, target: u32 },

    /// A seam handed to the remover breaks the seam invariants.  This
    /// is an internal defect, not a recoverable condition.
    #[fail(display = "refusing to remove an invalid seam: {}", detail)]
    InvalidSeam { detail: String },
}
