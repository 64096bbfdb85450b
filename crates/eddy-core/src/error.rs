//! Error types for cell addressing.

use std::error::Error;
use std::fmt;

/// A cell coordinate fell outside `[0, size-1] x [0, size-1]`.
///
/// Returned by the injection calls. The field is left untouched, so the
/// caller can clamp or drop the request and carry on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRangeError {
    /// First-axis index that was requested.
    pub i: i32,
    /// Second-axis index that was requested.
    pub j: i32,
    /// Side length of the grid the request was made against.
    pub size: usize,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell ({}, {}) out of range: [0, {}) x [0, {})",
            self.i, self.j, self.size, self.size
        )
    }
}

impl Error for OutOfRangeError {}
