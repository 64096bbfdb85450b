//! The square simulation grid.
//!
//! Cells are addressed `(i, j)` and stored row-major: `i * size + j`.
//! Indices `0` and `size - 1` on either axis form the boundary ring; the
//! interior is `[1, size - 2]` on both axes.

use crate::error::OutOfRangeError;

/// Smallest grid with at least one interior cell.
pub const MIN_GRID_SIZE: usize = 3;

/// A square `size x size` grid including its one-cell boundary ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Create a grid with the given side length.
    ///
    /// Returns `None` if `size` is below [`MIN_GRID_SIZE`] or if
    /// `size * size` overflows `usize`.
    pub fn new(size: usize) -> Option<Self> {
        if size < MIN_GRID_SIZE || size.checked_mul(size).is_none() {
            return None;
        }
        Some(Self { size })
    }

    /// Side length, ring included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Number of interior cells (`(size - 2)^2`).
    pub fn interior_count(&self) -> usize {
        let n = self.size - 2;
        n * n
    }

    /// Flat buffer offset of `(i, j)`. No bounds checking.
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        i * self.size + j
    }

    /// Whether `(i, j)` lies on the boundary ring.
    pub fn is_boundary(&self, i: usize, j: usize) -> bool {
        let last = self.size - 1;
        i == 0 || j == 0 || i == last || j == last
    }

    /// Check that a signed coordinate is on the grid and return it unsigned.
    pub fn check(&self, i: i32, j: i32) -> Result<(usize, usize), OutOfRangeError> {
        let n = self.size as i64;
        let (ii, jj) = (i as i64, j as i64);
        if ii < 0 || jj < 0 || ii >= n || jj >= n {
            return Err(OutOfRangeError {
                i,
                j,
                size: self.size,
            });
        }
        Ok((i as usize, j as usize))
    }

    /// Iterate interior cells in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> {
        let last = self.size - 1;
        (1..last).flat_map(move |i| (1..last).map(move |j| (i, j)))
    }
}
