//! Fixed-iteration Jacobi relaxation.
//!
//! Solves, for interior cells,
//!
//! ```text
//! x[i,j] = (x0[i,j] + a * (x[i-1,j] + x[i+1,j] + x[i,j-1] + x[i,j+1])) / c
//! ```
//!
//! by sweeping exactly `iterations` times. There is no residual check and
//! no early exit. Each sweep reads the previous sweep's values from one
//! buffer and writes into a second one, then the two swap roles, so no
//! cell ever sees a neighbour that was already updated in the same sweep.

use eddy_core::{FieldKind, Grid, ScalarField};

use crate::boundary::enforce;

/// Jacobi solver owning its back buffer.
///
/// The back buffer is allocated once for the grid and reused by every
/// solve; after each sweep it is swapped with the caller's field, so a
/// solve never copies whole planes.
#[derive(Clone, Debug)]
pub struct JacobiSolver {
    iterations: u32,
    back: ScalarField,
}

impl JacobiSolver {
    /// Create a solver for fields on `grid` that sweeps `iterations` times.
    pub fn new(grid: Grid, iterations: u32) -> Self {
        Self {
            iterations,
            back: ScalarField::zeros(grid),
        }
    }

    /// Relax `x` toward the solution of the system with right-hand side
    /// `x0`, enforcing the `kind` boundary after every sweep.
    ///
    /// The current contents of `x` are the initial guess. `c` must be
    /// non-zero.
    ///
    /// # Panics
    ///
    /// Panics if `x`, `x0` and the solver do not share one grid.
    pub fn solve(&mut self, kind: FieldKind, x: &mut ScalarField, x0: &ScalarField, a: f64, c: f64) {
        let grid = self.back.grid();
        assert_eq!(x.grid(), grid, "solution grid does not match solver");
        assert_eq!(x0.grid(), grid, "right-hand side grid does not match solver");

        let n = grid.size();
        let c_recip = 1.0 / c;
        let rhs = x0.as_slice();

        for _ in 0..self.iterations {
            {
                let src = x.as_slice();
                let dst = self.back.as_mut_slice();
                for i in 1..n - 1 {
                    let row = i * n;
                    for j in 1..n - 1 {
                        let k = row + j;
                        let neighbours = src[k - n] + src[k + n] + src[k - 1] + src[k + 1];
                        dst[k] = (rhs[k] + a * neighbours) * c_recip;
                    }
                }
            }
            enforce(kind, &mut self.back);
            std::mem::swap(x, &mut self.back);
        }
    }
}
