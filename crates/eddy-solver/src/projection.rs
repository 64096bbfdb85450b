//! Divergence removal (Helmholtz-Hodge projection).
//!
//! 1. `div = -0.5 * (dvx/di + dvy/dj) / size` by central differences
//! 2. `p = 0`, scalar boundary on `div` and `p`
//! 3. Jacobi solve `p = (div + sum(p neighbours)) / PRESSURE_CENTER_WEIGHT`
//! 4. `v -= 0.5 * grad(p) * size`
//! 5. velocity boundary on the result
//!
//! With a fixed sweep count the result is not exactly divergence-free, but
//! the discrete divergence of the field always goes down.

use eddy_core::{FieldKind, ScalarField, VectorField};

use crate::boundary::{enforce, enforce_vector};
use crate::linear::JacobiSolver;

/// Centre weight of the pressure system.
pub const PRESSURE_CENTER_WEIGHT: f64 = 6.0;

/// Make `velocity` closer to divergence-free.
///
/// `p` and `div` are scratch planes on the same grid; both are overwritten
/// and hold the pressure and the scaled divergence on return.
pub fn project(
    solver: &mut JacobiSolver,
    velocity: &mut VectorField,
    p: &mut ScalarField,
    div: &mut ScalarField,
) {
    let grid = velocity.grid();
    let n = grid.size();
    let size = n as f64;

    {
        let vx = velocity.x().as_slice();
        let vy = velocity.y().as_slice();
        let d = div.as_mut_slice();
        for i in 1..n - 1 {
            let row = i * n;
            for j in 1..n - 1 {
                let k = row + j;
                d[k] = -0.5 * ((vx[k + n] - vx[k - n]) + (vy[k + 1] - vy[k - 1])) / size;
            }
        }
    }
    p.fill(0.0);
    enforce(FieldKind::Scalar, div);
    enforce(FieldKind::Scalar, p);

    solver.solve(FieldKind::Scalar, p, div, 1.0, PRESSURE_CENTER_WEIGHT);

    {
        let pr = p.as_slice();
        let (vx, vy) = velocity.components_mut();
        let vx = vx.as_mut_slice();
        let vy = vy.as_mut_slice();
        for i in 1..n - 1 {
            let row = i * n;
            for j in 1..n - 1 {
                let k = row + j;
                vx[k] -= 0.5 * (pr[k + n] - pr[k - n]) * size;
                vy[k] -= 0.5 * (pr[k + 1] - pr[k - 1]) * size;
            }
        }
    }
    enforce_vector(velocity);
}
