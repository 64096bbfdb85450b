//! Read-only measures of simulation state.
//!
//! None of these mutate their inputs. They exist to verify the pipeline
//! (mass conservation, incompressibility) and to spot instability early.

use eddy_core::{ScalarField, VectorField};

/// Sum of a scalar field over interior cells.
pub fn total_density(density: &ScalarField) -> f64 {
    density.interior_sum()
}

/// Central-difference divergence of `velocity` at every interior cell:
///
/// ```text
/// div[i,j] = 0.5 * ((vx[i+1,j] - vx[i-1,j]) + (vy[i,j+1] - vy[i,j-1]))
/// ```
///
/// Ring cells are zero. This is the plain two-neighbour stencil, not the
/// 3x3 window-summed gradient some stable-fluids demos report: values here
/// are about two thirds of theirs, and the last interior row and column
/// are included.
pub fn divergence_map(velocity: &VectorField) -> ScalarField {
    let grid = velocity.grid();
    let n = grid.size();
    let vx = velocity.x().as_slice();
    let vy = velocity.y().as_slice();
    let mut out = ScalarField::zeros(grid);
    let d = out.as_mut_slice();
    for i in 1..n - 1 {
        for j in 1..n - 1 {
            let k = i * n + j;
            d[k] = 0.5 * ((vx[k + n] - vx[k - n]) + (vy[k + 1] - vy[k - 1]));
        }
    }
    out
}

/// Sum of absolute interior divergence.
pub fn total_divergence(velocity: &VectorField) -> f64 {
    divergence_map(velocity)
        .as_slice()
        .iter()
        .map(|v| v.abs())
        .sum()
}

/// Mean kinetic energy over interior cells: `0.5 * <vx^2 + vy^2>`.
pub fn kinetic_energy(velocity: &VectorField) -> f64 {
    let grid = velocity.grid();
    let sum: f64 = grid
        .interior()
        .map(|(i, j)| {
            let (vx, vy) = velocity.get(i, j);
            vx * vx + vy * vy
        })
        .sum();
    0.5 * sum / grid.interior_count() as f64
}
