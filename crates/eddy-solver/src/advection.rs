//! Semi-Lagrangian advection.
//!
//! Each interior cell is traced backward along the driving velocity for one
//! time step and the previous field is sampled there with bilinear
//! interpolation:
//!
//! ```text
//! x = i - dt * (size - 2) * vx[i,j]
//! y = j - dt * (size - 2) * vy[i,j]
//! d[i,j] = bilerp(d0, clamp(x), clamp(y))
//! ```
//!
//! Unconditionally stable, at the cost of numerical diffusion from the
//! repeated interpolation.

use eddy_core::{FieldKind, ScalarField, VectorField};

use crate::boundary::enforce;

/// Lowest traced coordinate on either axis.
const TRACE_MIN: f64 = 0.5;

/// Upper clamp applied to backward-traced coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceBounds {
    /// Clamp to `[0.5, size + 0.5]`.
    ///
    /// Reproduces reference stable-fluids output. Traces may land on or
    /// past the ring; the four sample indices are then clamped to the grid
    /// so such a trace reads the nearest ring value.
    #[default]
    Legacy,
    /// Clamp to `[0.5, size - 1.5]`, so every sample stays on the grid.
    Interior,
}

impl TraceBounds {
    /// Upper clamp for a grid of side `size`.
    pub fn upper(&self, size: usize) -> f64 {
        match self {
            Self::Legacy => size as f64 + 0.5,
            Self::Interior => size as f64 - 1.5,
        }
    }
}

/// Advect `d0` into `d` along `velocity`, then enforce the `kind` boundary
/// on `d`.
///
/// `d`'s previous contents are ignored. `d0` and `velocity` are read only,
/// so `d` must be a separate buffer.
pub fn advect(
    kind: FieldKind,
    d: &mut ScalarField,
    d0: &ScalarField,
    velocity: &VectorField,
    dt: f64,
    bounds: TraceBounds,
) {
    let n = d.grid().size();
    let dt0 = dt * (n - 2) as f64;
    let hi = bounds.upper(n);
    let last = n - 1;
    let src = d0.as_slice();
    let vx = velocity.x().as_slice();
    let vy = velocity.y().as_slice();
    let out = d.as_mut_slice();

    for i in 1..last {
        for j in 1..last {
            let k = i * n + j;
            let x = (i as f64 - dt0 * vx[k]).clamp(TRACE_MIN, hi);
            let y = (j as f64 - dt0 * vy[k]).clamp(TRACE_MIN, hi);

            let x0 = x.floor();
            let y0 = y.floor();
            let s1 = x - x0;
            let s0 = 1.0 - s1;
            let t1 = y - y0;
            let t0 = 1.0 - t1;

            // The clamp floor is 0.5, so both floors are non-negative.
            let i0 = (x0 as usize).min(last);
            let i1 = (x0 as usize + 1).min(last);
            let j0 = (y0 as usize).min(last);
            let j1 = (y0 as usize + 1).min(last);

            out[k] = s0 * (t0 * src[i0 * n + j0] + t1 * src[i0 * n + j1])
                + s1 * (t0 * src[i1 * n + j0] + t1 * src[i1 * n + j1]);
        }
    }
    enforce(kind, d);
}

/// Self-advect velocity: both components of `d0` are carried along `d0`
/// and written into `d`.
///
/// Each component plane takes the scalar copy rule here. The reflecting
/// rule is left to the projection that follows, whose divergence stencil
/// reads the copied ring.
pub fn advect_velocity(d: &mut VectorField, d0: &VectorField, dt: f64, bounds: TraceBounds) {
    let (dx, dy) = d.components_mut();
    advect(FieldKind::Scalar, dx, d0.x(), d0, dt, bounds);
    advect(FieldKind::Scalar, dy, d0.y(), d0, dt, bounds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::enforce_vector;
    use approx::assert_relative_eq;
    use eddy_core::Grid;
    use eddy_test_utils::random_scalar;
    use proptest::prelude::*;

    fn uniform_velocity(grid: Grid, vx: f64, vy: f64) -> VectorField {
        VectorField::from_components(
            ScalarField::from_fn(grid, |_, _| vx),
            ScalarField::from_fn(grid, |_, _| vy),
        )
    }

    #[test]
    fn trace_bounds_upper() {
        assert_eq!(TraceBounds::Legacy.upper(10), 10.5);
        assert_eq!(TraceBounds::Interior.upper(10), 8.5);
        assert_eq!(TraceBounds::default(), TraceBounds::Legacy);
    }

    #[test]
    fn uniform_field_stays_uniform() {
        let g = Grid::new(12).unwrap();
        let d0 = ScalarField::from_fn(g, |_, _| 5.0);
        let v = uniform_velocity(g, 0.01, -0.02);
        let mut d = ScalarField::zeros(g);
        advect(FieldKind::Scalar, &mut d, &d0, &v, 0.1, TraceBounds::Legacy);
        for &val in d.as_slice() {
            assert_relative_eq!(val, 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn integer_shift_moves_values() {
        // dt * (size-2) * v = 1 cell along +i.
        let g = Grid::new(10).unwrap();
        let d0 = ScalarField::from_fn(g, |i, j| (i * 10 + j) as f64);
        let v = uniform_velocity(g, 0.125, 0.0);
        let mut d = ScalarField::zeros(g);
        advect(FieldKind::Scalar, &mut d, &d0, &v, 1.0, TraceBounds::Interior);
        for i in 2..9 {
            for j in 1..9 {
                assert_relative_eq!(d.get(i, j), d0.get(i - 1, j), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn half_cell_shift_interpolates() {
        let g = Grid::new(10).unwrap();
        let d0 = ScalarField::from_fn(g, |_, j| j as f64);
        let v = uniform_velocity(g, 0.0, 0.0625);
        let mut d = ScalarField::zeros(g);
        advect(FieldKind::Scalar, &mut d, &d0, &v, 1.0, TraceBounds::Interior);
        assert_relative_eq!(d.get(4, 4), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn huge_velocity_does_not_escape_grid() {
        let g = Grid::new(8).unwrap();
        let d0 = ScalarField::from_fn(g, |_, _| 1.0);
        for bounds in [TraceBounds::Legacy, TraceBounds::Interior] {
            for (vx, vy) in [(-1e6, -1e6), (1e6, 1e6), (-1e6, 1e6)] {
                let v = uniform_velocity(g, vx, vy);
                let mut d = ScalarField::zeros(g);
                advect(FieldKind::Scalar, &mut d, &d0, &v, 0.5, bounds);
                for &val in d.as_slice() {
                    assert_relative_eq!(val, 1.0, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn legacy_trace_past_ring_reads_ring() {
        let g = Grid::new(6).unwrap();
        let d0 = ScalarField::from_fn(g, |i, _| if i == 5 { 9.0 } else { 0.0 });
        // Trace far toward -velocity, i.e. toward large i.
        let v = uniform_velocity(g, -100.0, 0.0);
        let mut d = ScalarField::zeros(g);
        advect(FieldKind::Scalar, &mut d, &d0, &v, 1.0, TraceBounds::Legacy);
        assert_relative_eq!(d.get(2, 2), 9.0, epsilon = 1e-12);

        let mut d = ScalarField::zeros(g);
        advect(FieldKind::Scalar, &mut d, &d0, &v, 1.0, TraceBounds::Interior);
        // Interior clamp stops at 4.5: halfway between row 4 and the ring.
        assert_relative_eq!(d.get(2, 2), 4.5, epsilon = 1e-12);
    }

    #[test]
    fn velocity_self_advection_copies_ring() {
        let g = Grid::new(9).unwrap();
        let mut v0 = VectorField::zeros(g);
        v0.add(4, 4, 0.05, 0.02);
        v0.add(1, 3, 0.03, -0.01);
        enforce_vector(&mut v0);
        let mut v = VectorField::zeros(g);
        advect_velocity(&mut v, &v0, 0.5, TraceBounds::Legacy);
        let (ix, iy) = v.get(1, 3);
        assert!(ix != 0.0);
        assert_eq!(v.get(0, 3), (ix, iy));
        let (jx, jy) = v.get(3, 1);
        assert_eq!(v.get(3, 0), (jx, jy));
    }

    #[test]
    fn velocity_self_advection_is_per_plane_scalar_advection() {
        let g = Grid::new(9).unwrap();
        let mut v0 = VectorField::zeros(g);
        v0.add(4, 4, 0.05, 0.02);
        v0.add(2, 6, -0.03, 0.04);
        let mut v = VectorField::zeros(g);
        advect_velocity(&mut v, &v0, 0.5, TraceBounds::Legacy);

        let mut x = ScalarField::zeros(g);
        advect(FieldKind::Scalar, &mut x, v0.x(), &v0, 0.5, TraceBounds::Legacy);
        let mut y = ScalarField::zeros(g);
        advect(FieldKind::Scalar, &mut y, v0.y(), &v0, 0.5, TraceBounds::Legacy);
        assert_eq!(v, VectorField::from_components(x, y));
    }

    proptest! {
        #[test]
        fn zero_velocity_is_identity(
            size in 3usize..16,
            dt in 0.01f64..2.0,
            seed in any::<u64>(),
        ) {
            let g = Grid::new(size).unwrap();
            let mut d0 = random_scalar(g, seed, 20.0);
            enforce(FieldKind::Scalar, &mut d0);
            let v = VectorField::zeros(g);
            let mut d = ScalarField::zeros(g);
            advect(FieldKind::Scalar, &mut d, &d0, &v, dt, TraceBounds::Legacy);
            prop_assert_eq!(d, d0);
        }
    }
}
