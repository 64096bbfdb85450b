//! Closed-box, free-slip boundary enforcement.
//!
//! The ring is a pure function of the interior cells next to it:
//!
//! ```text
//! rows 0 and N-1     (walls across i):  VelocityX negated, others copied
//! columns 0 and N-1  (walls across j):  VelocityY negated, others copied
//! corners:           mean of the two edge cells beside them
//! ```
//!
//! Because nothing in the ring feeds back into another ring cell except the
//! corners (which read edges written first), enforcing twice is the same as
//! enforcing once.

use eddy_core::{FieldKind, ScalarField, VectorField};

/// Rewrite the boundary ring of one plane according to its kind.
pub fn enforce(kind: FieldKind, field: &mut ScalarField) {
    let n = field.grid().size();
    let last = n - 1;
    let across_i = if kind == FieldKind::VelocityX { -1.0 } else { 1.0 };
    let across_j = if kind == FieldKind::VelocityY { -1.0 } else { 1.0 };
    let d = field.as_mut_slice();

    for k in 1..last {
        d[k] = across_i * d[n + k];
        d[last * n + k] = across_i * d[(last - 1) * n + k];
        d[k * n] = across_j * d[k * n + 1];
        d[k * n + last] = across_j * d[k * n + last - 1];
    }

    d[0] = 0.5 * (d[n] + d[1]);
    d[last] = 0.5 * (d[n + last] + d[last - 1]);
    d[last * n] = 0.5 * (d[(last - 1) * n] + d[last * n + 1]);
    d[last * n + last] = 0.5 * (d[(last - 1) * n + last] + d[last * n + last - 1]);
}

/// Enforce the velocity rule on both components of a vector field.
pub fn enforce_vector(field: &mut VectorField) {
    let (x, y) = field.components_mut();
    enforce(FieldKind::VelocityX, x);
    enforce(FieldKind::VelocityY, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_core::Grid;
    use eddy_test_utils::{random_scalar, random_vector};
    use proptest::prelude::*;

    fn ramp(n: usize) -> ScalarField {
        let grid = Grid::new(n).unwrap();
        ScalarField::from_fn(grid, |i, j| (i * n + j) as f64 + 1.0)
    }

    #[test]
    fn scalar_edges_copy_neighbour() {
        let mut f = ramp(5);
        enforce(FieldKind::Scalar, &mut f);
        for k in 1..4 {
            assert_eq!(f.get(0, k), f.get(1, k));
            assert_eq!(f.get(4, k), f.get(3, k));
            assert_eq!(f.get(k, 0), f.get(k, 1));
            assert_eq!(f.get(k, 4), f.get(k, 3));
        }
    }

    #[test]
    fn corners_average_adjacent_edges() {
        let mut f = ramp(5);
        enforce(FieldKind::Scalar, &mut f);
        assert_eq!(f.get(0, 0), 0.5 * (f.get(1, 0) + f.get(0, 1)));
        assert_eq!(f.get(0, 4), 0.5 * (f.get(1, 4) + f.get(0, 3)));
        assert_eq!(f.get(4, 0), 0.5 * (f.get(3, 0) + f.get(4, 1)));
        assert_eq!(f.get(4, 4), 0.5 * (f.get(3, 4) + f.get(4, 3)));
    }

    #[test]
    fn interior_untouched() {
        let original = ramp(6);
        let mut f = original.clone();
        enforce(FieldKind::VelocityX, &mut f);
        for (i, j) in f.grid().interior() {
            assert_eq!(f.get(i, j), original.get(i, j));
        }
    }

    #[test]
    fn velocity_x_reflects_at_i_walls() {
        let grid = Grid::new(6).unwrap();
        let mut v = VectorField::zeros(grid);
        v.add(1, 3, 2.5, -1.25);
        v.add(4, 2, -0.75, 0.5);
        enforce_vector(&mut v);

        // Top wall: x is normal, y is tangential.
        assert_eq!(v.get(0, 3), (-2.5, -1.25));
        // Bottom wall.
        assert_eq!(v.get(5, 2), (0.75, 0.5));
    }

    #[test]
    fn velocity_y_reflects_at_j_walls() {
        let grid = Grid::new(6).unwrap();
        let mut v = VectorField::zeros(grid);
        v.add(3, 1, 1.5, 4.0);
        v.add(2, 4, -3.0, -2.0);
        enforce_vector(&mut v);

        // Left wall: y is normal, x is tangential.
        assert_eq!(v.get(3, 0), (1.5, -4.0));
        // Right wall.
        assert_eq!(v.get(2, 5), (-3.0, 2.0));
    }

    #[test]
    fn smallest_grid() {
        let grid = Grid::new(3).unwrap();
        let mut f = ScalarField::zeros(grid);
        f.set(1, 1, 7.0);
        enforce(FieldKind::Scalar, &mut f);
        assert!(f.as_slice().iter().all(|&v| v == 7.0));
    }

    proptest! {
        #[test]
        fn scalar_enforcement_is_idempotent(size in 3usize..20, seed in any::<u64>()) {
            let grid = Grid::new(size).unwrap();
            let mut once = random_scalar(grid, seed, 10.0);
            enforce(FieldKind::Scalar, &mut once);
            let mut twice = once.clone();
            enforce(FieldKind::Scalar, &mut twice);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn vector_enforcement_is_idempotent(size in 3usize..20, seed in any::<u64>()) {
            let grid = Grid::new(size).unwrap();
            let mut once = random_vector(grid, seed, 5.0);
            enforce_vector(&mut once);
            let mut twice = once.clone();
            enforce_vector(&mut twice);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normal_component_negated_tangential_copied(
            size in 3usize..20,
            seed in any::<u64>(),
        ) {
            let grid = Grid::new(size).unwrap();
            let last = size - 1;
            let mut v = random_vector(grid, seed, 5.0);
            enforce_vector(&mut v);
            for k in 1..last {
                let (inner_x, inner_y) = v.get(1, k);
                prop_assert_eq!(v.get(0, k), (-inner_x, inner_y));
                let (inner_x, inner_y) = v.get(last - 1, k);
                prop_assert_eq!(v.get(last, k), (-inner_x, inner_y));
                let (inner_x, inner_y) = v.get(k, 1);
                prop_assert_eq!(v.get(k, 0), (inner_x, -inner_y));
                let (inner_x, inner_y) = v.get(k, last - 1);
                prop_assert_eq!(v.get(k, last), (inner_x, -inner_y));
            }
        }
    }
}
