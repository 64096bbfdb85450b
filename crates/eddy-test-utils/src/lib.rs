//! Test utilities for Eddy development.
//!
//! Seeded random fields for property tests and a tolerance helper for
//! comparing whole planes. Every generator is deterministic in its seed,
//! so a failing proptest case replays exactly.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use eddy_core::{Grid, ScalarField, VectorField};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn sample(rng: &mut ChaCha8Rng, amplitude: f64) -> f64 {
    if amplitude == 0.0 {
        return 0.0;
    }
    rng.random_range(-amplitude..amplitude)
}

/// Every cell, ring included, uniform in `(-amplitude, amplitude)`.
pub fn random_scalar(grid: Grid, seed: u64, amplitude: f64) -> ScalarField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    ScalarField::from_fn(grid, |_, _| sample(&mut rng, amplitude))
}

/// Both components of every cell uniform in `(-amplitude, amplitude)`.
pub fn random_vector(grid: Grid, seed: u64, amplitude: f64) -> VectorField {
    let x = random_scalar(grid, seed, amplitude);
    let y = random_scalar(grid, seed ^ 0x9E37_79B9_7F4A_7C15, amplitude);
    VectorField::from_components(x, y)
}

/// Random interior, zero ring.
pub fn random_interior_vector(grid: Grid, seed: u64, amplitude: f64) -> VectorField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cell = |i: usize, j: usize| {
        if grid.is_boundary(i, j) {
            0.0
        } else {
            sample(&mut rng, amplitude)
        }
    };
    let x = ScalarField::from_fn(grid, &mut cell);
    let y = ScalarField::from_fn(grid, &mut cell);
    VectorField::from_components(x, y)
}

/// Largest absolute cell difference between two planes on one grid.
pub fn max_abs_diff(a: &ScalarField, b: &ScalarField) -> f64 {
    assert_eq!(a.grid(), b.grid(), "max_abs_diff on different grids");
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
