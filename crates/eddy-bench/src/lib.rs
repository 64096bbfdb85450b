//! Benchmark profiles and utilities for the Eddy fluid solver.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), light viscosity and diffusion
//! - [`stress_profile`]: 316x316 grid (~100K cells) for stress testing
//! - [`plume_sites`]: deterministic interior source placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use eddy_core::OutOfRangeError;
use eddy_engine::{SimConfig, Simulation};

/// Build a reference benchmark profile: 100x100 grid (10K cells).
///
/// dt=0.1, diffusion and viscosity 1e-4, 20 Jacobi sweeps per solve.
pub fn reference_profile() -> SimConfig {
    SimConfig::new(100, 0.1, 1e-4, 1e-4, 20)
}

/// Build a stress benchmark profile: 316x316 grid (~100K cells).
///
/// Same parameters as [`reference_profile`] at 10x the cell count.
pub fn stress_profile() -> SimConfig {
    SimConfig {
        size: 316,
        ..reference_profile()
    }
}

/// Generate deterministic interior plume sites.
///
/// Places `n` sources at distinct interior cells of a `size x size` grid
/// using a simple hash of the seed. Returns `(i, j)` pairs.
pub fn plume_sites(size: usize, n: usize, seed: u64) -> Vec<(i32, i32)> {
    let inner = size.saturating_sub(2);
    let interior = inner * inner;
    let mut sites = Vec::with_capacity(n.min(interior));
    let mut occupied = std::collections::HashSet::new();

    for k in 0..n.min(interior) {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(k as u64 * 1442695040888963407)
            % interior as u64) as usize;

        // Linear probe to avoid collisions
        while occupied.contains(&pos) {
            pos = (pos + 1) % interior;
        }
        occupied.insert(pos);
        sites.push(((1 + pos / inner) as i32, (1 + pos % inner) as i32));
    }

    sites
}

/// Seed `sim` with `n` density plumes, each pushed along a fixed diagonal.
pub fn seed_plumes(sim: &mut Simulation, n: usize, seed: u64) -> Result<(), OutOfRangeError> {
    for (i, j) in plume_sites(sim.size(), n, seed) {
        sim.inject_density(i, j, 100.0)?;
        sim.inject_velocity(i, j, 0.5, 0.25)?;
    }
    Ok(())
}
