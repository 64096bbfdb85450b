//! Eddy: a stable-fluids 2D grid solver.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Eddy sub-crates. For most users, adding `eddy` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use eddy::prelude::*;
//!
//! let mut sim = Simulation::with_params(10, 0.5, 0.0, 0.0, 8).unwrap();
//! sim.inject_density(5, 5, 100.0).unwrap();
//! sim.inject_velocity(5, 5, 2.0, 2.0).unwrap();
//! sim.step();
//!
//! assert_eq!(sim.step_count(), 1);
//! assert!(sim.total_divergence() < 4.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `eddy-core` | Grid, scalar and vector fields, addressing errors |
//! | [`solver`] | `eddy-solver` | Boundary rule, Jacobi solver, diffusion, projection, advection, diagnostics |
//! | [`engine`] | `eddy-engine` | `Simulation`, configuration, step metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid and field types (`eddy-core`).
pub use eddy_core as types;

/// Numerical operators of the step (`eddy-solver`).
///
/// Use these directly to build a custom pipeline; [`engine::Simulation`]
/// already runs the standard one.
pub use eddy_solver as solver;

/// The owned simulation and its configuration (`eddy-engine`).
pub use eddy_engine as engine;

/// Common imports for typical Eddy usage.
///
/// ```rust
/// use eddy::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use eddy_core::{FieldKind, Grid, OutOfRangeError, ScalarField, VectorField};

    // Solver options
    pub use eddy_solver::TraceBounds;

    // Engine
    pub use eddy_engine::{ConfigError, SimConfig, Simulation, Stage, StepMetrics};
}
