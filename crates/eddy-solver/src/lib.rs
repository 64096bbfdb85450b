//! Numerical operators of the stable-fluids step.
//!
//! Every operator works on whole [`ScalarField`](eddy_core::ScalarField)
//! planes and leaves the boundary ring consistent on return:
//!
//! - [`boundary`]: closed-box free-slip rule (copy scalars, reflect the
//!   normal velocity component, average corners)
//! - [`linear`]: fixed-iteration Jacobi relaxation with ping-pong buffers
//! - [`diffusion`]: implicit diffusion built on the Jacobi solver
//! - [`projection`]: divergence removal via a pressure solve
//! - [`advection`]: semi-Lagrangian backward trace with bilinear sampling
//! - [`diagnostics`]: read-only measures (density, divergence, energy)

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod advection;
pub mod boundary;
pub mod diagnostics;
pub mod diffusion;
pub mod linear;
pub mod projection;

pub use advection::{advect, advect_velocity, TraceBounds};
pub use boundary::{enforce, enforce_vector};
pub use diagnostics::{divergence_map, kinetic_energy, total_density, total_divergence};
pub use diffusion::{diffuse, diffuse_velocity, DIFFUSION_CENTER_WEIGHT};
pub use linear::JacobiSolver;
pub use projection::{project, PRESSURE_CENTER_WEIGHT};
