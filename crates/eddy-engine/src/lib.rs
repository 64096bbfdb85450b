//! Simulation engine for the Eddy fluid solver.
//!
//! [`Simulation`] owns the density and velocity fields with their scratch
//! buffers and advances them one stable-fluids step at a time. It is built
//! from a validated [`SimConfig`] and reports per-step [`StepMetrics`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod pipeline;
pub mod simulation;

pub use config::{ConfigError, SimConfig};
pub use metrics::StepMetrics;
pub use pipeline::{Stage, STAGE_COUNT};
pub use simulation::Simulation;
