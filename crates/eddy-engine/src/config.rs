//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the constructor input for a [`Simulation`](crate::Simulation).
//! [`validate()`](SimConfig::validate) checks every parameter up front so a
//! simulation that exists is always runnable.

use std::error::Error;
use std::fmt;

use eddy_core::grid::MIN_GRID_SIZE;
use eddy_core::Grid;
use eddy_solver::TraceBounds;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Side length leaves no interior cell.
    GridTooSmall {
        /// The configured side length.
        size: usize,
    },
    /// `size * size` does not fit in `usize`.
    CellCountOverflow {
        /// The configured side length.
        size: usize,
    },
    /// `dt` is NaN, infinite, zero, or negative.
    InvalidTimeStep {
        /// The invalid value.
        value: f64,
    },
    /// Diffusion rate is NaN, infinite, or negative.
    InvalidDiffusion {
        /// The invalid value.
        value: f64,
    },
    /// Viscosity is NaN, infinite, or negative.
    InvalidViscosity {
        /// The invalid value.
        value: f64,
    },
    /// Solver iteration count is zero.
    ZeroIterations,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { size } => {
                write!(f, "grid size {size} is below minimum of {MIN_GRID_SIZE}")
            }
            Self::CellCountOverflow { size } => {
                write!(f, "grid size {size} squared overflows usize")
            }
            Self::InvalidTimeStep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::InvalidDiffusion { value } => {
                write!(f, "diffusion must be finite and >= 0, got {value}")
            }
            Self::InvalidViscosity { value } => {
                write!(f, "viscosity must be finite and >= 0, got {value}")
            }
            Self::ZeroIterations => write!(f, "iterations must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation.
///
/// All values are fixed for the lifetime of the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Side length of the square grid, boundary ring included. Minimum: 3.
    pub size: usize,
    /// Time step. Must be finite and positive.
    pub dt: f64,
    /// Density diffusion rate. Zero disables density diffusion.
    pub diffusion: f64,
    /// Kinematic viscosity. Zero disables velocity diffusion.
    pub viscosity: f64,
    /// Jacobi sweeps per linear solve. Minimum: 1.
    pub iterations: u32,
    /// Upper clamp for advection back-traces. Default: [`TraceBounds::Legacy`].
    pub trace_bounds: TraceBounds,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: 50,
            dt: 0.5,
            diffusion: 0.0,
            viscosity: 0.0,
            iterations: 8,
            trace_bounds: TraceBounds::Legacy,
        }
    }
}

impl SimConfig {
    /// Configuration from the five physical and numerical parameters, with
    /// the default trace bounds.
    pub fn new(size: usize, dt: f64, diffusion: f64, viscosity: f64, iterations: u32) -> Self {
        Self {
            size,
            dt,
            diffusion,
            viscosity,
            iterations,
            trace_bounds: TraceBounds::default(),
        }
    }

    /// Replace the advection trace bounds.
    pub fn with_trace_bounds(mut self, bounds: TraceBounds) -> Self {
        self.trace_bounds = bounds;
        self
    }

    /// Validate all parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid()?;
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep { value: self.dt });
        }
        if !self.diffusion.is_finite() || self.diffusion < 0.0 {
            return Err(ConfigError::InvalidDiffusion {
                value: self.diffusion,
            });
        }
        if !self.viscosity.is_finite() || self.viscosity < 0.0 {
            return Err(ConfigError::InvalidViscosity {
                value: self.viscosity,
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }

    /// The grid described by `size`.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        if self.size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall { size: self.size });
        }
        Grid::new(self.size).ok_or(ConfigError::CellCountOverflow { size: self.size })
    }
}
