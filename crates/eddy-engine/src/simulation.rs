//! The owned simulation state and its step loop.

use std::fmt;
use std::time::Instant;

use eddy_core::{FieldKind, Grid, OutOfRangeError, ScalarField, VectorField};
use eddy_solver::{
    advect, advect_velocity, diffuse, diffuse_velocity, divergence_map, kinetic_energy, project,
    total_density, total_divergence, JacobiSolver,
};
use log::{debug, info, trace, warn};

use crate::config::{ConfigError, SimConfig};
use crate::metrics::StepMetrics;
use crate::pipeline::Stage;

/// A 2D stable-fluids simulation on a closed box.
///
/// Owns density and velocity plus one scratch buffer for each, and a Jacobi
/// solver with its own back buffer. Every buffer is allocated once at
/// construction; `step()` and `reset()` never reallocate.
///
/// Between steps, the caller may add density and velocity with the
/// `inject_*` methods. [`step()`](Self::step) then advances both fields by
/// one time step:
///
/// 1. diffuse velocity into scratch
/// 2. project scratch, using the primary velocity planes as work space
/// 3. self-advect scratch back into the primary velocity
/// 4. project the primary velocity, using scratch as work space
/// 5. diffuse density into scratch
/// 6. advect scratch back into the primary density along the velocity
///
/// Independent simulations share nothing and may live side by side.
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    solver: JacobiSolver,
    density: ScalarField,
    density_scratch: ScalarField,
    velocity: VectorField,
    velocity_scratch: VectorField,
    step_count: u64,
    last_metrics: StepMetrics,
    warned_non_finite: bool,
}

impl Simulation {
    /// Construct a zeroed simulation from a [`SimConfig`].
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid()?;
        info!(
            "simulation created: size={} dt={} diffusion={} viscosity={} iterations={} trace_bounds={:?}",
            config.size,
            config.dt,
            config.diffusion,
            config.viscosity,
            config.iterations,
            config.trace_bounds,
        );
        Ok(Self {
            solver: JacobiSolver::new(grid, config.iterations),
            density: ScalarField::zeros(grid),
            density_scratch: ScalarField::zeros(grid),
            velocity: VectorField::zeros(grid),
            velocity_scratch: VectorField::zeros(grid),
            grid,
            config,
            step_count: 0,
            last_metrics: StepMetrics::default(),
            warned_non_finite: false,
        })
    }

    /// Construct from the five parameters with default trace bounds.
    pub fn with_params(
        size: usize,
        dt: f64,
        diffusion: f64,
        viscosity: f64,
        iterations: u32,
    ) -> Result<Self, ConfigError> {
        Self::new(SimConfig::new(size, dt, diffusion, viscosity, iterations))
    }

    // ── Stepping ───────────────────────────────────────────────────

    /// Advance the simulation by one time step.
    ///
    /// Never fails. A blow-up shows as non-finite cells, counted in
    /// [`StepMetrics::non_finite_cells`].
    pub fn step(&mut self) {
        let step_start = Instant::now();
        let mut metrics = StepMetrics::default();

        for stage in Stage::ALL {
            let stage_start = Instant::now();
            self.run_stage(stage, &mut metrics);
            let us = stage_start.elapsed().as_micros() as u64;
            trace!("step {} stage {stage}: {us}us", self.step_count + 1);
            metrics.stage_us.push((stage, us));
        }

        metrics.non_finite_cells = self.non_finite_cells();
        metrics.total_us = step_start.elapsed().as_micros() as u64;
        self.step_count += 1;

        if metrics.non_finite_cells > 0 && !self.warned_non_finite {
            warn!(
                "step {}: {} non-finite cells, simulation is unstable",
                self.step_count, metrics.non_finite_cells
            );
            self.warned_non_finite = true;
        }
        debug!(
            "step {}: {}us, divergence {:.6e} -> {:.6e}, density {:.6}",
            self.step_count,
            metrics.total_us,
            metrics.divergence_after_diffusion,
            metrics.divergence_after_projection,
            self.total_density(),
        );
        self.last_metrics = metrics;
    }

    fn run_stage(&mut self, stage: Stage, metrics: &mut StepMetrics) {
        let dt = self.config.dt;
        let bounds = self.config.trace_bounds;
        match stage {
            Stage::DiffuseVelocity => {
                diffuse_velocity(
                    &mut self.solver,
                    &mut self.velocity_scratch,
                    &self.velocity,
                    self.config.viscosity,
                    dt,
                );
                metrics.divergence_after_diffusion = total_divergence(&self.velocity_scratch);
            }
            Stage::ProjectDiffused => {
                let (p, div) = self.velocity.components_mut();
                project(&mut self.solver, &mut self.velocity_scratch, p, div);
            }
            Stage::AdvectVelocity => {
                advect_velocity(&mut self.velocity, &self.velocity_scratch, dt, bounds);
            }
            Stage::ProjectAdvected => {
                let (p, div) = self.velocity_scratch.components_mut();
                project(&mut self.solver, &mut self.velocity, p, div);
                metrics.divergence_after_projection = total_divergence(&self.velocity);
            }
            Stage::DiffuseDensity => {
                diffuse(
                    &mut self.solver,
                    FieldKind::Scalar,
                    &mut self.density_scratch,
                    &self.density,
                    self.config.diffusion,
                    dt,
                );
            }
            Stage::AdvectDensity => {
                advect(
                    FieldKind::Scalar,
                    &mut self.density,
                    &self.density_scratch,
                    &self.velocity,
                    dt,
                    bounds,
                );
            }
        }
    }

    /// Zero every field, the step counter, and the metrics.
    pub fn reset(&mut self) {
        self.density.fill(0.0);
        self.density_scratch.fill(0.0);
        self.velocity.clear();
        self.velocity_scratch.clear();
        self.step_count = 0;
        self.last_metrics = StepMetrics::default();
        self.warned_non_finite = false;
        info!("simulation reset: size={}", self.config.size);
    }

    // ── Injection ──────────────────────────────────────────────────

    /// Add `amount` to the density at `(i, j)`.
    ///
    /// Ring cells are accepted but get overwritten by the next step.
    pub fn inject_density(&mut self, i: i32, j: i32, amount: f64) -> Result<(), OutOfRangeError> {
        let (i, j) = self.grid.check(i, j)?;
        self.density.add(i, j, amount);
        Ok(())
    }

    /// Add `(dx, dy)` to the velocity at `(i, j)`.
    pub fn inject_velocity(
        &mut self,
        i: i32,
        j: i32,
        dx: f64,
        dy: f64,
    ) -> Result<(), OutOfRangeError> {
        let (i, j) = self.grid.check(i, j)?;
        self.velocity.add(i, j, dx, dy);
        Ok(())
    }

    /// Add `amount` to every cell of the inclusive rectangle `min..=max`.
    ///
    /// Both corners are checked before anything is written. An inverted
    /// rectangle (`min` past `max` on either axis) is reported against
    /// `min`.
    pub fn inject_density_region(
        &mut self,
        min: (i32, i32),
        max: (i32, i32),
        amount: f64,
    ) -> Result<(), OutOfRangeError> {
        let (i0, j0) = self.grid.check(min.0, min.1)?;
        let (i1, j1) = self.grid.check(max.0, max.1)?;
        if i0 > i1 || j0 > j1 {
            return Err(OutOfRangeError {
                i: min.0,
                j: min.1,
                size: self.grid.size(),
            });
        }
        for i in i0..=i1 {
            for j in j0..=j1 {
                self.density.add(i, j, amount);
            }
        }
        Ok(())
    }

    // ── Diagnostics ────────────────────────────────────────────────

    /// Sum of density over interior cells.
    pub fn total_density(&self) -> f64 {
        total_density(&self.density)
    }

    /// Per-cell central-difference divergence of the velocity.
    pub fn divergence_map(&self) -> ScalarField {
        divergence_map(&self.velocity)
    }

    /// Sum of absolute interior divergence of the velocity.
    pub fn total_divergence(&self) -> f64 {
        total_divergence(&self.velocity)
    }

    /// Mean interior kinetic energy, `0.5 * <vx^2 + vy^2>`.
    pub fn kinetic_energy(&self) -> f64 {
        kinetic_energy(&self.velocity)
    }

    /// Density and velocity values currently holding NaN or an infinity.
    pub fn non_finite_cells(&self) -> usize {
        self.density.non_finite_count() + self.velocity.non_finite_count()
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Current density.
    pub fn density(&self) -> &ScalarField {
        &self.density
    }

    /// Current velocity.
    pub fn velocity(&self) -> &VectorField {
        &self.velocity
    }

    /// Number of completed steps since construction or the last reset.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The validated configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The simulation grid.
    pub fn grid(&self) -> Grid {
        self.grid
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("step_count", &self.step_count)
            .field("total_density", &self.total_density())
            .field("total_divergence", &self.total_divergence())
            .finish()
    }
}
