//! Per-step metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and health data for a single step so
//! callers can profile the pipeline and catch instability early.

use smallvec::SmallVec;

use crate::pipeline::{Stage, STAGE_COUNT};

/// Timing and health metrics collected during a single step.
///
/// All durations are in microseconds. The simulation fills these in after
/// each `step()` call; read the latest with
/// [`Simulation::last_metrics()`](crate::Simulation::last_metrics).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Per-stage execution times in execution order.
    pub stage_us: SmallVec<[(Stage, u64); STAGE_COUNT]>,
    /// Total absolute divergence of the velocity right after viscous
    /// diffusion, before either projection.
    pub divergence_after_diffusion: f64,
    /// Total absolute divergence of the velocity after the final projection.
    pub divergence_after_projection: f64,
    /// Density and velocity values holding NaN or an infinity after the step.
    pub non_finite_cells: usize,
}

impl StepMetrics {
    /// Time spent in `stage`, if it ran.
    pub fn stage(&self, stage: Stage) -> Option<u64> {
        self.stage_us
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|&(_, us)| us)
    }
}
