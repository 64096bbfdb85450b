//! The fixed stage order of one simulation step.

use std::fmt;

/// Number of stages in one step.
pub const STAGE_COUNT: usize = 6;

/// One stage of the stable-fluids step.
///
/// Stages always run in [`Stage::ALL`] order with a hard barrier between
/// them: each consumes the complete output of the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Diffuse velocity into the velocity scratch buffer.
    DiffuseVelocity,
    /// Project the diffused velocity.
    ProjectDiffused,
    /// Self-advect velocity back into the primary buffer.
    AdvectVelocity,
    /// Project the advected velocity.
    ProjectAdvected,
    /// Diffuse density into the density scratch buffer.
    DiffuseDensity,
    /// Advect density back into the primary buffer along the velocity.
    AdvectDensity,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; STAGE_COUNT] = [
        Stage::DiffuseVelocity,
        Stage::ProjectDiffused,
        Stage::AdvectVelocity,
        Stage::ProjectAdvected,
        Stage::DiffuseDensity,
        Stage::AdvectDensity,
    ];

    /// Short stable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DiffuseVelocity => "diffuse_velocity",
            Self::ProjectDiffused => "project_diffused",
            Self::AdvectVelocity => "advect_velocity",
            Self::ProjectAdvected => "project_advected",
            Self::DiffuseDensity => "diffuse_density",
            Self::AdvectDensity => "advect_density",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
