//! Runtime engine settings
//!
//! Selects the integrator and whether the force field runs in parallel.

use crate::configuration::config::{EngineConfig, IntegratorConfig};
use crate::simulation::forces::{Acceleration, NewtonianGravity, ParallelNewtonianGravity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    pub integrator: IntegratorConfig, // symplectic euler or verlet
    pub parallel: bool, // false = sequential sums, true = rayon
}

impl Engine {
    pub fn from_config(cfg: &EngineConfig) -> Self {
        Self {
            integrator: cfg.integrator,
            parallel: cfg.parallel,
        }
    }

    /// Gravity field matching these settings
    pub fn force_field(&self, g: f64) -> Box<dyn Acceleration + Send + Sync> {
        if self.parallel {
            Box::new(ParallelNewtonianGravity { g })
        } else {
            Box::new(NewtonianGravity { g })
        }
    }
}
