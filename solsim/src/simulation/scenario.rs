//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the validated body catalog (`BodyCatalog`)
//! - optional host playback settings (`Playback`)
//!
//! All validation happens here, before any simulation work.

use std::path::Path;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::playback::mapping::Playback;
use crate::simulation::catalog::BodyCatalog;
use crate::simulation::engine::Engine;
use crate::simulation::frame;
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, State};
use crate::simulation::trajectory::Trajectory;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub catalog: BodyCatalog,
    pub playback: Option<Playback>,
}

impl Scenario {
    pub fn from_config(cfg: ScenarioConfig) -> SimResult<Self> {
        let n = cfg.bodies.len();
        let mut entries = Vec::with_capacity(n);
        let mut x = Vec::with_capacity(n);
        let mut v = Vec::with_capacity(n);

        // Bodies: map `BodyConfig` -> catalog entries using nalgebra vectors
        for bc in cfg.bodies {
            x.push(vec3(&bc, &bc.x, "position")?);
            v.push(vec3(&bc, &bc.v, "velocity")?);
            entries.push((bc.name, bc.m));
        }
        let catalog = BodyCatalog::new(entries, x, v)?;

        let p_cfg = cfg.parameters;
        let parameters = Parameters::new(p_cfg.g, p_cfg.h, p_cfg.t_end)?;

        let engine = Engine::from_config(&cfg.engine);

        let playback = cfg.playback.as_ref().map(Playback::from_config).transpose()?;

        Ok(Self {
            engine,
            parameters,
            catalog,
            playback,
        })
    }

    /// Read and validate a YAML scenario file
    pub fn load(path: &Path) -> SimResult<Self> {
        Self::from_config(ScenarioConfig::from_yaml_file(path)?)
    }

    /// Built-in Sun + outer planets run: 365 steps of 100 days
    pub fn outer_planets() -> Self {
        Self {
            engine: Engine::default(),
            parameters: Parameters::outer_planets(),
            catalog: BodyCatalog::outer_planets(),
            playback: None,
        }
    }

    /// Catalog state shifted into the center-of-mass frame
    pub fn initial_state(&self) -> State {
        frame::correct(self.catalog.initial_state(), self.catalog.masses())
    }

    /// Correct the initial state once, then integrate the full trajectory
    pub fn run(&self) -> SimResult<Trajectory> {
        self.parameters.validate()?;
        let initial = self.initial_state();
        let forces = self.engine.force_field(self.parameters.g);
        integrate(
            &initial,
            self.catalog.masses(),
            &self.parameters,
            self.engine.integrator,
            forces.as_ref(),
        )
    }

    /// Playback settings, defaulting to one frame per stored state
    pub fn playback_for(&self, traj: &Trajectory) -> SimResult<Playback> {
        match self.playback {
            Some(p) => Ok(p),
            None => Playback::one_to_one(traj.len()),
        }
    }
}

fn vec3(bc: &BodyConfig, comps: &[f64], what: &str) -> SimResult<NVec3> {
    match comps {
        [a, b, c] => Ok(NVec3::new(*a, *b, *c)),
        _ => Err(SimError::config(format!(
            "body '{}' {} needs 3 components, got {}",
            bc.name,
            what,
            comps.len()
        ))),
    }
}
