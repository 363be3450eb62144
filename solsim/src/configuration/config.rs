//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator choice and whether forces run in parallel
//! - [`ParametersConfig`] – gravitational constant, step size and duration
//! - [`BodyConfig`]       – name, mass and initial state for each body
//! - [`PlaybackConfig`]   – optional host frame range and frame mapping
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "symplectic_euler"   # or "verlet"
//!   parallel: false
//!
//! parameters:
//!   G: 2.95912208286e-4    # AU^3 / (M_sun day^2)
//!   h: 100.0               # step size in days
//!   t_end: 36500.0         # total duration in days
//!
//! bodies:
//!   - name: Sun
//!     m: 1.00000597682
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!   - name: Jupiter
//!     m: 0.000954786104043
//!     x: [-3.5025, -4.1117, 0.0954]
//!     v: [0.00564, -0.00454, -0.000107]
//!
//! playback:
//!   frame_start: 0
//!   frame_end: 365
//!   mapping: identity      # or "stretch", or "stride" with `stride: 2`
//! ```
//!
//! `Scenario::from_config` validates this and turns it into runtime types.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimResult;

/// Which integrator the engine uses
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "symplectic_euler")] // Position first, then velocity from the new position. Symplectic, one force evaluation
    SymplecticEuler,

    #[serde(rename = "verlet")] // Velocity-Verlet. Symplectic, second order, two force evaluations
    Verlet,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig, // Time integrator used for advancing the system state
    #[serde(default)]
    pub parallel: bool, // `true` - per-body force sums run on the rayon pool
}

/// Physical and numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,     // gravitational constant
    pub h: f64,     // step size
    pub t_end: f64, // total duration
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // Unique name, also used to look up host objects
    pub m: f64,       // Mass of the body
    pub x: Vec<f64>,  // Initial position, 3 components
    pub v: Vec<f64>,  // Initial velocity, 3 components
}

/// How host frames pick trajectory entries
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MappingConfig {
    #[default]
    Identity, // frame n -> step n
    Stride, // frame n -> step n * stride
    Stretch, // spread the frame range over the whole trajectory
}

/// Playback range on the host side
#[derive(Deserialize, Debug, Clone)]
pub struct PlaybackConfig {
    #[serde(default)]
    pub frame_start: usize,
    pub frame_end: usize, // exclusive
    #[serde(default)]
    pub mapping: MappingConfig,
    #[serde(default)]
    pub stride: Option<usize>, // required by `mapping: stride`
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub playback: Option<PlaybackConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_yaml_file(path: &Path) -> SimResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
