pub mod error;
pub mod simulation;
pub mod configuration;
pub mod playback;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, State, NVec3};
pub use simulation::catalog::BodyCatalog;
pub use simulation::params::{Parameters, GAUSS_G};
pub use simulation::frame::correct;
pub use simulation::forces::{acceleration, Acceleration, NewtonianGravity, ParallelNewtonianGravity};
pub use simulation::integrator::{integrate, symplectic_euler_step, velocity_verlet_step};
pub use simulation::trajectory::Trajectory;
pub use simulation::diagnostics::{total_energy, total_momentum, EnergyReport};
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, BodyConfig, PlaybackConfig, ScenarioConfig};

pub use playback::mapping::{FrameMapping, FrameRange, Playback};
pub use playback::keyframes::{bake_keyframes, BakeSummary, KeyframeHost};

#[cfg(feature = "viewer")]
pub use visualization::viewer::run_viewer;

pub use benchmark::benchmark::{bench_gravity, bench_run};
