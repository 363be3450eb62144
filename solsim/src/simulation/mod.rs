pub mod states;
pub mod params;
pub mod catalog;
pub mod frame;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod trajectory;
pub mod diagnostics;
pub mod scenario;
