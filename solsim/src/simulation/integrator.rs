//! Fixed-step time integrators and the trajectory driver
//!
//! Provides the symplectic Euler step (the default) and a velocity-Verlet
//! step, both taking any [`Acceleration`] field, plus `integrate`, which runs
//! a whole fixed-length batch into a [`Trajectory`].

use tracing::info;

use super::forces::Acceleration;
use super::params::Parameters;
use super::states::{NVec3, State};
use super::trajectory::{Trajectory, TrajectoryBuffer};
use crate::configuration::config::IntegratorConfig;
use crate::error::{SimError, SimResult};

/// Advance one step with symplectic Euler:
///   x_n+1 = x_n + h v_n
///   v_n+1 = v_n + h a(x_n+1)
/// The force is evaluated at the updated position. Swapping the two lines
/// gives explicit Euler, which is not symplectic.
pub fn symplectic_euler_step<F>(state: &State, masses: &[f64], forces: &F, h: f64) -> State
where
    F: Acceleration + ?Sized,
{
    let n = state.len();

    // Drift: x_n+1 = x_n + h v_n
    let x1: Vec<NVec3> = state.x.iter().zip(&state.v).map(|(x, v)| x + h * v).collect();

    // a_n+1 from x_n+1
    let mut a = vec![NVec3::zeros(); n];
    forces.acceleration(&x1, masses, &mut a);

    // Kick: v_n+1 = v_n + h a_n+1
    let v1 = state.v.iter().zip(&a).map(|(v, a)| v + h * a).collect();

    State { x: x1, v: v1 }
}

/// Advance one step using velocity-Verlet (kick, drift, kick).
/// Two force evaluations per step.
pub fn velocity_verlet_step<F>(state: &State, masses: &[f64], forces: &F, h: f64) -> State
where
    F: Acceleration + ?Sized,
{
    let n = state.len();
    let half_h = 0.5 * h;

    // a_n from x_n
    let mut a_old = vec![NVec3::zeros(); n];
    forces.acceleration(&state.x, masses, &mut a_old);

    // Kick: v_n+1/2 = v_n + (h/2) a_n
    let v_half: Vec<NVec3> = state.v.iter().zip(&a_old).map(|(v, a)| v + half_h * a).collect();

    // Drift: x_n+1 = x_n + h v_n+1/2
    let x1: Vec<NVec3> = state.x.iter().zip(&v_half).map(|(x, v)| x + h * v).collect();

    // a_n+1 from x_n+1
    let mut a_new = vec![NVec3::zeros(); n];
    forces.acceleration(&x1, masses, &mut a_new);

    // Second kick: v_n+1 = v_n+1/2 + (h/2) a_n+1
    let v1 = v_half.iter().zip(&a_new).map(|(v, a)| v + half_h * a).collect();

    State { x: x1, v: v1 }
}

/// Run `params.step_count()` states starting from `initial`.
///
/// Entry 0 is `initial` exactly; entry k+1 is one step from entry k.
/// Setup is validated before any work: step parameters, body count, state
/// lengths and masses (positive and finite). Non-finite values produced along the
/// way are carried through to the end, not reported.
pub fn integrate<F>(
    initial: &State,
    masses: &[f64],
    params: &Parameters,
    method: IntegratorConfig,
    forces: &F,
) -> SimResult<Trajectory>
where
    F: Acceleration + ?Sized,
{
    params.validate()?;
    let n = masses.len();
    if n < 2 {
        return Err(SimError::config(format!("need at least 2 bodies, got {n}")));
    }
    if initial.x.len() != n || initial.v.len() != n {
        return Err(SimError::config(format!(
            "initial state has {} positions and {} velocities for {} masses",
            initial.x.len(),
            initial.v.len(),
            n
        )));
    }
    if let Some((i, m)) = masses.iter().enumerate().find(|(_, m)| !(m.is_finite() && **m > 0.0)) {
        return Err(SimError::config(format!("body {i} has non-positive mass {m}")));
    }

    let steps = params.step_count();
    if steps.checked_mul(n).is_none() {
        return Err(SimError::config(format!("{steps} steps of {n} bodies do not fit in memory")));
    }
    info!(bodies = n, steps, h = params.h, t_end = params.t_end, ?method, "starting integration");

    let mut buffer = TrajectoryBuffer::new(steps, n, params.h);
    buffer.push(initial);

    let mut state = initial.clone();
    for _ in 1..buffer.steps() {
        state = match method {
            IntegratorConfig::SymplecticEuler => symplectic_euler_step(&state, masses, forces, params.h),
            IntegratorConfig::Verlet => velocity_verlet_step(&state, masses, forces, params.h),
        };
        buffer.push(&state);
    }

    let traj = buffer.finish();
    info!(states = traj.len(), "integration finished");
    Ok(traj)
}
