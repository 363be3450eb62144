//! Conserved quantities, computed independently of the integrator.

use crate::simulation::states::{NVec3, State};
use crate::simulation::trajectory::Trajectory;

/// Total linear momentum `sum(m_i * v_i)`
pub fn total_momentum(state: &State, masses: &[f64]) -> NVec3 {
    state.v.iter().zip(masses).fold(NVec3::zeros(), |p, (v, m)| p + *m * v)
}

/// Mass-weighted mean position
pub fn center_of_mass(state: &State, masses: &[f64]) -> NVec3 {
    let m_tot: f64 = masses.iter().sum();
    state.x.iter().zip(masses).fold(NVec3::zeros(), |c, (x, m)| c + *m * x) / m_tot
}

pub fn kinetic_energy(state: &State, masses: &[f64]) -> f64 {
    state.v.iter().zip(masses).map(|(v, m)| 0.5 * m * v.norm_squared()).sum()
}

/// Pairwise Newtonian potential `-G m_i m_j / r_ij`, each pair counted once
pub fn potential_energy(state: &State, masses: &[f64], g: f64) -> f64 {
    let n = state.len();
    let mut u = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let r = (state.x[i] - state.x[j]).norm();
            u -= g * masses[i] * masses[j] / r;
        }
    }
    u
}

pub fn total_energy(state: &State, masses: &[f64], g: f64) -> f64 {
    kinetic_energy(state, masses) + potential_energy(state, masses, g)
}

/// Energy bookkeeping over a whole trajectory
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyReport {
    pub initial: f64,
    pub last: f64,
    pub max_rel_drift: f64, // max |E_k - E_0| / |E_0|
}

impl EnergyReport {
    pub fn from_trajectory(traj: &Trajectory, masses: &[f64], g: f64) -> Self {
        let initial = total_energy(&traj.state_at(0), masses, g);
        let mut last = initial;
        let mut max_rel_drift = 0.0_f64;

        for k in 0..traj.len() {
            last = total_energy(&traj.state_at(k), masses, g);
            let drift = ((last - initial) / initial).abs();
            // NaN must not hide behind max()
            if drift.is_nan() || drift > max_rel_drift {
                max_rel_drift = drift;
            }
        }

        Self { initial, last, max_rel_drift }
    }

    /// Relative change between the first and last stored states
    pub fn final_rel_drift(&self) -> f64 {
        ((self.last - self.initial) / self.initial).abs()
    }
}
