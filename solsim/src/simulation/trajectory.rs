//! Trajectory storage.
//!
//! `TrajectoryBuffer` is the preallocated `steps x N` store the integrator
//! fills; it is crate-private. Once every slot is written it is frozen into a
//! `Trajectory`, the read-only value handed to consumers.

use tracing::warn;

use crate::error::{SimError, SimResult};
use crate::simulation::states::{NVec3, State};

/// Write side, owned by the integrator for the duration of a run
#[derive(Debug)]
pub(crate) struct TrajectoryBuffer {
    n: usize,
    h: f64,
    x: Vec<NVec3>,
    v: Vec<NVec3>,
    filled: usize,
}

impl TrajectoryBuffer {
    pub(crate) fn new(steps: usize, n: usize, h: f64) -> Self {
        Self {
            n,
            h,
            x: vec![NVec3::zeros(); steps * n],
            v: vec![NVec3::zeros(); steps * n],
            filled: 0,
        }
    }

    pub(crate) fn steps(&self) -> usize {
        self.x.len() / self.n
    }

    /// Append the next state in chronological order
    pub(crate) fn push(&mut self, state: &State) {
        debug_assert_eq!(state.len(), self.n);
        debug_assert!(self.filled < self.steps());

        let lo = self.filled * self.n;
        let hi = lo + self.n;
        self.x[lo..hi].copy_from_slice(&state.x);
        self.v[lo..hi].copy_from_slice(&state.v);
        self.filled += 1;
    }

    pub(crate) fn finish(self) -> Trajectory {
        debug_assert_eq!(self.filled, self.steps());

        let times = (0..self.filled).map(|k| k as f64 * self.h).collect();
        Trajectory {
            n: self.n,
            times,
            x: self.x,
            v: self.v,
        }
    }
}

/// Complete, immutable run output: for each time `t_k = k * h`, one position
/// and one velocity per body, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    n: usize,
    times: Vec<f64>,
    x: Vec<NVec3>,
    v: Vec<NVec3>,
}

impl Trajectory {
    /// Number of stored states
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn body_count(&self) -> usize {
        self.n
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn time(&self, k: usize) -> f64 {
        self.times[k]
    }

    /// Positions of every body at step `k`
    pub fn positions_at(&self, k: usize) -> &[NVec3] {
        &self.x[k * self.n..(k + 1) * self.n]
    }

    pub fn velocities_at(&self, k: usize) -> &[NVec3] {
        &self.v[k * self.n..(k + 1) * self.n]
    }

    pub fn state_at(&self, k: usize) -> State {
        State::new(self.positions_at(k).to_vec(), self.velocities_at(k).to_vec())
    }

    pub fn final_state(&self) -> State {
        self.state_at(self.len() - 1)
    }

    /// Position history of body `i`
    pub fn track(&self, i: usize) -> impl Iterator<Item = &NVec3> + '_ {
        self.x.iter().skip(i).step_by(self.n)
    }

    /// Post-hoc scan for NaN/Inf. Reports the first offending step and body.
    pub fn check_finite(&self) -> SimResult<()> {
        let bad = self
            .x
            .iter()
            .zip(&self.v)
            .position(|(x, v)| !(x.iter().all(|c| c.is_finite()) && v.iter().all(|c| c.is_finite())));

        match bad {
            None => Ok(()),
            Some(idx) => {
                let (step, body) = (idx / self.n, idx % self.n);
                warn!(step, body, "trajectory contains non-finite values");
                Err(SimError::NumericalDegeneracy { step, body })
            }
        }
    }
}
