//! Center-of-mass frame correction.
//!
//! Run once on the catalog's initial state before the first step. Applying it
//! again after integration has started gives a different trajectory.

use tracing::debug;

use crate::simulation::diagnostics::total_momentum;
use crate::simulation::states::State;

/// Shift every velocity by `-P/M` so the returned state carries zero net
/// momentum. Positions are copied unchanged.
pub fn correct(state: &State, masses: &[f64]) -> State {
    let p = total_momentum(state, masses);
    let m_tot: f64 = masses.iter().sum();
    let v_shift = p / m_tot;

    debug!(px = p.x, py = p.y, pz = p.z, "removing net momentum");

    State {
        x: state.x.clone(),
        v: state.v.iter().map(|v| v - v_shift).collect(),
    }
}
