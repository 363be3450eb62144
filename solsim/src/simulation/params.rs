//! Numerical and physical parameters for a run
//!
//! `Parameters` holds:
//! - the gravitational constant `g`,
//! - the fixed step size `h`,
//! - the total duration `t_end`.

use crate::error::{SimError, SimResult};

/// G in AU^3 / (M_sun * day^2)
pub const GAUSS_G: f64 = 2.95912208286e-4;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub h: f64, // step size
    pub t_end: f64, // total duration
}

impl Parameters {
    /// Validated constructor. `h` and `t_end` must be positive and `g` finite.
    pub fn new(g: f64, h: f64, t_end: f64) -> SimResult<Self> {
        let p = Self { g, h, t_end };
        p.validate()?;
        Ok(p)
    }

    /// 100 day steps over 100 years
    pub fn outer_planets() -> Self {
        Self {
            g: GAUSS_G,
            h: 100.0,
            t_end: 100.0 * 365.0,
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        if !(self.h.is_finite() && self.h > 0.0) {
            return Err(SimError::config(format!("step size must be positive, got {}", self.h)));
        }
        if !(self.t_end.is_finite() && self.t_end > 0.0) {
            return Err(SimError::config(format!("duration must be positive, got {}", self.t_end)));
        }
        if !self.g.is_finite() {
            return Err(SimError::config(format!("gravitational constant must be finite, got {}", self.g)));
        }
        let steps = (self.t_end / self.h).ceil();
        // usize::MAX as f64 rounds up to 2^64
        if !steps.is_finite() || steps >= usize::MAX as f64 {
            return Err(SimError::config(format!(
                "duration {} over step size {} gives too many steps",
                self.t_end, self.h
            )));
        }
        Ok(())
    }

    /// Number of stored states: one per time in `0, h, 2h, ...` below `t_end`.
    /// Only meaningful once `validate` has passed.
    pub fn step_count(&self) -> usize {
        (self.t_end / self.h).ceil() as usize
    }
}
