//! Acceleration field for the n-body engine
//!
//! Direct Newtonian gravity, summed over ordered pairs `(i, j)` with `i != j`.
//! There is no softening: two bodies at the same position give a zero
//! distance and the division yields NaN/Inf, which is passed on unchanged.
//! Real orbital separations never get there.

use rayon::prelude::*;

use crate::simulation::states::NVec3;

/// Trait for acceleration sources
/// Implementations overwrite `out[i]` with the acceleration of body `i`
pub trait Acceleration {
    fn acceleration(&self, x: &[NVec3], masses: &[f64], out: &mut [NVec3]);
}

/// Direct O(N^2) Newtonian gravity, one body at a time
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, x: &[NVec3], masses: &[f64], out: &mut [NVec3]) {
        for (i, a) in out.iter_mut().enumerate() {
            *a = accel_on(i, x, masses, self.g);
        }
    }
}

/// Same field with the per-body sums spread over the rayon pool.
/// Each sum runs over `j` in the same order as [`NewtonianGravity`],
/// so both give bit-identical results.
#[derive(Debug, Clone, Copy)]
pub struct ParallelNewtonianGravity {
    pub g: f64,
}

impl Acceleration for ParallelNewtonianGravity {
    fn acceleration(&self, x: &[NVec3], masses: &[f64], out: &mut [NVec3]) {
        out.par_iter_mut()
            .enumerate()
            .for_each(|(i, a)| *a = accel_on(i, x, masses, self.g));
    }
}

/// Accelerations of all bodies at positions `x`
pub fn acceleration(x: &[NVec3], masses: &[f64], g: f64) -> Vec<NVec3> {
    let mut out = vec![NVec3::zeros(); x.len()];
    NewtonianGravity { g }.acceleration(x, masses, &mut out);
    out
}

/// a_i = -G * sum_{j != i} m_j * d_ij / |d_ij|^3, with d_ij = x_i - x_j
fn accel_on(i: usize, x: &[NVec3], masses: &[f64], g: f64) -> NVec3 {
    let xi = x[i];
    let mut sum = NVec3::zeros();

    for (j, (xj, mj)) in x.iter().zip(masses).enumerate() {
        // self pair would be 0/0
        if j == i {
            continue;
        }

        let d = xi - xj;
        let r = d.norm();
        let inv_r3 = 1.0 / (r * r * r);

        sum += d * (*mj * inv_r3);
    }

    -g * sum
}
