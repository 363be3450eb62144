use std::time::Instant;

use crate::configuration::config::IntegratorConfig;
use crate::error::SimResult;
use crate::simulation::forces::{Acceleration, NewtonianGravity, ParallelNewtonianGravity};
use crate::simulation::params::GAUSS_G;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;

/// Helper to build `n` deterministic positions and unit masses
fn make_bodies(n: usize) -> (Vec<NVec3>, Vec<f64>) {
    let x = (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            NVec3::new(
                (i_f * 0.37).sin() * 5.0 + i_f * 1e-3,
                (i_f * 0.13).cos() * 5.0,
                (i_f * 0.07).sin() * 5.0,
            )
        })
        .collect();
    (x, vec![1.0; n])
}

/// Time one evaluation of the sequential and the rayon force field
pub fn bench_gravity() {
    let ns = [6, 50, 200, 800, 1600];

    for n in ns {
        let (x, m) = make_bodies(n);
        let mut out = vec![NVec3::zeros(); n];

        let direct = NewtonianGravity { g: GAUSS_G };
        let par = ParallelNewtonianGravity { g: GAUSS_G };

        // Warm up
        direct.acceleration(&x, &m, &mut out);
        par.acceleration(&x, &m, &mut out);

        let t0 = Instant::now();
        direct.acceleration(&x, &m, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        par.acceleration(&x, &m, &mut out);
        let dt_par = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, sequential = {:8.6} s, parallel = {:8.6} s", dt_direct, dt_par);
    }
}

/// Time full outer-planet runs for each integrator
pub fn bench_run() -> SimResult<()> {
    let runs = 20;

    for method in [IntegratorConfig::SymplecticEuler, IntegratorConfig::Verlet] {
        let mut scenario = Scenario::outer_planets();
        scenario.engine.integrator = method;

        // Warm-up
        scenario.run()?;

        let t0 = Instant::now();
        for _ in 0..runs {
            scenario.run()?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / runs as f64;

        println!("{:?}: {} steps, {:8.4} ms per run", method, scenario.parameters.step_count(), ms);
    }
    Ok(())
}
