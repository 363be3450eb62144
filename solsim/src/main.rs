use solsim::{bench_gravity, bench_run};
use solsim::{EnergyReport, Scenario, total_momentum};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Propagate the Sun and outer planets with a fixed-step symplectic integrator")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "outer_planets.yaml")]
    file_name: String,

    /// Use the compiled-in outer planet catalog instead of a file
    #[arg(long)]
    builtin: bool,

    /// Run the timing helpers and exit
    #[arg(long)]
    bench: bool,

    /// Play the trajectory back in a window (needs the `viewer` feature)
    #[arg(long)]
    view: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    if args.builtin {
        return Ok(Scenario::outer_planets());
    }
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    info!(path = %config_path.display(), "loading scenario");
    Ok(Scenario::load(&config_path)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_run()?;
        return Ok(());
    }

    let scenario = load_scenario(&args)?;
    let traj = scenario.run()?;

    if let Err(e) = traj.check_finite() {
        warn!("{e}");
    }

    let masses = scenario.catalog.masses();
    let energy = EnergyReport::from_trajectory(&traj, masses, scenario.parameters.g);
    let p_end = total_momentum(&traj.final_state(), masses);

    println!("states:        {}", traj.len());
    println!("final time:    {}", traj.time(traj.len() - 1));
    println!("energy drift:  {:.3e} (max {:.3e})", energy.final_rel_drift(), energy.max_rel_drift);
    println!("momentum:      {:.3e}", p_end.norm());
    for (body, x) in scenario.catalog.bodies().iter().zip(traj.positions_at(traj.len() - 1)) {
        println!("{:<10} [{:>12.6}, {:>12.6}, {:>12.6}]", body.name, x.x, x.y, x.z);
    }

    if args.view {
        view(&scenario, &traj)?;
    }

    Ok(())
}

#[cfg(feature = "viewer")]
fn view(scenario: &Scenario, traj: &solsim::Trajectory) -> Result<()> {
    let playback = scenario.playback_for(traj)?;
    solsim::run_viewer(traj, &scenario.catalog, &playback)?;
    Ok(())
}

#[cfg(not(feature = "viewer"))]
fn view(_scenario: &Scenario, _traj: &solsim::Trajectory) -> Result<()> {
    warn!("built without the `viewer` feature, skipping playback");
    Ok(())
}
