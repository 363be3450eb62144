use std::path::PathBuf;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use solsim::configuration::config::MappingConfig;
use solsim::simulation::diagnostics::{center_of_mass, kinetic_energy, potential_energy};
use solsim::{
    acceleration, bake_keyframes, correct, integrate, symplectic_euler_step, total_momentum, velocity_verlet_step,
};
use solsim::{
    Acceleration, BodyCatalog, EnergyReport, FrameMapping, FrameRange, IntegratorConfig, KeyframeHost, NVec3,
    NewtonianGravity, ParallelNewtonianGravity, Parameters, Playback, Scenario, ScenarioConfig, SimError, State,
};

/// Two bodies separated along the x-axis, at rest
pub fn two_body_positions(dist: f64) -> Vec<NVec3> {
    vec![NVec3::new(-dist / 2.0, 0.0, 0.0), NVec3::new(dist / 2.0, 0.0, 0.0)]
}

/// Equal masses on a circular orbit about their common center, G = 1,
/// separation 1. Returns the catalog and the orbital period.
pub fn circular_pair() -> (BodyCatalog, f64) {
    let (g, m, a): (f64, f64, f64) = (1.0, 1.0, 1.0);
    let v_rel = (g * 2.0 * m / a).sqrt();
    let period = 2.0 * std::f64::consts::PI * (a * a * a / (g * 2.0 * m)).sqrt();

    let catalog = BodyCatalog::new(
        vec![("A".to_string(), m), ("B".to_string(), m)],
        two_body_positions(a),
        vec![NVec3::new(0.0, -v_rel / 2.0, 0.0), NVec3::new(0.0, v_rel / 2.0, 0.0)],
    )
    .unwrap();
    (catalog, period)
}

fn names(n: usize) -> Vec<(String, f64)> {
    (0..n).map(|i| (format!("b{i}"), 1.0)).collect()
}

fn is_config_error<T: std::fmt::Debug>(r: Result<T, SimError>) -> bool {
    matches!(r, Err(SimError::Configuration(_)))
}

// ==================================================================================
// Catalog tests
// ==================================================================================

#[test]
fn catalog_rejects_mismatched_lengths() {
    let r = BodyCatalog::new(names(2), two_body_positions(1.0), vec![NVec3::zeros()]);
    assert!(is_config_error(r));
}

#[test]
fn catalog_rejects_non_positive_mass() {
    for m in [0.0, -1.0, f64::NAN] {
        let entries = vec![("a".to_string(), 1.0), ("b".to_string(), m)];
        let r = BodyCatalog::new(entries, two_body_positions(1.0), vec![NVec3::zeros(); 2]);
        assert!(is_config_error(r), "mass {m} accepted");
    }
}

#[test]
fn catalog_rejects_single_body() {
    let r = BodyCatalog::new(names(1), vec![NVec3::zeros()], vec![NVec3::zeros()]);
    assert!(is_config_error(r));
}

#[test]
fn catalog_rejects_duplicate_names() {
    let entries = vec![("a".to_string(), 1.0), ("a".to_string(), 2.0)];
    let r = BodyCatalog::new(entries, two_body_positions(1.0), vec![NVec3::zeros(); 2]);
    assert!(is_config_error(r));
}

#[test]
fn outer_planets_catalog_is_index_aligned() {
    let cat = BodyCatalog::outer_planets();
    assert_eq!(cat.len(), 6);
    assert_eq!(cat.initial_state().len(), 6);
    assert_eq!(cat.index_of("Neptune"), Some(4));
    assert_eq!(cat.index_of("Earth"), None);
    for (i, b) in cat.bodies().iter().enumerate() {
        assert_eq!(b.index, i);
        assert_eq!(cat.masses()[i], b.m);
    }
}

// ==================================================================================
// Parameter tests
// ==================================================================================

#[test]
fn parameters_reject_non_positive_step_and_duration() {
    assert!(is_config_error(Parameters::new(1.0, 0.0, 10.0)));
    assert!(is_config_error(Parameters::new(1.0, -1.0, 10.0)));
    assert!(is_config_error(Parameters::new(1.0, 1.0, 0.0)));
    assert!(is_config_error(Parameters::new(1.0, 1.0, -5.0)));
    assert!(is_config_error(Parameters::new(f64::NAN, 1.0, 5.0)));
}

#[test]
fn step_count_rounds_up() {
    assert_eq!(Parameters::outer_planets().step_count(), 365);
    assert_eq!(Parameters::new(1.0, 3.0, 10.0).unwrap().step_count(), 4);
    assert_eq!(Parameters::new(1.0, 5.0, 1.0).unwrap().step_count(), 1);
}

// ==================================================================================
// Frame correction tests
// ==================================================================================

#[test]
fn frame_correction_zeroes_momentum() {
    let cat = BodyCatalog::outer_planets();
    let before = cat.initial_state();
    let scale: f64 = before.v.iter().zip(cat.masses()).map(|(v, m)| m * v.norm()).sum();

    let after = correct(before, cat.masses());
    let p = total_momentum(&after, cat.masses());

    assert!(total_momentum(before, cat.masses()).norm() > 1e-7);
    assert!(p.norm() < 1e-12 * scale, "residual momentum {:?}", p);
}

#[test]
fn frame_correction_is_pure_and_keeps_positions() {
    let cat = BodyCatalog::outer_planets();
    let before = cat.initial_state().clone();
    let after = correct(&before, cat.masses());

    assert_eq!(&before, cat.initial_state());
    assert_eq!(after.x, before.x);
    // every velocity moved by the same shift
    let shift = after.v[0] - before.v[0];
    for (a, b) in after.v.iter().zip(&before.v) {
        assert_abs_diff_eq!(a - b, shift, epsilon = 1e-15);
    }
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let x = two_body_positions(1.0);
    let m = [2.0, 3.0];
    let acc = acceleration(&x, &m, 0.1);

    let net = acc[0] * m[0] + acc[1] * m[1];

    assert!(net.norm() < 1e-12 * (acc[0] * m[0]).norm(), "Net force not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let x = two_body_positions(2.0);
    let acc = acceleration(&x, &[1.0, 1.0], 0.1);

    let dx = x[1] - x[0];
    assert!(acc[0].dot(&dx) > 0.0, "Acceleration is not toward second body");
    assert!(acc[1].dot(&dx) < 0.0, "Acceleration is not toward first body");
}

#[test]
fn gravity_inverse_square_law() {
    let m = [1.0, 1.0];
    let acc_r = acceleration(&two_body_positions(1.0), &m, 0.1);
    let acc_2r = acceleration(&two_body_positions(2.0), &m, 0.1);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert_relative_eq!(ratio, 4.0, max_relative = 1e-12);
}

#[test]
fn gravity_matches_closed_form() {
    let (g, m0, m1, r) = (0.5, 3.0, 7.0, 2.0);
    let acc = acceleration(&two_body_positions(r), &[m0, m1], g);

    assert_relative_eq!(acc[0].x, g * m1 / (r * r), max_relative = 1e-14);
    assert_relative_eq!(acc[1].x, -g * m0 / (r * r), max_relative = 1e-14);
    assert_eq!(acc[0].y, 0.0);
    assert_eq!(acc[0].z, 0.0);
}

#[test]
fn gravity_sums_over_all_other_bodies() {
    // middle body is pulled equally both ways
    let x = vec![NVec3::new(-1.0, 0.0, 0.0), NVec3::zeros(), NVec3::new(1.0, 0.0, 0.0)];
    let acc = acceleration(&x, &[1.0, 1.0, 1.0], 1.0);

    assert_abs_diff_eq!(acc[1].norm(), 0.0, epsilon = 1e-15);
    // outer body: 1/1 + 1/4 toward the center
    assert_relative_eq!(acc[0].x, 1.25, max_relative = 1e-14);
}

#[test]
fn coincident_bodies_give_non_finite_acceleration() {
    let x = vec![NVec3::new(1.0, 2.0, 3.0), NVec3::new(1.0, 2.0, 3.0)];
    let acc = acceleration(&x, &[1.0, 1.0], 1.0);

    for a in &acc {
        assert!(a.iter().any(|c| !c.is_finite()), "expected NaN/Inf, got {:?}", a);
    }
}

#[test]
fn parallel_gravity_is_bit_identical() {
    let cat = BodyCatalog::outer_planets();
    let x = &cat.initial_state().x;
    let mut seq = vec![NVec3::zeros(); cat.len()];
    let mut par = vec![NVec3::zeros(); cat.len()];

    NewtonianGravity { g: 1.0 }.acceleration(x, cat.masses(), &mut seq);
    ParallelNewtonianGravity { g: 1.0 }.acceleration(x, cat.masses(), &mut par);

    assert_eq!(seq, par);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn symplectic_euler_step_is_deterministic() {
    let scenario = Scenario::outer_planets();
    let s0 = scenario.initial_state();
    let gravity = NewtonianGravity { g: scenario.parameters.g };

    let a = symplectic_euler_step(&s0, scenario.catalog.masses(), &gravity, 100.0);
    let b = symplectic_euler_step(&s0, scenario.catalog.masses(), &gravity, 100.0);

    assert_eq!(a, b);
}

#[test]
fn symplectic_euler_kicks_with_force_at_new_position() {
    let x0 = two_body_positions(1.0);
    let v0 = vec![NVec3::new(0.0, -0.3, 0.0), NVec3::new(0.0, 0.3, 0.0)];
    let m = [1.0, 1.0];
    let h = 0.1;
    let s0 = State::new(x0.clone(), v0.clone());

    let s1 = symplectic_euler_step(&s0, &m, &NewtonianGravity { g: 1.0 }, h);

    let x1: Vec<NVec3> = x0.iter().zip(&v0).map(|(x, v)| x + h * v).collect();
    let a1 = acceleration(&x1, &m, 1.0);
    let a0 = acceleration(&x0, &m, 1.0);

    assert_eq!(s1.x, x1);
    for i in 0..2 {
        assert_eq!(s1.v[i], v0[i] + h * a1[i]);
        assert_ne!(s1.v[i], v0[i] + h * a0[i]);
    }
}

#[test]
fn reference_run_has_365_states_starting_at_corrected_state() {
    let scenario = Scenario::outer_planets();
    let traj = scenario.run().unwrap();

    assert_eq!(traj.len(), 365);
    assert_eq!(traj.body_count(), 6);
    assert_eq!(traj.state_at(0), scenario.initial_state());
    assert_eq!(traj.time(0), 0.0);
    assert_eq!(traj.time(364), 36400.0);
    traj.check_finite().unwrap();
}

#[test]
fn integrate_rejects_bad_parameters_before_running() {
    let cat = BodyCatalog::outer_planets();
    let s0 = correct(cat.initial_state(), cat.masses());
    let gravity = NewtonianGravity { g: 1.0 };

    for (h, t_end) in [(0.0, 100.0), (-1.0, 100.0), (1.0, 0.0), (1.0, -3.0)] {
        let p = Parameters { g: 1.0, h, t_end };
        let r = integrate(&s0, cat.masses(), &p, IntegratorConfig::SymplecticEuler, &gravity);
        assert!(is_config_error(r), "h={h} t_end={t_end} accepted");
    }

    let p = Parameters { g: 1.0, h: 1.0, t_end: 10.0 };
    let r = integrate(&s0, &cat.masses()[..5], &p, IntegratorConfig::SymplecticEuler, &gravity);
    assert!(is_config_error(r));
}

#[test]
fn integrate_rejects_step_counts_that_cannot_be_stored() {
    let cat = BodyCatalog::outer_planets();
    let s0 = correct(cat.initial_state(), cat.masses());
    let gravity = NewtonianGravity { g: 1.0 };

    // positive and finite, but t_end / h overflows usize
    assert!(is_config_error(Parameters::new(1.0, 1e-300, 1.0)));

    let p = Parameters { g: 1.0, h: 1e-300, t_end: 1.0 };
    let r = integrate(&s0, cat.masses(), &p, IntegratorConfig::SymplecticEuler, &gravity);
    assert!(is_config_error(r));

    // fits in usize on its own, overflows once multiplied by the body count
    let p = Parameters { g: 1.0, h: 1.0, t_end: (usize::MAX / 4) as f64 };
    let r = integrate(&s0, cat.masses(), &p, IntegratorConfig::SymplecticEuler, &gravity);
    assert!(is_config_error(r));
}

#[test]
fn integrate_rejects_non_positive_masses() {
    let cat = BodyCatalog::outer_planets();
    let s0 = correct(cat.initial_state(), cat.masses());
    let gravity = NewtonianGravity { g: 1.0 };
    let p = Parameters { g: 1.0, h: 1.0, t_end: 10.0 };

    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let mut masses = cat.masses().to_vec();
        masses[3] = bad;
        let r = integrate(&s0, &masses, &p, IntegratorConfig::SymplecticEuler, &gravity);
        assert!(is_config_error(r), "mass {bad} accepted");
    }
}

#[test]
fn energy_drift_stays_bounded_over_reference_run() {
    let scenario = Scenario::outer_planets();
    let traj = scenario.run().unwrap();

    let report = EnergyReport::from_trajectory(&traj, scenario.catalog.masses(), scenario.parameters.g);

    assert!(report.initial < 0.0);
    // First order method at ~43 steps per Jupiter orbit. The energy error oscillates
    // with a measured peak of about 1.18% over this run, so 1% would be too tight;
    // explicit Euler (kick with the old position) drifts by about 72% here.
    assert!(report.max_rel_drift < 0.02, "energy drift {}", report.max_rel_drift);
}

#[test]
fn verlet_energy_drift_is_smaller() {
    let mut scenario = Scenario::outer_planets();
    scenario.engine.integrator = IntegratorConfig::Verlet;
    let traj = scenario.run().unwrap();

    let report = EnergyReport::from_trajectory(&traj, scenario.catalog.masses(), scenario.parameters.g);

    assert!(report.max_rel_drift < 0.005, "energy drift {}", report.max_rel_drift);
}

#[test]
fn momentum_and_center_of_mass_hold_over_run() {
    let scenario = Scenario::outer_planets();
    let traj = scenario.run().unwrap();
    let masses = scenario.catalog.masses();
    let scale: f64 = traj.velocities_at(0).iter().zip(masses).map(|(v, m)| m * v.norm()).sum();

    let com0 = center_of_mass(&traj.state_at(0), masses);
    for k in [1, 100, 364] {
        let s = traj.state_at(k);
        assert!(total_momentum(&s, masses).norm() < 1e-10 * scale);
        assert_abs_diff_eq!(center_of_mass(&s, masses), com0, epsilon = 1e-10);
    }
}

#[test]
fn circular_orbit_returns_after_one_period() {
    let (cat, period) = circular_pair();
    let h = period / 1000.0;
    let p = Parameters::new(1.0, h, period + 0.5 * h).unwrap();
    let s0 = correct(cat.initial_state(), cat.masses());

    let traj = integrate(&s0, cat.masses(), &p, IntegratorConfig::SymplecticEuler, &NewtonianGravity { g: 1.0 })
        .unwrap();

    assert_eq!(traj.len(), 1001);
    assert_relative_eq!(traj.time(1000), period, max_relative = 1e-12);
    for i in 0..2 {
        let err = (traj.positions_at(1000)[i] - s0.x[i]).norm();
        assert!(err < 1e-3, "body {i} off by {err}");
    }
    // half a period later the bodies have swapped sides
    assert_abs_diff_eq!(traj.positions_at(500)[0], s0.x[1], epsilon = 1e-2);
}

#[test]
fn velocity_verlet_step_is_time_reversible() {
    let (cat, _) = circular_pair();
    let s0 = cat.initial_state().clone();
    let gravity = NewtonianGravity { g: 1.0 };

    let s1 = velocity_verlet_step(&s0, cat.masses(), &gravity, 0.01);
    let back = velocity_verlet_step(&State::new(s1.x, s1.v.iter().map(|v| -v).collect()), cat.masses(), &gravity, 0.01);

    for i in 0..2 {
        assert_abs_diff_eq!(back.x[i], s0.x[i], epsilon = 1e-14);
        assert_abs_diff_eq!(-back.v[i], s0.v[i], epsilon = 1e-14);
    }
}

#[test]
fn singularity_propagates_through_trajectory() {
    let cat = BodyCatalog::new(
        names(2),
        vec![NVec3::new(1.0, 1.0, 1.0); 2],
        vec![NVec3::zeros(); 2],
    )
    .unwrap();
    let p = Parameters::new(1.0, 0.1, 1.0).unwrap();

    let traj = integrate(cat.initial_state(), cat.masses(), &p, IntegratorConfig::SymplecticEuler, &NewtonianGravity { g: 1.0 })
        .unwrap();

    assert_eq!(traj.len(), 10);
    assert!(traj.state_at(0).is_finite());
    assert!(!traj.final_state().is_finite());
    assert!(matches!(traj.check_finite(), Err(SimError::NumericalDegeneracy { step: 1, body: 0 })));
}

// ==================================================================================
// Engine / trajectory tests
// ==================================================================================

#[test]
fn parallel_engine_gives_identical_trajectory() {
    let seq = Scenario::outer_planets();
    let mut par = Scenario::outer_planets();
    par.engine.parallel = true;

    assert_eq!(seq.run().unwrap(), par.run().unwrap());
}

#[test]
fn track_follows_one_body() {
    let traj = Scenario::outer_planets().run().unwrap();

    let jupiter: Vec<&NVec3> = traj.track(1).collect();
    assert_eq!(jupiter.len(), traj.len());
    assert_eq!(*jupiter[42], traj.positions_at(42)[1]);
    assert_eq!(traj.times()[7], 700.0);
}

// ==================================================================================
// Config tests
// ==================================================================================

const TWO_BODY_YAML: &str = r#"
parameters:
  G: 1.0
  h: 0.01
  t_end: 1.0
bodies:
  - name: A
    m: 1.0
    x: [-0.5, 0.0, 0.0]
    v: [0.0, -0.5, 0.0]
  - name: B
    m: 1.0
    x: [0.5, 0.0, 0.0]
    v: [0.0, 0.5, 0.0]
"#;

#[test]
fn yaml_scenario_uses_defaults() {
    let cfg = ScenarioConfig::from_yaml_str(TWO_BODY_YAML).unwrap();
    let scenario = Scenario::from_config(cfg).unwrap();

    assert_eq!(scenario.engine.integrator, IntegratorConfig::SymplecticEuler);
    assert!(!scenario.engine.parallel);
    assert!(scenario.playback.is_none());
    assert_eq!(scenario.parameters.step_count(), 100);
    assert_eq!(scenario.run().unwrap().len(), 100);
}

#[test]
fn yaml_scenario_rejects_bad_vectors_and_params() {
    let short = TWO_BODY_YAML.replace("[0.5, 0.0, 0.0]", "[0.5, 0.0]");
    let cfg = ScenarioConfig::from_yaml_str(&short).unwrap();
    assert!(is_config_error(Scenario::from_config(cfg)));

    let zero_step = TWO_BODY_YAML.replace("h: 0.01", "h: 0.0");
    let cfg = ScenarioConfig::from_yaml_str(&zero_step).unwrap();
    assert!(is_config_error(Scenario::from_config(cfg)));

    assert!(matches!(ScenarioConfig::from_yaml_str("bodies: 3"), Err(SimError::Yaml(_))));
}

#[test]
fn yaml_playback_section() {
    let yaml = format!("{TWO_BODY_YAML}playback:\n  frame_end: 50\n  mapping: stride\n  stride: 2\n");
    let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();
    assert_eq!(cfg.playback.as_ref().unwrap().mapping, MappingConfig::Stride);

    let scenario = Scenario::from_config(cfg).unwrap();
    let playback = scenario.playback.unwrap();
    assert_eq!(playback.range, FrameRange { start: 0, end: 50 });
    assert_eq!(playback.mapping, FrameMapping::Stride(2));

    let missing = format!("{TWO_BODY_YAML}playback:\n  frame_end: 50\n  mapping: stride\n");
    let cfg = ScenarioConfig::from_yaml_str(&missing).unwrap();
    assert!(is_config_error(Scenario::from_config(cfg)));

    let empty = format!("{TWO_BODY_YAML}playback:\n  frame_start: 5\n  frame_end: 5\n");
    let cfg = ScenarioConfig::from_yaml_str(&empty).unwrap();
    assert!(is_config_error(Scenario::from_config(cfg)));
}

#[test]
fn bundled_scenario_matches_builtin() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join("outer_planets.yaml");
    let from_file = Scenario::load(&path).unwrap();
    let builtin = Scenario::outer_planets();

    assert_eq!(from_file.parameters, builtin.parameters);
    assert_eq!(from_file.catalog.masses(), builtin.catalog.masses());
    assert_eq!(from_file.run().unwrap(), builtin.run().unwrap());
}

// ==================================================================================
// Playback tests
// ==================================================================================

#[derive(Debug, PartialEq)]
enum HostEvent {
    Clear(String),
    Frame(usize),
    Location(String, NVec3),
    Keyframe(String),
}

#[derive(Default)]
struct RecordingHost {
    events: Vec<HostEvent>,
}

impl KeyframeHost for RecordingHost {
    type Handle = String;

    fn clear_animation(&mut self, handle: &String) {
        self.events.push(HostEvent::Clear(handle.clone()));
    }

    fn set_frame(&mut self, frame: usize) {
        self.events.push(HostEvent::Frame(frame));
    }

    fn set_location(&mut self, handle: &String, location: NVec3) {
        self.events.push(HostEvent::Location(handle.clone(), location));
    }

    fn insert_keyframe(&mut self, handle: &String) {
        self.events.push(HostEvent::Keyframe(handle.clone()));
    }
}

#[test]
fn identity_mapping_stops_at_trajectory_end() {
    let range = FrameRange::new(0, 400).unwrap();
    let m = FrameMapping::Identity;

    assert_eq!(m.index(0, &range, 365), Some(0));
    assert_eq!(m.index(364, &range, 365), Some(364));
    assert_eq!(m.index(365, &range, 365), None);
    assert_eq!(m.index(400, &range, 365), None);
}

#[test]
fn mappings_count_from_range_start() {
    let range = FrameRange::new(10, 20).unwrap();

    assert_eq!(FrameMapping::Identity.index(12, &range, 365), Some(2));
    assert_eq!(FrameMapping::Stride(3).index(12, &range, 365), Some(6));
    assert_eq!(FrameMapping::Stretch.index(10, &range, 365), Some(0));
    assert_eq!(FrameMapping::Stretch.index(19, &range, 365), Some(364));
    assert_eq!(FrameMapping::Identity.index(9, &range, 365), None);
    assert!(FrameRange::new(3, 3).is_err());
}

#[test]
fn bake_writes_one_keyframe_per_body_per_frame() {
    let scenario = Scenario::outer_planets();
    let traj = scenario.run().unwrap();
    let playback = Playback {
        range: FrameRange::new(0, 400).unwrap(),
        mapping: FrameMapping::Identity,
    };
    let mut host = RecordingHost::default();

    let summary = bake_keyframes(&mut host, &traj, &scenario.catalog, &playback, |b| Some(b.name.clone())).unwrap();

    assert_eq!(summary.frames_written, 365);
    assert_eq!(summary.frames_skipped, 35);

    let count = |f: fn(&HostEvent) -> bool| host.events.iter().filter(|e| f(e)).count();
    assert_eq!(count(|e| matches!(e, HostEvent::Clear(_))), 6);
    assert_eq!(count(|e| matches!(e, HostEvent::Frame(_))), 365);
    assert_eq!(count(|e| matches!(e, HostEvent::Keyframe(_))), 365 * 6);

    // frame 10 block: Frame(10) then (Location, Keyframe) per body in catalog order
    let at = host.events.iter().position(|e| *e == HostEvent::Frame(10)).unwrap();
    assert_eq!(host.events[at + 3], HostEvent::Location("Jupiter".to_string(), traj.positions_at(10)[1]));
    assert_eq!(host.events[at + 4], HostEvent::Keyframe("Jupiter".to_string()));
}

#[test]
fn bake_fails_before_touching_host_when_object_missing() {
    let scenario = Scenario::outer_planets();
    let traj = scenario.run().unwrap();
    let playback = Playback::one_to_one(traj.len()).unwrap();
    let mut host = RecordingHost::default();

    let r = bake_keyframes(&mut host, &traj, &scenario.catalog, &playback, |b| {
        (b.name != "Pluto").then(|| b.name.clone())
    });

    assert!(is_config_error(r));
    assert!(host.events.is_empty());
}

// ==================================================================================
// Diagnostics tests
// ==================================================================================

#[test]
fn two_body_energy_closed_form() {
    let s = State::new(two_body_positions(2.0), vec![NVec3::new(0.0, 1.0, 0.0), NVec3::zeros()]);
    let m = [3.0, 4.0];

    assert_relative_eq!(kinetic_energy(&s, &m), 1.5, max_relative = 1e-15);
    assert_relative_eq!(potential_energy(&s, &m, 0.5), -3.0, max_relative = 1e-15);
}
