use std::collections::BTreeMap;

use bevy::math::primitives::{Cuboid, Sphere};
use bevy::prelude::*;

use crate::error::SimResult;
use crate::playback::keyframes::{bake_keyframes, BakeSummary, KeyframeHost};
use crate::playback::mapping::Playback;
use crate::simulation::catalog::BodyCatalog;
use crate::simulation::states::NVec3;
use crate::simulation::trajectory::Trajectory;

/// Component tagging each sphere with its catalog index
#[derive(Component)]
struct BodyIndex(pub usize);

/// AU -> screen units
const SCALE3D: f32 = 10.0;

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 900.0;

/// Host frames shown per second
const FRAMES_PER_SECOND: f32 = 30.0;

/// In-memory animation host: per frame, one location per body.
/// Handles are catalog indices.
#[derive(Resource, Debug, Default)]
pub struct FrameTable {
    current: usize,
    pending: Vec<Option<Vec3>>,
    frames: BTreeMap<usize, Vec<Option<Vec3>>>,
}

impl FrameTable {
    fn new(bodies: usize) -> Self {
        Self {
            current: 0,
            pending: vec![None; bodies],
            frames: BTreeMap::new(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Keyed frames in host order
    pub fn frame_numbers(&self) -> Vec<usize> {
        self.frames.keys().copied().collect()
    }

    pub fn location(&self, frame: usize, body: usize) -> Option<Vec3> {
        self.frames.get(&frame).and_then(|f| f.get(body).copied().flatten())
    }
}

impl KeyframeHost for FrameTable {
    type Handle = usize;

    fn clear_animation(&mut self, handle: &usize) {
        for f in self.frames.values_mut() {
            f[*handle] = None;
        }
    }

    fn set_frame(&mut self, frame: usize) {
        self.current = frame;
    }

    fn set_location(&mut self, handle: &usize, location: NVec3) {
        self.pending[*handle] = Some(Vec3::new(location.x as f32, location.y as f32, location.z as f32));
    }

    fn insert_keyframe(&mut self, handle: &usize) {
        let n = self.pending.len();
        let keyed = self.frames.entry(self.current).or_insert_with(|| vec![None; n]);
        keyed[*handle] = self.pending[*handle];
    }
}

/// Bake `traj` into a frame table through `playback`
pub fn bake_frame_table(
    traj: &Trajectory,
    catalog: &BodyCatalog,
    playback: &Playback,
) -> SimResult<(FrameTable, BakeSummary)> {
    let mut table = FrameTable::new(catalog.len());
    let summary = bake_keyframes(&mut table, traj, catalog, playback, |b| Some(b.index))?;
    Ok((table, summary))
}

#[derive(Resource)]
struct BodyMasses(Vec<f64>);

#[derive(Resource)]
struct PlaybackClock {
    frames: Vec<usize>,
    elapsed: f32,
}

/// Play a finished trajectory back through `playback`. Never integrates.
pub fn run_viewer(traj: &Trajectory, catalog: &BodyCatalog, playback: &Playback) -> SimResult<()> {
    let (table, summary) = bake_frame_table(traj, catalog, playback)?;
    info!(
        "viewer: {} bodies, {} frames ({} skipped)",
        catalog.len(),
        table.frame_count(),
        summary.frames_skipped
    );

    let clock = PlaybackClock {
        frames: table.frame_numbers(),
        elapsed: 0.0,
    };

    App::new()
        .insert_resource(table)
        .insert_resource(clock)
        .insert_resource(BodyMasses(catalog.masses().to_vec()))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_scene)
        .add_systems(Update, advance_frames)
        .run();

    Ok(())
}

/// Startup system: spawn camera, light, axes and one sphere per body
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    masses: Res<BodyMasses>,
) {
    let masses = &masses.0;
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, -300.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Z),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 2000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials);

    // Sun-sized sphere for the heaviest body, log-scaled below it
    let m_max = masses.iter().cloned().fold(f64::MIN, f64::max);
    for (i, m) in masses.iter().enumerate() {
        let rel = (m / m_max).log10().max(-9.0) as f32; // 0 .. -9
        let radius_screen = (4.0 + rel * 0.4).max(0.5);

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(radius_screen).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: if i == 0 { Color::srgb(1.0, 0.9, 0.3) } else { Color::srgb(1.0, 1.0, 1.0) },
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(0.0, 0.0, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Per-frame: step the host clock and move spheres to the keyed locations
fn advance_frames(
    time: Res<Time>,
    table: Res<FrameTable>,
    mut clock: ResMut<PlaybackClock>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    if clock.frames.is_empty() {
        return;
    }
    clock.elapsed += time.delta_seconds();
    let n = (clock.elapsed * FRAMES_PER_SECOND) as usize % clock.frames.len();
    let frame = clock.frames[n];

    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(p) = table.location(frame, *i) {
            transform.translation = p * SCALE3D;
        }
    }
}

fn spawn_axes(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    let axis_len = 50.0 * SCALE3D;
    let axis_thickness = 0.05 * SCALE3D;

    let axes = [
        (Cuboid::new(axis_len, axis_thickness, axis_thickness), Color::srgb(1.0, 0.0, 0.0)),
        (Cuboid::new(axis_thickness, axis_len, axis_thickness), Color::srgb(0.0, 1.0, 0.0)),
        (Cuboid::new(axis_thickness, axis_thickness, axis_len), Color::srgb(0.0, 0.0, 1.0)),
    ];

    for (cuboid, color) in axes {
        commands.spawn(PbrBundle {
            mesh: meshes.add(cuboid.mesh()),
            material: materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..Default::default()
            }),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..Default::default()
        });
    }
}
