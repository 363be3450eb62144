//! Keyframe baking into an animation host.

use tracing::{debug, warn};

use crate::error::{SimError, SimResult};
use crate::playback::mapping::Playback;
use crate::simulation::catalog::BodyCatalog;
use crate::simulation::states::{Body, NVec3};
use crate::simulation::trajectory::Trajectory;

/// An animation host holding one scene object per body
pub trait KeyframeHost {
    /// Host-side object reference
    type Handle;

    fn clear_animation(&mut self, handle: &Self::Handle);
    fn set_frame(&mut self, frame: usize);
    fn set_location(&mut self, handle: &Self::Handle, location: NVec3);
    fn insert_keyframe(&mut self, handle: &Self::Handle);
}

/// What a bake wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BakeSummary {
    pub frames_written: usize,
    pub frames_skipped: usize, // mapped past the end of the trajectory
}

/// Write one location keyframe per body for every frame in the playback
/// range. `lookup` resolves each catalog body to its host object; a body
/// without an object is a configuration error and nothing is written.
///
/// Existing animation on every object is cleared first. Frames that map past
/// the last trajectory entry are skipped.
pub fn bake_keyframes<H, L>(
    host: &mut H,
    traj: &Trajectory,
    catalog: &BodyCatalog,
    playback: &Playback,
    mut lookup: L,
) -> SimResult<BakeSummary>
where
    H: KeyframeHost,
    L: FnMut(&Body) -> Option<H::Handle>,
{
    if traj.body_count() != catalog.len() {
        return Err(SimError::config(format!(
            "trajectory has {} bodies, catalog has {}",
            traj.body_count(),
            catalog.len()
        )));
    }

    let handles = catalog
        .bodies()
        .iter()
        .map(|b| lookup(b).ok_or_else(|| SimError::config(format!("no host object for body '{}'", b.name))))
        .collect::<SimResult<Vec<_>>>()?;

    for handle in &handles {
        host.clear_animation(handle);
    }

    let mut summary = BakeSummary { frames_written: 0, frames_skipped: 0 };
    for frame in playback.range.frames() {
        let Some(k) = playback.index(frame, traj.len()) else {
            summary.frames_skipped += 1;
            continue;
        };

        host.set_frame(frame);
        for (handle, x) in handles.iter().zip(traj.positions_at(k)) {
            host.set_location(handle, *x);
            host.insert_keyframe(handle);
        }
        summary.frames_written += 1;
    }

    if summary.frames_skipped > 0 {
        warn!(
            skipped = summary.frames_skipped,
            steps = traj.len(),
            "frame range reaches past the end of the trajectory"
        );
    }
    debug!(written = summary.frames_written, "baked keyframes");

    Ok(summary)
}
