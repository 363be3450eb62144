//! Frame ranges and frame -> trajectory index mappings

use crate::configuration::config::{MappingConfig, PlaybackConfig};
use crate::error::{SimError, SimResult};

/// Half-open host frame range `start..end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    pub start: usize,
    pub end: usize,
}

impl FrameRange {
    pub fn new(start: usize, end: usize) -> SimResult<Self> {
        if end <= start {
            return Err(SimError::config(format!("empty frame range {start}..{end}")));
        }
        Ok(Self { start, end })
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn frames(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Which trajectory entry a host frame shows.
/// Frames are counted from the start of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameMapping {
    /// frame offset n -> step n
    #[default]
    Identity,
    /// frame offset n -> step n * k
    Stride(usize),
    /// first frame -> step 0, last frame -> last step, linear in between
    Stretch,
}

impl FrameMapping {
    /// Trajectory index for `frame`, or `None` when the frame lies outside
    /// `range` or maps past the last of `steps` entries.
    pub fn index(&self, frame: usize, range: &FrameRange, steps: usize) -> Option<usize> {
        if frame < range.start || frame >= range.end || steps == 0 {
            return None;
        }
        let offset = frame - range.start;

        let k = match *self {
            FrameMapping::Identity => offset,
            FrameMapping::Stride(stride) => offset.checked_mul(stride)?,
            FrameMapping::Stretch => {
                if range.len() == 1 {
                    0
                } else {
                    let frac = offset as f64 / (range.len() - 1) as f64;
                    (frac * (steps - 1) as f64).round() as usize
                }
            }
        };

        (k < steps).then_some(k)
    }
}

/// Validated playback settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    pub range: FrameRange,
    pub mapping: FrameMapping,
}

impl Playback {
    /// Frames `0..steps`, one frame per stored state
    pub fn one_to_one(steps: usize) -> SimResult<Self> {
        Ok(Self {
            range: FrameRange::new(0, steps)?,
            mapping: FrameMapping::Identity,
        })
    }

    pub fn from_config(cfg: &PlaybackConfig) -> SimResult<Self> {
        let range = FrameRange::new(cfg.frame_start, cfg.frame_end)?;
        let mapping = match cfg.mapping {
            MappingConfig::Identity => FrameMapping::Identity,
            MappingConfig::Stretch => FrameMapping::Stretch,
            MappingConfig::Stride => match cfg.stride {
                Some(k) if k > 0 => FrameMapping::Stride(k),
                Some(_) => return Err(SimError::config("stride must be at least 1")),
                None => return Err(SimError::config("mapping 'stride' needs a 'stride' value")),
            },
        };
        Ok(Self { range, mapping })
    }

    pub fn index(&self, frame: usize, steps: usize) -> Option<usize> {
        self.mapping.index(frame, &self.range, steps)
    }
}
