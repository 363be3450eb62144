//! Host-facing side of a finished run.
//!
//! Animation hosts keep their own frame counter, unrelated to the physics
//! step count. `FrameMapping` makes the frame -> trajectory index relation
//! explicit, and `bake_keyframes` writes one keyframe per body per frame into
//! any host implementing [`KeyframeHost`].

pub mod mapping;
pub mod keyframes;
