//! Core state types for the solar system propagation.
//!
//! - `Body`  immutable identity and mass of one catalog entry
//! - `State` positions and velocities of every body at one instant
//!
//! Every `State` is index-aligned with the catalog it was built from.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String, // identity, unique within a catalog
    pub index: usize, // position in the catalog
    pub m: f64, // mass, strictly positive
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub x: Vec<NVec3>, // positions
    pub v: Vec<NVec3>, // velocities
}

impl State {
    pub fn new(x: Vec<NVec3>, v: Vec<NVec3>) -> Self {
        Self { x, v }
    }

    /// Number of bodies described by this state
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// True when every component of every vector is finite
    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|p| p.iter().all(|c| c.is_finite()))
    }
}
