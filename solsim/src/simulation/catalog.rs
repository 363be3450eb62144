//! Static body catalog: names, masses and the initial kinematic state.
//!
//! A catalog is validated once at construction and is read-only afterwards.
//! `outer_planets()` carries the JPL Horizons state of the Sun and the outer
//! planets on 1994-09-05 00:00, in AU, AU/day and solar masses.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Body, NVec3, State};

/// Ordered list of bodies with their masses and initial state
#[derive(Debug, Clone)]
pub struct BodyCatalog {
    bodies: Vec<Body>,
    masses: Vec<f64>,
    initial: State,
}

impl BodyCatalog {
    /// Build a catalog from `(name, mass)` pairs and matching position and
    /// velocity lists. Fails with a configuration error if the three lists
    /// differ in length, fewer than two bodies are given, a mass is not a
    /// positive finite number, or a name repeats.
    pub fn new(entries: Vec<(String, f64)>, x: Vec<NVec3>, v: Vec<NVec3>) -> SimResult<Self> {
        let n = entries.len();
        if x.len() != n || v.len() != n {
            return Err(SimError::config(format!(
                "catalog lists differ in length: {} bodies, {} positions, {} velocities",
                n,
                x.len(),
                v.len()
            )));
        }
        if n < 2 {
            return Err(SimError::config(format!("need at least 2 bodies, got {n}")));
        }

        let mut seen = HashSet::new();
        let mut bodies = Vec::with_capacity(n);
        for (index, (name, m)) in entries.into_iter().enumerate() {
            if !(m.is_finite() && m > 0.0) {
                return Err(SimError::config(format!("body '{name}' has non-positive mass {m}")));
            }
            if !seen.insert(name.clone()) {
                return Err(SimError::config(format!("duplicate body name '{name}'")));
            }
            bodies.push(Body { name, index, m });
        }

        let masses = bodies.iter().map(|b| b.m).collect();
        debug!(bodies = n, "built body catalog");

        Ok(Self {
            bodies,
            masses,
            initial: State::new(x, v),
        })
    }

    /// Sun (mass includes the inner planets), Jupiter, Saturn, Uranus,
    /// Neptune and Pluto.
    pub fn outer_planets() -> Self {
        let entries = vec![
            ("Sun", 1.00000597682),
            ("Jupiter", 0.000954786104043),
            ("Saturn", 0.000285583733151),
            ("Uranus", 0.0000437273164546),
            ("Neptune", 0.0000517759138449),
            ("Pluto", 6.571141277023631e-09),
        ];

        let x = vec![
            NVec3::new(0.0, 0.0, 0.0),
            NVec3::new(-3.502576677887171E+00, -4.111754751605156E+00, 9.546986420486078E-02),
            NVec3::new(9.075323064717326E+00, -3.443060859273154E+00, -3.008002285860299E-01),
            NVec3::new(8.309900066449559E+00, -1.782348877489204E+01, -1.738826162402036E-01),
            NVec3::new(1.147049510166812E+01, -2.790203169301273E+01, 3.102324955757055E-01),
            NVec3::new(-1.553841709421204E+01, -2.440295115792555E+01, 7.105854443660053E+00),
        ];

        // heliocentric
        let v = vec![
            NVec3::new(0.0, 0.0, 0.0),
            NVec3::new(5.647185685991568E-03, -4.540768024044625E-03, -1.077097723549840E-04),
            NVec3::new(1.677252496875353E-03, 5.205044578906008E-03, -1.577215019146763E-04),
            NVec3::new(3.535508197097127E-03, 1.479452678720917E-03, -4.019422185567764E-05),
            NVec3::new(2.882592399188369E-03, 1.211095412047072E-03, -9.118527716949448E-05),
            NVec3::new(2.754640676017983E-03, -2.105690992946069E-03, -5.607958889969929E-04),
        ];

        let bodies = entries
            .into_iter()
            .enumerate()
            .map(|(index, (name, m))| Body { name: name.to_string(), index, m })
            .collect::<Vec<_>>();
        let masses = bodies.iter().map(|b| b.m).collect();

        Self {
            bodies,
            masses,
            initial: State::new(x, v),
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Masses in catalog order
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Uncorrected initial state, as supplied
    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// Catalog index of the body called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }
}
