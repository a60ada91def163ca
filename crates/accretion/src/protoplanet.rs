//! Forming bodies and finished planetesimals.

use serde::{Deserialize, Serialize};

use crate::calc::PlanetesimalCalc;

/// A body forming within the disc.
///
/// Only the three orbital/mass scalars are stored; every derived quantity
/// (sweep annulus, gravitational annulus, critical mass) is recomputed on
/// demand from the geometry calculator, so a protoplanet never holds a
/// reference back into the profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtoPlanet {
    /// Semi-major axis in AU
    pub axis: f64,
    /// Orbital eccentricity
    pub ecc: f64,
    /// Mass in solar masses, non-decreasing within one accretion phase
    pub mass: f64,
}

impl ProtoPlanet {
    pub fn new(axis: f64, ecc: f64, mass: f64) -> Self {
        Self { axis, ecc, mass }
    }

    /// The annulus swept clean per orbit, `(inner, outer)` in AU.
    pub fn sweep_annulus(&self, calc: &PlanetesimalCalc) -> (f64, f64) {
        (
            calc.inner_sweep_limit(self.axis, self.ecc, self.mass),
            calc.outer_sweep_limit(self.axis, self.ecc, self.mass),
        )
    }

    /// The wider capture annulus used for collision tests, `(inner, outer)`.
    pub fn grav_annulus(&self, calc: &PlanetesimalCalc) -> (f64, f64) {
        (
            calc.inner_grav_limit(self.axis, self.ecc, self.mass),
            calc.outer_grav_limit(self.axis, self.ecc, self.mass),
        )
    }

    /// Gas-capture threshold at this body's perihelion.
    pub fn critical_mass(&self, calc: &PlanetesimalCalc) -> f64 {
        calc.critical_mass(self.axis, self.ecc)
    }

    pub fn is_gas_giant(&self, calc: &PlanetesimalCalc) -> bool {
        self.mass > self.critical_mass(calc)
    }
}

/// A surviving body in the engine output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planetesimal {
    /// Semi-major axis in AU
    pub axis: f64,
    /// Orbital eccentricity
    pub ecc: f64,
    /// Mass in solar masses
    pub mass: f64,
    /// Whether the body exceeded its critical mass and retained gas
    pub is_gas_giant: bool,
}

impl Planetesimal {
    pub(crate) fn from_proto(proto: &ProtoPlanet, calc: &PlanetesimalCalc) -> Self {
        Self {
            axis: proto.axis,
            ecc: proto.ecc,
            mass: proto.mass,
            is_gas_giant: proto.is_gas_giant(calc),
        }
    }
}
