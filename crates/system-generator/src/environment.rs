//! Fogg-style environmental derivation.
//!
//! Closed-form quantities over a finished planet and its star: orbital
//! period, blackbody equilibrium temperature, and a coarse orbital-zone
//! classification against the star's greenhouse radius and snow line.

use serde::{Deserialize, Serialize};
use stellar::PrimaryStar;

/// Effective temperature of a blackbody at 1 AU around 1 L☉ (Kelvin)
const EFFECTIVE_TEMP_1AU: f64 = 278.0;

/// Bond albedo assumed for equilibrium temperatures
const DEFAULT_ALBEDO: f64 = 0.3;

/// Coarse thermal classification of an orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitalZone {
    /// Inside the greenhouse radius: runaway-greenhouse territory
    Inner,
    /// Between the greenhouse radius and the snow line
    Temperate,
    /// Beyond the snow line
    Outer,
}

impl OrbitalZone {
    pub fn classify(axis_au: f64, star: &PrimaryStar) -> Self {
        if axis_au < star.greenhouse_radius() {
            OrbitalZone::Inner
        } else if axis_au <= star.snow_line() {
            OrbitalZone::Temperate
        } else {
            OrbitalZone::Outer
        }
    }
}

/// Orbital period in years by Kepler's third law.
///
/// `planet_mass` and `stellar_mass` in solar masses; negligible planet
/// masses simply drop out.
pub fn orbital_period_years(axis_au: f64, planet_mass: f64, stellar_mass: f64) -> f64 {
    (axis_au.powi(3) / (planet_mass + stellar_mass)).sqrt()
}

/// Blackbody equilibrium temperature in Kelvin at `axis_au` for the given
/// luminosity, assuming the default bond albedo.
pub fn equilibrium_temperature(luminosity: f64, axis_au: f64) -> f64 {
    EFFECTIVE_TEMP_1AU * (1.0 - DEFAULT_ALBEDO).powf(0.25) * luminosity.powf(0.25)
        / axis_au.sqrt()
}
