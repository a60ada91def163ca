//! The primary-star data type.

use serde::{Deserialize, Serialize};

use crate::spectral::SpectralType;

/// Fraction of the ecosphere radius at which runaway greenhouse sets in.
const GREENHOUSE_FRACTION: f64 = 0.93;

/// Luminosity scaling of the nebular snow line, normalised to ~2.7 AU for
/// the Sun.
const SNOW_LINE_COEFF: f64 = 2.7;

/// A single main-sequence primary.
///
/// Properties are derived from mass at construction (see
/// [`generation`](crate::generation)); the struct itself is a plain DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryStar {
    /// Stellar mass in solar masses (M☉)
    pub mass: f64,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    /// Effective temperature in Kelvin
    pub temperature: f64,
    pub spectral_type: SpectralType,
    /// Spectral subtype (0-9)
    pub subtype: u8,
    /// Age in billions of years
    pub age_gyr: f64,
}

impl PrimaryStar {
    /// Mean habitable-zone orbit: `√L` AU.
    pub fn ecosphere_radius(&self) -> f64 {
        self.luminosity.sqrt()
    }

    /// Inner habitable edge, a fixed fraction of the ecosphere radius.
    pub fn greenhouse_radius(&self) -> f64 {
        GREENHOUSE_FRACTION * self.ecosphere_radius()
    }

    /// Radius beyond which water ice survived in the nebula, in AU.
    pub fn snow_line(&self) -> f64 {
        SNOW_LINE_COEFF * self.luminosity.sqrt()
    }

    /// Main-sequence lifetime `10 · M/L` Gyr.
    pub fn main_sequence_lifetime_gyr(&self) -> f64 {
        10.0 * self.mass / self.luminosity
    }

    /// The class-subtype designation, e.g. `"G2"`.
    pub fn spectral_designation(&self) -> String {
        format!("{}{}", self.spectral_type, self.subtype)
    }
}
