//! The engine's view of the primary star.

use serde::{Deserialize, Serialize};

use crate::constants::ConfigError;

/// Scalar stellar quantities consumed by the geometry calculator.
///
/// The engine deliberately does not know about spectral types, ages, or any
/// richer star model: the stellar generator is an external collaborator, and
/// these two scalars are its entire interface to the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarScalars {
    /// Stellar mass in solar masses (M☉)
    pub mass: f64,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
}

impl StellarScalars {
    pub fn new(mass: f64, luminosity: f64) -> Self {
        Self { mass, luminosity }
    }

    /// A 1 M☉ / 1 L☉ primary.
    pub fn solar() -> Self {
        Self::new(1.0, 1.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mass <= 0.0 {
            return Err(ConfigError::NonPositiveStellarMass(self.mass));
        }
        if self.luminosity <= 0.0 {
            return Err(ConfigError::NonPositiveStellarLuminosity(self.luminosity));
        }
        Ok(())
    }
}
