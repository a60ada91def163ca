//! Accretion-model constants.
//!
//! All tunable parameters of the simulation live in one profile struct so a
//! run is fully described by `(constants, star, seed)`. Defaults follow
//! Dole (1969) "Formation of Planetary Systems by Aggregation" with the
//! coefficients used by the later starform/accrete ports.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable constants of the accretion model.
///
/// The defaults reproduce the classic Dole parameterisation. Changing any
/// of them changes the generated systems for every seed; they are part of
/// the reproducibility contract alongside the random source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccretionConstants {
    /// Seed mass of an injected nucleus in solar masses (M☉)
    pub protoplanet_mass: f64,

    /// Innermost legal semi-major axis for an injected nucleus (AU)
    pub innermost_planet: f64,

    /// Outermost legal semi-major axis for an injected nucleus (AU)
    pub outermost_planet: f64,

    /// Exponent Q of the eccentricity law `e = 1 − U^Q`
    ///
    /// Small positive values concentrate the distribution near circular
    /// orbits with a heavy tail toward 1.
    pub eccentricity_coeff: f64,

    /// Dust surface-density coefficient A in `A·exp(−α·r^(1/γ))`
    pub dust_density_coeff: f64,

    /// Dust density radial decay rate α
    pub dust_density_alpha: f64,

    /// Dust density radial exponent γ
    pub dust_density_exponent: f64,

    /// Critical-mass coefficient B in `B·(r_p·√L)^(−3/4)`
    ///
    /// A nucleus heavier than the critical mass at its perihelion retains
    /// gas and becomes a gas giant.
    pub critical_mass_coeff: f64,

    /// Gas-to-dust mass ratio K of the nebula
    pub gas_dust_ratio: f64,

    /// Eccentricity of individual dust-cloud particles W
    ///
    /// Widens the sweep annulus relative to the purely gravitational reach.
    pub cloud_eccentricity: f64,

    /// Relative mass gain below which a sweep is considered converged
    pub accretion_epsilon: f64,

    /// Number of initial injections drawn uniformly over the whole legal
    /// range before sampling is biased toward surviving dust pockets
    pub randomised_count: u32,

    /// Hard bound on injections per run; exceeding it aborts the run with a
    /// warning (the dusted-measure argument makes this unreachable in
    /// practice)
    pub max_injected_nuclei: u32,
}

impl Default for AccretionConstants {
    fn default() -> Self {
        Self {
            protoplanet_mass: 1.0e-15,
            innermost_planet: 0.3,
            outermost_planet: 50.0,
            eccentricity_coeff: 0.077,
            dust_density_coeff: 1.5e-3,
            dust_density_alpha: 5.0,
            dust_density_exponent: 3.0,
            critical_mass_coeff: 1.2e-5,
            gas_dust_ratio: 50.0,
            cloud_eccentricity: 0.2,
            accretion_epsilon: 1.0e-4,
            randomised_count: 20,
            max_injected_nuclei: 10_000,
        }
    }
}

impl AccretionConstants {
    /// Check the profile for programmer errors.
    ///
    /// Called once at engine construction; a run itself never fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.innermost_planet <= 0.0 || self.innermost_planet >= self.outermost_planet {
            return Err(ConfigError::InvertedPlanetRange {
                innermost: self.innermost_planet,
                outermost: self.outermost_planet,
            });
        }
        if self.protoplanet_mass <= 0.0 {
            return Err(ConfigError::NonPositiveSeedMass(self.protoplanet_mass));
        }
        if self.eccentricity_coeff <= 0.0 || self.eccentricity_coeff >= 1.0 {
            return Err(ConfigError::EccentricityCoeffOutOfRange(
                self.eccentricity_coeff,
            ));
        }
        if self.dust_density_coeff <= 0.0
            || self.dust_density_alpha <= 0.0
            || self.dust_density_exponent <= 0.0
        {
            return Err(ConfigError::NonPositiveDustDensity {
                coeff: self.dust_density_coeff,
                alpha: self.dust_density_alpha,
                exponent: self.dust_density_exponent,
            });
        }
        if self.critical_mass_coeff <= 0.0 {
            return Err(ConfigError::NonPositiveCriticalMassCoeff(
                self.critical_mass_coeff,
            ));
        }
        if self.gas_dust_ratio < 1.0 {
            return Err(ConfigError::GasDustRatioBelowUnity(self.gas_dust_ratio));
        }
        if !(0.0..1.0).contains(&self.cloud_eccentricity) {
            return Err(ConfigError::CloudEccentricityOutOfRange(
                self.cloud_eccentricity,
            ));
        }
        if self.accretion_epsilon <= 0.0 {
            return Err(ConfigError::NonPositiveAccretionEpsilon(
                self.accretion_epsilon,
            ));
        }
        Ok(())
    }
}

/// Configuration errors detected at engine construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("innermost planet bound {innermost} AU must be positive and below the outermost bound {outermost} AU")]
    InvertedPlanetRange { innermost: f64, outermost: f64 },

    #[error("protoplanet seed mass must be positive, got {0} M☉")]
    NonPositiveSeedMass(f64),

    #[error("eccentricity coefficient must lie in (0, 1), got {0}")]
    EccentricityCoeffOutOfRange(f64),

    #[error("dust density parameters must be positive (A = {coeff}, α = {alpha}, γ = {exponent})")]
    NonPositiveDustDensity {
        coeff: f64,
        alpha: f64,
        exponent: f64,
    },

    #[error("critical mass coefficient must be positive, got {0}")]
    NonPositiveCriticalMassCoeff(f64),

    #[error("gas-to-dust ratio must be at least 1, got {0}")]
    GasDustRatioBelowUnity(f64),

    #[error("cloud eccentricity must lie in [0, 1), got {0}")]
    CloudEccentricityOutOfRange(f64),

    #[error("accretion convergence epsilon must be positive, got {0}")]
    NonPositiveAccretionEpsilon(f64),

    #[error("stellar mass must be positive, got {0} M☉")]
    NonPositiveStellarMass(f64),

    #[error("stellar luminosity must be positive, got {0} L☉")]
    NonPositiveStellarLuminosity(f64),
}
