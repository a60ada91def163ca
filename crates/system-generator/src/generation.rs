//! System generation pipeline.

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use accretion::{
    AccretionConstants, AccretionEngine, ConfigError, GilhamLcg, Planetesimal, SimulationStats,
    StellarScalars,
};
use stellar::{sample_primary_star, PrimaryStar};

use crate::environment::{equilibrium_temperature, orbital_period_years, OrbitalZone};
use crate::metadata::SystemMetadata;

/// Earth masses per solar mass
const EARTH_MASSES_PER_SOLAR: f64 = 332_946.0;

/// A finished planet: the accretion output enriched with environmental
/// quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Semi-major axis in AU
    pub axis: f64,
    /// Orbital eccentricity
    pub ecc: f64,
    /// Mass in solar masses
    pub mass: f64,
    /// Mass in Earth masses
    pub mass_earth: f64,
    pub is_gas_giant: bool,
    pub orbital_period_years: f64,
    /// Blackbody equilibrium temperature in Kelvin
    pub equilibrium_temp: f64,
    pub zone: OrbitalZone,
}

impl Planet {
    fn from_planetesimal(body: &Planetesimal, star: &PrimaryStar) -> Self {
        Self {
            axis: body.axis,
            ecc: body.ecc,
            mass: body.mass,
            mass_earth: body.mass * EARTH_MASSES_PER_SOLAR,
            is_gas_giant: body.is_gas_giant,
            orbital_period_years: orbital_period_years(body.axis, body.mass, star.mass),
            equilibrium_temp: equilibrium_temperature(star.luminosity, body.axis),
            zone: OrbitalZone::classify(body.axis, star),
        }
    }
}

/// One generated star system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub metadata: SystemMetadata,
    pub star: PrimaryStar,
    /// Planets in ascending semi-major axis order
    pub planets: Vec<Planet>,
    pub stats: SimulationStats,
}

/// Generate a system around the given star.
///
/// With `seed: None` the wall clock is used; the applied seed is recorded
/// in the metadata and re-running with it reproduces the system exactly.
pub fn generate_star_system(
    star: &PrimaryStar,
    seed: Option<u64>,
) -> Result<StarSystem, ConfigError> {
    let scalars = StellarScalars::new(star.mass, star.luminosity);
    let mut engine = AccretionEngine::new(AccretionConstants::default(), scalars, GilhamLcg::new(0))?;

    let outcome = engine.generate_system(seed);
    info!(
        "system {}: {} planets from {} nuclei ({} merged) in {} ms",
        outcome.seed,
        outcome.planets.len(),
        outcome.stats.injected_nuclei,
        outcome.stats.merged_nuclei,
        outcome.stats.elapsed_ms
    );

    let planets = outcome
        .planets
        .iter()
        .map(|body| Planet::from_planetesimal(body, star))
        .collect();

    Ok(StarSystem {
        metadata: SystemMetadata::from_seed(outcome.seed),
        star: star.clone(),
        planets,
        stats: outcome.stats,
    })
}

/// Sample a primary star from the hosting population and generate its
/// system, both driven by the same seed.
pub fn generate_sampled_system(seed: u64) -> Result<StarSystem, ConfigError> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let star = sample_primary_star(&mut rng);
    generate_star_system(&star, Some(seed))
}
