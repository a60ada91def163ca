//! Accretion driver.
//!
//! Owns all mutable state for one `generate_system` call and advances the
//! inject → sweep → update-disc → maybe-merge loop until no dust remains
//! inside the legal orbital range:
//!
//! 1. Seed the random source and reset the disc to one pristine band.
//! 2. While dust is available, draw a nucleus from the insertion strategy
//!    and let it sweep the bands it crosses until its mass gain converges.
//! 3. A nucleus that grew past its seed mass is merged with the first
//!    gravitationally overlapping neighbour (re-sweeping the union) or
//!    inserted at its sorted position, and the disc is split and
//!    re-merged around the accepted body once.
//! 4. A nucleus that swept nothing is discarded; the disc is untouched.
//!
//! Traversal orders are fixed (disc order, ascending axis), so the outcome
//! is a pure function of seed, constants, and stellar scalars.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::calc::PlanetesimalCalc;
use crate::collision;
use crate::constants::{AccretionConstants, ConfigError};
use crate::dust::{self, DustBand};
use crate::insertion::InsertionStrategy;
use crate::protoplanet::{Planetesimal, ProtoPlanet};
use crate::rng::DeterministicRng;
use crate::star::StellarScalars;

/// Monotone counters describing one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStats {
    /// Nuclei injected into the disc, including rejected ones
    pub injected_nuclei: u32,
    /// Injections that ended in a collision merge
    pub merged_nuclei: u32,
    /// Wall-clock duration of the run
    pub elapsed_ms: u64,
}

/// The result of one `generate_system` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccretionOutcome {
    /// The seed actually used (caller-supplied or wall-clock derived)
    pub seed: u64,
    pub stats: SimulationStats,
    /// Surviving bodies in ascending semi-major axis order
    pub planets: Vec<Planetesimal>,
}

/// The accretion engine: constants, star, insertion strategy, and the
/// deterministic random source, bundled for repeated runs.
#[derive(Debug, Clone)]
pub struct AccretionEngine<R> {
    calc: PlanetesimalCalc,
    strategy: InsertionStrategy,
    rng: R,
}

impl<R: DeterministicRng> AccretionEngine<R> {
    /// Build an engine, failing fast on malformed constants or star.
    pub fn new(
        constants: AccretionConstants,
        star: StellarScalars,
        rng: R,
    ) -> Result<Self, ConfigError> {
        constants.validate()?;
        star.validate()?;
        let strategy = InsertionStrategy::new(&constants);
        Ok(Self {
            calc: PlanetesimalCalc::new(constants, star),
            strategy,
            rng,
        })
    }

    pub fn calc(&self) -> &PlanetesimalCalc {
        &self.calc
    }

    /// Run the accretion loop to disc exhaustion.
    ///
    /// With `seed: None` the wall clock (Unix milliseconds) is used; either
    /// way the seed actually applied is reported in the outcome, and
    /// rerunning with it reproduces the planet list bit for bit.
    pub fn generate_system(&mut self, seed: Option<u64>) -> AccretionOutcome {
        let started = Instant::now();
        let seed = seed.unwrap_or_else(wall_clock_millis);
        self.rng.reseed(seed);

        let constants = self.calc.constants().clone();
        let mut stats = SimulationStats::default();
        let mut bands = vec![DustBand::initial(self.calc.outer_dust_limit())];
        let mut planets: Vec<ProtoPlanet> = Vec::new();

        while dust::is_dust_available(&bands, constants.innermost_planet, constants.outermost_planet)
        {
            if stats.injected_nuclei >= constants.max_injected_nuclei {
                warn!(
                    "aborting run for seed {}: {} nuclei injected without exhausting the disc",
                    seed, stats.injected_nuclei
                );
                break;
            }

            let Some(axis) =
                self.strategy
                    .semi_major_axis(&mut self.rng, stats.injected_nuclei, &bands)
            else {
                break;
            };
            let ecc = self.strategy.eccentricity(&mut self.rng);
            let mut proto = ProtoPlanet::new(axis, ecc, constants.protoplanet_mass);
            stats.injected_nuclei += 1;
            info!(
                "injected nucleus #{} at {:.4} AU, e = {:.4}",
                stats.injected_nuclei, proto.axis, proto.ecc
            );

            self.sweep(&mut proto, &bands);

            if proto.mass > constants.protoplanet_mass {
                let accepted = match planets
                    .iter()
                    .position(|p| collision::too_close(p, &proto, &self.calc))
                {
                    Some(index) => {
                        let neighbour = planets.remove(index);
                        stats.merged_nuclei += 1;
                        info!(
                            "collision at {:.4} AU: merging {:.3e} M☉ into neighbour of {:.3e} M☉",
                            proto.axis, proto.mass, neighbour.mass
                        );
                        let mut merged = collision::coalesce(&neighbour, &proto);
                        self.sweep(&mut merged, &bands);
                        insert_sorted(&mut planets, merged);
                        merged
                    }
                    None => {
                        insert_sorted(&mut planets, proto);
                        proto
                    }
                };

                let (sweep_inner, sweep_outer) = accepted.sweep_annulus(&self.calc);
                let retain_gas = !accepted.is_gas_giant(&self.calc);
                bands = dust::merge(&dust::split(&bands, sweep_inner, sweep_outer, retain_gas));
                debug!(
                    "disc updated around [{:.4}, {:.4}] AU: {} bands, {} bodies",
                    sweep_inner,
                    sweep_outer,
                    bands.len(),
                    planets.len()
                );
            } else {
                debug!(
                    "rejected nucleus at {:.4} AU: no dust within its sweep annulus",
                    proto.axis
                );
            }
        }

        stats.elapsed_ms = started.elapsed().as_millis() as u64;
        let planets = planets
            .iter()
            .map(|p| Planetesimal::from_proto(p, &self.calc))
            .collect();
        AccretionOutcome {
            seed,
            stats,
            planets,
        }
    }

    /// Let `proto` sweep the disc until its relative mass gain converges.
    ///
    /// Bands are visited in disc order. Per band the density is zero
    /// without dust, the plain dust density otherwise, and the gas-amplified
    /// density when the band carries gas and the body is currently above its
    /// critical mass. The mass sequence is non-decreasing.
    fn sweep(&self, proto: &mut ProtoPlanet, bands: &[DustBand]) {
        let critical_mass = proto.critical_mass(&self.calc);
        loop {
            let last_mass = proto.mass;
            let (sweep_inner, sweep_outer) = proto.sweep_annulus(&self.calc);

            let mut next_mass = 0.0;
            for band in bands {
                if !band.overlaps(sweep_inner, sweep_outer) || !band.dust {
                    continue;
                }
                let dust_density = self.calc.dust_density(proto.axis);
                let density = if band.gas && last_mass > critical_mass {
                    self.calc
                        .dust_and_gas_density(dust_density, critical_mass, last_mass)
                } else {
                    dust_density
                };
                next_mass += density
                    * self.calc.band_volume(
                        last_mass,
                        proto.axis,
                        proto.ecc,
                        sweep_inner,
                        sweep_outer,
                        band.inner_edge,
                        band.outer_edge,
                    );
            }

            proto.mass = last_mass.max(next_mass);
            if !self.calc.should_accrete_continue(last_mass, proto.mass) {
                return;
            }
        }
    }
}

/// Insert keeping the list sorted by ascending semi-major axis.
fn insert_sorted(planets: &mut Vec<ProtoPlanet>, proto: ProtoPlanet) {
    let index = planets.partition_point(|p| p.axis < proto.axis);
    planets.insert(index, proto);
}

fn wall_clock_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
