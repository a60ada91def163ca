//! Deterministic planetary accretion engine.
//!
//! Implements the Dole (1970) planetesimal accretion model with Fogg's
//! extensions: protoplanetary nuclei are injected into a circumstellar dust
//! disc, sweep dust (and, above the critical mass, gas) out of the radial
//! bands they cross, and merge when their gravitational reaches overlap.
//! The run ends when no dust remains inside the legal orbital range.
//!
//! Given the same seed, constants, and stellar scalars, a run is bit-for-bit
//! reproducible: the random source is an explicit, documented generator
//! (see [`rng`]) and every traversal of the disc and planetesimal list is
//! performed in a fixed order.

pub mod calc;
pub mod collision;
pub mod constants;
pub mod driver;
pub mod dust;
pub mod insertion;
pub mod protoplanet;
pub mod rng;
pub mod star;

#[cfg(test)]
mod collision_test;
#[cfg(test)]
mod dust_test;

// Re-export the public surface at the crate root
pub use calc::PlanetesimalCalc;
pub use constants::{AccretionConstants, ConfigError};
pub use driver::{AccretionEngine, AccretionOutcome, SimulationStats};
pub use dust::DustBand;
pub use insertion::InsertionStrategy;
pub use protoplanet::{Planetesimal, ProtoPlanet};
pub use rng::{DeterministicRng, GilhamLcg, Lcg48};
pub use star::StellarScalars;
