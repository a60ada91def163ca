//! Primary-star types and generation functions.
//!
//! The accretion engine only consumes stellar mass and luminosity; this
//! crate supplies the richer star model around those scalars: spectral
//! classification, mass-luminosity/temperature relations, habitable radii,
//! and seeded sampling of a plausible planet-hosting population.

pub mod generation;
pub mod sampling;
pub mod spectral;
pub mod star;

#[cfg(test)]
mod star_test;

// Re-export types
pub use spectral::SpectralType;
pub use star::PrimaryStar;

// Re-export generation functions
pub use generation::{from_mass, primary_star, solar_analog};
pub use sampling::sample_primary_star;
