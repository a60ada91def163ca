//! Seeded sampling of a planet-hosting stellar population.

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::generation::primary_star;
use crate::star::PrimaryStar;

/// Mass bounds of the sampled population in solar masses.
///
/// Accretion discs around stars much outside this range either never settle
/// (hot, short-lived primaries) or stay too sparse to aggregate planets on
/// interesting timescales.
const MIN_MASS: f64 = 0.5;
const MAX_MASS: f64 = 1.5;

/// Power-law slope of the sampled mass distribution.
///
/// Steeper than flat so the population leans toward K/G dwarfs, following
/// the field-star mass function over this narrow range.
const MASS_SLOPE: f64 = -2.3;

/// Sample from a power-law distribution `p(x) ∝ x^α` on `[x_min, x_max]`
/// by inverse transform sampling.
pub fn sample_power_law(rng: &mut ChaChaRng, x_min: f64, x_max: f64, alpha: f64) -> f64 {
    let u: f64 = rng.random();
    let alpha1 = alpha + 1.0;
    (u * (x_max.powf(alpha1) - x_min.powf(alpha1)) + x_min.powf(alpha1)).powf(1.0 / alpha1)
}

/// Sample a stellar age in Gyr for a star with the given main-sequence
/// lifetime.
///
/// Uniform over `[min(0.5, lifetime/10), min(6.0, lifetime)]`: old enough
/// for formation to have finished, young enough for the star to still be
/// burning hydrogen. The scaled floor keeps the window valid for
/// short-lived primaries.
pub fn sample_stellar_age(rng: &mut ChaChaRng, lifetime_gyr: f64) -> f64 {
    let lower = (lifetime_gyr * 0.1).min(0.5);
    let upper = lifetime_gyr.min(6.0);
    lower + rng.random::<f64>() * (upper - lower)
}

/// Sample a random main-sequence primary from the planet-hosting range.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::sample_primary_star;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let star = sample_primary_star(&mut rng);
/// assert!(star.mass >= 0.5 && star.mass <= 1.5);
/// ```
pub fn sample_primary_star(rng: &mut ChaChaRng) -> PrimaryStar {
    let mass = sample_power_law(rng, MIN_MASS, MAX_MASS, MASS_SLOPE);
    let provisional = primary_star(mass, 0.0);
    let age_gyr = sample_stellar_age(rng, provisional.main_sequence_lifetime_gyr());
    primary_star(mass, age_gyr)
}
