//! Factory functions for primary stars.
//!
//! Luminosity and effective temperature are derived from mass with piecewise
//! main-sequence power laws; spectral class and subtype follow from the
//! temperature.

use crate::spectral::SpectralType;
use crate::star::PrimaryStar;

/// Solar effective temperature in Kelvin
const SOLAR_TEMP: f64 = 5778.0;

/// Create a main-sequence primary of the given mass and age.
///
/// # Mass-Luminosity Relation
/// * M < 0.43 M☉: L = 0.23·M^2.3 (fully convective M dwarfs)
/// * 0.43-2 M☉: L = M^4
/// * M > 2 M☉: L = 1.4·M^3.5
///
/// Temperature follows `T = T☉·M^0.505`, a serviceable fit across the
/// F-K range this generator hosts planets around.
pub fn primary_star(mass_solar: f64, age_gyr: f64) -> PrimaryStar {
    let luminosity = mass_luminosity(mass_solar);
    let temperature = SOLAR_TEMP * mass_solar.powf(0.505);
    let spectral_type = SpectralType::from_temperature(temperature);

    PrimaryStar {
        mass: mass_solar,
        luminosity,
        temperature,
        spectral_type,
        subtype: spectral_type.subtype(temperature),
        age_gyr,
    }
}

/// A 1 M☉, 4.6 Gyr primary.
pub fn solar_analog() -> PrimaryStar {
    primary_star(1.0, 4.6)
}

/// Create a primary of the given mass, aged to the midpoint of its
/// main-sequence life (capped at the age of the universe).
pub fn from_mass(mass_solar: f64) -> PrimaryStar {
    let provisional = primary_star(mass_solar, 0.0);
    let age_gyr = 0.5 * provisional.main_sequence_lifetime_gyr().min(13.8);
    primary_star(mass_solar, age_gyr)
}

fn mass_luminosity(mass_solar: f64) -> f64 {
    match mass_solar {
        m if m < 0.43 => 0.23 * m.powf(2.3),
        m if m <= 2.0 => m.powi(4),
        m => 1.4 * m.powf(3.5),
    }
}
