use std::fmt;

use serde::{Deserialize, Serialize};

/// Main-sequence spectral classes, hottest first.
///
/// Only hydrogen-burning classes appear here: the generator models planet
/// formation around single main-sequence primaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

/// Lower temperature bound of each spectral class (Kelvin).
const TEMP_BOUNDS: [(SpectralType, f64); 6] = [
    (SpectralType::O, 30_000.0),
    (SpectralType::B, 10_000.0),
    (SpectralType::A, 7_500.0),
    (SpectralType::F, 6_000.0),
    (SpectralType::G, 5_200.0),
    (SpectralType::K, 3_700.0),
];

impl SpectralType {
    /// Classify an effective temperature.
    pub fn from_temperature(temperature: f64) -> Self {
        for &(class, bound) in &TEMP_BOUNDS {
            if temperature >= bound {
                return class;
            }
        }
        SpectralType::M
    }

    /// Spectral subtype 0-9 within the class, 0 at the hot end.
    pub fn subtype(self, temperature: f64) -> u8 {
        let (upper, lower) = match self {
            SpectralType::O => (50_000.0, 30_000.0),
            SpectralType::B => (30_000.0, 10_000.0),
            SpectralType::A => (10_000.0, 7_500.0),
            SpectralType::F => (7_500.0, 6_000.0),
            SpectralType::G => (6_000.0, 5_200.0),
            SpectralType::K => (5_200.0, 3_700.0),
            SpectralType::M => (3_700.0, 2_400.0),
        };
        let fraction = ((upper - temperature) / (upper - lower)).clamp(0.0, 0.999);
        (fraction * 10.0) as u8
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}
