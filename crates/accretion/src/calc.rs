//! Planetesimal geometry calculator.
//!
//! Pure functions over `(axis, ecc, mass)` and the stellar scalars: dust and
//! gas densities, the critical mass for gas capture, the sweep and
//! gravitational annuli of a forming body, and the volume it sweeps through
//! a dust band per orbit. Formulae follow Dole's reduced-mass expressions.

use std::f64::consts::PI;

use crate::constants::AccretionConstants;
use crate::star::StellarScalars;

/// Geometry calculator bound to one set of constants and one star.
#[derive(Debug, Clone)]
pub struct PlanetesimalCalc {
    constants: AccretionConstants,
    star: StellarScalars,
}

impl PlanetesimalCalc {
    pub fn new(constants: AccretionConstants, star: StellarScalars) -> Self {
        Self { constants, star }
    }

    /// Dust surface density at `axis` AU: `A·exp(−α·axis^(1/γ))`.
    ///
    /// Monotonically decreasing in `axis`.
    pub fn dust_density(&self, axis: f64) -> f64 {
        self.constants.dust_density_coeff
            * (-self.constants.dust_density_alpha
                * axis.powf(1.0 / self.constants.dust_density_exponent))
            .exp()
    }

    /// Mass above which a body at `(axis, ecc)` retains nebular gas.
    ///
    /// `B·(r_p·√L)^(−3/4)` with `r_p` the perihelion distance: the hotter
    /// the perihelion, the harder it is to hold an envelope.
    pub fn critical_mass(&self, axis: f64, ecc: f64) -> f64 {
        let perihelion = axis * (1.0 - ecc);
        self.constants.critical_mass_coeff
            * (perihelion * self.star.luminosity.sqrt()).powf(-0.75)
    }

    /// Dole's reduced-mass margin `(m / (1 + m))^(1/4)`.
    fn reduced_margin(mass: f64) -> f64 {
        (mass / (1.0 + mass)).powf(0.25)
    }

    /// Innermost radius whose matter the body can gravitationally capture.
    pub fn inner_grav_limit(&self, axis: f64, ecc: f64, mass: f64) -> f64 {
        axis * (1.0 - ecc) * (1.0 - Self::reduced_margin(mass))
    }

    /// Outermost radius whose matter the body can gravitationally capture.
    pub fn outer_grav_limit(&self, axis: f64, ecc: f64, mass: f64) -> f64 {
        axis * (1.0 + ecc) * (1.0 + Self::reduced_margin(mass))
    }

    /// Inner edge of the annulus swept clean per orbit.
    ///
    /// The gravitational reach widened by the cloud-particle eccentricity,
    /// clamped to zero for band arithmetic.
    pub fn inner_sweep_limit(&self, axis: f64, ecc: f64, mass: f64) -> f64 {
        (self.inner_grav_limit(axis, ecc, mass) / (1.0 + self.constants.cloud_eccentricity))
            .max(0.0)
    }

    /// Outer edge of the annulus swept clean per orbit.
    pub fn outer_sweep_limit(&self, axis: f64, ecc: f64, mass: f64) -> f64 {
        self.outer_grav_limit(axis, ecc, mass) / (1.0 - self.constants.cloud_eccentricity)
    }

    /// Effective volume of the intersection of the sweep annulus
    /// `[sweep_inner, sweep_outer]` with the band `[band_inner, band_outer]`.
    ///
    /// Returns 0 when the two are disjoint. The eccentricity term weights
    /// the torus cross-section by how much of the orbit actually crosses
    /// the overlapping width.
    #[allow(clippy::too_many_arguments)]
    pub fn band_volume(
        &self,
        mass: f64,
        axis: f64,
        ecc: f64,
        sweep_inner: f64,
        sweep_outer: f64,
        band_inner: f64,
        band_outer: f64,
    ) -> f64 {
        if band_outer <= sweep_inner || band_inner >= sweep_outer {
            return 0.0;
        }
        let bandwidth = sweep_outer - sweep_inner;
        let outer_excess = (sweep_outer - band_outer).max(0.0);
        let inner_excess = (band_inner - sweep_inner).max(0.0);
        let width = bandwidth - outer_excess - inner_excess;

        let torus = 4.0
            * PI
            * axis.powi(2)
            * Self::reduced_margin(mass)
            * (1.0 - ecc * (outer_excess - inner_excess) / bandwidth);
        torus * width
    }

    /// Density swept by a super-critical body through a band that still
    /// carries gas.
    ///
    /// `K·ρ / (1 + √(m_c/m)·(K−1))` approaches `K·ρ` as the body grows far
    /// past its critical mass and degrades to `ρ` at `m = m_c`.
    pub fn dust_and_gas_density(&self, dust_density: f64, critical_mass: f64, mass: f64) -> f64 {
        let k = self.constants.gas_dust_ratio;
        k * dust_density / (1.0 + (critical_mass / mass).sqrt() * (k - 1.0))
    }

    /// Outer edge of the initial dust disc: `200·M★^(1/3)` AU.
    pub fn outer_dust_limit(&self) -> f64 {
        200.0 * self.star.mass.powf(1.0 / 3.0)
    }

    /// Whether a sweep pass gained enough mass to warrant another pass.
    pub fn should_accrete_continue(&self, last_mass: f64, next_mass: f64) -> bool {
        (next_mass - last_mass) / last_mass > self.constants.accretion_epsilon
    }

    pub fn constants(&self) -> &AccretionConstants {
        &self.constants
    }

    pub fn star(&self) -> &StellarScalars {
        &self.star
    }
}
