//! Planetesimal insertion strategy.
//!
//! Two-phase sampling of injection orbits: the first `randomised_count`
//! nuclei explore the whole legal range uniformly; later nuclei are biased
//! toward bands that still carry dust, accelerating disc exhaustion.

use crate::constants::AccretionConstants;
use crate::dust::DustBand;
use crate::rng::DeterministicRng;

/// Samples the orbit of the next injected nucleus.
#[derive(Debug, Clone)]
pub struct InsertionStrategy {
    innermost_planet: f64,
    outermost_planet: f64,
    eccentricity_coeff: f64,
    randomised_count: u32,
}

impl InsertionStrategy {
    pub fn new(constants: &AccretionConstants) -> Self {
        Self {
            innermost_planet: constants.innermost_planet,
            outermost_planet: constants.outermost_planet,
            eccentricity_coeff: constants.eccentricity_coeff,
            randomised_count: constants.randomised_count,
        }
    }

    /// Sample a semi-major axis for the `injected_count`-th nucleus.
    ///
    /// Phase 1 (`injected_count < randomised_count`): uniform over the legal
    /// range. Phase 2: pick one dusty band overlapping the legal range
    /// (enumerated in disc order, one uniform draw), then draw uniformly
    /// from its clipped extent. Returns `None` only when no dusty band
    /// overlaps the range, in which case the driver's own dust-availability
    /// guard is about to stop the loop anyway.
    pub fn semi_major_axis<R: DeterministicRng>(
        &self,
        rng: &mut R,
        injected_count: u32,
        bands: &[DustBand],
    ) -> Option<f64> {
        if injected_count < self.randomised_count {
            let span = self.outermost_planet - self.innermost_planet;
            return Some(self.innermost_planet + rng.next_uniform() * span);
        }

        let pockets: Vec<(f64, f64)> = bands
            .iter()
            .filter(|band| band.dust && band.overlaps(self.innermost_planet, self.outermost_planet))
            .map(|band| {
                (
                    band.inner_edge.max(self.innermost_planet),
                    band.outer_edge.min(self.outermost_planet),
                )
            })
            .collect();
        if pockets.is_empty() {
            return None;
        }

        let pick = ((rng.next_uniform() * pockets.len() as f64) as usize).min(pockets.len() - 1);
        let (inner, outer) = pockets[pick];
        Some(inner + rng.next_uniform() * (outer - inner))
    }

    /// Sample an orbital eccentricity: `1 − U^Q`.
    ///
    /// Concentrated near circular orbits with a heavy tail toward 1.
    pub fn eccentricity<R: DeterministicRng>(&self, rng: &mut R) -> f64 {
        1.0 - rng.next_uniform().powf(self.eccentricity_coeff)
    }
}
