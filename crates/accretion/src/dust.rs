//! Dust-band list operations.
//!
//! The disc is an ordered sequence of radial annuli covering
//! `[0, outer_dust_limit]` exactly: adjacent bands touch, and no two
//! adjacent bands carry the same `(dust, gas)` flags. `split` and `merge`
//! are the only transforms applied to it, each a single left-to-right pass.

use serde::{Deserialize, Serialize};

/// A radial annulus of the disc with uniform dust/gas presence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DustBand {
    /// Inner edge in AU
    pub inner_edge: f64,
    /// Outer edge in AU
    pub outer_edge: f64,
    /// Whether the band still carries dust
    pub dust: bool,
    /// Whether the band still carries gas
    pub gas: bool,
}

impl DustBand {
    pub fn new(inner_edge: f64, outer_edge: f64, dust: bool, gas: bool) -> Self {
        Self {
            inner_edge,
            outer_edge,
            dust,
            gas,
        }
    }

    /// The single pristine band the disc starts from.
    pub fn initial(outer_dust_limit: f64) -> Self {
        Self::new(0.0, outer_dust_limit, true, true)
    }

    pub fn width(&self) -> f64 {
        self.outer_edge - self.inner_edge
    }

    /// Overlap test against an open annulus: strict on the far edges,
    /// touching bands do not overlap.
    pub fn overlaps(&self, inner: f64, outer: f64) -> bool {
        self.outer_edge > inner && self.inner_edge < outer
    }

    fn same_material(&self, other: &DustBand) -> bool {
        self.dust == other.dust && self.gas == other.gas
    }
}

/// Split every band around the sweep annulus `[sweep_inner, sweep_outer]`.
///
/// Swept pieces lose their dust; they keep gas only when the band had gas
/// and `retain_gas` holds (sub-critical bodies leave the gas behind, gas
/// giants strip it permanently). Ordering and exact coverage are preserved;
/// the result may contain mergeable neighbours, so callers follow up with
/// [`merge`].
pub fn split(
    bands: &[DustBand],
    sweep_inner: f64,
    sweep_outer: f64,
    retain_gas: bool,
) -> Vec<DustBand> {
    let mut out = Vec::with_capacity(bands.len() + 2);
    for band in bands {
        let swept_gas = band.gas && retain_gas;
        if !band.overlaps(sweep_inner, sweep_outer) {
            out.push(*band);
        } else if band.inner_edge < sweep_inner && band.outer_edge > sweep_outer {
            // Annulus strictly inside the band: three pieces
            out.push(DustBand::new(
                band.inner_edge,
                sweep_inner,
                band.dust,
                band.gas,
            ));
            out.push(DustBand::new(sweep_inner, sweep_outer, false, swept_gas));
            out.push(DustBand::new(
                sweep_outer,
                band.outer_edge,
                band.dust,
                band.gas,
            ));
        } else if band.inner_edge < sweep_inner {
            // Annulus covers the band's outer part only
            out.push(DustBand::new(
                band.inner_edge,
                sweep_inner,
                band.dust,
                band.gas,
            ));
            out.push(DustBand::new(
                sweep_inner,
                band.outer_edge,
                false,
                swept_gas,
            ));
        } else if band.outer_edge > sweep_outer {
            // Annulus covers the band's inner part only
            out.push(DustBand::new(
                band.inner_edge,
                sweep_outer,
                false,
                swept_gas,
            ));
            out.push(DustBand::new(
                sweep_outer,
                band.outer_edge,
                band.dust,
                band.gas,
            ));
        } else {
            // Band entirely inside the annulus
            out.push(DustBand::new(
                band.inner_edge,
                band.outer_edge,
                false,
                swept_gas,
            ));
        }
    }
    out
}

/// Collapse adjacent bands carrying the same `(dust, gas)` flags.
///
/// Idempotent; preserves ordering and exact coverage.
pub fn merge(bands: &[DustBand]) -> Vec<DustBand> {
    let mut out: Vec<DustBand> = Vec::with_capacity(bands.len());
    for band in bands {
        match out.last_mut() {
            Some(prev) if prev.same_material(band) => prev.outer_edge = band.outer_edge,
            _ => out.push(*band),
        }
    }
    out
}

/// Whether any band still carrying dust overlaps `(inner, outer)`.
pub fn is_dust_available(bands: &[DustBand], inner: f64, outer: f64) -> bool {
    bands.iter().any(|band| band.dust && band.overlaps(inner, outer))
}
