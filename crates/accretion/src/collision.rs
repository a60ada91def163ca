//! Coalescence of gravitationally overlapping protoplanets.

use crate::calc::PlanetesimalCalc;
use crate::protoplanet::ProtoPlanet;

/// Mass-weighted mean semi-major axis of the merged body.
pub fn coalesce_axis(mass_a: f64, axis_a: f64, mass_b: f64, axis_b: f64) -> f64 {
    (mass_a * axis_a + mass_b * axis_b) / (mass_a + mass_b)
}

/// Eccentricity of the merged body from conservation of angular momentum in
/// the two-body reduced system.
///
/// Each body contributes `m·√(a·(1−e²))`; the argument of the final square
/// root can dip marginally below zero through rounding and is clamped.
pub fn coalesce_eccentricity(
    mass_a: f64,
    axis_a: f64,
    ecc_a: f64,
    mass_b: f64,
    axis_b: f64,
    ecc_b: f64,
    new_axis: f64,
) -> f64 {
    let momentum = mass_a * (axis_a * (1.0 - ecc_a * ecc_a)).sqrt()
        + mass_b * (axis_b * (1.0 - ecc_b * ecc_b)).sqrt();
    let term = momentum / ((mass_a + mass_b) * new_axis.sqrt());
    (1.0 - term * term).max(0.0).sqrt()
}

/// Combine two bodies judged too close to survive separately.
///
/// The successor carries the summed mass on the mass-weighted orbit; the
/// caller re-sweeps it before updating the disc.
pub fn coalesce(a: &ProtoPlanet, b: &ProtoPlanet) -> ProtoPlanet {
    let axis = coalesce_axis(a.mass, a.axis, b.mass, b.axis);
    let ecc = coalesce_eccentricity(a.mass, a.axis, a.ecc, b.mass, b.axis, b.ecc, axis);
    ProtoPlanet::new(axis, ecc, a.mass + b.mass)
}

/// Whether an established planetesimal `p` and a candidate `q` have
/// overlapping gravitational annuli and must merge.
pub fn too_close(p: &ProtoPlanet, q: &ProtoPlanet, calc: &PlanetesimalCalc) -> bool {
    let (p_inner, p_outer) = p.grav_annulus(calc);
    let (q_inner, q_outer) = q.grav_annulus(calc);
    if p.axis > q.axis {
        p_inner < q.axis || q_outer > p.axis
    } else {
        p_outer > q.axis || q_inner < p.axis
    }
}
