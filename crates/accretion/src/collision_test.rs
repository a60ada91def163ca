use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::calc::PlanetesimalCalc;
use crate::collision::{coalesce, coalesce_axis, coalesce_eccentricity, too_close};
use crate::constants::AccretionConstants;
use crate::protoplanet::ProtoPlanet;
use crate::star::StellarScalars;

fn solar_calc() -> PlanetesimalCalc {
    PlanetesimalCalc::new(AccretionConstants::default(), StellarScalars::solar())
}

#[test]
fn coalesced_axis_is_the_mass_weighted_mean() {
    assert_relative_eq!(coalesce_axis(1.0e-6, 1.0, 1.0e-6, 3.0), 2.0);

    // A dominant partner pulls the orbit toward its own axis
    let axis = coalesce_axis(9.0e-6, 1.0, 1.0e-6, 3.0);
    assert_relative_eq!(axis, 1.2);
}

#[test]
fn coalesced_axis_stays_between_the_parents() {
    let axis = coalesce_axis(2.5e-7, 0.7, 4.0e-6, 1.9);
    assert!(axis > 0.7 && axis < 1.9);
}

#[test]
fn merging_equal_circular_orbits_stays_circular() {
    let ecc = coalesce_eccentricity(1.0e-6, 2.0, 0.0, 1.0e-6, 2.0, 0.0, 2.0);
    assert_abs_diff_eq!(ecc, 0.0, epsilon = 1.0e-12);
}

#[test]
fn coalesced_eccentricity_stays_in_range() {
    let cases = [
        (1.0e-6, 1.0, 0.9, 1.0e-6, 1.1, 0.9),
        (5.0e-7, 0.4, 0.05, 3.0e-6, 0.5, 0.3),
        (1.0e-8, 10.0, 0.0, 1.0e-4, 12.0, 0.7),
    ];
    for &(ma, aa, ea, mb, ab, eb) in &cases {
        let axis = coalesce_axis(ma, aa, mb, ab);
        let ecc = coalesce_eccentricity(ma, aa, ea, mb, ab, eb, axis);
        assert!((0.0..1.0).contains(&ecc), "e = {} out of range", ecc);
    }
}

#[test]
fn rounding_degeneracy_clamps_to_circular() {
    // Identical circular orbits make the momentum term exactly 1; any
    // floating-point excess must clamp rather than produce NaN
    let ecc = coalesce_eccentricity(3.0e-7, 1.0, 0.0, 3.0e-7, 1.0, 0.0, 1.0);
    assert!(ecc.is_finite());
    assert_abs_diff_eq!(ecc, 0.0, epsilon = 1.0e-12);
}

#[test]
fn coalesce_sums_masses() {
    let a = ProtoPlanet::new(1.0, 0.1, 2.0e-6);
    let b = ProtoPlanet::new(1.2, 0.2, 3.0e-6);

    let merged = coalesce(&a, &b);
    assert_relative_eq!(merged.mass, 5.0e-6);
    assert!(merged.axis > a.axis && merged.axis < b.axis);
}

#[test]
fn distant_bodies_are_not_too_close() {
    let calc = solar_calc();
    let p = ProtoPlanet::new(1.0, 0.01, 1.0e-7);
    let q = ProtoPlanet::new(30.0, 0.01, 1.0e-7);

    assert!(!too_close(&p, &q, &calc));
    assert!(!too_close(&q, &p, &calc));
}

#[test]
fn overlapping_annuli_trigger_a_merge() {
    let calc = solar_calc();
    let p = ProtoPlanet::new(1.0, 0.05, 1.0e-6);
    let q = ProtoPlanet::new(1.01, 0.05, 1.0e-6);

    assert!(too_close(&p, &q, &calc));
    assert!(too_close(&q, &p, &calc));
}

#[test]
fn an_eccentric_neighbour_reaches_further() {
    let calc = solar_calc();
    let candidate = ProtoPlanet::new(1.3, 0.0, 1.0e-9);

    let placid = ProtoPlanet::new(1.0, 0.0, 1.0e-9);
    let eccentric = ProtoPlanet::new(1.0, 0.5, 1.0e-4);

    assert!(!too_close(&placid, &candidate, &calc));
    assert!(too_close(&eccentric, &candidate, &calc));
}
