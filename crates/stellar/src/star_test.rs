use approx::assert_relative_eq;

use crate::generation::solar_analog;

#[test]
fn solar_ecosphere_sits_at_one_au() {
    let sun = solar_analog();
    assert_relative_eq!(sun.ecosphere_radius(), 1.0);
    assert_relative_eq!(sun.greenhouse_radius(), 0.93);
}

#[test]
fn ecosphere_scales_with_the_square_root_of_luminosity() {
    let mut star = solar_analog();
    star.luminosity = 4.0;

    assert_relative_eq!(star.ecosphere_radius(), 2.0);
    assert_relative_eq!(star.greenhouse_radius(), 1.86);
    assert_relative_eq!(star.snow_line(), 5.4);
}

#[test]
fn greenhouse_radius_lies_inside_the_ecosphere() {
    for mass in [0.5, 0.8, 1.0, 1.3] {
        let star = crate::generation::primary_star(mass, 3.0);
        assert!(star.greenhouse_radius() < star.ecosphere_radius());
        assert!(star.ecosphere_radius() < star.snow_line());
    }
}

#[test]
fn lifetime_shrinks_for_heavier_stars() {
    let light = crate::generation::primary_star(0.7, 3.0);
    let heavy = crate::generation::primary_star(1.4, 3.0);

    assert!(light.main_sequence_lifetime_gyr() > heavy.main_sequence_lifetime_gyr());
    assert_relative_eq!(solar_analog().main_sequence_lifetime_gyr(), 10.0);
}

#[test]
fn spectral_designation_formats_class_and_subtype() {
    let sun = solar_analog();
    assert_eq!(
        sun.spectral_designation(),
        format!("{}{}", sun.spectral_type, sun.subtype)
    );
    assert!(sun.spectral_designation().starts_with('G'));
}
