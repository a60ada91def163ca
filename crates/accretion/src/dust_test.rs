use approx::assert_relative_eq;

use crate::dust::{is_dust_available, merge, split, DustBand};

fn total_width(bands: &[DustBand]) -> f64 {
    bands.iter().map(DustBand::width).sum()
}

fn assert_disc_invariants(bands: &[DustBand], outer_limit: f64) {
    assert_relative_eq!(bands[0].inner_edge, 0.0);
    assert_relative_eq!(bands[bands.len() - 1].outer_edge, outer_limit);
    for pair in bands.windows(2) {
        assert_relative_eq!(pair[0].outer_edge, pair[1].inner_edge);
        assert!(pair[0].inner_edge < pair[0].outer_edge);
    }
}

#[test]
fn annulus_inside_a_band_splits_it_in_three() {
    let bands = vec![DustBand::initial(200.0)];

    let result = split(&bands, 0.5, 2.0, true);

    assert_eq!(result.len(), 3);
    assert_eq!(result[0], DustBand::new(0.0, 0.5, true, true));
    assert_eq!(result[1], DustBand::new(0.5, 2.0, false, true));
    assert_eq!(result[2], DustBand::new(2.0, 200.0, true, true));
}

#[test]
fn a_gas_giant_strips_gas_from_the_swept_annulus() {
    let bands = vec![DustBand::initial(200.0)];

    let result = split(&bands, 0.5, 2.0, false);

    assert_eq!(result[1], DustBand::new(0.5, 2.0, false, false));
}

#[test]
fn annulus_over_the_outer_edge_splits_in_two() {
    let bands = vec![
        DustBand::new(0.0, 1.0, true, true),
        DustBand::new(1.0, 200.0, true, true),
    ];

    let result = split(&bands, 0.6, 1.4, true);

    assert_eq!(result.len(), 4);
    assert_eq!(result[0], DustBand::new(0.0, 0.6, true, true));
    assert_eq!(result[1], DustBand::new(0.6, 1.0, false, true));
    assert_eq!(result[2], DustBand::new(1.0, 1.4, false, true));
    assert_eq!(result[3], DustBand::new(1.4, 200.0, true, true));
}

#[test]
fn band_inside_the_annulus_just_loses_its_dust() {
    let bands = vec![
        DustBand::new(0.0, 1.0, true, true),
        DustBand::new(1.0, 2.0, true, false),
        DustBand::new(2.0, 200.0, true, true),
    ];

    let result = split(&bands, 0.9, 2.5, true);

    // Middle band is entirely consumed; its gas flag was already false
    assert_eq!(result[2], DustBand::new(1.0, 2.0, false, false));
}

#[test]
fn split_is_the_identity_away_from_the_annulus() {
    let bands = vec![
        DustBand::new(0.0, 1.0, true, true),
        DustBand::new(1.0, 3.0, false, true),
        DustBand::new(3.0, 200.0, true, true),
    ];

    // Annulus tucked between 1 and 3 where only a dustless band sits
    let result = split(&bands, 120.0, 150.0, true);
    assert_eq!(
        merge(&result),
        vec![
            DustBand::new(0.0, 1.0, true, true),
            DustBand::new(1.0, 3.0, false, true),
            DustBand::new(3.0, 120.0, true, true),
            DustBand::new(120.0, 150.0, false, true),
            DustBand::new(150.0, 200.0, true, true),
        ]
    );

    // A fully disjoint annulus leaves the disc untouched
    let untouched = split(&bands, 300.0, 400.0, true);
    assert_eq!(untouched, bands);
    assert_eq!(merge(&untouched), bands);
}

#[test]
fn merge_collapses_equal_neighbours() {
    let bands = vec![
        DustBand::new(0.0, 1.0, false, true),
        DustBand::new(1.0, 2.0, false, true),
        DustBand::new(2.0, 3.0, true, true),
        DustBand::new(3.0, 200.0, true, true),
    ];

    let merged = merge(&bands);

    assert_eq!(
        merged,
        vec![
            DustBand::new(0.0, 2.0, false, true),
            DustBand::new(2.0, 200.0, true, true),
        ]
    );
}

#[test]
fn merge_is_idempotent() {
    let bands = vec![
        DustBand::new(0.0, 0.4, true, true),
        DustBand::new(0.4, 1.1, false, false),
        DustBand::new(1.1, 2.0, false, true),
        DustBand::new(2.0, 200.0, true, true),
    ];

    let once = merge(&bands);
    let twice = merge(&once);

    assert_eq!(once, twice);
    for pair in once.windows(2) {
        assert!(
            pair[0].dust != pair[1].dust || pair[0].gas != pair[1].gas,
            "adjacent bands left mergeable"
        );
    }
}

#[test]
fn split_then_merge_preserves_measure_and_coverage() {
    let mut bands = vec![DustBand::initial(200.0)];

    // A cascade of sweeps with varying annuli and gas retention
    let sweeps = [
        (0.2, 1.5, true),
        (1.0, 4.0, false),
        (3.5, 3.9, true),
        (0.0, 0.7, true),
        (150.0, 260.0, false),
    ];
    for &(inner, outer, retain_gas) in &sweeps {
        bands = merge(&split(&bands, inner, outer, retain_gas));
        assert_relative_eq!(total_width(&bands), 200.0, max_relative = 1.0e-12);
        assert_disc_invariants(&bands, 200.0);
    }
}

#[test]
fn dust_availability_respects_the_queried_range() {
    let bands = vec![
        DustBand::new(0.0, 1.0, false, true),
        DustBand::new(1.0, 5.0, true, true),
        DustBand::new(5.0, 200.0, false, false),
    ];

    assert!(is_dust_available(&bands, 0.3, 50.0));
    assert!(is_dust_available(&bands, 4.9, 50.0));
    assert!(!is_dust_available(&bands, 0.0, 1.0));
    assert!(!is_dust_available(&bands, 5.0, 200.0));
    assert!(!is_dust_available(&bands, 0.0, 0.5));
}

#[test]
fn an_exhausted_disc_reports_no_dust() {
    let bands = vec![DustBand::new(0.0, 200.0, false, true)];
    assert!(!is_dust_available(&bands, 0.3, 50.0));
}
