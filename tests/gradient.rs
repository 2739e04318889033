//! Gradient mapper properties.

use heatlens::data::SampleSeries;
use heatlens::heat::gradient::{compute_gradient_stops, ColorRamp, STANDARD_RAMP};
use heatlens::heat::ColorScheme;

fn stops_for(values: Vec<f64>, opacity: f64) -> Vec<heatlens::heat::gradient::GradientStop> {
    compute_gradient_stops(&SampleSeries::new(values), opacity, &STANDARD_RAMP)
}

#[test]
fn increasing_series_yields_non_decreasing_intensities() {
    let series = SampleSeries::new(vec![3.0, 7.0, 11.0, 40.0, 41.0, 100.0]);
    let stops = compute_gradient_stops(&series, 1.0, &STANDARD_RAMP);

    // At opacity 1 each stop's alpha equals its raw intensity.
    let alphas: Vec<f32> = stops.iter().map(|s| s.color.a).collect();
    for pair in alphas.windows(2) {
        assert!(pair[1] >= pair[0], "intensities regressed: {:?}", alphas);
    }
    assert_eq!(alphas[0], 0.0);
    assert_eq!(*alphas.last().unwrap(), 1.0);
}

#[test]
fn constant_series_is_fully_transparent_at_any_opacity() {
    for opacity in [0.0, 0.3, 0.6, 1.0] {
        let stops = stops_for(vec![44.0; 20], opacity);
        assert_eq!(stops.len(), 20);
        for stop in &stops {
            assert_eq!(stop.color.a, 0.0, "opacity {}", opacity);
        }
    }
}

#[test]
fn alpha_is_intensity_times_opacity() {
    let values = vec![0.0, 25.0, 50.0, 75.0, 100.0];
    for opacity in [0.0, 0.25, 0.5, 1.0] {
        let stops = stops_for(values.clone(), opacity);
        for (i, stop) in stops.iter().enumerate() {
            let intensity = i as f64 * 0.25;
            assert_eq!(stop.color.a, (intensity * opacity) as f32);
        }
    }
}

#[test]
fn opacity_zero_is_fully_transparent_and_one_is_raw_intensity() {
    let values = vec![10.0, 20.0, 30.0];

    for stop in stops_for(values.clone(), 0.0) {
        assert_eq!(stop.color.a, 0.0);
    }

    let raw = stops_for(values, 1.0);
    assert_eq!(raw[0].color.a, 0.0);
    assert_eq!(raw[1].color.a, 0.5);
    assert_eq!(raw[2].color.a, 1.0);
}

#[test]
fn reference_series_at_point_six_opacity() {
    let stops = stops_for(vec![100.0, 150.0, 200.0], 0.6);
    assert_eq!(stops.len(), 3);

    let positions: Vec<f64> = stops.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![0.0, 0.5, 1.0]);

    // Position 0: blue family, invisible.
    assert_eq!((stops[0].color.r, stops[0].color.g, stops[0].color.b), (0, 0, 255));
    assert_eq!(stops[0].color.a, 0.0);

    // Position 1: deep red at alpha 0.6.
    assert_eq!((stops[2].color.r, stops[2].color.g, stops[2].color.b), (255, 0, 0));
    assert!((stops[2].color.a - 0.6).abs() < 1e-6);
}

#[test]
fn single_sample_sits_at_position_zero_with_zero_intensity() {
    let stops = stops_for(vec![42.0], 0.6);
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].position, 0.0);
    assert_eq!(stops[0].color.a, 0.0);
}

#[test]
fn empty_series_yields_no_stops() {
    assert!(stops_for(Vec::new(), 0.6).is_empty());
}

#[test]
fn stops_are_deterministic() {
    let a = stops_for(vec![1.0, 5.0, 2.0, 9.0], 0.4);
    let b = stops_for(vec![1.0, 5.0, 2.0, 9.0], 0.4);
    assert_eq!(a, b);
}

#[test]
fn out_of_range_opacity_clamps() {
    let over = stops_for(vec![0.0, 100.0], 3.0);
    assert_eq!(over[1].color.a, 1.0);

    let under = stops_for(vec![0.0, 100.0], -1.0);
    assert_eq!(under[1].color.a, 0.0);
}

#[test]
fn ramp_hits_anchor_colors_at_band_boundaries() {
    let expected = [
        (0.0, (0u8, 0u8, 255u8)),
        (0.25, (0, 255, 255)),
        (0.5, (0, 255, 0)),
        (0.75, (255, 255, 0)),
        (1.0, (255, 0, 0)),
    ];
    for (t, (r, g, b)) in expected {
        let c = STANDARD_RAMP.sample(t);
        assert_eq!((c.r, c.g, c.b), (r, g, b), "t = {}", t);
    }
}

#[test]
fn ramp_interpolates_within_a_band() {
    // Halfway through the yellow->red band.
    let c = STANDARD_RAMP.sample(0.875);
    assert_eq!(c.r, 255);
    assert_eq!(c.g, 128);
    assert_eq!(c.b, 0);
}

#[test]
fn ramp_clamps_out_of_range_input() {
    let lo = STANDARD_RAMP.sample(-3.0);
    assert_eq!((lo.r, lo.g, lo.b), (0, 0, 255));
    let hi = STANDARD_RAMP.sample(7.0);
    assert_eq!((hi.r, hi.g, hi.b), (255, 0, 0));
}

#[test]
fn custom_anchor_lists_are_supported() {
    static GRAY: &[[u8; 3]] = &[[0, 0, 0], [255, 255, 255]];
    let ramp = ColorRamp::new(GRAY);
    let mid = ramp.sample(0.5);
    assert_eq!((mid.r, mid.g, mid.b), (128, 128, 128));
}

#[test]
fn unknown_scheme_identifier_falls_back_to_standard() {
    assert_eq!(ColorScheme::from_identifier("standard"), ColorScheme::Standard);
    assert_eq!(ColorScheme::from_identifier("plasma"), ColorScheme::Standard);
    assert_eq!(ColorScheme::from_identifier(""), ColorScheme::Standard);
}

#[test]
fn negative_samples_clamp_to_zero_at_construction() {
    let series = SampleSeries::new(vec![-5.0, f64::NAN, 10.0]);
    assert_eq!(series.values(), &[0.0, 0.0, 10.0]);
}
