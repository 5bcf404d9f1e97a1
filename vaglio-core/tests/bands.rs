use chrono::DateTime;
use proptest::prelude::*;
use vaglio_core::{
    BandSpec, MINUTE_MS, SeriesPoint, StatusCode, VaglioError, detect_discontinuities,
};

fn series_from(prices: &[f64]) -> Vec<SeriesPoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| SeriesPoint {
            ts: DateTime::from_timestamp_millis(i as i64 * MINUTE_MS).unwrap(),
            price,
            status: StatusCode::Clean,
            bands: Vec::new(),
        })
        .collect()
}

const SPIKY: [f64; 5] = [10.0, 10.0, 10.0, 10.0, 100.0];

#[test]
fn bands_are_defined_from_each_windows_warmup_onward() {
    let series = series_from(&[5.0; 12]);
    let out = detect_discontinuities(&series, &BandSpec::new(3, 2.0), &BandSpec::new(5, 2.0));
    let out = out.unwrap();
    for (i, point) in out.iter().enumerate() {
        assert_eq!(point.bands_for(3).is_some(), i >= 2, "window 3 at {i}");
        assert_eq!(point.bands_for(5).is_some(), i >= 4, "window 5 at {i}");
    }
}

#[test]
fn known_band_values_on_a_spike() {
    // Trailing window of 3 at the spike holds [10, 10, 100]: mean 40,
    // sample std sqrt(2700).
    let out =
        detect_discontinuities(&series_from(&SPIKY), &BandSpec::new(3, 1.0), &BandSpec::new(5, 10.0))
            .unwrap();

    let warm = out[2].bands_for(3).unwrap();
    assert!((warm.moving_average - 10.0).abs() < 1e-12);
    assert!((warm.upper_band - 10.0).abs() < 1e-12);
    assert!((warm.lower_band - 10.0).abs() < 1e-12);
    assert!((warm.pct_of_ma - 1.0).abs() < 1e-12);

    let spike = out[4].bands_for(3).unwrap();
    let std = 2700.0_f64.sqrt();
    assert!((spike.moving_average - 40.0).abs() < 1e-9);
    assert!((spike.upper_band - (40.0 + std)).abs() < 1e-9);
    assert!((spike.lower_band - (40.0 - std)).abs() < 1e-9);
    assert!((spike.pct_of_ma - 2.5).abs() < 1e-12);
}

#[test]
fn spike_outside_either_window_escalates() {
    // 100 > 40 + 1 * 51.96: outside the short band, inside the long one.
    let out =
        detect_discontinuities(&series_from(&SPIKY), &BandSpec::new(3, 1.0), &BandSpec::new(5, 10.0))
            .unwrap();
    assert_eq!(out[4].status, StatusCode::Discontinuous);
    for point in &out[..4] {
        assert_eq!(point.status, StatusCode::Clean);
    }
}

#[test]
fn flat_series_is_never_discontinuous() {
    // Bands collapse onto the mean; equality is not strictly outside.
    let out = detect_discontinuities(
        &series_from(&[5.0; 10]),
        &BandSpec::new(3, 2.0),
        &BandSpec::new(5, 2.0),
    )
    .unwrap();
    assert!(out.iter().all(|p| p.status == StatusCode::Clean));
}

#[test]
fn warning_and_backfill_points_are_left_untouched() {
    let mut series = series_from(&SPIKY);
    series[4].status = StatusCode::Warning;
    let out = detect_discontinuities(&series, &BandSpec::new(3, 1.0), &BandSpec::new(5, 10.0))
        .unwrap();
    assert_eq!(out[4].status, StatusCode::Warning);

    let mut series = series_from(&SPIKY);
    series[4].status = StatusCode::Backfilled;
    let out = detect_discontinuities(&series, &BandSpec::new(3, 1.0), &BandSpec::new(5, 10.0))
        .unwrap();
    assert_eq!(out[4].status, StatusCode::Backfilled);
}

#[test]
fn drop_recommended_points_can_escalate() {
    let mut series = series_from(&SPIKY);
    series[4].status = StatusCode::DropRecommended;
    let out = detect_discontinuities(&series, &BandSpec::new(3, 1.0), &BandSpec::new(5, 10.0))
        .unwrap();
    assert_eq!(out[4].status, StatusCode::Discontinuous);
}

#[test]
fn detection_is_idempotent() {
    let w1 = BandSpec::new(3, 1.0);
    let w2 = BandSpec::new(5, 10.0);
    let once = detect_discontinuities(&series_from(&SPIKY), &w1, &w2).unwrap();
    let twice = detect_discontinuities(&once, &w1, &w2).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn oversized_window_is_a_config_error() {
    let err = detect_discontinuities(&series_from(&SPIKY), &BandSpec::new(3, 1.0), &BandSpec::new(6, 1.0))
        .unwrap_err();
    assert!(matches!(err, VaglioError::Config(_)));
}

#[test]
fn degenerate_band_specs_are_config_errors() {
    let series = series_from(&SPIKY);
    for spec in [
        BandSpec::new(1, 1.0),
        BandSpec::new(0, 1.0),
        BandSpec::new(3, -1.0),
        BandSpec::new(3, f64::NAN),
    ] {
        let err = detect_discontinuities(&series, &spec, &BandSpec::new(3, 1.0)).unwrap_err();
        assert!(matches!(err, VaglioError::Config(_)), "spec {spec:?}");
    }
}

#[test]
fn export_labels_are_window_deterministic() {
    let labels = vaglio_core::WindowBands::column_labels(60);
    assert_eq!(labels, ["ma_60", "ub_60", "lb_60", "pctma_60"]);
}

proptest! {
    #[test]
    fn statuses_only_ever_escalate(prices in proptest::collection::vec(1.0f64..1_000.0, 10..120)) {
        let w1 = BandSpec::new(3, 1.0);
        let w2 = BandSpec::new(10, 2.0);
        let series = series_from(&prices);
        let out = detect_discontinuities(&series, &w1, &w2).unwrap();
        prop_assert_eq!(out.len(), series.len());
        for (before, after) in series.iter().zip(&out) {
            prop_assert!(
                after.status == before.status || after.status == StatusCode::Discontinuous
            );
        }

        // Band rows appear exactly from each window's warmup onward.
        for (i, point) in out.iter().enumerate() {
            prop_assert_eq!(point.bands_for(3).is_some(), i >= 2);
            prop_assert_eq!(point.bands_for(10).is_some(), i >= 9);
        }

        // Stability: a second pass with the same parameters changes nothing.
        let again = detect_discontinuities(&out, &w1, &w2).unwrap();
        prop_assert_eq!(out, again);
    }
}
