use proptest::prelude::*;
use vaglio_core::{Candle, StatusCode, classify_candles};

fn candle(open_time: i64, close_time: i64, px: f64, volume: f64) -> Candle {
    Candle {
        open_time,
        close_time,
        open: px,
        high: px + 0.5,
        low: px - 0.5,
        close: px + 0.1,
        volume,
    }
}

fn flat_candle(open_time: i64, close_time: i64, px: f64, volume: f64) -> Candle {
    Candle {
        open_time,
        close_time,
        open: px,
        high: px,
        low: px,
        close: px,
        volume,
    }
}

fn arb_candle() -> impl Strategy<Value = Candle> {
    (
        0i64..10_000_000i64,
        1i64..120_000i64,
        1.0f64..100_000.0,
        0.0f64..1_000.0,
    )
        .prop_map(|(open_time, width, px, volume)| candle(open_time, open_time + width, px, volume))
}

proptest! {
    #[test]
    fn classify_preserves_length_and_order(candles in proptest::collection::vec(arb_candle(), 0..200)) {
        let validated = classify_candles(candles.clone());
        prop_assert_eq!(validated.len(), candles.len());
        for (v, c) in validated.iter().zip(&candles) {
            prop_assert_eq!(&v.candle, c);
        }
    }

    #[test]
    fn non_positive_width_is_always_drop(mut c in arb_candle(), shrink in 0i64..10_000i64) {
        // Regardless of prices and volume, a zero-or-negative interval is
        // drop-recommended.
        c.close_time = c.open_time - shrink;
        let validated = classify_candles(vec![c]);
        prop_assert_eq!(validated[0].status, StatusCode::DropRecommended);
    }

    #[test]
    fn repeated_ohlcv_is_never_clean(first in arb_candle()) {
        // Second row advances in time but repeats all five OHLCV fields.
        let second = Candle {
            open_time: first.close_time + 1,
            close_time: first.close_time + 60_000,
            ..first
        };
        let validated = classify_candles(vec![first, second]);
        prop_assert_ne!(validated[1].status, StatusCode::Clean);
    }

    #[test]
    fn non_advancing_open_time_is_drop(first in arb_candle(), back in 0i64..10_000i64) {
        let second = Candle {
            open_time: first.open_time - back,
            close_time: first.open_time + 120_000,
            open: first.open + 1.0,
            ..first
        };
        let validated = classify_candles(vec![first, second]);
        prop_assert_eq!(validated[1].status, StatusCode::DropRecommended);
    }
}

#[test]
fn well_formed_first_row_is_clean() {
    // No predecessor: the repeated-value and overlap checks must not fire
    // on missing history.
    let validated = classify_candles(vec![candle(0, 59_999, 100.0, 5.0)]);
    assert_eq!(validated[0].status, StatusCode::Clean);
}

#[test]
fn zero_volume_is_a_warning() {
    let validated = classify_candles(vec![candle(0, 59_999, 100.0, 0.0)]);
    assert_eq!(validated[0].status, StatusCode::Warning);
}

#[test]
fn stale_ohlc_is_a_warning() {
    let validated = classify_candles(vec![flat_candle(0, 59_999, 100.0, 5.0)]);
    assert_eq!(validated[0].status, StatusCode::Warning);
}

#[test]
fn drop_overrides_warning_candidates() {
    // Zero volume and zero variance would flag a warning, but the
    // non-positive width wins.
    let validated = classify_candles(vec![flat_candle(60_000, 60_000, 100.0, 0.0)]);
    assert_eq!(validated[0].status, StatusCode::DropRecommended);
}

#[test]
fn identical_flat_rows_both_warn_when_time_advances() {
    // Two structurally valid rows: both trip the zero-volume and stale
    // checks, the second additionally repeats all five fields. Neither is
    // droppable because the intervals are positive and open times advance.
    let validated = classify_candles(vec![
        flat_candle(0, 60_000, 1.0, 0.0),
        flat_candle(60_000, 120_000, 1.0, 0.0),
    ]);
    assert_eq!(validated[0].status, StatusCode::Warning);
    assert_eq!(validated[1].status, StatusCode::Warning);
}

#[test]
fn duplicate_open_time_is_dropped_via_overlap() {
    let validated = classify_candles(vec![
        flat_candle(0, 60_000, 1.0, 0.0),
        flat_candle(0, 120_000, 1.0, 0.0),
    ]);
    assert_eq!(validated[0].status, StatusCode::Warning);
    assert_eq!(validated[1].status, StatusCode::DropRecommended);
}

#[test]
fn near_repeat_of_four_fields_is_not_flagged_as_repeated() {
    let first = candle(0, 59_999, 100.0, 5.0);
    let mut second = Candle {
        open_time: 60_000,
        close_time: 119_999,
        ..first
    };
    second.volume = 6.0;
    let validated = classify_candles(vec![first, second]);
    assert_eq!(validated[1].status, StatusCode::Clean);
}
