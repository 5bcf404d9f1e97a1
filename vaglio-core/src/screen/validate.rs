use crate::{Candle, StatusCode, ValidatedCandle};

/// Tolerance below which a float is treated as zero.
const EPS: f64 = 1e-9;

/// All five OHLCV fields must repeat before a row is flagged.
const REPEATED_FIELDS: usize = 5;

/// Classify each raw candle row, preserving length and order.
///
/// Checks use the current row and, where history matters, the immediately
/// preceding row in the input ordering:
///
/// - warning candidates: all five OHLCV fields bit-identical to the
///   previous row, volume below [`EPS`], or zero-variance OHLC
/// - drop candidates: non-positive interval width, or an open time that
///   does not advance past the previous row's open time
///
/// Any drop candidate wins over any warning candidate for the same row.
/// The first row has no predecessor, so its repeated-value and overlap
/// checks evaluate as false.
///
/// Prices are never mutated here; reporting totals is the reporter's job.
#[must_use]
pub fn classify_candles(candles: Vec<Candle>) -> Vec<ValidatedCandle> {
    let mut out: Vec<ValidatedCandle> = Vec::with_capacity(candles.len());
    for candle in candles {
        let status = classify_row(&candle, out.last().map(|v| &v.candle));
        out.push(ValidatedCandle { candle, status });
    }

    #[cfg(feature = "tracing")]
    {
        let warnings = out
            .iter()
            .filter(|v| v.status == StatusCode::Warning)
            .count();
        let drops = out
            .iter()
            .filter(|v| v.status == StatusCode::DropRecommended)
            .count();
        tracing::debug!(rows = out.len(), warnings, drops, "classified candle rows");
    }

    out
}

fn classify_row(candle: &Candle, prev: Option<&Candle>) -> StatusCode {
    // Timestamps are integer milliseconds: an interval or open-time
    // advance below one millisecond is no advance at all.
    let zero_width = candle.close_time - candle.open_time <= 0;
    let overlaps_prev = prev.is_some_and(|p| candle.open_time - p.open_time <= 0);
    if zero_width || overlaps_prev {
        return StatusCode::DropRecommended;
    }

    let repeated = prev.is_some_and(|p| repeated_fields(candle, p) >= REPEATED_FIELDS);
    let zero_volume = candle.volume < EPS;
    let stale_ohlc = ohlc_std(candle) <= EPS;
    if repeated || zero_volume || stale_ohlc {
        StatusCode::Warning
    } else {
        StatusCode::Clean
    }
}

/// Count OHLCV fields that are bit-for-bit identical between two rows.
fn repeated_fields(candle: &Candle, prev: &Candle) -> usize {
    [
        (candle.open, prev.open),
        (candle.high, prev.high),
        (candle.low, prev.low),
        (candle.close, prev.close),
        (candle.volume, prev.volume),
    ]
    .iter()
    .filter(|(a, b)| a.to_bits() == b.to_bits())
    .count()
}

/// Sample standard deviation across a row's four OHLC prices.
fn ohlc_std(candle: &Candle) -> f64 {
    let prices = [candle.open, candle.high, candle.low, candle.close];
    let mean = prices.iter().sum::<f64>() / 4.0;
    let sum_sq: f64 = prices.iter().map(|p| (p - mean) * (p - mean)).sum();
    (sum_sq / 3.0).sqrt()
}
