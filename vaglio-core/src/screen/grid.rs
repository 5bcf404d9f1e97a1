use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{SeriesPoint, StatusCode, ValidatedCandle, VaglioError};

/// One grid step, in milliseconds.
pub const MINUTE_MS: i64 = 60_000;

/// Round a millisecond timestamp to the nearest minute boundary.
///
/// Ties at exactly 30 seconds round half-to-even, i.e. towards the even
/// minute count.
#[must_use]
pub fn round_to_minute(ms: i64) -> i64 {
    let base = ms.div_euclid(MINUTE_MS);
    let rem = ms.rem_euclid(MINUTE_MS);
    let half = MINUTE_MS / 2;
    let round_up = rem > half || (rem == half && base.rem_euclid(2) == 1);
    (base + i64::from(round_up)) * MINUTE_MS
}

/// Regularize validated candles onto a continuous one-minute grid.
///
/// The open and close prices are first keyed by their minute-rounded
/// timestamps (first occurrence wins on collisions), then merged onto a
/// grid spanning the earliest open minute through the latest close minute,
/// inclusive:
///
/// - a minute with an open-series row takes that row's price and status
/// - a minute with only a close-series price takes it and is flagged
///   [`StatusCode::Backfilled`] (no row-level status exists for it)
/// - a minute with neither is flagged `Backfilled` and its price is filled
///   by time-weighted linear interpolation across the surrounding run of
///   missing minutes
///
/// Degenerate-but-nonempty input (a single candle, say) yields a short
/// grid rather than an error.
///
/// # Errors
/// Returns [`VaglioError::Data`] if `validated` is empty, or if every row
/// is so degenerate that the last close minute precedes the first open
/// minute — in both cases no grid bounds are derivable.
pub fn build_minute_series(validated: &[ValidatedCandle]) -> Result<Vec<SeriesPoint>, VaglioError> {
    if validated.is_empty() {
        return Err(VaglioError::data(
            "cannot derive grid bounds from an empty candle sequence",
        ));
    }

    let mut close_px: BTreeMap<i64, f64> = BTreeMap::new();
    let mut open_px: BTreeMap<i64, (f64, StatusCode)> = BTreeMap::new();
    let mut first_open = i64::MAX;
    let mut last_close = i64::MIN;
    for v in validated {
        let close_minute = round_to_minute(v.candle.close_time);
        let open_minute = round_to_minute(v.candle.open_time);
        close_px.entry(close_minute).or_insert(v.candle.close);
        open_px.entry(open_minute).or_insert((v.candle.open, v.status));
        first_open = first_open.min(open_minute);
        last_close = last_close.max(close_minute);
    }

    if last_close < first_open {
        return Err(VaglioError::data(format!(
            "last close minute {last_close} precedes first open minute {first_open}; \
             no grid bounds derivable"
        )));
    }
    let len = usize::try_from((last_close - first_open) / MINUTE_MS + 1)
        .map_err(|_| VaglioError::data("minute grid span exceeds addressable length"))?;

    let mut prices: Vec<Option<f64>> = Vec::with_capacity(len);
    let mut statuses: Vec<StatusCode> = Vec::with_capacity(len);
    for idx in 0..len {
        let minute = first_open + (idx as i64) * MINUTE_MS;
        let (price, status) = match open_px.get(&minute) {
            Some(&(open, st)) => (Some(open), st),
            None => (close_px.get(&minute).copied(), StatusCode::Backfilled),
        };
        prices.push(price);
        statuses.push(status);
    }

    fill_gaps(&mut prices)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        points = len,
        backfills = statuses
            .iter()
            .filter(|s| **s == StatusCode::Backfilled)
            .count(),
        "built minute grid"
    );

    let mut points = Vec::with_capacity(len);
    for (idx, (price, status)) in prices.into_iter().zip(statuses).enumerate() {
        let minute = first_open + (idx as i64) * MINUTE_MS;
        let ts: DateTime<Utc> = DateTime::from_timestamp_millis(minute)
            .ok_or_else(|| VaglioError::data(format!("grid minute {minute} is out of range")))?;
        let price =
            price.ok_or_else(|| VaglioError::data(format!("grid minute {minute} left unpriced")))?;
        points.push(SeriesPoint {
            ts,
            price,
            status,
            bands: Vec::new(),
        });
    }
    Ok(points)
}

/// Fill runs of missing prices by time-weighted linear interpolation.
///
/// Each missing point takes `left + (right - left) * steps_from_left /
/// steps_between_anchors`; on a uniform grid this is the straight line
/// between the anchoring known prices. The grid always starts on an
/// open-keyed minute and ends on a close-keyed minute, so every run is
/// interior and both anchors exist.
fn fill_gaps(prices: &mut [Option<f64>]) -> Result<(), VaglioError> {
    let mut idx = 0;
    while idx < prices.len() {
        if prices[idx].is_some() {
            idx += 1;
            continue;
        }
        let run_start = idx;
        let mut run_end = idx;
        while run_end < prices.len() && prices[run_end].is_none() {
            run_end += 1;
        }
        let left = run_start
            .checked_sub(1)
            .and_then(|i| prices[i])
            .ok_or_else(|| VaglioError::data("minute grid starts on an unpriced gap"))?;
        let right = prices
            .get(run_end)
            .copied()
            .flatten()
            .ok_or_else(|| VaglioError::data("minute grid ends on an unpriced gap"))?;
        let steps = (run_end - run_start + 1) as f64;
        for (offset, slot) in prices[run_start..run_end].iter_mut().enumerate() {
            *slot = Some(left + (right - left) * ((offset + 1) as f64 / steps));
        }
        idx = run_end;
    }
    Ok(())
}
