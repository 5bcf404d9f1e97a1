//! Value types shared by every screening stage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw minute kline as delivered by the exchange.
///
/// Timestamps are integer milliseconds since the Unix epoch, prices and
/// volume are the exchange's floating-point values, untouched. The ingestion
/// collaborator is expected to deliver candles ordered by `open_time`
/// ascending; nothing upstream guarantees uniqueness or positive widths —
/// surfacing those defects is the validator's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Interval start, milliseconds since epoch.
    pub open_time: i64,
    /// Interval end, milliseconds since epoch.
    pub close_time: i64,
    /// Price at interval start.
    pub open: f64,
    /// Highest trade price in the interval.
    pub high: f64,
    /// Lowest trade price in the interval.
    pub low: f64,
    /// Price at interval end.
    pub close: f64,
    /// Base-asset volume traded in the interval.
    pub volume: f64,
}

/// Quality classification attached to candle rows and series points.
///
/// A single ordered value, not a bitmask. Within one run a record only moves
/// to a higher severity (escalation), never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    /// No anomaly detected.
    Clean = 0,
    /// Suspicious but usable: repeated OHLCV, zero volume, or
    /// zero-variance OHLC.
    Warning = 1,
    /// Structurally broken interval: non-positive width, or an open time
    /// that does not advance past the previous row's.
    DropRecommended = 2,
    /// Price fell strictly outside a rolling band; assigned only over
    /// `Clean` or `DropRecommended`.
    Discontinuous = 3,
    /// Grid point with no contributing source row; price backfilled or
    /// carried from the close series.
    Backfilled = 4,
}

impl StatusCode {
    /// Stable numeric code exposed to downstream collaborators.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether the discontinuity detector may escalate this status.
    ///
    /// Warnings are left as-is (a band breach does not override them) and
    /// backfilled points carry no observed price to judge.
    #[must_use]
    pub const fn band_checked(self) -> bool {
        matches!(self, Self::Clean | Self::DropRecommended)
    }
}

/// A raw candle plus the validator's verdict. Immutable once produced;
/// later stages read it but never rewrite it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidatedCandle {
    /// The untouched source row.
    pub candle: Candle,
    /// Row-level classification.
    pub status: StatusCode,
}

/// Rolling-band columns for one configured window at one grid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowBands {
    /// Window length in minutes this row was computed with.
    pub window: usize,
    /// Trailing mean of the last `window` prices, current point included.
    pub moving_average: f64,
    /// `moving_average + k * std`.
    pub upper_band: f64,
    /// `moving_average - k * std`.
    pub lower_band: f64,
    /// `price / moving_average`.
    pub pct_of_ma: f64,
}

impl WindowBands {
    /// Deterministic export labels for one window's band columns, in the
    /// order moving average, upper band, lower band, percent-of-MA.
    ///
    /// Persistence collaborators use these to name columns: `ma_60`,
    /// `ub_60`, `lb_60`, `pctma_60` for a 60-minute window.
    #[must_use]
    pub fn column_labels(window: usize) -> [String; 4] {
        [
            format!("ma_{window}"),
            format!("ub_{window}"),
            format!("lb_{window}"),
            format!("pctma_{window}"),
        ]
    }
}

/// One point of the continuous minute-grid price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Minute-aligned timestamp, UTC.
    pub ts: DateTime<Utc>,
    /// Merged open/close price, linearly filled where no source row exists.
    pub price: f64,
    /// Carried from the contributing row, `Backfilled` where none exists;
    /// possibly escalated to `Discontinuous` by the detector.
    pub status: StatusCode,
    /// Band columns appended by the detector: one entry per configured
    /// window for which the bands are defined at this point. Empty until
    /// the detector has run, and for the first `window - 1` points of each
    /// window.
    pub bands: Vec<WindowBands>,
}

impl SeriesPoint {
    /// Band columns for one configured window, if defined at this point.
    #[must_use]
    pub fn bands_for(&self, window: usize) -> Option<&WindowBands> {
        self.bands.iter().find(|b| b.window == window)
    }
}
