use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{SeriesPoint, StatusCode, ValidatedCandle};

/// Aggregate per-status counts over both pipeline outputs.
///
/// Produced for operator visibility only; nothing feeds back into the
/// pipeline from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QualityReport {
    /// Total raw candle rows classified.
    pub candle_rows: usize,
    /// Total points on the minute grid.
    pub series_points: usize,
    /// Candle rows flagged [`StatusCode::Warning`].
    pub warnings: usize,
    /// Candle rows flagged [`StatusCode::DropRecommended`].
    pub drops_recommended: usize,
    /// Series points escalated to [`StatusCode::Discontinuous`].
    pub discontinuities: usize,
    /// Series points flagged [`StatusCode::Backfilled`].
    pub backfills: usize,
}

/// Count statuses across the validated rows and the minute-grid series.
///
/// Pure read; neither input is mutated.
#[must_use]
pub fn summarize(validated: &[ValidatedCandle], series: &[SeriesPoint]) -> QualityReport {
    QualityReport {
        candle_rows: validated.len(),
        series_points: series.len(),
        warnings: validated
            .iter()
            .filter(|v| v.status == StatusCode::Warning)
            .count(),
        drops_recommended: validated
            .iter()
            .filter(|v| v.status == StatusCode::DropRecommended)
            .count(),
        discontinuities: series
            .iter()
            .filter(|p| p.status == StatusCode::Discontinuous)
            .count(),
        backfills: series
            .iter()
            .filter(|p| p.status == StatusCode::Backfilled)
            .count(),
    }
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "candle rows: {} ({} warnings, {} drops recommended)",
            self.candle_rows, self.warnings, self.drops_recommended
        )?;
        write!(
            f,
            "series points: {} ({} discontinuities, {} backfills)",
            self.series_points, self.discontinuities, self.backfills
        )
    }
}
