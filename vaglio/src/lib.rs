//! Vaglio screens minute-resolution OHLCV data for quality.
//!
//! Overview
//! - Classifies every raw candle row without touching prices: repeated
//!   OHLCV, zero volume, and zero-variance rows warn; zero-width and
//!   overlapping intervals are recommended for dropping.
//! - Regularizes the surviving timestamps onto a gapless one-minute grid,
//!   merging open and close prices and linearly filling holes, each
//!   backfilled point flagged as such.
//! - Screens the grid with two rolling bands and escalates prices that
//!   print strictly outside either band to discontinuous.
//! - Summarizes per-status totals for operator visibility.
//!
//! Statuses only ever escalate within a run; nothing is dropped, imputed
//! over, or alerted on here — what to do with a flagged record is the
//! caller's decision.
//!
//! Fetching candles from an exchange and persisting results are external
//! collaborators: the former sits behind [`CandleSource`], the latter
//! consumes the plain data structures in [`ScreenOutcome`].
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vaglio::{BandSpec, CandleRequest, Vaglio};
//!
//! let vaglio = Vaglio::builder()
//!     .with_source(Arc::new(source))
//!     .bands(BandSpec::new(60, 10.0), BandSpec::new(300, 10.0))
//!     .build()?;
//!
//! let outcome = vaglio.run(&CandleRequest::new("BTCUSDT")).await?;
//! println!("{}", outcome.report);
//! ```
#![warn(missing_docs)]

mod core;

pub use core::{ScreenOutcome, Vaglio, VaglioBuilder};

pub use vaglio_core::{
    BandSpec, Candle, CandleRequest, CandleSource, QualityReport, ScreenConfig, SeriesPoint,
    StatusCode, ValidatedCandle, VaglioError, WindowBands, candles_from_klines,
};
