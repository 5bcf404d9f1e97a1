//! vaglio-core
//!
//! Core types and the minute-candle screening pipeline shared across the
//! vaglio ecosystem.
//!
//! - `types`: common data structures (candles, statuses, series points).
//! - `screen`: the pipeline stages — validate, grid, bands, report.
//! - `source`: the `CandleSource` trait bounding the ingestion collaborator.
//! - `kline`: decoding of raw exchange kline rows.
//!
//! The pipeline is synchronous and batch-oriented: each stage consumes a
//! value and produces a new value, never mutating a caller-owned structure
//! in place. Only the ingestion seam is async; everything downstream of it
//! runs to completion deterministically or fails with a [`VaglioError`].
#![warn(missing_docs)]

/// Band parameters and the full screening configuration.
pub mod config;
/// The workspace error type.
pub mod error;
/// Exchange kline wire decoding.
pub mod kline;
/// The screening pipeline stages.
pub mod screen;
/// The ingestion-collaborator seam.
pub mod source;
pub mod types;

pub use config::{BandSpec, ScreenConfig};
pub use error::VaglioError;
pub use kline::{candle_from_kline, candles_from_klines};
pub use screen::bands::detect_discontinuities;
pub use screen::grid::{MINUTE_MS, build_minute_series, round_to_minute};
pub use screen::report::{QualityReport, summarize};
pub use screen::validate::classify_candles;
pub use source::{CandleRequest, CandleSource};
pub use types::*;
