//! The screening pipeline, one module per stage.
//!
//! Data flows strictly forward, each stage a value-to-value transform:
//! - `validate`: classify raw candle rows without touching prices
//! - `grid`: regularize validated rows onto a continuous minute grid
//! - `bands`: compute rolling bands and escalate discontinuous points
//! - `report`: aggregate per-status counts for operator visibility
/// Row-level anomaly classification.
pub mod validate;
/// Minute-grid series construction.
pub mod grid;
/// Rolling-band discontinuity detection.
pub mod bands;
/// Aggregate counts over both pipeline outputs.
pub mod report;
