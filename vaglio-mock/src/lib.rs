//! Mock candle source for CI-safe tests and examples.
//!
//! Serves deterministic fixture data: `BTCUSDT` carries one seeded anomaly
//! of every class the screening pipeline classifies, `ETHUSDT` is clean,
//! and `FAIL` forces a source error so failure paths stay testable without
//! a live exchange.
#![warn(missing_docs)]

use async_trait::async_trait;
use vaglio_core::{Candle, CandleRequest, CandleSource, VaglioError};

mod fixtures;

pub use fixtures::{BTCUSDT_SPIKE_MINUTE, SERIES_START_MS};

/// Deterministic fixture-backed [`CandleSource`].
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Build the mock source; it carries no state.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CandleSource for MockSource {
    fn name(&self) -> &'static str {
        "vaglio-mock"
    }

    async fn minute_candles(&self, req: &CandleRequest) -> Result<Vec<Candle>, VaglioError> {
        if req.symbol == "FAIL" {
            return Err(VaglioError::source(self.name(), "forced failure"));
        }
        let mut candles = fixtures::by_symbol(&req.symbol).ok_or_else(|| {
            VaglioError::source(self.name(), format!("no fixture data for {}", req.symbol))
        })?;
        if let Some(start) = req.start_ms {
            candles.retain(|c| c.open_time >= start);
        }
        if let Some(end) = req.end_ms {
            candles.retain(|c| c.open_time < end);
        }
        Ok(candles)
    }
}
