//! The seam between the screening core and its ingestion collaborator.
//!
//! Fetching candles from an exchange — connection handling, chunked
//! backfill, retries — lives entirely behind [`CandleSource`]. The core only
//! depends on the contract: an ordered batch of minute candles for a symbol.

use async_trait::async_trait;

use crate::{Candle, VaglioError};

/// A request for one symbol's minute candles, optionally bounded in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleRequest {
    /// Exchange symbol, e.g. `BTCUSDT`.
    pub symbol: String,
    /// Inclusive lower bound on `open_time`, milliseconds since epoch.
    pub start_ms: Option<i64>,
    /// Exclusive upper bound on `open_time`, milliseconds since epoch.
    pub end_ms: Option<i64>,
}

impl CandleRequest {
    /// Request the full available range for a symbol.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            start_ms: None,
            end_ms: None,
        }
    }

    /// Restrict the request to open times in `[start_ms, end_ms)`.
    #[must_use]
    pub const fn between(mut self, start_ms: i64, end_ms: i64) -> Self {
        self.start_ms = Some(start_ms);
        self.end_ms = Some(end_ms);
        self
    }
}

/// Provider of raw minute candles.
///
/// Implementations must return candles ordered by `open_time` ascending.
/// They should not pre-filter anomalies: duplicate, overlapping, or
/// zero-width rows are the validator's input, not the source's problem.
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Stable source name used in error and log attribution.
    fn name(&self) -> &'static str;

    /// Fetch minute candles for the requested symbol and span.
    ///
    /// # Errors
    /// Returns [`VaglioError::Source`] when the underlying provider fails.
    async fn minute_candles(&self, req: &CandleRequest) -> Result<Vec<Candle>, VaglioError>;
}
