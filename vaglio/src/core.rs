use std::sync::Arc;

use vaglio_core::{
    BandSpec, Candle, CandleRequest, CandleSource, QualityReport, ScreenConfig, SeriesPoint,
    ValidatedCandle, VaglioError, build_minute_series, classify_candles, detect_discontinuities,
    summarize,
};

/// Everything one screening run produces.
///
/// The validated rows and the grid series are independent outputs: the
/// series carries statuses forward from the rows it was built on, but
/// neither structure is rewritten after its producing stage returns.
#[derive(Debug, Clone)]
pub struct ScreenOutcome {
    /// Per-row classifications, same length and order as the input batch.
    pub validated: Vec<ValidatedCandle>,
    /// The continuous minute-grid series with band columns attached.
    pub series: Vec<SeriesPoint>,
    /// Aggregate counts over both of the above.
    pub report: QualityReport,
}

/// Screening façade: drives source → validate → grid → bands → report.
pub struct Vaglio {
    source: Option<Arc<dyn CandleSource>>,
    cfg: ScreenConfig,
}

/// Builder for constructing a [`Vaglio`] screener with custom configuration.
pub struct VaglioBuilder {
    source: Option<Arc<dyn CandleSource>>,
    cfg: ScreenConfig,
}

impl Default for VaglioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VaglioBuilder {
    /// Create a new builder with the default band configuration.
    ///
    /// Defaults screen with a one-hour and a five-hour window, both at ten
    /// standard deviations. No source is registered; [`Vaglio::screen`]
    /// works without one, [`Vaglio::run`] does not.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: ScreenConfig::default(),
        }
    }

    /// Register the ingestion collaborator that [`Vaglio::run`] fetches
    /// candles from.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn CandleSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace both rolling bands.
    ///
    /// Behavior and trade-offs:
    /// - A short window reacts to local level shifts but a lone spike
    ///   inflates its own band, so extreme `k` values can make a short
    ///   window unable to flag anything.
    /// - A long window catches isolated spikes at the cost of a longer
    ///   undefined warmup, and refuses series shorter than itself.
    #[must_use]
    pub const fn bands(mut self, first: BandSpec, second: BandSpec) -> Self {
        self.cfg.bands = [first, second];
        self
    }

    /// Replace the whole screening configuration at once.
    #[must_use]
    pub const fn config(mut self, cfg: ScreenConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Validate the configuration and build the screener.
    ///
    /// # Errors
    /// Returns [`VaglioError::Config`] if either band spec is degenerate
    /// (window below two minutes, negative or NaN multiplier).
    pub fn build(self) -> Result<Vaglio, VaglioError> {
        self.cfg.validate()?;
        Ok(Vaglio {
            source: self.source,
            cfg: self.cfg,
        })
    }
}

impl std::fmt::Debug for Vaglio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vaglio")
            .field("source", &self.source.as_ref().map(|s| s.name()))
            .field("cfg", &self.cfg)
            .finish()
    }
}

impl Vaglio {
    /// Start building a screener.
    #[must_use]
    pub fn builder() -> VaglioBuilder {
        VaglioBuilder::new()
    }

    /// The active screening configuration.
    #[must_use]
    pub const fn config(&self) -> &ScreenConfig {
        &self.cfg
    }

    /// Screen a batch of candles already in memory.
    ///
    /// Stages run synchronously and in order: classify rows, regularize
    /// onto the minute grid, compute bands and escalate discontinuities,
    /// then summarize. Each stage consumes the previous stage's value;
    /// nothing is mutated across stage boundaries.
    ///
    /// # Errors
    /// Returns [`VaglioError::Data`] when the batch is empty or yields no
    /// grid bounds, and [`VaglioError::Config`] when a configured window
    /// exceeds the grid length.
    pub fn screen(&self, candles: Vec<Candle>) -> Result<ScreenOutcome, VaglioError> {
        let [first, second] = self.cfg.bands;
        tracing::debug!(rows = candles.len(), "screening candle batch");

        let validated = classify_candles(candles);
        let series = build_minute_series(&validated)?;
        let series = detect_discontinuities(&series, &first, &second)?;
        let report = summarize(&validated, &series);

        tracing::info!(
            rows = report.candle_rows,
            warnings = report.warnings,
            drops = report.drops_recommended,
            points = report.series_points,
            discontinuities = report.discontinuities,
            backfills = report.backfills,
            "screen complete"
        );
        Ok(ScreenOutcome {
            validated,
            series,
            report,
        })
    }

    /// Fetch candles from the registered source, then screen them.
    ///
    /// # Errors
    /// Returns [`VaglioError::Config`] if no source was registered,
    /// [`VaglioError::Source`] if the fetch fails, and otherwise whatever
    /// [`Vaglio::screen`] returns.
    pub async fn run(&self, req: &CandleRequest) -> Result<ScreenOutcome, VaglioError> {
        let Some(source) = &self.source else {
            return Err(VaglioError::config(
                "no candle source registered; screen an in-memory batch or add with_source",
            ));
        };
        tracing::debug!(source = source.name(), symbol = %req.symbol, "fetching minute candles");
        let candles = source.minute_candles(req).await?;
        self.screen(candles)
    }
}
