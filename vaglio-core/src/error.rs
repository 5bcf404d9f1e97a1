use thiserror::Error;

/// Unified error type for the vaglio workspace.
///
/// Screening errors are terminal for a run: the pipeline either completes
/// deterministically or fails with one of these. Anomalies found *inside*
/// structurally valid data (repeated rows, zero volume, discontinuities) are
/// never errors — they surface as [`crate::StatusCode`] annotations.
#[derive(Debug, Error)]
pub enum VaglioError {
    /// Malformed or empty input: no valid time bounds or prices derivable.
    #[error("data issue: {0}")]
    Data(String),

    /// Screening parameters inconsistent with the data (e.g. a rolling
    /// window longer than the series it should screen).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An ingestion collaborator failed while producing candles.
    #[error("{name} failed: {msg}")]
    Source {
        /// Name of the candle source that failed.
        name: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl VaglioError {
    /// Helper: build a `Data` error from any message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build a `Config` error from any message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            msg: msg.into(),
        }
    }
}
