//! Screening parameters consumed by the discontinuity detector.

use serde::{Deserialize, Serialize};

use crate::VaglioError;

/// One rolling band: a trailing window length and a width multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandSpec {
    /// Window length in minutes (grid points).
    pub window: usize,
    /// Band half-width as a multiple of the rolling standard deviation.
    pub k: f64,
}

impl BandSpec {
    /// Build a band spec; parameters are checked separately by
    /// [`BandSpec::validate`].
    #[must_use]
    pub const fn new(window: usize, k: f64) -> Self {
        Self { window, k }
    }

    /// Reject parameters that could never screen anything.
    ///
    /// A window shorter than 2 never defines a band (the rolling standard
    /// deviation uses the sample denominator), so such a spec could only
    /// produce an all-undefined series — the caller is warned instead.
    ///
    /// # Errors
    /// Returns [`VaglioError::Config`] for `window < 2`, or a `k` that is
    /// negative or NaN.
    pub fn validate(&self) -> Result<(), VaglioError> {
        if self.window < 2 {
            return Err(VaglioError::config(format!(
                "band window must span at least 2 minutes, got {}",
                self.window
            )));
        }
        if self.k.is_nan() || self.k < 0.0 {
            return Err(VaglioError::config(format!(
                "band width multiplier must be a non-negative number, got {}",
                self.k
            )));
        }
        Ok(())
    }
}

/// Full screening configuration: the two rolling bands the detector applies.
///
/// Defaults screen with a one-hour window and a five-hour window, both at
/// ten standard deviations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// The two `(window, k)` pairs, applied independently to the series.
    pub bands: [BandSpec; 2],
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            bands: [BandSpec::new(60, 10.0), BandSpec::new(300, 10.0)],
        }
    }
}

impl ScreenConfig {
    /// Validate both band specs.
    ///
    /// # Errors
    /// Returns [`VaglioError::Config`] if either spec is rejected by
    /// [`BandSpec::validate`].
    pub fn validate(&self) -> Result<(), VaglioError> {
        for band in &self.bands {
            band.validate()?;
        }
        Ok(())
    }
}
