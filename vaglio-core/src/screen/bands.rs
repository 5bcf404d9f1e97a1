use crate::{BandSpec, SeriesPoint, StatusCode, VaglioError, WindowBands};

/// Compute rolling bands for both configured windows and escalate
/// discontinuous points.
///
/// For each window `w` with multiplier `k`, every point `i >= w - 1` gets
/// a [`WindowBands`] row: the trailing mean over `price[i-w+1..=i]`, the
/// mean ± `k` sample standard deviations, and the price as a fraction of
/// the mean. Earlier points have no row for that window and are never
/// compared against it.
///
/// A point is escalated to [`StatusCode::Discontinuous`] iff its price is
/// strictly outside either window's band and its current status is `Clean`
/// or `DropRecommended`. `Warning` and `Backfilled` points are left
/// untouched. Bands are computed once from the incoming prices; escalation
/// does not feed back into band computation, and re-running the detector
/// with identical parameters is a no-op.
///
/// # Errors
/// Returns [`VaglioError::Config`] if either spec fails
/// [`BandSpec::validate`], or if either window exceeds the series length —
/// its bands would never be defined at any point.
pub fn detect_discontinuities(
    series: &[SeriesPoint],
    first: &BandSpec,
    second: &BandSpec,
) -> Result<Vec<SeriesPoint>, VaglioError> {
    for spec in [first, second] {
        spec.validate()?;
        if spec.window > series.len() {
            return Err(VaglioError::config(format!(
                "band window of {} minutes exceeds the series length of {} points",
                spec.window,
                series.len()
            )));
        }
    }

    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
    let mut series = series.to_vec();

    // Rebuild band columns from scratch so repeated runs replace rather
    // than accumulate.
    for point in &mut series {
        point.bands.clear();
    }
    for spec in [first, second] {
        append_window_bands(&mut series, &prices, spec);
    }

    #[cfg(feature = "tracing")]
    let mut escalated = 0usize;
    for point in &mut series {
        if !point.status.band_checked() {
            continue;
        }
        let outside = point
            .bands
            .iter()
            .any(|b| point.price > b.upper_band || point.price < b.lower_band);
        if outside {
            point.status = StatusCode::Discontinuous;
            #[cfg(feature = "tracing")]
            {
                escalated += 1;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        points = series.len(),
        escalated,
        "rolling band screen complete"
    );

    Ok(series)
}

/// Append one window's band rows to every point where they are defined.
///
/// Windowed sums slide over the price array; the variance uses the sample
/// (n-1) denominator, clamped at zero before the square root against the
/// residue the running subtraction can leave.
fn append_window_bands(series: &mut [SeriesPoint], prices: &[f64], spec: &BandSpec) {
    let w = spec.window;
    let n = w as f64;
    let mut sum = 0.0_f64;
    let mut sum_sq = 0.0_f64;
    for i in 0..prices.len() {
        sum += prices[i];
        sum_sq += prices[i] * prices[i];
        if i >= w {
            let gone = prices[i - w];
            sum -= gone;
            sum_sq -= gone * gone;
        }
        if i + 1 < w {
            continue;
        }
        let mean = sum / n;
        let var = ((sum_sq - sum * sum / n) / (n - 1.0)).max(0.0);
        let std = var.sqrt();
        series[i].bands.push(WindowBands {
            window: w,
            moving_average: mean,
            upper_band: mean + spec.k * std,
            lower_band: mean - spec.k * std,
            pct_of_ma: prices[i] / mean,
        });
    }
}
