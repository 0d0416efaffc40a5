//! Numeric estimators.
//!
//! Every estimator takes the sample by shared reference and is a pure
//! function of it. Order statistics sort an owned copy via
//! [`NumericSample::sorted`]; the caller's sample is never reordered.
//!
//! Empty samples fail with [`StatReportError::EmptySample`]. Ratio statistics
//! whose denominator is zero fail with [`StatReportError::Domain`] instead of
//! producing NaN or infinity.

use tracing::{debug, trace};

use crate::error::{Result, StatReportError};
use crate::models::NumericSample;

use super::config::OutlierFence;
use super::models::{NumericSummary, OutlierAnalysis};

fn ensure_non_empty(sample: &NumericSample, statistic: &'static str) -> Result<()> {
    if sample.is_empty() {
        return Err(StatReportError::empty_sample(statistic));
    }
    Ok(())
}

/// Arithmetic mean.
pub fn mean(sample: &NumericSample) -> Result<f64> {
    ensure_non_empty(sample, "mean")?;
    let n = sample.len() as f64;
    Ok(sample.values().iter().sum::<f64>() / n)
}

/// Median of the sorted sample.
///
/// Even-length samples average the two central values.
pub fn median(sample: &NumericSample) -> Result<f64> {
    ensure_non_empty(sample, "median")?;
    let sorted = sample.sorted();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid.saturating_sub(1)] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Most frequent value.
///
/// Ties resolve to the smallest of the tied values, so the result does not
/// depend on input order.
pub fn mode(sample: &NumericSample) -> Result<f64> {
    ensure_non_empty(sample, "mode")?;
    let sorted = sample.sorted();

    let mut best = sorted[0];
    let mut best_count = 0;
    // -0.0 and 0.0 sort adjacently and compare equal, so they share a run.
    for run in sorted.chunk_by(|a, b| a == b) {
        if run.len() > best_count {
            best_count = run.len();
            best = run[0];
        }
    }
    trace!("mode {} occurs {} times", best, best_count);
    Ok(best)
}

/// Population variance (divides by N).
pub fn variance(sample: &NumericSample) -> Result<f64> {
    ensure_non_empty(sample, "variance")?;
    let m = mean(sample)?;
    let n = sample.len() as f64;
    Ok(sample.values().iter().map(|x| (x - m).powi(2)).sum::<f64>() / n)
}

/// Population standard deviation.
pub fn standard_deviation(sample: &NumericSample) -> Result<f64> {
    ensure_non_empty(sample, "standard deviation")?;
    Ok(variance(sample)?.sqrt())
}

/// Standard deviation as a percentage of the mean.
///
/// # Errors
/// [`StatReportError::Domain`] when the mean is zero, including a mean that
/// is only nonzero through summation rounding.
pub fn coefficient_of_variation(sample: &NumericSample) -> Result<f64> {
    ensure_non_empty(sample, "coefficient of variation")?;
    let m = mean(sample)?;
    // Rounding error of the sum is bounded by epsilon times the sum of magnitudes.
    let magnitude: f64 = sample.values().iter().map(|x| x.abs()).sum();
    if m.abs() <= f64::EPSILON * magnitude {
        return Err(StatReportError::domain(
            "coefficient of variation",
            "mean is zero",
        ));
    }
    Ok(standard_deviation(sample)? / m * 100.0)
}

/// Interpolated quantile of an already sorted slice.
///
/// Uses the rank `k = p/100 * (n + 1)`. The integer part of `k` is clamped
/// to `[1, n - 1]` and the result interpolates linearly between the two
/// bracketing order statistics by the fractional part of `k`. A single
/// value is its own quantile.
///
/// The fraction comes from the unclamped rank, so with exactly two values
/// the 25th percentile lands above the 75th.
///
/// # Errors
/// [`StatReportError::EmptySample`] for an empty slice,
/// [`StatReportError::Domain`] when `percentile` is outside `[0, 100]`.
pub fn quartile_sorted(sorted: &[f64], percentile: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(StatReportError::empty_sample("quartile"));
    }
    if !(0.0..=100.0).contains(&percentile) {
        return Err(StatReportError::domain(
            "quartile",
            format!("percentile must be within [0, 100], got {percentile}"),
        ));
    }

    let n = sorted.len();
    if n == 1 {
        return Ok(sorted[0]);
    }

    let rank = percentile / 100.0 * (n as f64 + 1.0);
    let fraction = rank - rank.floor();
    // Saturating float-to-int cast; the clamp keeps both neighbours in bounds.
    let index = (rank.floor() as usize).clamp(1, n.saturating_sub(1));
    let lower = sorted[index.saturating_sub(1)];
    let upper = sorted[index];

    Ok(lower + fraction * (upper - lower))
}

/// Interpolated quantile of the sample at `percentile` (0 to 100).
///
/// See [`quartile_sorted`] for the rank formula.
pub fn quartile(sample: &NumericSample, percentile: f64) -> Result<f64> {
    ensure_non_empty(sample, "quartile")?;
    quartile_sorted(&sample.sorted(), percentile)
}

/// Tukey fence outlier detection with an explicit IQR multiplier.
///
/// Values strictly outside `[Q1 - m*IQR, Q3 + m*IQR]` are outliers. They
/// are returned in ascending order with duplicates kept.
pub fn outlier_analysis(sample: &NumericSample, iqr_multiplier: f64) -> Result<OutlierAnalysis> {
    ensure_non_empty(sample, "outliers")?;
    if !(iqr_multiplier.is_finite() && iqr_multiplier > 0.0) {
        return Err(StatReportError::domain(
            "outliers",
            format!("IQR multiplier must be positive and finite, got {iqr_multiplier}"),
        ));
    }

    let sorted = sample.sorted();
    let q1 = quartile_sorted(&sorted, 25.0)?;
    let q3 = quartile_sorted(&sorted, 75.0)?;
    let iqr = q3 - q1;
    let lower_fence = q1 - iqr_multiplier * iqr;
    let upper_fence = q3 + iqr_multiplier * iqr;

    let outliers: Vec<f64> = sorted
        .into_iter()
        .filter(|&value| value < lower_fence || value > upper_fence)
        .collect();

    debug!(
        "IQR fences [{}, {}] flag {} outliers",
        lower_fence,
        upper_fence,
        outliers.len()
    );

    Ok(OutlierAnalysis {
        q1,
        q3,
        iqr_multiplier,
        lower_fence,
        upper_fence,
        outliers,
    })
}

/// Outliers under the standard 1.5 x IQR fence.
pub fn outliers(sample: &NumericSample) -> Result<Vec<f64>> {
    Ok(outlier_analysis(sample, OutlierFence::Standard.multiplier())?.outliers)
}

/// Mean of `((x - mean) / sd)^power`.
///
/// A standard deviation that is zero, or lost in rounding next to the mean,
/// is reported as a domain error for `statistic`.
fn standardized_moment(
    sample: &NumericSample,
    power: i32,
    statistic: &'static str,
) -> Result<f64> {
    ensure_non_empty(sample, statistic)?;
    let m = mean(sample)?;
    let sd = standard_deviation(sample)?;
    if sd <= f64::EPSILON * m.abs() {
        return Err(StatReportError::domain(
            statistic,
            "standard deviation is zero",
        ));
    }

    let n = sample.len() as f64;
    Ok(sample
        .values()
        .iter()
        .map(|x| ((x - m) / sd).powi(power))
        .sum::<f64>()
        / n)
}

/// Population skewness (not bias-corrected).
pub fn skewness(sample: &NumericSample) -> Result<f64> {
    standardized_moment(sample, 3, "skewness")
}

/// Population excess kurtosis (not bias-corrected).
pub fn kurtosis(sample: &NumericSample) -> Result<f64> {
    Ok(standardized_moment(sample, 4, "kurtosis")? - 3.0)
}

/// Runs the full numeric battery.
///
/// Fails on the first estimator error; no partial summary is returned.
pub fn summarize(sample: &NumericSample, iqr_multiplier: f64) -> Result<NumericSummary> {
    ensure_non_empty(sample, "numeric summary")?;
    Ok(NumericSummary {
        count: sample.len(),
        mean: mean(sample)?,
        median: median(sample)?,
        mode: mode(sample)?,
        variance: variance(sample)?,
        standard_deviation: standard_deviation(sample)?,
        coefficient_of_variation: coefficient_of_variation(sample)?,
        skewness: skewness(sample)?,
        kurtosis: kurtosis(sample)?,
        outlier_analysis: outlier_analysis(sample, iqr_multiplier)?,
    })
}
