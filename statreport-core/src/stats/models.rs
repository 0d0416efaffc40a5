//! Computed statistic bundles.
//!
//! These are plain data: the estimators fill them in, the report assembler
//! reads them. Nothing here computes anything.

use serde::{Deserialize, Serialize};

use crate::models::{DataTypeVerdict, FrequencyTable, ProportionTable};

/// Interquartile-range outlier detection result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierAnalysis {
    /// First quartile (25th percentile)
    pub q1: f64,
    /// Third quartile (75th percentile)
    pub q3: f64,
    /// Multiplier applied to `q3 - q1`
    pub iqr_multiplier: f64,
    /// Values below this are outliers
    pub lower_fence: f64,
    /// Values above this are outliers
    pub upper_fence: f64,
    /// Outlying values in ascending order, duplicates kept
    pub outliers: Vec<f64>,
}

impl OutlierAnalysis {
    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Descriptive statistics for a numeric sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Middle value, or mean of the two middle values
    pub median: f64,
    /// Most frequent value, smallest on ties
    pub mode: f64,
    /// Population variance
    pub variance: f64,
    /// Square root of the population variance
    pub standard_deviation: f64,
    /// Standard deviation relative to the mean, in percent
    pub coefficient_of_variation: f64,
    /// Third standardized moment
    pub skewness: f64,
    /// Fourth standardized moment minus 3 (excess kurtosis)
    pub kurtosis: f64,
    /// Quartiles, fences and outlying values
    #[serde(flatten)]
    pub outlier_analysis: OutlierAnalysis,
}

/// Descriptive statistics for a categorical sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// Number of values
    pub count: usize,
    /// Most frequent category, first in ascending order on ties
    pub mode: String,
    /// Occurrences per category
    pub frequencies: FrequencyTable,
    /// Share of the sample per category
    pub proportions: ProportionTable,
}

/// Result of one analysis run, tagged by the data type that drove it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "data_type", rename_all = "lowercase")]
pub enum AnalysisSummary {
    /// Numeric estimator results
    Quantitative(NumericSummary),
    /// Categorical estimator results
    Qualitative(CategoricalSummary),
}

impl AnalysisSummary {
    /// The verdict that selected this summary's estimator set.
    pub const fn verdict(&self) -> DataTypeVerdict {
        match self {
            Self::Quantitative(_) => DataTypeVerdict::Quantitative,
            Self::Qualitative(_) => DataTypeVerdict::Qualitative,
        }
    }

    /// Sample size the statistics were computed from.
    pub const fn count(&self) -> usize {
        match self {
            Self::Quantitative(summary) => summary.count,
            Self::Qualitative(summary) => summary.count,
        }
    }
}
