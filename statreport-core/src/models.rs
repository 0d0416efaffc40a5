//! Sample and classification types shared by the parser and the estimators.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered text cells extracted from one input line.
pub type RawRecord = Vec<String>;

/// Distinct category value to occurrence count, iterated in ascending key order.
pub type FrequencyTable = BTreeMap<String, u64>;

/// Distinct category value to `count / total`, iterated in ascending key order.
pub type ProportionTable = BTreeMap<String, f64>;

/// Outcome of classifying a source by its first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataTypeVerdict {
    /// Every cell of the first row parsed as a number
    Quantitative,
    /// At least one cell of the first row is not a number
    Qualitative,
    /// The source could not be read or had nothing to classify
    Unknown,
}

impl fmt::Display for DataTypeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quantitative => "quantitative",
            Self::Qualitative => "qualitative",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Ordered floating-point values extracted from a source.
///
/// The sample may be empty straight out of extraction; estimators check for
/// that and fail with [`crate::StatReportError::EmptySample`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericSample {
    values: Vec<f64>,
}

impl NumericSample {
    /// Wraps already-parsed values, keeping their order.
    pub const fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Values in extraction order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an owned copy sorted ascending; the sample itself is untouched.
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
    }
}

impl From<Vec<f64>> for NumericSample {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Ordered text values extracted from a source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoricalSample {
    values: Vec<String>,
}

impl CategoricalSample {
    /// Wraps text values, keeping their order.
    pub const fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Values in extraction order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn push(&mut self, value: String) {
        self.values.push(value);
    }
}

impl<S: Into<String>> FromIterator<S> for CategoricalSample {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A sample tagged with the kind resolved by classification.
///
/// Built once per run; downstream code matches on the variant instead of
/// re-checking the verdict.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    /// Numeric data for the numeric estimator set
    Quantitative(NumericSample),
    /// Text data for the categorical estimator set
    Qualitative(CategoricalSample),
}

impl Dataset {
    /// Selects the sample matching `verdict`.
    ///
    /// Returns `None` for [`DataTypeVerdict::Unknown`].
    pub fn from_verdict(
        verdict: DataTypeVerdict,
        numeric: NumericSample,
        categorical: CategoricalSample,
    ) -> Option<Self> {
        match verdict {
            DataTypeVerdict::Quantitative => Some(Self::Quantitative(numeric)),
            DataTypeVerdict::Qualitative => Some(Self::Qualitative(categorical)),
            DataTypeVerdict::Unknown => None,
        }
    }

    /// The verdict this dataset was built from.
    pub const fn verdict(&self) -> DataTypeVerdict {
        match self {
            Self::Quantitative(_) => DataTypeVerdict::Quantitative,
            Self::Qualitative(_) => DataTypeVerdict::Qualitative,
        }
    }

    /// Number of values in the selected sample.
    pub fn len(&self) -> usize {
        match self {
            Self::Quantitative(sample) => sample.len(),
            Self::Qualitative(sample) => sample.len(),
        }
    }

    /// Returns true when the selected sample has no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
