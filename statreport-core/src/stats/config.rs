//! Analysis configuration.
//!
//! Controls how cells are routed during extraction and how wide the
//! interquartile fences are for outlier detection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::StatReportError;
use crate::parser::ExtractionMode;

/// Tukey fence used for outlier detection.
///
/// Controls how many interquartile ranges beyond Q1/Q3 a value must lie to
/// be reported as an outlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutlierFence {
    /// 1.5 x IQR - the conventional inner fence
    #[default]
    Standard,
    /// 3.0 x IQR - outer fence, only far-out values
    Extreme,
}

impl OutlierFence {
    /// Returns the IQR multiplier for this fence.
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Standard => 1.5,
            Self::Extreme => 3.0,
        }
    }
}

/// Validation errors for analysis and report configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("iqr_multiplier must be a positive finite number, got {0}")]
    InvalidIqrMultiplier(f64),
    #[error("precision must be between 0 and {max}, got {actual}")]
    InvalidPrecision { max: usize, actual: usize },
}

impl From<ConfigValidationError> for StatReportError {
    fn from(e: ConfigValidationError) -> Self {
        Self::configuration(e.to_string())
    }
}

/// Analysis configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Cell routing during extraction
    pub extraction: ExtractionMode,
    /// Named outlier fence
    pub outlier_fence: OutlierFence,
    /// Explicit IQR multiplier; overrides `outlier_fence` when set
    pub iqr_multiplier: Option<f64>,
}

impl AnalysisConfig {
    /// Creates a new analysis config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the extraction mode.
    pub fn with_extraction(mut self, extraction: ExtractionMode) -> Self {
        self.extraction = extraction;
        self
    }

    /// Builder method to set the named outlier fence.
    pub fn with_outlier_fence(mut self, fence: OutlierFence) -> Self {
        self.outlier_fence = fence;
        self
    }

    /// Builder method to set an explicit IQR multiplier.
    ///
    /// The value is checked by [`AnalysisConfig::validate`], not here.
    pub fn with_iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// The multiplier actually applied to the IQR.
    pub fn effective_multiplier(&self) -> f64 {
        self.iqr_multiplier
            .unwrap_or_else(|| self.outlier_fence.multiplier())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if an explicit multiplier is not positive and finite.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(multiplier) = self.iqr_multiplier
            && !(multiplier.is_finite() && multiplier > 0.0)
        {
            return Err(ConfigValidationError::InvalidIqrMultiplier(multiplier));
        }
        Ok(())
    }
}
