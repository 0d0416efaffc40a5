//! Descriptive statistics.
//!
//! - **Numeric**: mean, median, mode, variance, standard deviation,
//!   coefficient of variation, interpolated quartiles, IQR outliers,
//!   skewness, excess kurtosis
//! - **Categorical**: mode, frequency table, proportion table
//!
//! The estimator functions in [`numeric`] and [`categorical`] are pure and
//! can be called directly. [`Analyzer`] ties classification, extraction and
//! the matching estimator set together.
//!
//! # Example
//! ```rust
//! use statreport_core::models::CategoricalSample;
//! use statreport_core::stats::categorical;
//!
//! let sample: CategoricalSample = ["b", "a", "a", "b"].into_iter().collect();
//! assert_eq!(categorical::mode(&sample)?, "a");
//! # Ok::<(), statreport_core::StatReportError>(())
//! ```

mod analyzer;
pub mod categorical;
mod config;
mod models;
pub mod numeric;

// Re-export public API
pub use analyzer::Analyzer;
pub use config::{AnalysisConfig, ConfigValidationError, OutlierFence};
pub use models::{AnalysisSummary, CategoricalSummary, NumericSummary, OutlierAnalysis};
