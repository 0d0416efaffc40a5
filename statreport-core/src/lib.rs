//! Core library for statreport.
//!
//! Reads comma-delimited text, decides whether it holds quantitative or
//! qualitative data, computes descriptive statistics for the matching
//! sample and assembles a deterministic report.
//!
//! # Pipeline
//! - [`parser`] tokenizes rows, classifies the first row and extracts cells
//! - [`stats`] holds the numeric and categorical estimators and the
//!   [`Analyzer`] facade
//! - [`report`] turns an [`AnalysisSummary`] into text or JSON
//!
//! The library never writes reports anywhere; the binary owns the sink.
//!
//! # Example
//! ```rust
//! use statreport_core::{Analyzer, ReportOptions, report};
//!
//! let summary = Analyzer::with_defaults().analyze_text("red,blue\nred,green\n")?;
//! let text = report::render(&summary, &ReportOptions::default())?;
//! assert!(text.starts_with("Qualitative Data Analysis\nN: 4\nMode: red\n"));
//! # Ok::<(), statreport_core::StatReportError>(())
//! ```

pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use error::{Result, StatReportError};
pub use models::{CategoricalSample, DataTypeVerdict, Dataset, NumericSample};
pub use parser::{ExtractionMode, classify, extract};
pub use report::{Report, ReportFormat, ReportOptions};
pub use stats::{
    AnalysisConfig, AnalysisSummary, Analyzer, CategoricalSummary, ConfigValidationError,
    NumericSummary, OutlierAnalysis, OutlierFence,
};
