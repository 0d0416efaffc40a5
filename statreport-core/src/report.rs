//! Report assembly and rendering.
//!
//! The assembler turns an [`AnalysisSummary`] into an ordered list of
//! labeled lines. It does no statistics and never writes anywhere; the
//! caller owns the sink.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::error::StatReportError;
use crate::stats::{AnalysisSummary, CategoricalSummary, ConfigValidationError, NumericSummary};

/// Largest accepted fixed precision; `f64` carries about 17 significant digits.
pub const MAX_PRECISION: usize = 17;

/// Rendered report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Labeled text lines
    #[default]
    Text,
    /// Pretty-printed JSON of the analysis summary
    Json,
}

/// Rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Output format
    pub format: ReportFormat,
    /// Fixed decimal places for floats; shortest round-trip form when unset
    pub precision: Option<usize>,
}

impl ReportOptions {
    /// Creates new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the output format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method to set fixed decimal places.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Validates the options.
    ///
    /// # Errors
    /// Returns an error if the precision exceeds [`MAX_PRECISION`].
    pub fn validate(&self) -> std::result::Result<(), ConfigValidationError> {
        match self.precision {
            Some(actual) if actual > MAX_PRECISION => Err(ConfigValidationError::InvalidPrecision {
                max: MAX_PRECISION,
                actual,
            }),
            _ => Ok(()),
        }
    }

    fn number(&self, value: f64) -> String {
        match self.precision {
            Some(places) => format!("{value:.places$}"),
            None => value.to_string(),
        }
    }
}

/// One line of a text report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// Report title, rendered as-is
    Title(String),
    /// Section heading, rendered as `Heading:`
    Heading(String),
    /// Labeled value, rendered as `Label: value` (or `Label:` when empty)
    Field { label: String, value: String },
}

impl ReportLine {
    fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Field {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(title) => f.write_str(title),
            Self::Heading(heading) => write!(f, "{heading}:"),
            Self::Field { label, value } if value.is_empty() => write!(f, "{label}:"),
            Self::Field { label, value } => write!(f, "{label}: {value}"),
        }
    }
}

/// An assembled, immutable report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    /// Lines in report order.
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Renders every line followed by a newline.
    pub fn render_text(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }
}

fn numeric_lines(summary: &NumericSummary, options: &ReportOptions) -> Vec<ReportLine> {
    let num = |value: f64| options.number(value);
    let outliers = &summary.outlier_analysis;

    vec![
        ReportLine::Title("Quantitative Data Analysis".to_string()),
        ReportLine::field("N", summary.count.to_string()),
        ReportLine::field("Mean", num(summary.mean)),
        ReportLine::field("Median", num(summary.median)),
        ReportLine::field("Mode", num(summary.mode)),
        ReportLine::field("Variance", num(summary.variance)),
        ReportLine::field("Standard Deviation", num(summary.standard_deviation)),
        ReportLine::field(
            "Coefficient of Variation",
            format!("{}%", num(summary.coefficient_of_variation)),
        ),
        ReportLine::field("Skewness", num(summary.skewness)),
        ReportLine::field("Kurtosis", num(summary.kurtosis)),
        ReportLine::field(
            "Quartiles (Q1, Q3)",
            format!("{}, {}", num(outliers.q1), num(outliers.q3)),
        ),
        ReportLine::field(
            "Outliers",
            outliers
                .outliers
                .iter()
                .map(|&value| num(value))
                .collect::<Vec<_>>()
                .join(" "),
        ),
    ]
}

fn categorical_lines(summary: &CategoricalSummary, options: &ReportOptions) -> Vec<ReportLine> {
    let mut lines = vec![
        ReportLine::Title("Qualitative Data Analysis".to_string()),
        ReportLine::field("N", summary.count.to_string()),
        ReportLine::field("Mode", summary.mode.clone()),
        ReportLine::Heading("Frequencies".to_string()),
    ];
    lines.extend(
        summary
            .frequencies
            .iter()
            .map(|(category, count)| ReportLine::field(category.clone(), count.to_string())),
    );
    lines.push(ReportLine::Heading("Proportions".to_string()));
    lines.extend(
        summary
            .proportions
            .iter()
            .map(|(category, &share)| ReportLine::field(category.clone(), options.number(share))),
    );
    lines
}

/// Assembles the text report for a summary.
pub fn assemble(summary: &AnalysisSummary, options: &ReportOptions) -> Report {
    let lines = match summary {
        AnalysisSummary::Quantitative(numeric) => numeric_lines(numeric, options),
        AnalysisSummary::Qualitative(categorical) => categorical_lines(categorical, options),
    };
    debug!("Assembled report with {} lines", lines.len());
    Report { lines }
}

/// Renders a summary in the configured format.
///
/// # Errors
/// Configuration errors for invalid options, serialization errors for JSON.
pub fn render(summary: &AnalysisSummary, options: &ReportOptions) -> Result<String> {
    options.validate()?;

    match options.format {
        ReportFormat::Text => Ok(assemble(summary, options).render_text()),
        ReportFormat::Json => serde_json::to_string_pretty(summary)
            .map(|json| json + "\n")
            .map_err(|e| StatReportError::serialization("analysis summary to JSON", e)),
    }
}
