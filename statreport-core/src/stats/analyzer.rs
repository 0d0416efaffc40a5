//! Analyzer facade.
//!
//! Runs one linear pipeline per call: classify, extract, resolve the
//! [`Dataset`] variant, then run the matching estimator set. There is no
//! retry and no partial result.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::Result;
use crate::error::StatReportError;
use crate::models::{DataTypeVerdict, Dataset};
use crate::parser::{classify_text, extract_text, read_source};

use super::categorical;
use super::config::AnalysisConfig;
use super::models::AnalysisSummary;
use super::numeric;

/// Origin name used in errors for in-memory input.
const TEXT_ORIGIN: &str = "input text";

/// Descriptive statistics analyzer.
///
/// # Example
///
/// ```rust
/// use statreport_core::stats::{AnalysisSummary, Analyzer};
///
/// let analyzer = Analyzer::with_defaults();
/// let summary = analyzer.analyze_text("1,2,3\n4,5,100\n")?;
///
/// if let AnalysisSummary::Quantitative(numeric) = summary {
///     assert_eq!(numeric.count, 6);
///     assert_eq!(numeric.outlier_analysis.outliers, vec![100.0]);
/// }
/// # Ok::<(), statreport_core::StatReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Creates a new analyzer with the given configuration.
    pub const fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Creates a new analyzer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(AnalysisConfig::default())
    }

    /// Returns a reference to the analyzer configuration.
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Classifies and extracts in-memory text into a tagged dataset.
    ///
    /// Returns `None` when the text cannot be classified.
    pub fn resolve(&self, text: &str) -> Option<Dataset> {
        let verdict = classify_text(text);
        debug!("Classified input as {}", verdict);
        if verdict == DataTypeVerdict::Unknown {
            return None;
        }
        let (numeric, categorical) = extract_text(text, self.config.extraction);
        Dataset::from_verdict(verdict, numeric, categorical)
    }

    /// Runs the estimator set matching the dataset variant.
    ///
    /// # Errors
    /// Configuration errors, empty samples and domain errors propagate.
    pub fn analyze_dataset(&self, dataset: &Dataset) -> Result<AnalysisSummary> {
        self.config.validate()?;

        let verdict = dataset.verdict();
        if dataset.is_empty() {
            warn!("No values left for {} analysis", verdict);
        } else {
            info!("Running {} analysis on {} values", verdict, dataset.len());
        }

        match dataset {
            Dataset::Quantitative(sample) => {
                numeric::summarize(sample, self.config.effective_multiplier())
                    .map(AnalysisSummary::Quantitative)
            }
            Dataset::Qualitative(sample) => {
                categorical::summarize(sample).map(AnalysisSummary::Qualitative)
            }
        }
    }

    /// Analyzes in-memory text.
    ///
    /// # Errors
    /// [`StatReportError::UnresolvedType`] when the text cannot be
    /// classified, plus anything [`Analyzer::analyze_dataset`] returns.
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisSummary> {
        self.analyze_with_origin(text, TEXT_ORIGIN)
    }

    /// Reads and analyzes the file at `path`.
    ///
    /// # Errors
    /// [`StatReportError::SourceUnreadable`] when the file cannot be read,
    /// [`StatReportError::UnresolvedType`] when it cannot be classified,
    /// plus anything [`Analyzer::analyze_dataset`] returns.
    pub fn analyze_path(&self, path: impl AsRef<Path>) -> Result<AnalysisSummary> {
        let path = path.as_ref();
        info!("Reading {}", path.display());
        let text = read_source(path)
            .map_err(|e| StatReportError::source_unreadable(path, e))?;
        self.analyze_with_origin(&text, &path.display().to_string())
    }

    fn analyze_with_origin(&self, text: &str, origin: &str) -> Result<AnalysisSummary> {
        let dataset = self
            .resolve(text)
            .ok_or_else(|| StatReportError::unresolved_type(origin))?;
        self.analyze_dataset(&dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoricalSample, NumericSample};
    use crate::parser::ExtractionMode;
    use crate::stats::config::OutlierFence;

    #[test]
    fn test_analyzer_creation() {
        let config = AnalysisConfig::new().with_outlier_fence(OutlierFence::Extreme);
        let analyzer = Analyzer::new(config.clone());
        assert_eq!(analyzer.config(), &config);
    }

    #[test]
    fn test_analyzer_with_defaults() {
        let analyzer = Analyzer::with_defaults();
        assert_eq!(analyzer.config(), &AnalysisConfig::default());
    }

    #[test]
    fn test_analyze_quantitative_text() {
        let summary = Analyzer::with_defaults()
            .analyze_text("1,2,3\n4,5,100\n")
            .unwrap();

        match summary {
            AnalysisSummary::Quantitative(numeric) => {
                assert_eq!(numeric.count, 6);
                assert_eq!(numeric.outlier_analysis.outliers, vec![100.0]);
            }
            other => panic!("expected quantitative summary, got {other:?}"),
        }
    }

    #[test]
    fn test_analyze_qualitative_text() {
        let summary = Analyzer::with_defaults()
            .analyze_text("b,a\na,b\n")
            .unwrap();

        match summary {
            AnalysisSummary::Qualitative(categorical) => {
                assert_eq!(categorical.count, 4);
                assert_eq!(categorical.mode, "a");
            }
            other => panic!("expected qualitative summary, got {other:?}"),
        }
    }

    #[test]
    fn test_qualitative_ignores_numeric_cells_per_cell() {
        // The header makes the file qualitative; numeric cells are extracted
        // into the numeric sample and do not reach the categorical report.
        let summary = Analyzer::with_defaults()
            .analyze_text("name,score\nann,10\nbob,12\n")
            .unwrap();

        assert_eq!(summary.verdict(), DataTypeVerdict::Qualitative);
        assert_eq!(summary.count(), 4);
    }

    #[test]
    fn test_qualitative_per_row_extraction() {
        let analyzer =
            Analyzer::new(AnalysisConfig::new().with_extraction(ExtractionMode::PerRow));
        let summary = analyzer.analyze_text("name,score\nann,10\n5,6\n").unwrap();

        // Only the fully numeric row leaves the categorical sample.
        assert_eq!(summary.count(), 4);
    }

    #[test]
    fn test_unresolved_type() {
        let result = Analyzer::with_defaults().analyze_text("");
        assert!(matches!(
            result,
            Err(StatReportError::UnresolvedType { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Analyzer::with_defaults().analyze_path(dir.path().join("nope.csv"));
        assert!(matches!(
            result,
            Err(StatReportError::SourceUnreadable { .. })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let analyzer = Analyzer::new(AnalysisConfig::new().with_iqr_multiplier(-1.0));
        let result = analyzer.analyze_text("1,2,3\n");
        assert!(matches!(
            result,
            Err(StatReportError::Configuration { .. })
        ));
    }

    #[test]
    fn test_constant_sample_is_domain_error() {
        let result = Analyzer::with_defaults().analyze_text("4,4,4\n");
        assert!(matches!(result, Err(StatReportError::Domain { .. })));
    }

    #[test]
    fn test_analyze_dataset_empty_sample() {
        let analyzer = Analyzer::with_defaults();

        let result = analyzer.analyze_dataset(&Dataset::Quantitative(NumericSample::default()));
        assert!(matches!(result, Err(StatReportError::EmptySample { .. })));

        let result =
            analyzer.analyze_dataset(&Dataset::Qualitative(CategoricalSample::default()));
        assert!(matches!(result, Err(StatReportError::EmptySample { .. })));
    }

    #[test]
    fn test_custom_multiplier_applied() {
        let text = "1,2,3,4,5,12\n";
        let standard = Analyzer::with_defaults().analyze_text(text).unwrap();
        let narrow = Analyzer::new(AnalysisConfig::new().with_iqr_multiplier(0.5))
            .analyze_text(text)
            .unwrap();

        let (AnalysisSummary::Quantitative(standard), AnalysisSummary::Quantitative(narrow)) =
            (standard, narrow)
        else {
            panic!("expected quantitative summaries");
        };
        assert!(standard.outlier_analysis.outliers.is_empty());
        assert_eq!(narrow.outlier_analysis.outliers, vec![12.0]);
        assert_eq!(narrow.outlier_analysis.iqr_multiplier, 0.5);
    }

    #[test]
    fn test_analyze_path_latin1() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        std::fs::write(&path, b"S\xe3o Paulo,Bras\xedlia\nS\xe3o Paulo,Recife\n").unwrap();

        let summary = Analyzer::with_defaults().analyze_path(&path).unwrap();
        match summary {
            AnalysisSummary::Qualitative(categorical) => {
                assert_eq!(categorical.count, 4);
                assert_eq!(categorical.mode, "S\u{FFFD}o Paulo");
            }
            other => panic!("expected qualitative summary, got {other:?}"),
        }
    }
}
