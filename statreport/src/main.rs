//! Descriptive statistics report tool.
//!
//! Reads one comma-delimited file, decides whether it holds quantitative or
//! qualitative data, and writes a descriptive statistics report.
//!
//! # Guarantees
//! - Offline: one local input file, one local output artifact
//! - Deterministic: the same input always yields the same bytes
//! - No partial reports: any error aborts before the sink is touched

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, ValueEnum};
use statreport_core::{
    AnalysisConfig, Analyzer, ExtractionMode, OutlierFence, ReportFormat, ReportOptions,
    logging::init_logging, report,
};
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(name = "statreport")]
#[command(about = "Descriptive statistics report for comma-delimited data")]
#[command(version)]
#[command(long_about = "
statreport - Descriptive statistics for comma-delimited data

The first row decides the data type:
- every cell numeric: quantitative report (mean, median, mode, variance,
  standard deviation, coefficient of variation, skewness, kurtosis,
  quartiles, IQR outliers)
- otherwise: qualitative report (mode, frequencies, proportions)

EXAMPLES:
  statreport data.csv
  statreport --stdout --precision 3 data.csv
  statreport --format json --output summary.json data.csv
  statreport --extreme-outliers --extraction per-row data.csv
")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Input file
    #[arg(help = "Comma-delimited input file")]
    pub input: PathBuf,

    /// Output file path
    #[arg(
        short,
        long,
        default_value = "report.txt",
        help = "Report file path (.txt or .json)"
    )]
    pub output: PathBuf,

    /// Print instead of writing a file
    #[arg(long, help = "Print the report to stdout instead of writing a file")]
    pub stdout: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Fixed decimal places
    #[arg(long, help = "Fixed decimal places for floating point values (0-17)")]
    pub precision: Option<usize>,

    /// Cell routing between the numeric and categorical samples
    #[arg(long, value_enum, default_value_t = ExtractionArg::PerCell)]
    pub extraction: ExtractionArg,

    /// Use the outer Tukey fence
    #[arg(long, help = "Flag only extreme outliers (3.0 x IQR fence)")]
    pub extreme_outliers: bool,

    /// Explicit fence multiplier
    #[arg(
        long,
        help = "Explicit IQR fence multiplier (overrides --extreme-outliers)"
    )]
    pub iqr_multiplier: Option<f64>,

    /// Enable compression
    #[arg(
        long,
        conflicts_with = "stdout",
        help = "Compress the report file using Zstandard (.zst)"
    )]
    pub compress: bool,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv)"
    )]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, help = "Suppress all output except errors")]
    pub quiet: bool,
}

/// Report format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Labeled text lines
    Text,
    /// JSON analysis summary
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Extraction mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractionArg {
    /// Route every cell on its own parse result
    PerCell,
    /// Keep rows with any non-numeric cell together in the categorical sample
    PerRow,
}

impl From<ExtractionArg> for ExtractionMode {
    fn from(arg: ExtractionArg) -> Self {
        match arg {
            ExtractionArg::PerCell => Self::PerCell,
            ExtractionArg::PerRow => Self::PerRow,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_logging(cli.global.verbose, cli.global.quiet) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match generate_report(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Builds the analysis configuration from CLI flags.
fn analysis_config(cli: &Cli) -> AnalysisConfig {
    let mut config = AnalysisConfig::new().with_extraction(cli.extraction.into());

    if cli.extreme_outliers {
        config = config.with_outlier_fence(OutlierFence::Extreme);
    }
    if let Some(multiplier) = cli.iqr_multiplier {
        config = config.with_iqr_multiplier(multiplier);
    }

    config
}

/// Builds the report options from CLI flags.
fn report_options(cli: &Cli) -> ReportOptions {
    let options = ReportOptions::new().with_format(cli.format.into());
    match cli.precision {
        Some(precision) => options.with_precision(precision),
        None => options,
    }
}

/// Runs the pipeline and hands the rendered report to the sink.
fn generate_report(cli: &Cli) -> anyhow::Result<()> {
    info!("Starting analysis of {}", cli.input.display());

    let config = analysis_config(cli);
    debug!("Analysis configuration: {:?}", config);

    let summary = Analyzer::new(config)
        .analyze_path(&cli.input)
        .with_context(|| format!("Analysis of {} failed", cli.input.display()))?;

    info!(
        "✓ Analyzed {} {} values",
        summary.count(),
        summary.verdict()
    );

    let rendered = report::render(&summary, &report_options(cli))
        .context("Report rendering failed")?;

    if let Some(path) = output::save_report(&rendered, cli).context("Saving report failed")? {
        info!("✓ Report saved to {}", path.display());
        println!("Report generated: {}", path.display());
    }

    Ok(())
}
