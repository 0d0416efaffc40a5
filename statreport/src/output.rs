//! Report output operations.
//!
//! Handles writing the rendered report to a file, to stdout, or to a
//! Zstandard-compressed file.

use std::io::Write;
use std::path::{Path, PathBuf};

use statreport_core::{Result, StatReportError};
use tracing::{debug, info};

use crate::Cli;

/// Writes the report where the CLI asked for it.
///
/// Returns the path written, or `None` when the report went to stdout.
pub fn save_report(report: &str, cli: &Cli) -> Result<Option<PathBuf>> {
    if cli.stdout {
        save_stdout(report)?;
        return Ok(None);
    }

    if cli.compress {
        #[cfg(feature = "compression")]
        {
            let path = compressed_path(&cli.output);
            save_compressed(report, &path)?;
            Ok(Some(path))
        }
        #[cfg(not(feature = "compression"))]
        {
            Err(StatReportError::configuration(
                "Compression not available. Compile with --features compression",
            ))
        }
    } else {
        save_text(report, &cli.output)?;
        Ok(Some(cli.output.clone()))
    }
}

/// Writes the report to stdout in a single write.
fn save_stdout(report: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| StatReportError::sink_unwritable("stdout", e))
}

/// Writes the report to a plain file, replacing any existing content.
fn save_text(report: &str, output_path: &Path) -> Result<()> {
    info!("Writing report to {}", output_path.display());
    debug!("Report is {} bytes", report.len());
    std::fs::write(output_path, report)
        .map_err(|e| StatReportError::sink_unwritable(output_path.display().to_string(), e))
}

/// Appends `.zst` unless the path already carries it.
#[cfg(feature = "compression")]
fn compressed_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "zst") {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".zst");
    PathBuf::from(name)
}

/// Writes the report as a Zstandard frame.
#[cfg(feature = "compression")]
fn save_compressed(report: &str, output_path: &Path) -> Result<()> {
    let destination = output_path.display().to_string();

    let mut encoder = zstd::Encoder::new(Vec::new(), 3)
        .map_err(|e| StatReportError::sink_unwritable(destination.clone(), e))?;
    encoder
        .write_all(report.as_bytes())
        .map_err(|e| StatReportError::sink_unwritable(destination.clone(), e))?;
    let compressed = encoder
        .finish()
        .map_err(|e| StatReportError::sink_unwritable(destination.clone(), e))?;

    debug!(
        "Compressed report from {} to {} bytes",
        report.len(),
        compressed.len()
    );
    std::fs::write(output_path, compressed)
        .map_err(|e| StatReportError::sink_unwritable(destination, e))
}
