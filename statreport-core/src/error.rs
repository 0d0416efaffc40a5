//! Error types for the statreport pipeline.
//!
//! Individual cells that fail numeric parsing are never errors; they are
//! routed to the categorical sample. Every variant here is fatal for a run
//! and propagates to the caller, which must not emit a partial report.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for statreport operations.
#[derive(Debug, Error)]
pub enum StatReportError {
    /// Input file missing or unopenable
    #[error("Could not read input file {}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report destination could not be written
    #[error("Could not write report to {destination}")]
    SinkUnwritable {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    /// An estimator was invoked on a sample with no elements
    #[error("Cannot compute {statistic} of an empty sample")]
    EmptySample { statistic: &'static str },

    /// A ratio statistic hit a zero denominator or an invalid argument
    #[error("Cannot compute {statistic}: {reason}")]
    Domain {
        statistic: &'static str,
        reason: String,
    },

    /// Classification could not settle on a data type
    #[error("Unable to determine data type of {origin}")]
    UnresolvedType { origin: String },

    /// Configuration or logging setup error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Serialization of the analysis summary failed
    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with `StatReportError`
pub type Result<T> = std::result::Result<T, StatReportError>;

impl StatReportError {
    /// Creates a source error for an input path
    pub fn source_unreadable(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a sink error for a named destination (a path or `<stdout>`)
    pub fn sink_unwritable(destination: impl Into<String>, source: std::io::Error) -> Self {
        Self::SinkUnwritable {
            destination: destination.into(),
            source,
        }
    }

    /// Creates an empty-sample error for the named statistic
    pub const fn empty_sample(statistic: &'static str) -> Self {
        Self::EmptySample { statistic }
    }

    /// Creates a domain error for the named statistic
    pub fn domain(statistic: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            statistic,
            reason: reason.into(),
        }
    }

    /// Creates an unresolved-type error naming where the input came from
    pub fn unresolved_type(origin: impl Into<String>) -> Self {
        Self::UnresolvedType {
            origin: origin.into(),
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a serialization error with context
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }
}
