//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::LogError;

/// A diagnostic wrapper for destination errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct LogDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<LogError> for LogDiagnostic {
    fn from(e: LogError) -> Self {
        let help = match &e {
            LogError::Open { .. } => "Check that the log path is writable",
            LogError::FileExists { .. } => {
                "Remove the file or use the 'append' or 'overwrite' policy"
            }
            LogError::UnknownDestination { .. } => {
                "Use '-' or 'stdout', 'stderr', or a file path"
            }
            LogError::InvalidConfig { .. } => "Check the logger configuration",
        };
        let message = match &e {
            LogError::InvalidConfig { field, value } => {
                format!("logger setting '{field}' has invalid value '{value}'")
            }
            other => format!("log destination '{}'", other.target()),
        };
        LogDiagnostic {
            message,
            source: Some(Box::new(e)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<LogError> for miette::Report {
    fn from(e: LogError) -> Self {
        miette::Report::new(LogDiagnostic::from(e))
    }
}
