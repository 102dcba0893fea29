//! Deserializable logger settings.

use serde::Deserialize;

use super::FileExistsPolicy;
use crate::error::LogError;
use crate::phase::RunPhase;

/// Settings for a `ProcessLogger`.
///
/// Every field is optional; an empty config yields a logger on stdout that
/// echoes fatal preprocess messages to stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggerConfig {
    /// Destination: "-", "stdout", "stderr" or a file path
    #[serde(default)]
    pub destination: Option<String>,
    /// Where fatal messages are echoed during preprocess
    #[serde(default)]
    pub error_stream: Option<String>,
    /// File exists policy: "overwrite", "append", "error"
    #[serde(default)]
    pub file_exists_policy: Option<String>,
    /// Phase to start in when the builder creates its own phase cell
    #[serde(default)]
    pub initial_phase: Option<String>,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_error_stream(mut self, error_stream: impl Into<String>) -> Self {
        self.error_stream = Some(error_stream.into());
        self
    }

    pub fn with_file_exists_policy(mut self, policy: impl Into<String>) -> Self {
        self.file_exists_policy = Some(policy.into());
        self
    }

    pub fn with_initial_phase(mut self, phase: impl Into<String>) -> Self {
        self.initial_phase = Some(phase.into());
        self
    }

    /// The parsed file exists policy, or the default when unset.
    pub fn policy(&self) -> Result<FileExistsPolicy, LogError> {
        match &self.file_exists_policy {
            None => Ok(FileExistsPolicy::default()),
            Some(raw) => FileExistsPolicy::from_str(raw).ok_or_else(|| LogError::InvalidConfig {
                field: "file_exists_policy",
                value: raw.clone(),
            }),
        }
    }

    /// The parsed initial phase, or `Init` when unset.
    pub fn phase(&self) -> Result<RunPhase, LogError> {
        match &self.initial_phase {
            None => Ok(RunPhase::default()),
            Some(raw) => RunPhase::from_str(raw).ok_or_else(|| LogError::InvalidConfig {
                field: "initial_phase",
                value: raw.clone(),
            }),
        }
    }
}
