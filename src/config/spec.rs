//! Destination specifications.

use std::sync::Arc;

use crate::error::LogError;
use crate::io::{
    FileOutput, OutputTarget, STDERR_NAME, STDOUT_NAME, StderrOutput, StdoutOutput, TargetWriter,
};

/// Policy for handling existing log files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileExistsPolicy {
    /// Truncate existing files
    Overwrite,
    /// Append to existing files
    #[default]
    Append,
    /// Return an error if file exists
    Error,
}

impl FileExistsPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Some(FileExistsPolicy::Overwrite),
            "append" => Some(FileExistsPolicy::Append),
            "error" => Some(FileExistsPolicy::Error),
            _ => None,
        }
    }
}

/// Turn a raw destination argument into a target.
///
/// `-`, `stdout` and `/dev/stdout` select standard output; `stderr` and
/// `/dev/stderr` select standard error; anything else is a file path.
pub fn resolve_destination(raw: &str) -> Result<Arc<dyn OutputTarget>, LogError> {
    let trimmed = raw.trim();
    match trimmed {
        "" => Err(LogError::UnknownDestination { raw: raw.into() }),
        "-" | "stdout" | STDOUT_NAME => Ok(Arc::new(StdoutOutput::new())),
        "stderr" | STDERR_NAME => Ok(Arc::new(StderrOutput::new())),
        path => Ok(Arc::new(FileOutput::new(path))),
    }
}

/// Specification for a single log destination.
#[derive(Debug, Clone)]
pub struct DestinationSpec {
    /// Raw argument or configuration string
    pub raw: String,
    /// The output target implementation
    pub target: Arc<dyn OutputTarget>,
    /// Policy for handling existing files
    pub file_exists_policy: FileExistsPolicy,
}

impl DestinationSpec {
    /// Create a new destination specification.
    pub fn new(raw: impl Into<String>, target: Arc<dyn OutputTarget>) -> Self {
        Self {
            raw: raw.into(),
            target,
            file_exists_policy: FileExistsPolicy::default(),
        }
    }

    /// Resolve a raw argument into a specification.
    pub fn parse(raw: impl Into<String>) -> Result<Self, LogError> {
        let raw = raw.into();
        let target = resolve_destination(&raw)?;
        Ok(Self::new(raw, target))
    }

    /// Set the file exists policy.
    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = policy;
        self
    }

    /// Open a writer on the target according to the policy.
    pub fn open(&self) -> Result<Box<dyn TargetWriter>, LogError> {
        let opened = match self.file_exists_policy {
            FileExistsPolicy::Overwrite => self.target.open_overwrite(),
            FileExistsPolicy::Append => self.target.open_append(),
            FileExistsPolicy::Error => {
                if self.target.exists() {
                    return Err(LogError::FileExists {
                        target: self.target.id().to_string(),
                    });
                }
                self.target.open_append()
            }
        };
        opened.map_err(|source| LogError::Open {
            target: self.target.id().to_string(),
            source,
        })
    }
}
