//! Error types for configuring log destinations.
//!
//! Writing a log line never fails from the caller's point of view; only the
//! steps that open or resolve a destination report errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    /// The destination could not be opened for writing.
    #[error("cannot open log destination '{target}': {source}")]
    Open {
        /// Identifier of the destination (file path, `/dev/stdout`, ...)
        target: String,
        #[source]
        source: io::Error,
    },

    /// A file destination already exists and the policy forbids touching it.
    #[error("log destination '{target}' already exists")]
    FileExists { target: String },

    /// A raw destination argument that resolves to nothing.
    #[error("unknown log destination '{raw}'")]
    UnknownDestination { raw: String },

    /// A configuration field holds a value outside its accepted set.
    #[error("invalid value '{value}' for '{field}'")]
    InvalidConfig { field: &'static str, value: String },
}

impl LogError {
    /// Identifier of the destination the error refers to.
    pub fn target(&self) -> &str {
        match self {
            LogError::Open { target, .. } | LogError::FileExists { target } => target,
            LogError::UnknownDestination { raw } => raw,
            LogError::InvalidConfig { value, .. } => value,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
