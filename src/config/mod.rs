//! Configuration types for log destinations.
//!
//! This module provides:
//! - `DestinationSpec`: A resolved destination plus how to open it
//! - `FileExistsPolicy`: Policy for handling existing log files
//! - `LoggerConfig`: Deserializable settings for a whole logger

mod logger_config;
mod spec;

pub use logger_config::LoggerConfig;
pub use spec::{DestinationSpec, FileExistsPolicy, resolve_destination};
