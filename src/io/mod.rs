//! Log destinations.
//!
//! This module provides:
//! - `OutputTarget`: Trait for named, writable destinations
//! - Standard implementations for files and stdout/stderr
//! - An in-memory sink for tests

mod memory;
mod output;
mod std_io;

pub use memory::InMemorySink;
pub use output::{OutputTarget, TargetWriter};
pub use std_io::{FileOutput, STDERR_NAME, STDOUT_NAME, StderrOutput, StdoutOutput};
