//! # phaselog
//!
//! A process-wide logger that tags every line with the current run phase.
//!
//! ## Overview
//!
//! phaselog provides:
//! - **Phase-tagged lines**: `[<phase>] <message>\n`, written whole under a lock
//! - **Named destinations**: stdout, stderr, files, or an in-memory sink
//! - **Fatal path**: write, optionally echo to stderr, exit with status 1
//! - **Explicit handle**: `ProcessLogger` is passed around, never a hidden global
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use phaselog::{PhaseCell, ProcessLoggerBuilder, RunPhase, guarantee, plog};
//!
//! fn main() -> Result<(), phaselog::LogError> {
//!     let phases = Arc::new(PhaseCell::new(RunPhase::Preprocess));
//!     let logger = ProcessLoggerBuilder::new()
//!         .destination("build.log")
//!         .with_phases(phases.clone())
//!         .build()?;
//!
//!     plog!(logger, "scanning {} files", 12);
//!     phases.set(RunPhase::Main);
//!     guarantee!(logger, 12 > 0, "no input files\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! - `log` holds the write lock for exactly one whole-line write, so lines from
//!   concurrent callers never interleave. Their relative order is the order in
//!   which the lock is taken.
//! - `set_destination` swaps the destination under a `RwLock`. Calls that
//!   already picked up the previous destination finish writing to it.
//! - `log_fatal` does not take the write lock. It writes through a duplicate of
//!   the destination's open stream, then exits.
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette

pub mod builder;
pub mod config;
pub mod error;
pub mod io;
pub mod logger;
pub mod phase;

mod macros;

// Re-exports for convenience
pub use builder::ProcessLoggerBuilder;
pub use config::{DestinationSpec, FileExistsPolicy, LoggerConfig, resolve_destination};
pub use error::LogError;
pub use io::{FileOutput, InMemorySink, OutputTarget, StderrOutput, StdoutOutput};
pub use logger::{FATAL_EXIT_CODE, ProcessExit, ProcessLogger, Terminator};
pub use phase::{FixedPhase, PhaseCell, PhaseSource, RunPhase};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::LogDiagnostic;
