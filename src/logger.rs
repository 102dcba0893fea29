//! The process logger handle.
//!
//! `ProcessLogger` owns the current destination and the lock that serializes
//! normal log lines. It is built once (see `ProcessLoggerBuilder`) and shared
//! by reference or through an `Arc`; there is no hidden global.
//!
//! Two write paths exist on the same handle:
//! - `log` is a locked, best-effort append of one phase-tagged line.
//! - `log_fatal` is an unlocked emergency write that ends the process. It goes
//!   through a duplicate handle on the same open stream, taken when the
//!   destination was set, so it never waits on the writer another thread holds
//!   and never reopens the destination by name.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::config::{DestinationSpec, FileExistsPolicy};
use crate::error::LogError;
use crate::io::{OutputTarget, StderrOutput, StdoutOutput, TargetWriter};
use crate::phase::{PhaseCell, PhaseSource, RunPhase};

/// Exit status used by every fatal log call.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Ends the process once a fatal message has been written.
pub trait Terminator: Send + Sync + fmt::Debug {
    fn terminate(&self, code: i32) -> !;
}

/// Production terminator: `std::process::exit`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}

/// An open destination.
///
/// `writer` is the write lock for normal lines. `emergency` is a duplicate of
/// the same stream used only by the fatal path; its mutex is never taken by
/// `log`.
struct Active {
    target: Arc<dyn OutputTarget>,
    writer: Mutex<Box<dyn TargetWriter>>,
    emergency: Mutex<Box<dyn TargetWriter>>,
}

impl Active {
    fn open(
        target: Arc<dyn OutputTarget>,
        writer: Box<dyn TargetWriter>,
    ) -> Result<Self, LogError> {
        let emergency = writer.try_clone_writer().map_err(|source| LogError::Open {
            target: target.id().to_string(),
            source,
        })?;
        Ok(Self {
            target,
            writer: Mutex::new(writer),
            emergency: Mutex::new(emergency),
        })
    }

    fn stdout() -> Self {
        Self {
            target: Arc::new(StdoutOutput::new()),
            writer: Mutex::new(Box::new(io::stdout())),
            emergency: Mutex::new(Box::new(io::stdout())),
        }
    }
}

pub struct ProcessLogger {
    // Swapping the destination replaces the whole `Active`; in-flight writes
    // finish on the writer they already cloned.
    active: RwLock<Arc<Active>>,
    phases: Arc<dyn PhaseSource>,
    error_stream: Arc<dyn OutputTarget>,
    terminator: Arc<dyn Terminator>,
}

impl fmt::Debug for ProcessLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessLogger")
            .field("destination", &self.destination_name())
            .field("error_stream", &self.error_stream.id())
            .field("phases", &self.phases)
            .field("terminator", &self.terminator)
            .finish()
    }
}

impl Default for ProcessLogger {
    fn default() -> Self {
        Self::new(Arc::new(PhaseCell::default()))
    }
}

impl ProcessLogger {
    /// A logger on stdout that echoes fatal preprocess messages to stderr.
    pub fn new(phases: Arc<dyn PhaseSource>) -> Self {
        Self {
            active: RwLock::new(Arc::new(Active::stdout())),
            phases,
            error_stream: Arc::new(StderrOutput::new()),
            terminator: Arc::new(ProcessExit),
        }
    }

    pub(crate) fn from_parts(
        spec: &DestinationSpec,
        phases: Arc<dyn PhaseSource>,
        error_stream: Arc<dyn OutputTarget>,
        terminator: Arc<dyn Terminator>,
    ) -> Result<Self, LogError> {
        let active = Active::open(spec.target.clone(), spec.open()?)?;
        Ok(Self {
            active: RwLock::new(Arc::new(active)),
            phases,
            error_stream,
            terminator,
        })
    }

    fn active(&self) -> Arc<Active> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Route all later writes to `target`, appending to what it holds.
    ///
    /// On error the previous destination stays in place.
    pub fn set_destination(&self, target: Arc<dyn OutputTarget>) -> Result<(), LogError> {
        let spec = DestinationSpec::new(target.id().to_string(), target)
            .with_file_exists_policy(FileExistsPolicy::Append);
        self.set_destination_spec(&spec)
    }

    /// Route all later writes to the target described by `spec`.
    pub fn set_destination_spec(&self, spec: &DestinationSpec) -> Result<(), LogError> {
        let next = Arc::new(Active::open(spec.target.clone(), spec.open()?)?);
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = next;
        Ok(())
    }

    /// Identifying name of the current destination.
    pub fn destination_name(&self) -> String {
        self.active().target.id().to_string()
    }

    /// Identifying name of the stream fatal messages are echoed to.
    pub fn error_stream_name(&self) -> &str {
        self.error_stream.id()
    }

    /// The phase the next `log` call would be tagged with.
    pub fn phase(&self) -> RunPhase {
        self.phases.current()
    }

    /// Write `[<phase>] <message>\n` to the destination.
    ///
    /// The whole line goes out in one write under the lock. Write errors are
    /// dropped.
    pub fn log(&self, args: fmt::Arguments<'_>) {
        let line = format!("[{}] {}\n", self.phases.current(), args);
        let active = self.active();
        let mut writer = active.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Write `message` as-is to the destination and terminate with status 1.
    ///
    /// Skips the write lock and writes to the same open stream as `log`.
    /// During preprocess the message is also written to the error stream.
    pub fn log_fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let message = fmt::format(args);
        {
            let active = self.active();
            let mut emergency = active
                .emergency
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            write_best_effort(&mut **emergency, &message);
        }
        if self.phases.in_preprocess() {
            if let Ok(mut writer) = self.error_stream.open_append() {
                write_best_effort(writer.as_mut(), &message);
            }
        }
        self.terminator.terminate(FATAL_EXIT_CODE)
    }

    /// Fatal-log `args` unless `cond` holds.
    pub fn guarantee(&self, cond: bool, args: fmt::Arguments<'_>) {
        if !cond {
            self.log_fatal(args)
        }
    }
}

fn write_best_effort(writer: &mut dyn TargetWriter, message: &str) {
    let _ = writer.write_all(message.as_bytes());
    let _ = writer.flush();
}
