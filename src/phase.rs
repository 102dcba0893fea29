//! Run phases and the collaborator that reports the current one.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Process-lifecycle marker rendered into every normal log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RunPhase {
    #[default]
    Init = 0,
    Preprocess,
    Main,
    Shutdown,
}

impl RunPhase {
    /// Short lowercase name used in the line prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::Init => "init",
            RunPhase::Preprocess => "preprocess",
            RunPhase::Main => "main",
            RunPhase::Shutdown => "shutdown",
        }
    }

    /// Parse a phase from its name, case-insensitively.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "init" => Some(RunPhase::Init),
            "preprocess" => Some(RunPhase::Preprocess),
            "main" => Some(RunPhase::Main),
            "shutdown" => Some(RunPhase::Shutdown),
            _ => None,
        }
    }

    const fn from_u8(x: u8) -> Self {
        match x {
            1 => RunPhase::Preprocess,
            2 => RunPhase::Main,
            3 => RunPhase::Shutdown,
            _ => RunPhase::Init,
        }
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the current run phase.
///
/// The logger asks on every call and never caches the answer.
pub trait PhaseSource: Send + Sync + fmt::Debug {
    /// The phase the process is in right now.
    fn current(&self) -> RunPhase;

    /// Whether fatal messages should also be echoed to the error stream.
    fn in_preprocess(&self) -> bool {
        self.current() == RunPhase::Preprocess
    }
}

/// Atomic phase holder, the default `PhaseSource`.
#[derive(Debug, Default)]
pub struct PhaseCell {
    phase: AtomicU8,
}

impl PhaseCell {
    pub fn new(phase: RunPhase) -> Self {
        Self {
            phase: AtomicU8::new(phase as u8),
        }
    }

    /// Move the process into `phase`.
    pub fn set(&self, phase: RunPhase) {
        self.phase.store(phase as u8, Ordering::Release);
    }
}

impl PhaseSource for PhaseCell {
    fn current(&self) -> RunPhase {
        RunPhase::from_u8(self.phase.load(Ordering::Acquire))
    }
}

/// A phase source pinned to one phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPhase(pub RunPhase);

impl PhaseSource for FixedPhase {
    fn current(&self) -> RunPhase {
        self.0
    }
}
