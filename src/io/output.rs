//! Output target trait definition.

use std::fmt::Debug;
use std::fs::File;
use std::io::{self, Stderr, Stdout, Write};

/// An open writer on a destination.
///
/// Handles can be duplicated onto the same underlying stream, so a second
/// handle keeps writing where the first one does even after the destination's
/// path has been renamed or the working directory has changed.
pub trait TargetWriter: Write + Send {
    /// Another handle onto the same open stream.
    fn try_clone_writer(&self) -> io::Result<Box<dyn TargetWriter>>;
}

impl TargetWriter for File {
    fn try_clone_writer(&self) -> io::Result<Box<dyn TargetWriter>> {
        Ok(Box::new(self.try_clone()?))
    }
}

impl TargetWriter for Stdout {
    fn try_clone_writer(&self) -> io::Result<Box<dyn TargetWriter>> {
        Ok(Box::new(io::stdout()))
    }
}

impl TargetWriter for Stderr {
    fn try_clone_writer(&self) -> io::Result<Box<dyn TargetWriter>> {
        Ok(Box::new(io::stderr()))
    }
}

/// A log destination: something with a stable name that can hand out writers.
///
/// The logger keeps one writer open for normal lines and opens a second,
/// independent handle when it has to emit a fatal message.
pub trait OutputTarget: Send + Sync + Debug {
    /// Identifying name of this destination.
    ///
    /// Convention: `/dev/stdout` and `/dev/stderr` for the standard streams,
    /// the file path for files.
    fn id(&self) -> &str;

    /// Open the target for writing, truncating any existing content.
    fn open_overwrite(&self) -> io::Result<Box<dyn TargetWriter>>;

    /// Open the target for appending to existing content.
    fn open_append(&self) -> io::Result<Box<dyn TargetWriter>>;

    /// Whether the target already holds content that opening could clobber.
    ///
    /// Only file-backed targets report `true`.
    fn exists(&self) -> bool {
        false
    }
}
