//! In-memory destination for testing.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{OutputTarget, TargetWriter};

/// In-memory output sink for testing.
///
/// Clones share the same buffer, so a test can keep one clone and hand the
/// other to a logger.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    buf: Arc<Mutex<Vec<u8>>>,
    fail_writes: bool,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(Vec::new())),
            fail_writes: false,
        }
    }

    /// Create a sink whose writers reject every write with `BrokenPipe`.
    pub fn broken(id: impl Into<String>) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(id)
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the contents of the sink as bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Get the contents of the sink as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Contents split into lines, without their terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents_string().lines().map(str::to_owned).collect()
    }

    /// Clear the sink contents.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl OutputTarget for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&self) -> io::Result<Box<dyn TargetWriter>> {
        self.lock().clear();
        self.open_append()
    }

    fn open_append(&self) -> io::Result<Box<dyn TargetWriter>> {
        Ok(Box::new(InMemoryWriteHandle {
            buf: self.buf.clone(),
            fail_writes: self.fail_writes,
        }))
    }
}

/// Write handle for in-memory sink.
struct InMemoryWriteHandle {
    buf: Arc<Mutex<Vec<u8>>>,
    fail_writes: bool,
}

impl std::fmt::Debug for InMemoryWriteHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryWriteHandle").finish()
    }
}

impl TargetWriter for InMemoryWriteHandle {
    fn try_clone_writer(&self) -> io::Result<Box<dyn TargetWriter>> {
        Ok(Box::new(InMemoryWriteHandle {
            buf: self.buf.clone(),
            fail_writes: self.fail_writes,
        }))
    }
}

impl Write for InMemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let mut guard = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
