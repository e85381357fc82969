//! Swappable output sink.
//!
//! Harness reports and bench callables write through an [`Output`] handle
//! rather than to process stdout directly, so a run can silence benchmarked
//! code by swapping the target for [`io::sink`] and capture everything in tests.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use bee_core::scope::{Defer, defer};
use parking_lot::Mutex;

type Target = Box<dyn Write + Send>;

/// Cloneable handle to a shared writer. Clones write to the same target.
#[derive(Clone)]
pub struct Output {
    target: Arc<Mutex<Target>>,
}

impl Output {
    /// Handle writing to the process stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    #[must_use]
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            target: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Handle writing into an in-memory buffer, plus a reader for that buffer.
    #[must_use]
    pub fn capture() -> (Self, CaptureBuffer) {
        let buffer = CaptureBuffer::default();
        (Self::from_writer(buffer.clone()), buffer)
    }

    /// Flush the current target, replace it with `writer`, and return the old one.
    pub fn swap(&self, writer: Box<dyn Write + Send>) -> Box<dyn Write + Send> {
        let mut target = self.target.lock();
        let _ = target.flush();
        std::mem::replace(&mut *target, writer)
    }

    /// Discard everything written until the returned guard is dropped.
    ///
    /// The previous target comes back when the guard drops, including while a
    /// panic unwinds through the scope holding it.
    pub fn suppress(&self) -> Defer<impl FnOnce() + '_> {
        let previous = self.swap(Box::new(io::sink()));
        defer(move || {
            let _ = self.swap(previous);
        })
    }

    /// Write `text` followed by a newline, ignoring write errors.
    pub fn line(&self, text: impl fmt::Display) {
        let _ = writeln!(self.target.lock(), "{text}");
    }

    /// Write `text` as is, ignoring write errors.
    pub fn text(&self, text: impl fmt::Display) {
        let _ = write!(self.target.lock(), "{text}");
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.target.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.target.lock().flush()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}

/// In-memory writer whose contents can be read back from any clone.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Everything written so far, decoded lossily.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
