//! Scope-exit guards.
//!
//! [`Defer`] runs one callback when it leaves scope, including while the stack
//! unwinds from a panic. [`CleanupStack`] collects several callbacks and runs
//! them together.

use std::fmt;

/// Runs a callback exactly once when dropped.
#[must_use = "the callback runs as soon as the guard is dropped"]
pub struct Defer<F: FnOnce()> {
    callback: Option<F>,
}

impl<F: FnOnce()> Defer<F> {
    pub fn new(callback: F) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    /// Drops the guard without running the callback.
    pub fn cancel(mut self) {
        self.callback = None;
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            callback();
        }
    }
}

impl<F: FnOnce()> fmt::Debug for Defer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defer")
            .field("armed", &self.callback.is_some())
            .finish()
    }
}

/// Shorthand for [`Defer::new`].
///
/// ```
/// use std::cell::Cell;
/// let ran = Cell::new(false);
/// {
///     let _guard = bee_core::scope::defer(|| ran.set(true));
/// }
/// assert!(ran.get());
/// ```
pub fn defer<F: FnOnce()>(callback: F) -> Defer<F> {
    Defer::new(callback)
}

/// Ordered list of cleanup callbacks.
///
/// Callbacks run in registration order on [`release`](Self::release) or on
/// drop, whichever happens first.
#[derive(Default)]
pub struct CleanupStack<'a> {
    callbacks: Vec<Box<dyn FnOnce() + 'a>>,
}

impl<'a> CleanupStack<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, callback: impl FnOnce() + 'a) -> &mut Self {
        self.callbacks.push(Box::new(callback));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Runs and forgets every registered callback.
    pub fn release(&mut self) {
        for callback in self.callbacks.drain(..) {
            callback();
        }
    }
}

impl Drop for CleanupStack<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for CleanupStack<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanupStack")
            .field("pending", &self.callbacks.len())
            .finish()
    }
}
