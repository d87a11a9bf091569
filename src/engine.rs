//! The seam between the binding and the database engine it wraps.
//!
//! An [`Engine`] exposes the engine's one-shot entry points: open a path, run a
//! SQL batch while streaming rows into a [`RowSink`], and close a handle. The
//! binding owns the handle returned by `open` and hands it back to `close`
//! exactly once.

use std::fmt;

/// An engine-reported failure: status code plus the engine's message, copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineFailure {
    pub code: i32,
    pub message: String,
}

impl EngineFailure {
    #[must_use]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for EngineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for EngineFailure {}

/// Per-row callback driven synchronously by [`Engine::exec`].
///
/// `columns` and `cells` always have the same length. Both borrow engine-owned
/// buffers that are only valid for the duration of the call, so implementations
/// must copy whatever they keep. `None` is the engine's null marker. A sink
/// cannot stop iteration: every row of every statement is delivered.
pub trait RowSink {
    fn row(&mut self, columns: &[&str], cells: &[Option<&str>]);
}

impl<F> RowSink for F
where
    F: FnMut(&[&str], &[Option<&str>]),
{
    fn row(&mut self, columns: &[&str], cells: &[Option<&str>]) {
        self(columns, cells)
    }
}

/// Thin adapter over a database engine's C-style API.
pub trait Engine {
    /// Native connection handle. Exclusively owned by whoever called `open`.
    type Handle;

    /// Open (or create) the database at `path`. Called once per connection.
    ///
    /// # Errors
    /// Returns the engine's status and reason when the database cannot be opened.
    fn open(&self, path: &str) -> Result<Self::Handle, EngineFailure>;

    /// Run every statement in `sql` in source order, delivering each result row
    /// to `sink` before returning.
    ///
    /// # Errors
    /// Returns the engine's status and message for the first failing statement.
    fn exec(
        &self,
        handle: &mut Self::Handle,
        sql: &str,
        sink: &mut dyn RowSink,
    ) -> Result<(), EngineFailure>;

    /// Release the native handle. The handle is gone afterwards even on error.
    ///
    /// # Errors
    /// Returns the engine's status if it reported a problem while closing.
    fn close(&self, handle: Self::Handle) -> Result<(), EngineFailure>;
}
