use std::fmt;

use crate::engine::Engine;
use crate::error::SqliteBridgeError;
use crate::results::{ResultSet, RowCollector};
use crate::types::OutputMode;

use crate::sqlite::SqliteEngine;

/// Lifecycle state of a [`Connection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Open,
    Closed,
}

/// An open database session that exclusively owns its native handle.
///
/// The handle is released exactly once: by the first [`Connection::close`], or
/// on drop if the connection was never closed. Once closed, every data
/// operation fails with [`SqliteBridgeError::ClosedConnectionUse`] without
/// touching the engine.
pub struct Connection<E: Engine = SqliteEngine> {
    engine: E,
    handle: Option<E::Handle>,
    path: String,
}

impl Connection<SqliteEngine> {
    /// Open the database at `path` with default `SQLite` options.
    ///
    /// # Errors
    /// Returns `OpenFailure` when the engine cannot open the path, or
    /// `ConfigError` when the path is empty.
    pub fn open(path: &str) -> Result<Self, SqliteBridgeError> {
        Self::open_with(SqliteEngine::default(), path)
    }
}

impl<E: Engine> Connection<E> {
    /// Open `path` through the given engine. The engine is called at most once.
    ///
    /// # Errors
    /// Returns `ConfigError` for an empty path (the engine is not called) and
    /// `OpenFailure` carrying the engine's reason when opening fails.
    pub fn open_with(engine: E, path: &str) -> Result<Self, SqliteBridgeError> {
        if path.is_empty() {
            return Err(SqliteBridgeError::ConfigError(
                "database path must not be empty".into(),
            ));
        }
        let handle = engine
            .open(path)
            .map_err(|failure| SqliteBridgeError::open(path, failure))?;
        tracing::debug!(path, "opened database");
        Ok(Self {
            engine,
            handle: Some(handle),
            path: path.to_string(),
        })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    #[must_use]
    pub fn state(&self) -> ConnectionState {
        if self.is_open() {
            ConnectionState::Open
        } else {
            ConnectionState::Closed
        }
    }

    /// Path the connection was opened with. Kept for diagnostics only.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Run `sql` (one or more statements) and return every produced row in `mode`.
    ///
    /// Rows from all statements are concatenated in statement order. On failure
    /// no rows are returned, even if earlier statements produced some.
    ///
    /// # Errors
    /// `ClosedConnectionUse` if the connection is closed, otherwise
    /// `ExecutionFailure` with the engine's status and message.
    pub fn execute(&mut self, sql: &str, mode: OutputMode) -> Result<ResultSet, SqliteBridgeError> {
        let Some(handle) = self.handle.as_mut() else {
            return Err(SqliteBridgeError::ClosedConnectionUse {
                path: self.path.clone(),
            });
        };
        let mut collector = RowCollector::new(mode);
        // partial rows are dropped with the collector on failure
        self.engine.exec(handle, sql, &mut collector)?;
        let result_set = collector.finish();
        tracing::debug!(path = %self.path, rows = result_set.len(), ?mode, "executed sql");
        Ok(result_set)
    }

    /// Whether a table named exactly `table` exists in the main schema.
    ///
    /// # Errors
    /// `ClosedConnectionUse` if the connection is closed, `ExecutionFailure`
    /// if the schema lookup itself fails.
    pub fn table_exists(&mut self, table: &str) -> Result<bool, SqliteBridgeError> {
        let sql = format!(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = '{}'",
            table.replace('\'', "''")
        );
        let result_set = self.execute(&sql, OutputMode::Positional)?;
        let count = result_set
            .first()
            .and_then(|row| row.text_at(0))
            .unwrap_or("0");
        Ok(count != "0")
    }

    /// Close the connection, releasing the native handle.
    ///
    /// Closing an already-closed connection is a no-op: the handle is only
    /// ever released once. Engine-reported close errors are logged, not raised.
    pub fn close(&mut self) {
        let Some(handle) = self.handle.take() else {
            tracing::debug!(path = %self.path, "close on closed connection ignored");
            return;
        };
        match self.engine.close(handle) {
            Ok(()) => tracing::debug!(path = %self.path, "closed database"),
            Err(failure) => {
                tracing::warn!(path = %self.path, %failure, "engine reported an error while closing");
            }
        }
    }
}

impl<E: Engine> Drop for Connection<E> {
    fn drop(&mut self) {
        if self.handle.is_some() {
            tracing::debug!(path = %self.path, "closing database on drop");
            self.close();
        }
    }
}

impl<E: Engine> fmt::Debug for Connection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("path", &self.path)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
