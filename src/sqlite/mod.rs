// SQLite engine behind the `Engine` seam
//
// - config: open options and builder
// - query: value-to-text rendering for the row callback
// - executor: one-shot batch execution with a per-row sink

pub mod config;
pub mod executor;
pub mod query;

use rusqlite::Connection;

pub use config::{SqliteOptions, SqliteOptionsBuilder};
pub use executor::exec_batch;

use crate::engine::{Engine, EngineFailure, RowSink};

/// Generic `SQLITE_ERROR`, used when rusqlite fails without an engine status.
const GENERIC_ERROR_CODE: i32 = 1;

/// Version string of the linked `SQLite` library.
#[must_use]
pub fn engine_version() -> &'static str {
    rusqlite::version()
}

/// [`Engine`] backed by rusqlite's bundled `SQLite`.
#[derive(Debug, Clone, Default)]
pub struct SqliteEngine {
    options: SqliteOptions,
}

impl SqliteEngine {
    #[must_use]
    pub fn new(options: SqliteOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &SqliteOptions {
        &self.options
    }
}

impl Engine for SqliteEngine {
    type Handle = Connection;

    fn open(&self, path: &str) -> Result<Connection, EngineFailure> {
        let conn = Connection::open_with_flags(path, self.options.open_flags())?;
        if let Some(timeout) = self.options.busy_timeout {
            conn.busy_timeout(timeout)?;
        }
        Ok(conn)
    }

    fn exec(
        &self,
        handle: &mut Connection,
        sql: &str,
        sink: &mut dyn RowSink,
    ) -> Result<(), EngineFailure> {
        let delivered = exec_batch(handle, sql, sink)?;
        tracing::trace!(rows = delivered, "sqlite exec finished");
        Ok(())
    }

    fn close(&self, handle: Connection) -> Result<(), EngineFailure> {
        // on failure rusqlite hands the connection back; dropping it releases the handle
        handle.close().map_err(|(_conn, err)| EngineFailure::from(err))
    }
}

// Convert rusqlite::Error into an engine status plus message.
impl From<rusqlite::Error> for EngineFailure {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(status, Some(message)) => {
                EngineFailure::new(status.extended_code, message)
            }
            rusqlite::Error::SqliteFailure(status, None) => {
                EngineFailure::new(status.extended_code, status.to_string())
            }
            other => EngineFailure::new(GENERIC_ERROR_CODE, other.to_string()),
        }
    }
}
