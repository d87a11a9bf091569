use crate::connection::Connection;
use crate::engine::Engine;
use crate::error::SqliteBridgeError;
use crate::results::ResultSet;
use crate::types::OutputMode;

/// The operations a host binding exposes to its callers.
///
/// Host layers dispatch onto this trait instead of registering methods
/// dynamically; error kinds are mapped to host exception types at that layer.
pub trait Database: Sized {
    /// # Errors
    /// `OpenFailure` when the engine cannot open `path`.
    fn open(path: &str) -> Result<Self, SqliteBridgeError>;

    /// # Errors
    /// `ExecutionFailure` on engine failure, `ClosedConnectionUse` after close.
    fn execute(&mut self, sql: &str, mode: OutputMode) -> Result<ResultSet, SqliteBridgeError>;

    /// # Errors
    /// `ClosedConnectionUse` after close.
    fn table_exists(&mut self, table: &str) -> Result<bool, SqliteBridgeError>;

    fn close(&mut self);

    fn is_open(&self) -> bool;
}

impl<E> Database for Connection<E>
where
    E: Engine + Default,
{
    fn open(path: &str) -> Result<Self, SqliteBridgeError> {
        Connection::open_with(E::default(), path)
    }

    fn execute(&mut self, sql: &str, mode: OutputMode) -> Result<ResultSet, SqliteBridgeError> {
        Connection::execute(self, sql, mode)
    }

    fn table_exists(&mut self, table: &str) -> Result<bool, SqliteBridgeError> {
        Connection::table_exists(self, table)
    }

    fn close(&mut self) {
        Connection::close(self);
    }

    fn is_open(&self) -> bool {
        Connection::is_open(self)
    }
}
