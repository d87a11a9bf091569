use thiserror::Error;

use crate::engine::EngineFailure;

/// Errors surfaced to callers of the binding.
///
/// Every variant maps onto exactly one [`ErrorKind`], which is what host
/// adapters should branch on when choosing an exception type.
#[derive(Debug, Error)]
pub enum SqliteBridgeError {
    /// The engine could not open or create the database. No connection was produced.
    #[error("failed to open database {path:?}: {message} (code {code})")]
    OpenFailure {
        path: String,
        code: i32,
        message: String,
    },

    /// The engine reported a non-success status while executing SQL.
    #[error("SQL execution error: {message} (code {code})")]
    ExecutionFailure { code: i32, message: String },

    /// A data operation targeted a connection that was already closed.
    #[error("database {path:?} is closed")]
    ClosedConnectionUse { path: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Closed set of error categories, independent of any host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OpenFailure,
    ExecutionFailure,
    ClosedConnectionUse,
    Config,
}

impl SqliteBridgeError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OpenFailure { .. } => ErrorKind::OpenFailure,
            Self::ExecutionFailure { .. } => ErrorKind::ExecutionFailure,
            Self::ClosedConnectionUse { .. } => ErrorKind::ClosedConnectionUse,
            Self::ConfigError(_) => ErrorKind::Config,
        }
    }

    /// Engine status code, when the error originated in the engine.
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::OpenFailure { code, .. } | Self::ExecutionFailure { code, .. } => Some(*code),
            Self::ClosedConnectionUse { .. } | Self::ConfigError(_) => None,
        }
    }

    pub(crate) fn open(path: &str, failure: EngineFailure) -> Self {
        Self::OpenFailure {
            path: path.to_string(),
            code: failure.code,
            message: failure.message,
        }
    }
}

impl From<EngineFailure> for SqliteBridgeError {
    fn from(failure: EngineFailure) -> Self {
        SqliteBridgeError::ExecutionFailure {
            code: failure.code,
            message: failure.message,
        }
    }
}
