//! Convenient imports for common functionality.
//!
//! This module re-exports the types most callers need to open a database,
//! run SQL, and inspect rows and errors.

pub use crate::connection::{Connection, ConnectionState};
pub use crate::database::Database;
pub use crate::error::{ErrorKind, SqliteBridgeError};
pub use crate::results::{ResultSet, Row};
pub use crate::sqlite::{SqliteEngine, SqliteOptions};
pub use crate::types::{Cell, OutputMode};
