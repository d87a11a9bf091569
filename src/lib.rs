//! Safe binding core for an embedded `SQLite` engine.
//!
//! - [`Connection`] owns the native handle and guards every call against use after close.
//! - [`Connection::execute`] runs a multi-statement batch and marshals each row as
//!   positional cells or a column-name map ([`OutputMode`]).
//! - [`SqliteBridgeError`] bridges engine status codes into a closed set of
//!   [`ErrorKind`]s for host layers to map onto their own exception types.
//!
//! ```rust
//! use sqlite_bridge::prelude::*;
//!
//! # fn main() -> Result<(), SqliteBridgeError> {
//! let mut db = Connection::open(":memory:")?;
//! db.execute("CREATE TABLE t (a TEXT, b TEXT)", OutputMode::Positional)?;
//! let rows = db.execute(
//!     "INSERT INTO t VALUES ('a', NULL); SELECT * FROM t;",
//!     OutputMode::Keyed,
//! )?;
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows.as_slice()[0].get("b"), Some(&None));
//! db.close();
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod database;
pub mod engine;
pub mod error;
pub mod prelude;
pub mod results;
pub mod sqlite;
pub mod types;

pub use connection::{Connection, ConnectionState};
pub use database::Database;
pub use engine::{Engine, EngineFailure, RowSink};
pub use error::{ErrorKind, SqliteBridgeError};
pub use results::{ResultSet, Row, RowCollector};
pub use sqlite::{SqliteEngine, SqliteOptions, SqliteOptionsBuilder, engine_version};
pub use types::{Cell, OutputMode};
