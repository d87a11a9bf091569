use std::io::{self, Write};

use serde_json::json;
use sqlite_bridge::{Connection, ErrorKind, SqliteBridgeError, SqliteEngine};
use thiserror::Error;

use crate::args::{Command, ShellConfig};

#[derive(Debug, Error)]
pub(crate) enum ShellError {
    #[error(transparent)]
    Db(#[from] SqliteBridgeError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShellError {
    /// Host-side mapping of error kinds onto process exit codes.
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            ShellError::Db(err) => match err.kind() {
                ErrorKind::OpenFailure => 2,
                ErrorKind::ExecutionFailure => 3,
                ErrorKind::ClosedConnectionUse => 4,
                ErrorKind::Config => 64,
            },
            ShellError::Io(_) | ShellError::Json(_) => 74,
        }
    }

    pub(crate) fn to_json(&self) -> serde_json::Value {
        match self {
            ShellError::Db(err) => json!({
                "error": format!("{:?}", err.kind()),
                "code": err.code(),
                "message": err.to_string(),
            }),
            other => json!({ "error": "Output", "message": other.to_string() }),
        }
    }
}

/// Open the configured database, run every command in order, and close.
///
/// Each command's result is written to `out` as one JSON line before the next
/// command runs. The first failure stops the run; the connection is still closed.
pub(crate) fn run(config: &ShellConfig, out: &mut impl Write) -> Result<(), ShellError> {
    let engine = SqliteEngine::new(config.sqlite_options());
    let mut conn = Connection::open_with(engine, &config.db)?;
    tracing::info!(db = %conn.path(), commands = config.commands.len(), "connection open");

    let outcome = run_commands(&mut conn, config, out);
    conn.close();
    outcome
}

fn run_commands(
    conn: &mut Connection,
    config: &ShellConfig,
    out: &mut impl Write,
) -> Result<(), ShellError> {
    for (idx, command) in config.commands.iter().enumerate() {
        tracing::debug!(idx, ?command, "dispatching");
        match command {
            Command::Execute(sql) => {
                let rows = conn.execute(sql, config.mode)?;
                serde_json::to_writer(&mut *out, &rows)?;
            }
            Command::TableExists(table) => {
                let exists = conn.table_exists(table)?;
                serde_json::to_writer(&mut *out, &json!({ "table": table, "exists": exists }))?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
