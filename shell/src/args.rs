use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use serde::Serialize;
use sqlite_bridge::{OutputMode, SqliteOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run SQL against a SQLite database through sqlite-bridge")]
pub(crate) struct Args {
    /// Database path or `file:` URI
    #[arg(long)]
    pub(crate) db: String,
    #[arg(long, value_enum, default_value = "positional")]
    pub(crate) mode: OutputMode,
    /// Check whether a table exists (repeatable)
    #[arg(long = "table-exists")]
    pub(crate) table_exists: Vec<String>,
    #[arg(long)]
    pub(crate) read_only: bool,
    #[arg(long)]
    pub(crate) no_create: bool,
    #[arg(long)]
    pub(crate) busy_timeout_ms: Option<u64>,
    #[arg(long)]
    pub(crate) log: Option<PathBuf>,
    #[arg(long, short)]
    pub(crate) verbose: bool,
    /// SQL batches, executed in order. Read from stdin when none are given.
    pub(crate) sql: Vec<String>,
}

/// One host call dispatched onto the connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "arg", rename_all = "snake_case")]
pub(crate) enum Command {
    Execute(String),
    TableExists(String),
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ShellConfig {
    pub(crate) db: String,
    pub(crate) mode: OutputMode,
    pub(crate) read_only: bool,
    pub(crate) create_if_missing: bool,
    pub(crate) busy_timeout_ms: Option<u64>,
    pub(crate) log: Option<PathBuf>,
    pub(crate) verbose: bool,
    pub(crate) commands: Vec<Command>,
}

impl ShellConfig {
    pub(crate) fn from_args(args: Args) -> Self {
        let mut commands: Vec<Command> = args
            .table_exists
            .into_iter()
            .map(Command::TableExists)
            .collect();
        commands.extend(args.sql.into_iter().map(Command::Execute));

        ShellConfig {
            db: args.db,
            mode: args.mode,
            read_only: args.read_only,
            create_if_missing: !args.no_create,
            busy_timeout_ms: args.busy_timeout_ms,
            log: args.log,
            verbose: args.verbose,
            commands,
        }
    }

    /// Fall back to a single batch read from `input` when no commands were given.
    pub(crate) fn read_batch_if_empty(&mut self, mut input: impl Read) -> io::Result<()> {
        if self.commands.is_empty() {
            let mut sql = String::new();
            input.read_to_string(&mut sql)?;
            if !sql.trim().is_empty() {
                self.commands.push(Command::Execute(sql));
            }
        }
        Ok(())
    }

    pub(crate) fn sqlite_options(&self) -> SqliteOptions {
        let mut builder = SqliteOptions::builder()
            .read_only(self.read_only)
            .create_if_missing(self.create_if_missing);
        if let Some(ms) = self.busy_timeout_ms {
            builder = builder.busy_timeout(Duration::from_millis(ms));
        }
        builder.finish()
    }
}
