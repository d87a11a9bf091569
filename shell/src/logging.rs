use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter, MakeWriterExt};

/// Build the log sink: `base` always, plus a copy of every line in `path` when given.
///
/// Stdout carries results only, so the shell passes stderr as `base`.
///
/// # Errors
/// Returns the I/O error when the log file cannot be created.
pub(crate) fn log_writer<M>(base: M, path: Option<&Path>) -> io::Result<BoxMakeWriter>
where
    M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let Some(path) = path else {
        return Ok(BoxMakeWriter::new(base));
    };
    let file = File::create(path)?;
    Ok(BoxMakeWriter::new(base.and(Mutex::new(file))))
}
