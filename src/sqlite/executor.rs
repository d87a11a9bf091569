use std::borrow::Cow;

use rusqlite::{Batch, Connection};

use super::query::value_as_text;
use crate::engine::{EngineFailure, RowSink};

/// Run a batch of SQL statements in source order, handing every result row to `sink`.
///
/// Each statement is prepared, stepped to completion, and finalized before the
/// next one is parsed, so a later statement sees the effects of earlier ones.
/// Statements that produce no rows contribute nothing. Returns the number of
/// rows delivered.
///
/// # Errors
/// Returns the engine failure of the first statement that fails to prepare or
/// step. Rows delivered before the failure are not retracted.
pub fn exec_batch(
    conn: &Connection,
    sql: &str,
    sink: &mut dyn RowSink,
) -> Result<usize, EngineFailure> {
    let mut batch = Batch::new(conn, sql);
    let mut delivered = 0usize;
    let mut statement_index = 0usize;

    while let Some(mut stmt) = batch.next()? {
        // names must be copied before stepping borrows the statement
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_owned)
            .collect();
        let names: Vec<&str> = columns.iter().map(String::as_str).collect();
        tracing::trace!(statement = statement_index, columns = names.len(), "stepping statement");

        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let texts = (0..names.len())
                .map(|idx| row.get_ref(idx).map(value_as_text))
                .collect::<Result<Vec<Option<Cow<'_, str>>>, _>>()?;
            let cells: Vec<Option<&str>> = texts.iter().map(Option::as_deref).collect();

            sink.row(&names, &cells);
            delivered += 1;
        }
        statement_index += 1;
    }

    Ok(delivered)
}
