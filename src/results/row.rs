use indexmap::IndexMap;
use serde::Serialize;

use crate::types::{Cell, OutputMode};

/// A row from a database query result
///
/// Positional rows serialize as arrays, keyed rows as objects in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Row {
    /// Cells indexed by column position
    Positional(Vec<Cell>),
    /// Cells indexed by column name
    Keyed(IndexMap<String, Cell>),
}

impl Row {
    /// Copy one engine row into the requested shape.
    ///
    /// Keyed rows insert names in order `0..n`; when a name repeats, the later
    /// value overwrites the earlier one but the key keeps its first position.
    ///
    /// # Arguments
    ///
    /// * `mode` - Shape of the new row
    /// * `columns` - Column names reported by the engine
    /// * `cells` - Cell texts, same length as `columns`; `None` is NULL
    ///
    /// # Returns
    ///
    /// An owned row that no longer borrows the engine's buffers
    #[must_use]
    pub fn from_engine(mode: OutputMode, columns: &[&str], cells: &[Option<&str>]) -> Self {
        match mode {
            OutputMode::Positional => {
                Row::Positional(cells.iter().map(|cell| cell.map(str::to_owned)).collect())
            }
            OutputMode::Keyed => {
                let mut map = IndexMap::with_capacity(columns.len());
                for (name, cell) in columns.iter().zip(cells) {
                    map.insert((*name).to_owned(), cell.map(str::to_owned));
                }
                Row::Keyed(map)
            }
        }
    }

    /// Get the shape of this row
    ///
    /// # Returns
    ///
    /// `OutputMode::Positional` or `OutputMode::Keyed`, matching the variant
    #[must_use]
    pub fn mode(&self) -> OutputMode {
        match self {
            Row::Positional(_) => OutputMode::Positional,
            Row::Keyed(_) => OutputMode::Keyed,
        }
    }

    /// Number of cells in the row (distinct names for keyed rows)
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Row::Positional(cells) => cells.len(),
            Row::Keyed(map) => map.len(),
        }
    }

    /// Whether the row has no cells (a statement with no result columns)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a cell by column index
    ///
    /// Keyed rows are indexed in first-insertion order of their column names.
    ///
    /// # Arguments
    ///
    /// * `index` - Zero-based column position
    ///
    /// # Returns
    ///
    /// `None` when the index is out of bounds; `Some(&None)` is a SQL NULL
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&Cell> {
        match self {
            Row::Positional(cells) => cells.get(index),
            Row::Keyed(map) => map.get_index(index).map(|(_, cell)| cell),
        }
    }

    /// Get a cell by column name
    ///
    /// # Arguments
    ///
    /// * `column_name` - Exact, case-sensitive column name
    ///
    /// # Returns
    ///
    /// The cell for that name, or `None` for a missing name or a positional row
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&Cell> {
        match self {
            Row::Positional(_) => None,
            Row::Keyed(map) => map.get(column_name),
        }
    }

    /// Text of the cell at `index`, flattening NULL and out-of-range to `None`
    #[must_use]
    pub fn text_at(&self, index: usize) -> Option<&str> {
        self.get_by_index(index).and_then(|cell| cell.as_deref())
    }

    /// Borrow the cells of a positional row, or `None` for a keyed row
    #[must_use]
    pub fn as_positional(&self) -> Option<&[Cell]> {
        if let Row::Positional(cells) = self {
            Some(cells)
        } else {
            None
        }
    }

    /// Borrow the name-to-cell map of a keyed row, or `None` for a positional row
    #[must_use]
    pub fn as_keyed(&self) -> Option<&IndexMap<String, Cell>> {
        if let Row::Keyed(map) = self {
            Some(map)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_keeps_nulls_in_place() {
        let row = Row::from_engine(OutputMode::Positional, &["a", "b"], &[None, Some("x")]);
        assert_eq!(row, Row::Positional(vec![None, Some("x".to_string())]));
        assert_eq!(row.get_by_index(0), Some(&None));
        assert_eq!(row.text_at(1), Some("x"));
        assert_eq!(row.get_by_index(2), None);
        assert_eq!(row.get("a"), None);
    }

    #[test]
    fn null_is_not_empty_string() {
        let row = Row::from_engine(OutputMode::Keyed, &["a", "b"], &[Some(""), None]);
        assert_eq!(row.get("a"), Some(&Some(String::new())));
        assert_eq!(row.get("b"), Some(&None));
    }

    #[test]
    fn keyed_duplicate_names_last_write_wins() {
        let row = Row::from_engine(
            OutputMode::Keyed,
            &["id", "name", "id"],
            &[Some("1"), Some("n"), Some("2")],
        );
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("id"), Some(&Some("2".to_string())));
        // first position retained for the repeated key
        assert_eq!(row.text_at(0), Some("2"));
        assert_eq!(row.text_at(1), Some("n"));
    }

    #[test]
    fn positional_ignores_repeated_names() {
        let row = Row::from_engine(
            OutputMode::Positional,
            &["id", "id"],
            &[Some("1"), Some("2")],
        );
        assert_eq!(row.len(), 2);
        assert_eq!(row.mode(), OutputMode::Positional);
    }

    #[test]
    fn serializes_to_json_shapes() -> Result<(), serde_json::Error> {
        let positional = Row::from_engine(OutputMode::Positional, &["a", "b"], &[Some("1"), None]);
        assert_eq!(serde_json::to_string(&positional)?, r#"["1",null]"#);

        let keyed = Row::from_engine(OutputMode::Keyed, &["b", "a"], &[Some("1"), None]);
        assert_eq!(serde_json::to_string(&keyed)?, r#"{"b":"1","a":null}"#);
        Ok(())
    }
}
