use serde::Serialize;

use super::row::Row;
use crate::engine::RowSink;
use crate::types::OutputMode;

/// A result set from a database query
///
/// Holds every row produced by one execute call, across all statements of the
/// batch, in statement order then row order. Always fully materialized, and
/// every row has the shape given by [`ResultSet::mode`]. Rows are only added by
/// the crate's own [`RowCollector`]; callers read them through accessors.
///
/// ```compile_fail
/// use sqlite_bridge::{OutputMode, ResultSet, Row};
///
/// let mut rs = ResultSet::new(OutputMode::Keyed);
/// rs.results.push(Row::Positional(vec![None]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    results: Vec<Row>,
    #[serde(skip)]
    mode: OutputMode,
}

impl ResultSet {
    /// Create an empty result set
    ///
    /// # Arguments
    ///
    /// * `mode` - The shape every row of this result set will take
    ///
    /// # Returns
    ///
    /// A new `ResultSet` with no rows
    #[must_use]
    pub fn new(mode: OutputMode) -> ResultSet {
        ResultSet {
            results: Vec::new(),
            mode,
        }
    }

    /// Get the row shape shared by all rows
    ///
    /// # Returns
    ///
    /// The mode the result set was created with, even when it holds no rows
    #[must_use]
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Get the number of rows
    ///
    /// # Returns
    ///
    /// The row count across all statements of the batch
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no statement of the batch produced a row
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Get the first row
    ///
    /// # Returns
    ///
    /// The first delivered row, or None for an empty result set
    #[must_use]
    pub fn first(&self) -> Option<&Row> {
        self.results.first()
    }

    /// Get a row by position
    ///
    /// # Arguments
    ///
    /// * `index` - Position of the row in delivery order
    ///
    /// # Returns
    ///
    /// The row at `index`, or None if the index is out of bounds
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.results.get(index)
    }

    /// Get all rows as a slice, in delivery order
    #[must_use]
    pub fn as_slice(&self) -> &[Row] {
        &self.results
    }

    /// Iterate over the rows in delivery order
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.results.iter()
    }

    /// Add a row to the result set
    ///
    /// # Arguments
    ///
    /// * `row` - A row already built in this result set's mode
    pub(crate) fn add_row(&mut self, row: Row) {
        debug_assert_eq!(row.mode(), self.mode, "mixed row shapes in one result set");
        self.results.push(row);
    }
}

impl IntoIterator for ResultSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Row sink that copies each engine row into a [`ResultSet`].
#[derive(Debug)]
pub struct RowCollector {
    result_set: ResultSet,
}

impl RowCollector {
    /// Create a collector
    ///
    /// # Arguments
    ///
    /// * `mode` - The shape each delivered row is copied into
    ///
    /// # Returns
    ///
    /// A collector holding an empty `ResultSet`
    #[must_use]
    pub fn new(mode: OutputMode) -> Self {
        Self {
            result_set: ResultSet::new(mode),
        }
    }

    /// Consume the collector, yielding every row delivered so far
    #[must_use]
    pub fn finish(self) -> ResultSet {
        self.result_set
    }
}

impl RowSink for RowCollector {
    fn row(&mut self, columns: &[&str], cells: &[Option<&str>]) {
        let row = Row::from_engine(self.result_set.mode, columns, cells);
        self.result_set.add_row(row);
    }
}
