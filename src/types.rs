use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single column value as the engine's text interface reports it.
///
/// `None` is SQL NULL. It is never conflated with the empty string.
pub type Cell = Option<String>;

/// Shape of every row in one result set, chosen by the caller per call.
///
/// ```rust
/// use sqlite_bridge::prelude::*;
///
/// assert_eq!(OutputMode::default(), OutputMode::Positional);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Ordered cells aligned to the statement's column order.
    #[default]
    Positional,
    /// Column name to cell. Repeated names within a row keep the last value.
    Keyed,
}

impl OutputMode {
    #[must_use]
    pub fn is_keyed(self) -> bool {
        matches!(self, Self::Keyed)
    }
}
