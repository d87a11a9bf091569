use std::time::Duration;

use rusqlite::OpenFlags;

/// Options for opening a `SQLite` database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteOptions {
    pub read_only: bool,
    pub create_if_missing: bool,
    /// Interpret `file:` paths as URIs (e.g. `file::memory:`)
    pub uri: bool,
    pub busy_timeout: Option<Duration>,
}

impl Default for SqliteOptions {
    fn default() -> Self {
        Self {
            read_only: false,
            create_if_missing: true,
            uri: true,
            busy_timeout: None,
        }
    }
}

impl SqliteOptions {
    /// Start a builder from the default options
    #[must_use]
    pub fn builder() -> SqliteOptionsBuilder {
        SqliteOptionsBuilder::new()
    }

    /// Translate the options into engine open flags
    ///
    /// # Returns
    ///
    /// Read-only, read-write, or read-write-create flags, plus URI handling
    #[must_use]
    pub fn open_flags(&self) -> OpenFlags {
        let mut flags = if self.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        } else if self.create_if_missing {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        };
        if self.uri {
            flags |= OpenFlags::SQLITE_OPEN_URI;
        }
        // each connection is used by one caller at a time
        flags | OpenFlags::SQLITE_OPEN_NO_MUTEX
    }
}

/// Fluent builder for `SQLite` options.
#[derive(Debug, Clone, Default)]
pub struct SqliteOptionsBuilder {
    opts: SqliteOptions,
}

impl SqliteOptionsBuilder {
    /// Create a new builder with default options
    ///
    /// # Returns
    ///
    /// A builder that opens read-write, creates missing files, and accepts URIs
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the database read-only
    ///
    /// # Arguments
    ///
    /// * `read_only` - When true, writes fail and missing files are not created
    ///
    /// # Returns
    ///
    /// The updated builder
    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.opts.read_only = read_only;
        self
    }

    /// Create the database file when it does not exist
    ///
    /// # Arguments
    ///
    /// * `create` - Ignored when the options are read-only
    ///
    /// # Returns
    ///
    /// The updated builder
    #[must_use]
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.opts.create_if_missing = create;
        self
    }

    /// Interpret `file:` paths as URIs
    ///
    /// # Arguments
    ///
    /// * `uri` - Whether URI filenames are accepted
    ///
    /// # Returns
    ///
    /// The updated builder
    #[must_use]
    pub fn uri(mut self, uri: bool) -> Self {
        self.opts.uri = uri;
        self
    }

    /// Wait for locks instead of failing immediately with `SQLITE_BUSY`
    ///
    /// # Arguments
    ///
    /// * `timeout` - Longest time a statement waits on a locked database
    ///
    /// # Returns
    ///
    /// The updated builder
    #[must_use]
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.opts.busy_timeout = Some(timeout);
        self
    }

    /// Finish the builder
    ///
    /// # Returns
    ///
    /// The assembled `SqliteOptions`
    #[must_use]
    pub fn finish(self) -> SqliteOptions {
        self.opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_create_read_write_uri() {
        let flags = SqliteOptions::default().open_flags();
        assert!(flags.contains(OpenFlags::SQLITE_OPEN_READ_WRITE));
        assert!(flags.contains(OpenFlags::SQLITE_OPEN_CREATE));
        assert!(flags.contains(OpenFlags::SQLITE_OPEN_URI));
    }

    #[test]
    fn read_only_drops_create() {
        let opts = SqliteOptions::builder()
            .read_only(true)
            .uri(false)
            .busy_timeout(Duration::from_millis(250))
            .finish();
        let flags = opts.open_flags();
        assert!(flags.contains(OpenFlags::SQLITE_OPEN_READ_ONLY));
        assert!(!flags.contains(OpenFlags::SQLITE_OPEN_CREATE));
        assert!(!flags.contains(OpenFlags::SQLITE_OPEN_URI));
        assert_eq!(opts.busy_timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn no_create_keeps_read_write() {
        let flags = SqliteOptions::builder()
            .create_if_missing(false)
            .finish()
            .open_flags();
        assert!(flags.contains(OpenFlags::SQLITE_OPEN_READ_WRITE));
        assert!(!flags.contains(OpenFlags::SQLITE_OPEN_CREATE));
    }
}
