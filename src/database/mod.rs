mod query;

pub(crate) use query::{Clause, Select};

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

const DEFAULT_DB_PATH: &str = "iceaddr.db";

/// Handle to the address store: a single read-only SQLite connection,
/// opened once and kept for the lifetime of the handle.
///
/// The store is produced ahead of time and never written to from here, so
/// concurrent readers need no transaction discipline. Queries either
/// complete or fail; there are no retries or timeouts.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the store at `path` in read-only mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] when the file is missing or
    /// unreadable. The store is a required static asset; there is no
    /// recovery path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| Error::StorageUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened address store at {}", path.display());
        Ok(Self { conn })
    }

    /// Open the store at the path in the `ICEADDR_DB` environment
    /// variable, or `iceaddr.db` in the working directory.
    pub fn open_default() -> Result<Self> {
        let path = std::env::var_os("ICEADDR_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));
        Self::open(path)
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}
