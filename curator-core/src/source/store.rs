//! Local blacklist store backed by SQLite.
//!
//! The store is a single-column relation of words. Row order carries no
//! meaning. Rows whose value is `NULL` are skipped; any other non-text value
//! means the store is not what we expect and the read fails.

use std::path::{Path, PathBuf};

use curator_types::{CurateError, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};

use super::lines::decode_line;
use super::WordSource;

/// Default table name.
pub const DEFAULT_TABLE: &str = "blacklisted_words";

/// Default column name.
pub const DEFAULT_COLUMN: &str = "word";

/// A SQLite table of blacklisted words, opened read-only.
#[derive(Debug, Clone)]
pub struct StoreSource {
    path: PathBuf,
    table: String,
    column: String,
    name: String,
}

impl StoreSource {
    /// Store at `path` using [`DEFAULT_TABLE`] and [`DEFAULT_COLUMN`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_table(path, DEFAULT_TABLE, DEFAULT_COLUMN)
    }

    /// Store at `path` reading `column` from `table`.
    pub fn with_table(
        path: impl Into<PathBuf>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let table = table.into();
        let name = format!("{}#{}", path.display(), table);
        Self {
            path,
            table,
            column: column.into(),
            name,
        }
    }

    /// Returns the database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn query(&self) -> String {
        format!(
            "SELECT {} FROM {}",
            quote_ident(&self.column),
            quote_ident(&self.table)
        )
    }

    fn unavailable(&self, e: rusqlite::Error) -> CurateError {
        CurateError::unavailable(&self.name, e)
    }
}

fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

impl WordSource for StoreSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn for_each_token(&self, emit: &mut dyn FnMut(&str)) -> Result<()> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| self.unavailable(e))?;

        let mut stmt = conn.prepare(&self.query()).map_err(|e| self.unavailable(e))?;
        let mut rows = stmt.query([]).map_err(|e| self.unavailable(e))?;

        let mut row_no = 0usize;
        while let Some(row) = rows.next().map_err(|e| self.unavailable(e))? {
            row_no += 1;
            match row.get_ref(0).map_err(|e| self.unavailable(e))? {
                ValueRef::Text(raw) => emit(decode_line(&self.name, raw, row_no)?),
                ValueRef::Null => continue,
                other => {
                    return Err(CurateError::unavailable(
                        &self.name,
                        format!("row {row_no} holds {:?}, expected text", other.data_type()),
                    ));
                }
            }
        }

        tracing::debug!(store = %self.name, rows = row_no, "read store");
        Ok(())
    }
}
