//! Word sources.
//!
//! Every input of a run (the frequency list and each blacklist) is a
//! [`WordSource`]: anything that can yield its raw tokens in order. The
//! blacklist builder and the candidate filter only see this trait, so they
//! do not care whether words come from the network, a file or a record store.
//!
//! | Source          | Backing                         | Tokens               |
//! |-----------------|---------------------------------|----------------------|
//! | [`HttpSource`]  | blocking HTTP GET               | newline-split lines  |
//! | [`FileSource`]  | local text file                 | newline-split lines  |
//! | [`MemorySource`]| in-memory bytes                 | newline-split lines  |
//! | [`StoreSource`] | SQLite table, single column     | one row per token    |
//!
//! [`SourceSpec`] is the configuration-level description that opens one of
//! these.

mod http;
pub mod lines;
mod store;
mod text;

use std::path::{Path, PathBuf};

use curator_types::Result;
use serde::{Deserialize, Serialize};

pub use http::{build_client, HttpSource};
pub use store::{StoreSource, DEFAULT_COLUMN, DEFAULT_TABLE};
pub use text::{FileSource, MemoryBytes, MemorySource};

/// Anything that can yield a sequence of candidate words.
pub trait WordSource {
    /// Label used in logs and error messages.
    fn name(&self) -> &str;

    /// Calls `emit` once per raw token, in source order.
    ///
    /// # Errors
    ///
    /// Returns `CurateError::SourceUnavailable` if the source cannot be read,
    /// and `CurateError::Decode` if a token is not valid UTF-8. Tokens before
    /// the failure may already have been emitted.
    fn for_each_token(&self, emit: &mut dyn FnMut(&str)) -> Result<()>;
}

impl<T: WordSource + ?Sized> WordSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn for_each_token(&self, emit: &mut dyn FnMut(&str)) -> Result<()> {
        (**self).for_each_token(emit)
    }
}

/// Location of a record-store blacklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSpec {
    /// Path to the SQLite database file.
    pub path: PathBuf,
    /// Table holding the blacklisted words.
    #[serde(default = "default_table")]
    pub table: String,
    /// Column holding the words.
    #[serde(default = "default_column")]
    pub column: String,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_owned()
}

fn default_column() -> String {
    DEFAULT_COLUMN.to_owned()
}

impl StoreSpec {
    /// Store at `path` using the default table and column.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: default_table(),
            column: default_column(),
        }
    }
}

/// Configuration-level description of a word source.
///
/// Serialized externally tagged, e.g. `{"url": "https://..."}`,
/// `{"file": "words.txt"}` or `{"store": {"path": "blacklist.db"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceSpec {
    /// Remote newline-delimited document.
    Url(String),
    /// Local newline-delimited text file.
    File(PathBuf),
    /// Local SQLite record store.
    Store(StoreSpec),
}

impl SourceSpec {
    /// Opens the source. No I/O happens until it is read.
    pub fn open(&self, client: &reqwest::blocking::Client) -> Box<dyn WordSource> {
        match self {
            SourceSpec::Url(url) => Box::new(HttpSource::with_client(url.clone(), client.clone())),
            SourceSpec::File(path) => Box::new(FileSource::new(path.clone())),
            SourceSpec::Store(store) => Box::new(StoreSource::with_table(
                store.path.clone(),
                store.table.clone(),
                store.column.clone(),
            )),
        }
    }

    /// Returns the store path if this is a record store.
    pub fn store_path(&self) -> Option<&Path> {
        match self {
            SourceSpec::Store(store) => Some(&store.path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_json_shapes() {
        let url: SourceSpec = serde_json::from_str(r#"{"url": "https://example.com/w.txt"}"#).unwrap();
        assert_eq!(url, SourceSpec::Url("https://example.com/w.txt".into()));

        let file: SourceSpec = serde_json::from_str(r#"{"file": "words.txt"}"#).unwrap();
        assert_eq!(file, SourceSpec::File(PathBuf::from("words.txt")));

        let store: SourceSpec = serde_json::from_str(r#"{"store": {"path": "bl.db"}}"#).unwrap();
        assert_eq!(store, SourceSpec::Store(StoreSpec::at("bl.db")));
    }

    #[test]
    fn store_spec_custom_table() {
        let store: StoreSpec =
            serde_json::from_str(r#"{"path": "bl.db", "table": "banned", "column": "w"}"#).unwrap();
        assert_eq!(store.table, "banned");
        assert_eq!(store.column, "w");
    }

    #[test]
    fn store_path_only_for_stores() {
        assert_eq!(
            SourceSpec::Store(StoreSpec::at("bl.db")).store_path(),
            Some(Path::new("bl.db"))
        );
        assert_eq!(SourceSpec::File("w.txt".into()).store_path(), None);
    }

    #[test]
    fn opened_sources_are_named() {
        let client = reqwest::blocking::Client::new();
        let src = SourceSpec::Url("https://example.com/en".into()).open(&client);
        assert_eq!(src.name(), "https://example.com/en");

        let src = SourceSpec::File("lists/words.txt".into()).open(&client);
        assert_eq!(src.name(), "lists/words.txt");
    }

    #[test]
    fn boxed_source_delegates() {
        let boxed: Box<dyn WordSource> = Box::new(MemorySource::new("mem", "a\nb"));
        let mut seen = Vec::new();
        boxed.for_each_token(&mut |t| seen.push(t.to_owned())).unwrap();
        assert_eq!(boxed.name(), "mem");
        assert_eq!(seen, vec!["a", "b"]);
    }
}
