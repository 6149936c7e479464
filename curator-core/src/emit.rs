//! Generated-artifact rendering and writing.
//!
//! The artifact is a Swift source file:
//!
//! ```text
//!
//! /**
//!  GENERATED FILE--DO NOT EDIT
//!  */
//! public let AllWords: [String] = ["the", "cat", "dog"]
//! public var Words: [String] = AllWords
//! ```
//!
//! The first binding is the immutable canonical list. The optional second
//! binding is a mutable working copy initialized from it, which the app
//! narrows at runtime.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use curator_types::{CurateError, Result};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::filter::WordList;

/// Header marking the artifact as machine-generated.
pub const GENERATED_HEADER: &str = "/**\n GENERATED FILE--DO NOT EDIT\n */";

/// Default name of the canonical list binding.
pub const DEFAULT_LIST_NAME: &str = "AllWords";

/// Default name of the mutable working copy.
pub const DEFAULT_WORKING_COPY: &str = "Words";

/// Binding names used when rendering the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    /// Name of the immutable canonical list.
    pub list_name: String,
    /// Name of the mutable copy, if one is emitted.
    pub working_copy: Option<String>,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            list_name: DEFAULT_LIST_NAME.to_owned(),
            working_copy: Some(DEFAULT_WORKING_COPY.to_owned()),
        }
    }
}

impl Template {
    /// Template emitting only the canonical list.
    pub fn single(list_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
            working_copy: None,
        }
    }

    /// Renders the artifact for `words`.
    pub fn render(&self, words: &WordList) -> String {
        let array = json_array(words);
        let mut out = String::with_capacity(array.len() + 128);

        out.push('\n');
        out.push_str(GENERATED_HEADER);
        out.push('\n');
        out.push_str(&format!(
            "public let {}: [String] = {}\n",
            self.list_name, array
        ));
        if let Some(copy) = &self.working_copy {
            out.push_str(&format!(
                "public var {}: [String] = {}\n",
                copy, self.list_name
            ));
        }
        out
    }
}

/// Encodes `words` as a JSON array with `", "` between elements.
pub fn json_array(words: &WordList) -> String {
    let mut out = String::from("[");
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&serde_json::Value::from(word).to_string());
    }
    out.push(']');
    out
}

/// Writes `contents` to `path` atomically.
///
/// The bytes go to a temporary file in the same directory, which is then
/// renamed over `path`. On failure `path` is left untouched.
///
/// # Errors
///
/// Returns `CurateError::Write` if the directory does not exist or any
/// write, flush or rename fails.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    let to_write_err = |cause: io::Error| CurateError::Write {
        path: path.to_path_buf(),
        cause,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !fs::metadata(dir).map(|m| m.is_dir()).unwrap_or(false) {
        return Err(to_write_err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("directory `{}` does not exist", dir.display()),
        )));
    }

    let mut tmp = NamedTempFile::new_in(dir).map_err(to_write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(to_write_err)?;
    tmp.as_file().sync_all().map_err(to_write_err)?;
    tmp.persist(path).map_err(|e| to_write_err(e.error))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "artifact written");
    Ok(())
}
