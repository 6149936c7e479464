//! Run configuration.
//!
//! Every location a run touches lives here and is handed to the pipeline
//! explicitly. Defaults reproduce the app's generator setup; a JSON file can
//! override any subset of fields.

use std::fs;
use std::path::{Path, PathBuf};

use curator_types::{CurateError, Result};
use serde::{Deserialize, Serialize};

use crate::emit::Template;
use crate::source::{SourceSpec, StoreSpec};

/// Frequency-ranked list of common English words, most frequent first.
pub const DEFAULT_WORDS_URL: &str =
    "https://raw.githubusercontent.com/derekchuank/high-frequency-vocabulary/master/10k.txt";

/// Public list of obscene and otherwise unsuitable English words.
pub const DEFAULT_OBSCENITY_URL: &str =
    "https://raw.githubusercontent.com/sloria/List-of-Dirty-Naughty-Obscene-and-Otherwise-Bad-Words/en/en";

/// Locally maintained blacklist store.
pub const DEFAULT_STORE_PATH: &str = "scripts/blacklist.db";

/// Generated artifact consumed by the app.
pub const DEFAULT_OUTPUT_PATH: &str = "Fingerspelling/Data/Words.swift";

/// Where and how the artifact is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Artifact path.
    pub path: PathBuf,
    /// Binding names.
    #[serde(flatten)]
    pub template: Template,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            template: Template::default(),
        }
    }
}

/// Configuration for one curation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratorConfig {
    /// Frequency-ranked source.
    pub words: SourceSpec,
    /// Blacklist sources, unioned.
    pub blacklists: Vec<SourceSpec>,
    /// Output artifact.
    pub output: OutputConfig,
    /// Skip a configured store whose file does not exist instead of failing.
    /// Off by default: a missing store aborts the run.
    pub optional_store_missing_ok: bool,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            words: SourceSpec::Url(DEFAULT_WORDS_URL.to_owned()),
            blacklists: vec![
                SourceSpec::Url(DEFAULT_OBSCENITY_URL.to_owned()),
                SourceSpec::Store(StoreSpec::at(DEFAULT_STORE_PATH)),
            ],
            output: OutputConfig::default(),
            optional_store_missing_ok: false,
        }
    }
}

impl CuratorConfig {
    /// Loads configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns `CurateError::Config` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CurateError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&text).map_err(|e| match e {
            CurateError::Config(msg) => CurateError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Parses configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CurateError::Config` on malformed JSON or an invalid value.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| CurateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `CurateError::Config` if a binding name is not a valid
    /// identifier or both bindings share a name.
    pub fn validate(&self) -> Result<()> {
        let template = &self.output.template;
        check_ident(&template.list_name)?;
        if let Some(copy) = &template.working_copy {
            check_ident(copy)?;
            if copy == &template.list_name {
                return Err(CurateError::Config(format!(
                    "working copy `{copy}` has the same name as the list"
                )));
            }
        }
        Ok(())
    }

    /// Replaces every store blacklist with `path`, or adds one.
    pub fn set_store(&mut self, path: impl Into<PathBuf>) {
        self.clear_store();
        self.blacklists.push(SourceSpec::Store(StoreSpec::at(path)));
    }

    /// Removes every store blacklist.
    pub fn clear_store(&mut self) {
        self.blacklists.retain(|s| s.store_path().is_none());
    }
}

fn check_ident(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CurateError::Config(format!("`{name}` is not a valid identifier")))
    }
}
