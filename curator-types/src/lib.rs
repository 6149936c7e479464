//! Core types shared across the word-list curator.
//!
//! This crate carries the error taxonomy and the constants that both the
//! library and the `gen_words` binary agree on. Keeping them separate means:
//!
//! - **One taxonomy**: every stage reports failures through [`CurateError`]
//! - **No I/O**: nothing here touches the network or the filesystem
//! - **Clean boundaries**: the core crate depends on this one, never the reverse

#![warn(missing_docs)]

use core::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Words must be strictly longer than this many characters to be kept.
///
/// Length is counted in Unicode scalar values, not bytes.
pub const MIN_WORD_LEN: usize = 2;

/// Line numbers reported by decode errors are 1-based.
pub type LineNo = usize;

/// Pipeline stage a failure belongs to.
///
/// Used by the binary to tell the invoker which part of the run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reading a remote list, a local file or the record store.
    Fetch,
    /// Interpreting a source line as UTF-8 text.
    Decode,
    /// Writing the generated artifact.
    Write,
    /// Loading or validating configuration.
    Config,
}

impl Stage {
    /// Short lowercase label for log lines and error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Fetch => "fetch",
            Stage::Decode => "decode",
            Stage::Write => "write",
            Stage::Config => "config",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort a curation run.
///
/// None of these are recovered locally. A run either produces a complete
/// artifact or fails with one of these.
#[derive(Debug, Error)]
pub enum CurateError {
    /// A fetch, file read or store query failed.
    #[error("source `{source_name}` unavailable: {reason}")]
    SourceUnavailable {
        /// Label of the source that failed.
        source_name: String,
        /// Human-readable cause.
        reason: String,
    },

    /// A line could not be decoded as UTF-8.
    #[error("source `{source_name}` line {line} is not valid UTF-8")]
    Decode {
        /// Label of the source that produced the line.
        source_name: String,
        /// 1-based line number.
        line: LineNo,
    },

    /// The output artifact could not be written.
    #[error("cannot write `{}`: {cause}", path.display())]
    Write {
        /// Target path of the artifact.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        cause: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CurateError {
    /// Builds a [`CurateError::SourceUnavailable`] from any displayable cause.
    pub fn unavailable(source_name: impl Into<String>, reason: impl fmt::Display) -> Self {
        CurateError::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the stage this error aborted.
    pub const fn stage(&self) -> Stage {
        match self {
            CurateError::SourceUnavailable { .. } => Stage::Fetch,
            CurateError::Decode { .. } => Stage::Decode,
            CurateError::Write { .. } => Stage::Write,
            CurateError::Config(_) => Stage::Config,
        }
    }
}

/// Result type for curation operations.
pub type Result<T> = std::result::Result<T, CurateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_labels() {
        assert_eq!(Stage::Fetch.to_string(), "fetch");
        assert_eq!(Stage::Decode.to_string(), "decode");
        assert_eq!(Stage::Write.to_string(), "write");
        assert_eq!(Stage::Config.to_string(), "config");
    }

    #[test]
    fn errors_map_to_stages() {
        let fetch = CurateError::unavailable("words", "HTTP 404");
        assert_eq!(fetch.stage(), Stage::Fetch);

        let decode = CurateError::Decode {
            source_name: "words".into(),
            line: 3,
        };
        assert_eq!(decode.stage(), Stage::Decode);

        let write = CurateError::Write {
            path: PathBuf::from("out/Words.swift"),
            cause: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(write.stage(), Stage::Write);

        assert_eq!(CurateError::Config("bad".into()).stage(), Stage::Config);
    }

    #[test]
    fn messages_name_the_source() {
        let err = CurateError::unavailable("obscenity-list", "HTTP 503");
        assert_eq!(
            err.to_string(),
            "source `obscenity-list` unavailable: HTTP 503"
        );

        let err = CurateError::Decode {
            source_name: "words".into(),
            line: 12,
        };
        assert_eq!(err.to_string(), "source `words` line 12 is not valid UTF-8");
    }

    #[test]
    fn write_error_keeps_io_source() {
        use std::error::Error as _;

        let err = CurateError::Write {
            path: PathBuf::from("Words.swift"),
            cause: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("cannot write `Words.swift`"));
    }

    #[test]
    fn min_word_len_is_exclusive_threshold() {
        assert_eq!(MIN_WORD_LEN, 2);
        assert!("an".chars().count() <= MIN_WORD_LEN);
        assert!("the".chars().count() > MIN_WORD_LEN);
    }
}
