//! Word-list curation pipeline.
//!
//! Downloads a frequency-ranked word list and one or more blacklists, drops
//! short and forbidden words, and writes the survivors into a generated
//! source file.
//!
//! ```text
//! blacklist sources ──► BlacklistBuilder ──► Blacklist ─┐
//!                                                       ▼
//! frequency source ─────────────────────────► CandidateFilter ──► WordList ──► artifact
//! ```
//!
//! Threading: a run is single-threaded and sequential. Sources are read
//! with blocking I/O.

pub mod analyzer;
pub mod blacklist;
pub mod config;
pub mod emit;
pub mod filter;
pub mod pipeline;
pub mod source;

pub use analyzer::{Inflector, NaiveInflector, WordNormalizer};
pub use blacklist::{build_blacklist, Blacklist, BlacklistBuilder};
pub use config::CuratorConfig;
pub use filter::{filter_candidates, CandidateFilter, FilterStats, Verdict, WordList};
pub use pipeline::{curate, Curated, Pipeline, RunSummary};
pub use source::{SourceSpec, WordSource};

pub use curator_types::{CurateError, Result, Stage};
