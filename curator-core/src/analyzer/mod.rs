//! Word analysis.
//!
//! This module provides the per-token processing shared by every stage:
//! - **Normalizer**: Trims and lower-cases raw tokens
//! - **Inflection**: Expands blacklisted base words into surface forms

pub mod inflection;
pub mod normalizer;

pub use inflection::{ExactOnly, Inflector, NaiveInflector, SuffixInflector};
pub use normalizer::WordNormalizer;
