//! Blacklist construction.
//!
//! Every token of every blacklist source is normalized and expanded through
//! an [`Inflector`]; the union of all expansions is the [`Blacklist`].
//!
//! The blacklist must be complete before any filtering starts. There is no
//! partial mode: if one source fails, the whole build fails, since shipping
//! fewer blacklist entries is worse than shipping nothing.

use curator_types::Result;
use rustc_hash::FxHashSet;

use crate::analyzer::{Inflector, NaiveInflector, WordNormalizer};
use crate::source::WordSource;

/// Immutable set of forbidden words.
///
/// Membership is exact-string. Entries are already lower-cased, so lookups
/// must use normalized words.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    words: FxHashSet<String>,
}

impl Blacklist {
    /// Returns `true` if `word` is forbidden.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of entries, inflections included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing is forbidden.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

/// Accumulates blacklist entries from any number of sources.
///
/// ```
/// use curator_core::blacklist::BlacklistBuilder;
/// use curator_core::source::MemorySource;
///
/// let mut builder = BlacklistBuilder::new();
/// builder.add_source(&MemorySource::new("list", "Ass\n")).unwrap();
/// let blacklist = builder.build();
///
/// for w in ["ass", "asss", "assed", "assing"] {
///     assert!(blacklist.contains(w));
/// }
/// ```
#[derive(Debug)]
pub struct BlacklistBuilder<I = NaiveInflector> {
    normalizer: WordNormalizer,
    inflector: I,
    words: FxHashSet<String>,
    norm_buf: String,
    base_words: usize,
    sources: usize,
}

impl Default for BlacklistBuilder<NaiveInflector> {
    fn default() -> Self {
        Self::new()
    }
}

impl BlacklistBuilder<NaiveInflector> {
    /// Builder using the default `s`/`ed`/`ing` expansion.
    pub fn new() -> Self {
        Self::with_inflector(NaiveInflector)
    }
}

impl<I: Inflector> BlacklistBuilder<I> {
    /// Builder using a custom expansion policy.
    pub fn with_inflector(inflector: I) -> Self {
        Self {
            normalizer: WordNormalizer::new(),
            inflector,
            words: FxHashSet::default(),
            norm_buf: String::new(),
            base_words: 0,
            sources: 0,
        }
    }

    /// Normalizes `raw` and adds it with all its inflections.
    ///
    /// A blank token is expanded like any other, so it blacklists the bare
    /// suffixes. Returns `true` if the base word was not already present.
    pub fn add_word(&mut self, raw: &str) -> bool {
        self.normalizer.normalize_into(raw, &mut self.norm_buf);
        let fresh = !self.words.contains(self.norm_buf.as_str());

        let words = &mut self.words;
        self.inflector.inflect(&self.norm_buf, |variant| {
            if !words.contains(variant) {
                words.insert(variant.to_owned());
            }
        });
        self.base_words += 1;
        fresh
    }

    /// Reads every token of `source` into the blacklist.
    ///
    /// Returns the number of base words taken from the source.
    ///
    /// # Errors
    ///
    /// Propagates the source's fetch or decode failure. On error the builder
    /// may hold some of the source's words and must be discarded.
    pub fn add_source(&mut self, source: &dyn WordSource) -> Result<usize> {
        let before_base = self.base_words;
        let before_len = self.words.len();

        source.for_each_token(&mut |token| {
            self.add_word(token);
        })?;

        let added = self.base_words - before_base;
        self.sources += 1;
        tracing::info!(
            source = source.name(),
            base_words = added,
            new_entries = self.words.len() - before_len,
            "blacklist source loaded"
        );
        Ok(added)
    }

    /// Number of sources read so far.
    pub fn sources(&self) -> usize {
        self.sources
    }

    /// Freezes the accumulated entries.
    pub fn build(self) -> Blacklist {
        tracing::debug!(
            sources = self.sources,
            base_words = self.base_words,
            entries = self.words.len(),
            "blacklist built"
        );
        Blacklist { words: self.words }
    }
}

/// Builds a blacklist from `sources` with the default expansion.
///
/// # Errors
///
/// Fails on the first source that cannot be read or decoded.
pub fn build_blacklist(sources: &[&dyn WordSource]) -> Result<Blacklist> {
    build_blacklist_with(sources, NaiveInflector)
}

/// Builds a blacklist from `sources` with a custom expansion policy.
///
/// # Errors
///
/// Fails on the first source that cannot be read or decoded.
pub fn build_blacklist_with<I: Inflector>(
    sources: &[&dyn WordSource],
    inflector: I,
) -> Result<Blacklist> {
    let mut builder = BlacklistBuilder::with_inflector(inflector);
    for source in sources {
        builder.add_source(*source)?;
    }
    Ok(builder.build())
}
