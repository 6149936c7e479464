//! Candidate filtering over the frequency list.
//!
//! A single forward pass: every token is normalized exactly as the
//! blacklist builder does, then kept iff it is longer than
//! [`MIN_WORD_LEN`] characters and not blacklisted. Source order is
//! frequency rank, so it is preserved; duplicates are not removed.

use core::fmt;

use curator_types::{Result, MIN_WORD_LEN};
use serde::Serialize;

use crate::analyzer::WordNormalizer;
use crate::blacklist::Blacklist;
use crate::source::WordSource;

/// Ordered list of curated words, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word survived filtering.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in order.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Iterates words in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Consumes the list.
    pub fn into_vec(self) -> Vec<String> {
        self.words
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Per-word filter decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The word goes into the output.
    Keep,
    /// The word has [`MIN_WORD_LEN`] characters or fewer.
    TooShort,
    /// The word is in the blacklist.
    Blacklisted,
}

/// Counters for one filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Tokens read from the frequency source.
    pub seen: usize,
    /// Tokens kept.
    pub kept: usize,
    /// Tokens dropped by the length rule.
    pub too_short: usize,
    /// Tokens dropped by the blacklist.
    pub blacklisted: usize,
}

impl FilterStats {
    fn record(&mut self, verdict: Verdict) {
        self.seen += 1;
        match verdict {
            Verdict::Keep => self.kept += 1,
            Verdict::TooShort => self.too_short += 1,
            Verdict::Blacklisted => self.blacklisted += 1,
        }
    }
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seen={} kept={} too_short={} blacklisted={}",
            self.seen, self.kept, self.too_short, self.blacklisted
        )
    }
}

/// Applies the inclusion rule against a finished blacklist.
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'b> {
    blacklist: &'b Blacklist,
    normalizer: WordNormalizer,
}

impl<'b> CandidateFilter<'b> {
    /// Creates a filter over `blacklist`.
    pub fn new(blacklist: &'b Blacklist) -> Self {
        Self {
            blacklist,
            normalizer: WordNormalizer::new(),
        }
    }

    /// Decides on an already-normalized word.
    ///
    /// The length rule is checked first, so a short blacklisted word counts
    /// as `TooShort`.
    #[inline]
    pub fn verdict(&self, word: &str) -> Verdict {
        if word.chars().count() <= MIN_WORD_LEN {
            Verdict::TooShort
        } else if self.blacklist.contains(word) {
            Verdict::Blacklisted
        } else {
            Verdict::Keep
        }
    }

    /// Normalizes `raw` and decides on it.
    pub fn accepts(&self, raw: &str) -> Verdict {
        self.verdict(&self.normalizer.normalize(raw))
    }

    /// Filters `source` into a [`WordList`].
    ///
    /// # Errors
    ///
    /// Propagates the source's fetch or decode failure; no partial list is
    /// returned.
    pub fn filter(&self, source: &dyn WordSource) -> Result<WordList> {
        self.filter_with_stats(source).map(|(list, _)| list)
    }

    /// Filters `source` and reports what was dropped.
    ///
    /// # Errors
    ///
    /// Same as [`CandidateFilter::filter`].
    pub fn filter_with_stats(&self, source: &dyn WordSource) -> Result<(WordList, FilterStats)> {
        let mut words = Vec::new();
        let mut stats = FilterStats::default();
        let mut norm_buf = String::new();

        source.for_each_token(&mut |token| {
            self.normalizer.normalize_into(token, &mut norm_buf);
            let verdict = self.verdict(&norm_buf);
            stats.record(verdict);
            if verdict == Verdict::Keep {
                words.push(norm_buf.clone());
            }
        })?;

        tracing::info!(source = source.name(), %stats, "frequency list filtered");
        Ok((WordList { words }, stats))
    }
}

/// Filters `frequency` against `blacklist`.
///
/// # Errors
///
/// Propagates the source's fetch or decode failure.
pub fn filter_candidates(frequency: &dyn WordSource, blacklist: &Blacklist) -> Result<WordList> {
    CandidateFilter::new(blacklist).filter(frequency)
}
