//! Morphological expansion policies for blacklist entries.
//!
//! A blacklisted base word rarely appears in a frequency list only in its
//! base form. An [`Inflector`] turns one base word into the set of surface
//! forms that should be blocked along with it.
//!
//! The default [`NaiveInflector`] appends `s`, `ed` and `ing`. It is a
//! mechanical heuristic, not a linguistic model:
//!
//! ```text
//! "run"  -> run, runs, runed, runing     (misses "ran", "running")
//! "hate" -> hate, hates, hateed, hateing (misses "hated", "hating")
//! ```
//!
//! Both over- and under-blocking are expected. A stricter policy plugs in
//! through the trait without touching the builder or the filter.

use smallvec::SmallVec;

/// Suffixes appended by [`NaiveInflector`]: plural, past tense, gerund.
pub const NAIVE_SUFFIXES: [&str; 3] = ["s", "ed", "ing"];

/// Trait for blacklist expansion policies.
///
/// Implementations emit every form to block for `base`, the base itself
/// included. Emission order carries no meaning.
pub trait Inflector {
    /// Emits all variants of `base`.
    fn inflect<F>(&self, base: &str, emit: F)
    where
        F: FnMut(&str);
}

/// Appends an arbitrary set of suffixes to the base word.
///
/// Up to four suffixes are stored inline.
#[derive(Debug, Clone)]
pub struct SuffixInflector {
    suffixes: SmallVec<[&'static str; 4]>,
}

impl SuffixInflector {
    /// Creates an inflector for the given suffixes.
    ///
    /// Empty suffixes are ignored, since the base word is always emitted.
    pub fn new<I>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self {
            suffixes: suffixes.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }

    /// Returns the configured suffixes.
    pub fn suffixes(&self) -> &[&'static str] {
        &self.suffixes
    }
}

impl Inflector for SuffixInflector {
    #[inline]
    fn inflect<F>(&self, base: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        emit(base);

        let mut buf = String::with_capacity(base.len() + 3);
        for suffix in &self.suffixes {
            buf.clear();
            buf.push_str(base);
            buf.push_str(suffix);
            emit(&buf);
        }
    }
}

/// Default policy: `{w, w+"s", w+"ed", w+"ing"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveInflector;

impl Inflector for NaiveInflector {
    #[inline]
    fn inflect<F>(&self, base: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        emit(base);

        let mut buf = String::with_capacity(base.len() + 3);
        for suffix in NAIVE_SUFFIXES {
            buf.clear();
            buf.push_str(base);
            buf.push_str(suffix);
            emit(&buf);
        }
    }
}

/// Blocks only the exact base word.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactOnly;

impl Inflector for ExactOnly {
    #[inline]
    fn inflect<F>(&self, base: &str, mut emit: F)
    where
        F: FnMut(&str),
    {
        emit(base);
    }
}

impl<T: Inflector + ?Sized> Inflector for &T {
    #[inline]
    fn inflect<F>(&self, base: &str, emit: F)
    where
        F: FnMut(&str),
    {
        (**self).inflect(base, emit)
    }
}
