/// Word normalizer shared by the blacklist builder and the candidate filter.
///
/// Performs the following operations:
/// - Removes leading/trailing whitespace (Unicode `White_Space`)
/// - Converts all characters to lowercase (Unicode-aware)
///
/// Interior whitespace is left alone: a source line is a single word, and a
/// line like `"ice cream"` stays `"ice cream"`.
///
/// Both components must normalize through this type. If they drift apart,
/// membership tests fail silently and forbidden words leak into the output.
///
/// # Examples
///
/// ```
/// use curator_core::analyzer::WordNormalizer;
///
/// let normalizer = WordNormalizer::default();
/// assert_eq!(normalizer.normalize("  Cat\r\n"), "cat");
/// assert_eq!(normalizer.normalize("ÜBER"), "über");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordNormalizer {
    _private: (),
}

impl WordNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Normalizes a raw token into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when necessary.
    /// Clears the buffer before writing.
    #[inline]
    pub fn normalize_into(&self, raw: &str, out: &mut String) {
        out.clear();
        let trimmed = raw.trim();

        if trimmed.is_ascii() {
            out.reserve(trimmed.len());
            out.extend(trimmed.bytes().map(|b| b.to_ascii_lowercase() as char));
            return;
        }

        // `str::to_lowercase` handles final sigma, which per-char lowering does not.
        out.push_str(&trimmed.to_lowercase());
    }

    /// Normalizes a raw token and returns a new String.
    #[inline]
    pub fn normalize(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        self.normalize_into(raw, &mut out);
        out
    }
}
