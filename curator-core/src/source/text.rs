//! Newline-delimited text held locally: files and in-memory buffers.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use curator_types::{CurateError, Result};

use super::lines::for_each_line;
use super::WordSource;

/// A local newline-delimited text file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn for_each_token(&self, emit: &mut dyn FnMut(&str)) -> Result<()> {
        let bytes = fs::read(&self.path).map_err(|e| CurateError::unavailable(&self.name, e))?;
        for_each_line(&self.name, &bytes, emit)?;
        Ok(())
    }
}

/// In-memory newline-delimited bytes.
#[derive(Debug, Clone)]
pub struct MemorySource<'a> {
    name: String,
    bytes: Cow<'a, [u8]>,
}

impl<'a> MemorySource<'a> {
    /// Wraps `bytes` under the label `name`.
    pub fn new(name: impl Into<String>, bytes: impl Into<MemoryBytes<'a>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into().0,
        }
    }

    /// Builds a source with one token per element.
    pub fn from_words<I, S>(name: impl Into<String>, words: I) -> MemorySource<'static>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buf = Vec::new();
        for word in words {
            buf.extend_from_slice(word.as_ref().as_bytes());
            buf.push(b'\n');
        }
        MemorySource {
            name: name.into(),
            bytes: Cow::Owned(buf),
        }
    }
}

/// Byte payload accepted by [`MemorySource::new`].
#[derive(Debug)]
pub struct MemoryBytes<'a>(Cow<'a, [u8]>);

impl<'a> From<&'a [u8]> for MemoryBytes<'a> {
    fn from(b: &'a [u8]) -> Self {
        Self(Cow::Borrowed(b))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for MemoryBytes<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Self(Cow::Borrowed(b.as_slice()))
    }
}

impl<'a> From<&'a str> for MemoryBytes<'a> {
    fn from(s: &'a str) -> Self {
        Self(Cow::Borrowed(s.as_bytes()))
    }
}

impl From<Vec<u8>> for MemoryBytes<'static> {
    fn from(b: Vec<u8>) -> Self {
        Self(Cow::Owned(b))
    }
}

impl From<String> for MemoryBytes<'static> {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s.into_bytes()))
    }
}

impl WordSource for MemorySource<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn for_each_token(&self, emit: &mut dyn FnMut(&str)) -> Result<()> {
        for_each_line(&self.name, &self.bytes, emit)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_types::Stage;
    use std::io::Write;

    fn tokens(src: &dyn WordSource) -> Result<Vec<String>> {
        let mut out = Vec::new();
        src.for_each_token(&mut |t| out.push(t.to_owned()))?;
        Ok(out)
    }

    #[test]
    fn memory_from_str() {
        let src = MemorySource::new("mem", "the\ncat\n");
        assert_eq!(tokens(&src).unwrap(), vec!["the", "cat"]);
    }

    #[test]
    fn memory_from_bytes_rejects_invalid_utf8() {
        let src = MemorySource::new("mem", b"ok\n\xff\n");
        let err = tokens(&src).unwrap_err();
        assert_eq!(err.stage(), Stage::Decode);
    }

    #[test]
    fn memory_from_words() {
        let src = MemorySource::from_words("mem", ["a", "b", "c"]);
        assert_eq!(tokens(&src).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Hello\nWorld\n").unwrap();

        let src = FileSource::new(file.path());
        assert_eq!(src.path(), file.path());
        assert_eq!(tokens(&src).unwrap(), vec!["Hello", "World"]);
    }

    #[test]
    fn missing_file_is_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let src = FileSource::new(dir.path().join("nope.txt"));
        let err = tokens(&src).unwrap_err();
        assert_eq!(err.stage(), Stage::Fetch);
    }
}
