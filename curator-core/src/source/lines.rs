//! Newline splitting and per-line UTF-8 decoding for byte sources.
//!
//! A source body is split on `\n` with a single forward memchr scan. Every
//! line is decoded on its own, so a decode failure can report the exact line
//! number. A trailing newline does not produce an extra empty line, and
//! `\r` is left in place for the normalizer to trim.

use core::str;

use curator_types::{CurateError, LineNo, Result};
use memchr::memchr_iter;

/// Decodes one raw line, reporting `line` on failure.
#[inline]
pub fn decode_line<'a>(source_name: &str, raw: &'a [u8], line: LineNo) -> Result<&'a str> {
    str::from_utf8(raw).map_err(|_| CurateError::Decode {
        source_name: source_name.to_owned(),
        line,
    })
}

/// Splits `bytes` into lines and emits each decoded line in order.
///
/// Returns the number of lines emitted. Stops at the first line that is not
/// valid UTF-8; lines before it have already been emitted, so callers must
/// discard whatever they accumulated when this returns an error.
pub fn for_each_line<F>(source_name: &str, bytes: &[u8], mut emit: F) -> Result<usize>
where
    F: FnMut(&str),
{
    let mut start = 0usize;
    let mut line: LineNo = 0;

    for i in memchr_iter(b'\n', bytes) {
        line += 1;
        emit(decode_line(source_name, &bytes[start..i], line)?);
        start = i + 1;
    }

    if start < bytes.len() {
        line += 1;
        emit(decode_line(source_name, &bytes[start..], line)?);
    }

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_types::Stage;

    fn collect(bytes: &[u8]) -> Result<Vec<String>> {
        let mut out = Vec::new();
        for_each_line("test", bytes, |l| out.push(l.to_owned()))?;
        Ok(out)
    }

    #[test]
    fn splits_on_newline() {
        assert_eq!(collect(b"the\ncat\ndog").unwrap(), vec!["the", "cat", "dog"]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(collect(b"the\ncat\n").unwrap(), vec!["the", "cat"]);
    }

    #[test]
    fn blank_lines_are_emitted() {
        assert_eq!(collect(b"a\n\nb\n").unwrap(), vec!["a", "", "b"]);
    }

    #[test]
    fn carriage_return_kept() {
        assert_eq!(collect(b"cat\r\ndog\r\n").unwrap(), vec!["cat\r", "dog\r"]);
    }

    #[test]
    fn empty_input_emits_nothing() {
        assert!(collect(b"").unwrap().is_empty());
    }

    #[test]
    fn returns_line_count() {
        let n = for_each_line("test", b"a\nb\nc", |_| {}).unwrap();
        assert_eq!(n, 3);
    }

    #[test]
    fn invalid_utf8_reports_line() {
        let err = collect(b"ok\nfine\n\xff\xfebad\nnever").unwrap_err();
        assert_eq!(err.stage(), Stage::Decode);
        match err {
            CurateError::Decode { source_name, line } => {
                assert_eq!(source_name, "test");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_utf8_on_last_unterminated_line() {
        let err = collect(b"ok\n\xc3").unwrap_err();
        assert!(matches!(err, CurateError::Decode { line: 2, .. }));
    }

    #[test]
    fn multibyte_lines() {
        assert_eq!(collect("café\nñu".as_bytes()).unwrap(), vec!["café", "ñu"]);
    }
}
