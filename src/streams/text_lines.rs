/// Forward-only line cursor over an in-memory byte buffer.
///
/// Lines are split on `\n`, a trailing `\r` is dropped and a UTF-8 byte order
/// mark at the very start of the buffer is skipped. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD rather than rejected.
#[derive(Debug, Clone)]
pub struct TextLines<'a> {
    data: &'a [u8],
    pos: usize,
    line_number: usize,
    peeked: Option<String>,
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

impl<'a> TextLines<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        let pos = if data.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        };
        Self {
            data,
            pos,
            line_number: 0,
            peeked: None,
        }
    }

    /// Return the next line, or `None` once the buffer is exhausted.
    pub fn next_line(&mut self) -> Option<String> {
        let line = match self.peeked.take() {
            Some(line) => line,
            None => self.read_line()?,
        };
        self.line_number += 1;
        Some(line)
    }

    /// Look at the next line without consuming it.
    pub fn peek_line(&mut self) -> Option<&str> {
        if self.peeked.is_none() {
            self.peeked = self.read_line();
        }
        self.peeked.as_deref()
    }

    /// Skip lines that are empty or whitespace only.
    pub fn skip_blank_lines(&mut self) {
        while let Some(line) = self.peek_line() {
            if !line.trim().is_empty() {
                break;
            }
            self.next_line();
        }
    }

    /// Number of lines consumed so far, which is also the 1-based number of
    /// the line most recently returned by `next_line`.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn is_exhausted(&mut self) -> bool {
        self.peek_line().is_none()
    }

    fn read_line(&mut self) -> Option<String> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.pos..];
        let (raw, consumed) = match rest.iter().position(|&b| b == b'\n') {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        Some(String::from_utf8_lossy(raw).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::TextLines;

    #[test]
    fn test_splits_lines_and_strips_crlf() {
        let mut lines = TextLines::new(b"one\r\ntwo\nthree");
        assert_eq!(lines.next_line().as_deref(), Some("one"));
        assert_eq!(lines.next_line().as_deref(), Some("two"));
        assert_eq!(lines.next_line().as_deref(), Some("three"));
        assert_eq!(lines.next_line(), None);
        assert_eq!(lines.line_number(), 3);
    }

    #[test]
    fn test_trailing_newline_does_not_add_line() {
        let mut lines = TextLines::new(b"a\n\n");
        assert_eq!(lines.next_line().as_deref(), Some("a"));
        assert_eq!(lines.next_line().as_deref(), Some(""));
        assert_eq!(lines.next_line(), None);
    }

    #[test]
    fn test_bom_is_skipped() {
        let mut lines = TextLines::new(b"\xEF\xBB\xBFWEBVTT\n");
        assert_eq!(lines.next_line().as_deref(), Some("WEBVTT"));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut lines = TextLines::new(b"\n  \nx\n");
        lines.skip_blank_lines();
        assert_eq!(lines.line_number(), 2);
        assert_eq!(lines.peek_line(), Some("x"));
        assert_eq!(lines.next_line().as_deref(), Some("x"));
        assert_eq!(lines.line_number(), 3);
        assert!(lines.is_exhausted());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut lines = TextLines::new(b"caf\xE9\n");
        assert_eq!(lines.next_line().as_deref(), Some("caf\u{FFFD}"));
    }
}
