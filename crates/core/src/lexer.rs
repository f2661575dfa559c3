//! Line-oriented tokenizer shared by the dictionary and data passes.
//!
//! Both streams use the same surface grammar: `,` separates fields, `;`
//! terminates an object, and `!` starts a comment that runs to the end of
//! the line unless it sits inside double quotes.

use std::io::{self, BufRead};

/// Default cap on the number of characters kept from one input line.
pub const MAX_LINE_LENGTH: usize = 500;

/// One physical input line with its comment removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Line content before the comment, tabs expanded to spaces.
    pub text: String,
    /// 1-based line number in the stream.
    pub number: u32,
    /// Comment text after the `!`, if any.
    pub comment: Option<String>,
    /// The content was longer than the reader's limit and was cut.
    pub truncated: bool,
}

impl Line {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The delimiter character at byte offset `pos`, if it is one.
    pub fn delimiter_at(&self, pos: usize) -> Option<char> {
        match self.text.as_bytes().get(pos) {
            Some(b',') => Some(','),
            Some(b';') => Some(';'),
            _ => None,
        }
    }
}

pub struct LineReader<R> {
    reader: R,
    line_number: u32,
    max_line_length: usize,
    pushed_back: Vec<Line>,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader {
            reader,
            line_number: 0,
            max_line_length: MAX_LINE_LENGTH,
            pushed_back: Vec::new(),
            buf: Vec::new(),
        }
    }

    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max.max(1);
        self
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Number of the last line read from the underlying stream.
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Read the next line. `Ok(None)` signals end of stream.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD; only a failing
    /// reader is an error.
    pub fn next_line(&mut self) -> io::Result<Option<Line>> {
        if let Some(line) = self.pushed_back.pop() {
            return Ok(Some(line));
        }
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let decoded = String::from_utf8_lossy(&self.buf);
        let raw = decoded.trim_end_matches(['\n', '\r']).replace('\t', " ");
        let (content, comment) = split_comment(&raw);
        let mut text = content.to_owned();
        let mut truncated = false;
        if let Some((cut, _)) = text.char_indices().nth(self.max_line_length) {
            text.truncate(cut);
            truncated = true;
        }
        Ok(Some(Line {
            text,
            number: self.line_number,
            comment: comment.map(str::to_owned),
            truncated,
        }))
    }

    /// Return a line (or the unread tail of one) so the next call to
    /// [`next_line`](Self::next_line) yields it again.
    pub fn push_back(&mut self, line: Line) {
        self.pushed_back.push(line);
    }
}

/// Split a raw line at the first `!` outside double quotes.
pub fn split_comment(raw: &str) -> (&str, Option<&str>) {
    let mut in_quotes = false;
    for (i, c) in raw.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '!' if !in_quotes => return (&raw[..i], Some(&raw[i + 1..])),
            _ => {}
        }
    }
    (raw, None)
}

/// Byte offset of the first `,` or `;` at or after `from`.
pub fn scan(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if from >= bytes.len() {
        return None;
    }
    bytes[from..]
        .iter()
        .position(|&b| b == b',' || b == b';')
        .map(|p| p + from)
}

/// Parse a numeric literal as the data stream writes them: trimmed,
/// optional Fortran `D` exponent, finite values only.
pub fn parse_number(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    let normalized = t.replace(['D', 'd'], "E");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(src: &str) -> LineReader<Cursor<&str>> {
        LineReader::new(Cursor::new(src))
    }

    #[test]
    fn strips_comment_and_counts_lines() {
        let mut r = reader("Version,8.3;  !- the version\n\n  Timestep, 4;\n");
        let first = r.next_line().unwrap().unwrap();
        assert_eq!(first.text, "Version,8.3;  ");
        assert_eq!(first.comment.as_deref(), Some("- the version"));
        assert_eq!(first.number, 1);

        let blank = r.next_line().unwrap().unwrap();
        assert!(blank.is_blank());
        assert_eq!(blank.number, 2);

        let third = r.next_line().unwrap().unwrap();
        assert_eq!(third.number, 3);
        assert!(r.next_line().unwrap().is_none());
    }

    #[test]
    fn bang_inside_quotes_is_not_a_comment() {
        let (content, comment) = split_comment("Note,\"Hello! there\", x; ! trailing");
        assert_eq!(content, "Note,\"Hello! there\", x; ");
        assert_eq!(comment, Some(" trailing"));
    }

    #[test]
    fn scan_finds_either_delimiter_from_cursor() {
        let text = "SimulationControl, NO, NO;";
        assert_eq!(scan(text, 0), Some(17));
        assert_eq!(scan(text, 18), Some(21));
        assert_eq!(scan(text, 22), Some(25));
        assert_eq!(scan(text, 26), None);
        assert_eq!(scan("no delimiter", 0), None);
    }

    #[test]
    fn long_lines_are_truncated_and_flagged() {
        let mut r = reader("abcdefghij\nabc\n").with_max_line_length(5);
        let line = r.next_line().unwrap().unwrap();
        assert_eq!(line.text, "abcde");
        assert!(line.truncated);
        let short = r.next_line().unwrap().unwrap();
        assert!(!short.truncated);
    }

    #[test]
    fn push_back_replays_line_without_advancing_counter() {
        let mut r = reader("a;\nb;\n");
        let a = r.next_line().unwrap().unwrap();
        r.push_back(a.clone());
        assert_eq!(r.next_line().unwrap().unwrap(), a);
        assert_eq!(r.line_number(), 1);
        assert_eq!(r.next_line().unwrap().unwrap().text, "b;");
    }

    #[test]
    fn numbers_accept_fortran_exponent_and_reject_non_finite() {
        assert_eq!(parse_number(" 1.5D2 "), Some(150.0));
        assert_eq!(parse_number("-6.00"), Some(-6.0));
        assert_eq!(parse_number("120."), Some(120.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn invalid_utf8_in_comment_is_replaced_not_fatal() {
        let src: &[u8] = b"Version,8.3; ! 20 \xb0C setpoint\nTimestep,4;\n";
        let mut r = LineReader::new(src);
        let first = r.next_line().unwrap().unwrap();
        assert_eq!(first.text, "Version,8.3; ");
        assert_eq!(first.comment.as_deref(), Some(" 20 \u{FFFD}C setpoint"));
        let second = r.next_line().unwrap().unwrap();
        assert_eq!(second.text, "Timestep,4;");
        assert_eq!(second.number, 2);
    }

    #[test]
    fn tabs_and_crlf_are_normalized() {
        let mut r = reader("A1,\tB2;\r\n");
        let line = r.next_line().unwrap().unwrap();
        assert_eq!(line.text, "A1, B2;");
        assert_eq!(line.delimiter_at(2), Some(','));
        assert_eq!(line.delimiter_at(6), Some(';'));
        assert_eq!(line.delimiter_at(0), None);
    }
}
