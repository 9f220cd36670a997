use bytes::{Buf, BytesMut};

use crate::http::request::RequestLine;

/// Token a line must contain to be taken as the request line.
const GET: &str = "GET";

/// Longest line accepted, terminator excluded.
pub const MAX_LINE_LEN: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A line grew past [`MAX_LINE_LEN`] bytes
    LineTooLong,
}

/// Splits lines off the front of a growing buffer.
///
/// Remembers how far the current partial line has been searched, so bytes
/// are scanned once no matter how many reads a line takes to arrive.
#[derive(Debug, Default)]
pub struct LineSplitter {
    scanned: usize,
}

impl LineSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes one complete line off `buf`.
    ///
    /// A line ends at `\n`; a `\r` right before it is dropped. Returns
    /// `Ok(None)` when `buf` holds no complete line yet. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn take_line(&mut self, buf: &mut BytesMut) -> Result<Option<String>, ParseError> {
        let start = self.scanned.min(buf.len());
        let Some(offset) = buf[start..].iter().position(|&b| b == b'\n') else {
            self.scanned = buf.len();
            // One extra byte for a `\r` still waiting on its `\n`.
            if buf.len() > MAX_LINE_LEN + 1 {
                return Err(ParseError::LineTooLong);
            }
            return Ok(None);
        };

        let end = start + offset;
        self.scanned = 0;

        let raw = buf.split_to(end);
        buf.advance(1);

        let line = strip_cr(&raw);
        if line.len() > MAX_LINE_LEN {
            return Err(ParseError::LineTooLong);
        }

        Ok(Some(decode_line(line)))
    }

    /// Drains whatever is left in `buf` as a final, unterminated line.
    pub fn take_rest(&mut self, buf: &mut BytesMut) -> Result<Option<String>, ParseError> {
        self.scanned = 0;
        if buf.is_empty() {
            return Ok(None);
        }
        let raw = buf.split();
        let line = strip_cr(&raw);
        if line.len() > MAX_LINE_LEN {
            return Err(ParseError::LineTooLong);
        }
        Ok(Some(decode_line(line)))
    }
}

fn strip_cr(raw: &[u8]) -> &[u8] {
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Recognizes a request line.
///
/// Any line containing `GET` qualifies; it is split on whitespace and the
/// second token becomes the target. A qualifying line with a single token
/// still returns `Some`, with `target` left empty.
pub fn parse_request_line(line: &str) -> Option<RequestLine> {
    if !line.contains(GET) {
        return None;
    }

    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().map(str::to_string);
    let version = parts.next().map(str::to_string);

    Some(RequestLine {
        method,
        target,
        version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_line_strips_crlf() {
        let mut buf = BytesMut::from(&b"GET / HTTP/1.1\r\nHost: x\r\n"[..]);
        let mut lines = LineSplitter::new();

        assert_eq!(lines.take_line(&mut buf), Ok(Some("GET / HTTP/1.1".to_string())));
        assert_eq!(lines.take_line(&mut buf), Ok(Some("Host: x".to_string())));
        assert_eq!(lines.take_line(&mut buf), Ok(None));
        assert!(buf.is_empty());
    }

    #[test]
    fn partial_line_resumes_after_scanned_bytes() {
        let mut buf = BytesMut::from(&b"GET /a"[..]);
        let mut lines = LineSplitter::new();

        assert_eq!(lines.take_line(&mut buf), Ok(None));
        assert_eq!(lines.scanned, 6);

        buf.extend_from_slice(b".txt HTTP/1.1\r\n");
        assert_eq!(lines.take_line(&mut buf), Ok(Some("GET /a.txt HTTP/1.1".to_string())));
        assert_eq!(lines.scanned, 0);
    }

    #[test]
    fn parse_simple_get() {
        let line = parse_request_line("GET /index.html HTTP/1.1").unwrap();

        assert_eq!(line.method, "GET");
        assert_eq!(line.target.as_deref(), Some("/index.html"));
        assert_eq!(line.version.as_deref(), Some("HTTP/1.1"));
    }
}
