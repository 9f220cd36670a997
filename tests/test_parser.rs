use bytes::BytesMut;
use lantern::http::parser::{LineSplitter, MAX_LINE_LEN, ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_line() {
    let line = parse_request_line("GET / HTTP/1.1").unwrap();

    assert_eq!(line.method, "GET");
    assert_eq!(line.target.as_deref(), Some("/"));
    assert_eq!(line.version.as_deref(), Some("HTTP/1.1"));
}

#[test]
fn test_parse_line_with_query_string() {
    let line = parse_request_line("GET /cgi/addnums.fake-cgi?person=A&num1=1&num2=2 HTTP/1.1")
        .unwrap();

    assert_eq!(
        line.target.as_deref(),
        Some("/cgi/addnums.fake-cgi?person=A&num1=1&num2=2")
    );
}

#[test]
fn test_parse_line_without_get_is_ignored() {
    assert!(parse_request_line("Host: example.com").is_none());
    assert!(parse_request_line("POST /api HTTP/1.1").is_none());
    assert!(parse_request_line("").is_none());
}

#[test]
fn test_parse_get_with_single_token_has_no_target() {
    let line = parse_request_line("GET").unwrap();

    assert_eq!(line.method, "GET");
    assert!(line.target.is_none());
}

#[test]
fn test_parse_collapses_extra_whitespace() {
    let line = parse_request_line("GET   /a.txt \t HTTP/1.0").unwrap();

    assert_eq!(line.target.as_deref(), Some("/a.txt"));
    assert_eq!(line.version.as_deref(), Some("HTTP/1.0"));
}

#[test]
fn test_parse_version_is_not_validated() {
    let line = parse_request_line("GET /x whatever").unwrap();
    assert_eq!(line.version.as_deref(), Some("whatever"));
}

#[test]
fn test_take_line_incomplete() {
    let mut buf = BytesMut::from(&b"GET / HTTP/1.1"[..]);
    let mut lines = LineSplitter::new();

    assert_eq!(lines.take_line(&mut buf), Ok(None));
    assert_eq!(buf.len(), 14);
}

#[test]
fn test_take_line_bare_newline() {
    let mut buf = BytesMut::from(&b"first\nsecond\n\n"[..]);
    let mut lines = LineSplitter::new();

    assert_eq!(lines.take_line(&mut buf), Ok(Some("first".to_string())));
    assert_eq!(lines.take_line(&mut buf), Ok(Some("second".to_string())));
    assert_eq!(lines.take_line(&mut buf), Ok(Some(String::new())));
    assert_eq!(lines.take_line(&mut buf), Ok(None));
}

#[test]
fn test_take_line_arriving_in_pieces() {
    let mut buf = BytesMut::new();
    let mut lines = LineSplitter::new();

    for piece in [&b"GET /do"[..], &b"cs/ HT"[..], &b"TP/1.1\r"[..], &b"\nHost: x\r\n"[..]] {
        buf.extend_from_slice(piece);
        if let Some(line) = lines.take_line(&mut buf).unwrap() {
            assert_eq!(line, "GET /docs/ HTTP/1.1");
        }
    }

    assert_eq!(lines.take_line(&mut buf), Ok(Some("Host: x".to_string())));
}

#[test]
fn test_take_line_accepts_line_at_limit() {
    let mut raw = vec![b'a'; MAX_LINE_LEN];
    raw.extend_from_slice(b"\r\n");
    let mut buf = BytesMut::from(&raw[..]);

    let line = LineSplitter::new().take_line(&mut buf).unwrap().unwrap();
    assert_eq!(line.len(), MAX_LINE_LEN);
}

#[test]
fn test_take_line_rejects_overlong_unterminated_line() {
    let mut buf = BytesMut::from(&vec![b'a'; MAX_LINE_LEN + 2][..]);

    assert_eq!(
        LineSplitter::new().take_line(&mut buf),
        Err(ParseError::LineTooLong)
    );
}

#[test]
fn test_take_line_rejects_overlong_terminated_line() {
    let mut raw = vec![b'a'; MAX_LINE_LEN + 1];
    raw.push(b'\n');
    let mut buf = BytesMut::from(&raw[..]);

    assert_eq!(
        LineSplitter::new().take_line(&mut buf),
        Err(ParseError::LineTooLong)
    );
}

#[test]
fn test_take_rest_returns_unterminated_tail() {
    let mut buf = BytesMut::from(&b"GET /tail HTTP/1.1"[..]);
    let mut lines = LineSplitter::new();

    assert_eq!(lines.take_line(&mut buf), Ok(None));
    assert_eq!(
        lines.take_rest(&mut buf),
        Ok(Some("GET /tail HTTP/1.1".to_string()))
    );
    assert_eq!(lines.take_rest(&mut buf), Ok(None));
    assert_eq!(lines.take_line(&mut buf), Ok(None));
}
