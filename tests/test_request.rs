use lantern::http::request::{Request, RequestBuilder, RequestLine};

#[test]
fn test_request_target() {
    let req = RequestBuilder::new().get("/index.html").build();
    assert_eq!(req.target(), Some("/index.html"));
}

#[test]
fn test_request_without_line_has_no_target() {
    let req = Request::default();
    assert_eq!(req.target(), None);
}

#[test]
fn test_request_single_token_line_has_no_target() {
    let req = RequestBuilder::new()
        .line(RequestLine {
            method: "GET".to_string(),
            target: None,
            version: None,
        })
        .build();

    assert!(req.line.is_some());
    assert_eq!(req.target(), None);
}

#[test]
fn test_request_host_captured() {
    let req = RequestBuilder::new()
        .get("/")
        .header("host:  example.com ")
        .header("User-Agent: curl/8.0")
        .build();

    assert_eq!(req.host.as_deref(), Some("example.com"));
    assert_eq!(req.ignored, 2);
}

#[test]
fn test_request_first_host_wins() {
    let req = RequestBuilder::new()
        .header("Host: a")
        .header("Host: b")
        .build();

    assert_eq!(req.host.as_deref(), Some("a"));
}

#[test]
fn test_request_ignored_lines_are_only_counted() {
    let mut req = Request::default();
    for i in 0..1000 {
        req.ignore_line(&format!("X-Filler-{i}: {}", "v".repeat(100)));
    }
    req.ignore_line("not a header");

    assert_eq!(req.ignored, 1001);
    assert_eq!(req.host, None);
}
