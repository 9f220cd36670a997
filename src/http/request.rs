/// The line a request was identified by, split on whitespace.
///
/// Only the target is used when serving. The version token is kept for
/// logging and is never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// First token of the line (e.g. "GET")
    pub method: String,
    /// Second token, if the line had one (e.g. "/index.html")
    pub target: Option<String>,
    /// Third token, if present (e.g. "HTTP/1.1")
    pub version: Option<String>,
}

/// Represents everything kept from a connection before the blank line.
///
/// Lines other than the request line are ignored headers. They are
/// discarded as they arrive; only a count and the `Host` value survive, for
/// logging.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// The first line that mentioned GET, if any arrived
    pub line: Option<RequestLine>,
    /// Value of the first `Host` header seen
    pub host: Option<String>,
    /// Number of ignored lines
    pub ignored: usize,
}

/// Builder for constructing Request objects.
#[derive(Default)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: RequestLine) -> Self {
        self.request.line = Some(line);
        self
    }

    /// Shorthand for a well-formed `GET <target> HTTP/1.1` line.
    pub fn get(self, target: impl Into<String>) -> Self {
        self.line(RequestLine {
            method: "GET".to_string(),
            target: Some(target.into()),
            version: Some("HTTP/1.1".to_string()),
        })
    }

    pub fn header(mut self, line: &str) -> Self {
        self.request.ignore_line(line);
        self
    }

    pub fn build(self) -> Request {
        self.request
    }
}

impl Request {
    /// Returns the path the client asked for.
    ///
    /// `None` when no GET line arrived or the GET line had a single token;
    /// such requests are answered with 400.
    pub fn target(&self) -> Option<&str> {
        self.line.as_ref().and_then(|l| l.target.as_deref())
    }

    /// Records a non-request line without keeping it.
    pub fn ignore_line(&mut self, line: &str) {
        self.ignored += 1;

        if self.host.is_none() {
            if let Some((key, value)) = line.split_once(':') {
                if key.trim().eq_ignore_ascii_case("Host") {
                    self.host = Some(value.trim().to_string());
                }
            }
        }
    }
}
