use crate::html;

/// HTTP status codes this server emits.
///
/// - `Ok` (200): file, listing or pseudo-endpoint result
/// - `BadRequest` (400): no usable request line
/// - `Forbidden` (403): traversal attempt or non-regular target
/// - `NotFound` (404): nothing at the requested path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use lantern::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Response payload.
///
/// Text bodies are mirrored to the console verbatim; binary bodies are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Text(String),
    Binary(Vec<u8>),
}

impl Body {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Body::Text(s) => s.as_bytes(),
            Body::Binary(b) => b.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::Text(String::new())
    }
}

/// A complete HTTP response ready to be framed onto a connection.
///
/// `content_length` is what the `Content-Length` header will say. It usually
/// equals the body length, but a served text file declares its size on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    /// Empty when no type is known for the resource
    pub content_type: String,
    pub content_length: u64,
    pub body: Body,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use lantern::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/plain")
///     .text("hello")
///     .build();
/// assert_eq!(response.content_length, 5);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: String,
    content_length: Option<u64>,
    body: Body,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: String::new(),
            content_length: None,
            body: Body::default(),
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Overrides the declared length instead of deriving it from the body.
    pub fn content_length(mut self, len: u64) -> Self {
        self.content_length = Some(len);
        self
    }

    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = Body::Text(body.into());
        self
    }

    pub fn binary(mut self, body: Vec<u8>) -> Self {
        self.body = Body::Binary(body);
        self
    }

    /// Builds the final Response.
    ///
    /// Content length defaults to the byte length of the body.
    pub fn build(self) -> Response {
        let content_length = self
            .content_length
            .unwrap_or(self.body.len() as u64);

        Response {
            status: self.status,
            content_type: self.content_type,
            content_length,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 OK HTML response with the given body.
    pub fn html(body: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type("text/html")
            .text(body)
            .build()
    }

    /// Creates a 400 Bad Request response with an empty body.
    pub fn bad_request() -> Self {
        ResponseBuilder::new(StatusCode::BadRequest)
            .content_type("text/html")
            .build()
    }

    /// Creates a 403 Forbidden page naming `path`.
    pub fn forbidden(path: &str) -> Self {
        let text = format!("You don't have permission to access {path} on this server.");
        error_page(StatusCode::Forbidden, &text)
    }

    /// Creates a 404 Not Found page naming `path`.
    pub fn not_found(path: &str) -> Self {
        let text = format!("The requested URL {path} was not found on this server.");
        error_page(StatusCode::NotFound, &text)
    }
}

fn error_page(status: StatusCode, text: &str) -> Response {
    let reason = status.reason_phrase();
    let head = html::head(&html::title(&format!("{} {}", status.as_u16(), reason)));
    let body = html::body(&(html::heading(reason) + &html::paragraph(text)));

    ResponseBuilder::new(status)
        .content_type("text/html")
        .text(html::document(&(head + &body)))
        .build()
}
