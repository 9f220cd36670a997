use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::html::CRLF;
use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Stands in for binary bodies in the console mirror.
const BINARY_PLACEHOLDER: &str = "[Binary data]";

fn status_line(resp: &Response) -> String {
    format!(
        "{} {} {}",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    )
}

/// Status line, `Content-Length`, `Content-Type` and the blank separator line.
fn serialize_head(resp: &Response) -> String {
    format!(
        "{status}{CRLF}Content-Length: {len}{CRLF}Content-Type: {ty}{CRLF}{CRLF}",
        status = status_line(resp),
        len = resp.content_length,
        ty = resp.content_type,
    )
}

pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let head = serialize_head(resp);
    let mut buf = Vec::with_capacity(head.len() + resp.body.len());

    buf.extend_from_slice(head.as_bytes());
    buf.extend_from_slice(resp.body.as_bytes());

    buf
}

/// Renders the reply the way it is shown on the console.
pub fn console_view(resp: &Response) -> String {
    let mut view = serialize_head(resp);
    match &resp.body {
        Body::Text(text) => view.push_str(text),
        Body::Binary(_) => {
            view.push_str(BINARY_PLACEHOLDER);
            view.push_str(CRLF);
        }
    }
    view
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        tracing::info!(
            "\n======== Begin server reply ========\n{}======== End server reply ========",
            console_view(response)
        );

        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Writes the whole response and flushes `out`.
    pub async fn write_to_stream<W>(&mut self, out: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = out.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        out.flush().await?;

        Ok(())
    }
}
