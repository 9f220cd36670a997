use bytes::BytesMut;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::files::FileServer;
use crate::http::parser::{LineSplitter, ParseError, parse_request_line};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Serves exactly one request on `S`, then closes it.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    lines: LineSplitter,
    eof: bool,
    /// Set when a line exceeded the length limit; the request is answered with 400
    overflowed: bool,
    request: Request,
    server: Arc<FileServer>,
    state: ConnectionState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No GET line seen yet
    AwaitingRequestLine,
    /// GET line captured, skipping headers until the blank line
    AwaitingHeaders,
    /// Request complete, response pending
    Dispatched,
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, server: Arc<FileServer>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            lines: LineSplitter::new(),
            eof: false,
            overflowed: false,
            request: Request::default(),
            server,
            state: ConnectionState::AwaitingRequestLine,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Drives the connection to `Closed`.
    ///
    /// The stream is shut down whether serving succeeded or not.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.serve().await;
        self.state = ConnectionState::Closed;

        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!("shutdown after reply failed: {}", e);
        }

        result
    }

    async fn serve(&mut self) -> anyhow::Result<()> {
        loop {
            match self.state {
                ConnectionState::AwaitingRequestLine => match self.read_line().await? {
                    Some(line) if !line.is_empty() => {
                        if let Some(request_line) = parse_request_line(&line) {
                            self.request.line = Some(request_line);
                            self.state = ConnectionState::AwaitingHeaders;
                        } else {
                            self.request.ignore_line(&line);
                        }
                    }
                    _ => self.state = ConnectionState::Dispatched,
                },

                ConnectionState::AwaitingHeaders => match self.read_line().await? {
                    Some(line) if !line.is_empty() => self.request.ignore_line(&line),
                    _ => self.state = ConnectionState::Dispatched,
                },

                ConnectionState::Dispatched => {
                    tracing::debug!(
                        target_path = self.request.target(),
                        host = self.request.host.as_deref(),
                        ignored = self.request.ignored,
                        "request complete"
                    );
                    let response = if self.overflowed {
                        Response::bad_request()
                    } else {
                        self.server.handle(&self.request).await?
                    };

                    let mut writer = ResponseWriter::new(&response);
                    writer.write_to_stream(&mut self.stream).await?;

                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    /// Returns the next line, or `None` once the peer has stopped sending.
    ///
    /// An overlong line also yields `None`: reading stops and the buffered
    /// bytes are dropped.
    async fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            let taken = match self.lines.take_line(&mut self.buffer) {
                Ok(None) if self.eof => self.lines.take_rest(&mut self.buffer),
                taken => taken,
            };

            match taken {
                Ok(Some(line)) => {
                    tracing::debug!("{}", line);
                    return Ok(Some(line));
                }
                Ok(None) if self.eof => return Ok(None),
                Ok(None) => {}
                Err(ParseError::LineTooLong) => {
                    tracing::warn!(buffered = self.buffer.len(), "request line too long");
                    self.buffer.clear();
                    self.overflowed = true;
                    return Ok(None);
                }
            }

            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                self.eof = true;
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}
