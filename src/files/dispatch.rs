use anyhow::Context;
use std::path::Path;

use crate::files::addnums::{self, AddNums};
use crate::files::listing::DirectoryListing;
use crate::files::resolver::{ResolvedTarget, TargetKind};
use crate::html::CRLF;
use crate::http::mime;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Produces the response for a classified target.
///
/// Errors are I/O faults while reading a file; the caller drops the
/// connection without answering.
pub async fn dispatch(target: &ResolvedTarget, raw_path: &str) -> anyhow::Result<Response> {
    let response = match &target.kind {
        TargetKind::Forbidden => Response::forbidden(raw_path),
        TargetKind::Missing => Response::not_found(raw_path),
        TargetKind::PseudoEndpoint { query } => add_numbers(query.as_deref()),
        TargetKind::Directory => {
            let listing = DirectoryListing::read(&target.path, raw_path).await;
            Response::html(listing.render())
        }
        TargetKind::File => serve_file(&target.path).await?,
    };

    Ok(response)
}

fn add_numbers(query: Option<&str>) -> Response {
    match AddNums::parse(query) {
        Ok(call) => Response::html(addnums::render(&call.evaluate())),
        Err(e) => {
            tracing::warn!(?query, "malformed add-numbers query: {:?}", e);
            Response::bad_request()
        }
    }
}

async fn serve_file(path: &Path) -> anyhow::Result<Response> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = mime::content_type_for(&name);

    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    let builder = ResponseBuilder::new(StatusCode::Ok).content_type(content_type);

    if mime::is_favicon(&name) {
        return Ok(builder.binary(raw).build());
    }

    // Declared length is the size on disk, not the length of the re-framed text.
    let on_disk = raw.len() as u64;
    Ok(builder.content_length(on_disk).text(reframe_lines(&raw)).build())
}

/// Rewrites `raw` as text lines, each terminated by CRLF.
///
/// `\n`, `\r` and `\r\n` all end a line. A final line without a terminator
/// still gets one; invalid UTF-8 is replaced.
pub fn reframe_lines(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let mut out = String::with_capacity(text.len() + CRLF.len());
    let mut rest: &str = &text;

    while !rest.is_empty() {
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        out.push_str(&rest[..end]);
        out.push_str(CRLF);

        rest = &rest[end..];
        if rest.starts_with(CRLF) {
            rest = &rest[2..];
        } else if !rest.is_empty() {
            rest = &rest[1..];
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reframe_normalizes_terminators() {
        assert_eq!(reframe_lines(b"a\nb"), "a\r\nb\r\n");
        assert_eq!(reframe_lines(b"a\r\n\nb\r"), "a\r\n\r\nb\r\n");
        assert_eq!(reframe_lines(b""), "");
    }
}
