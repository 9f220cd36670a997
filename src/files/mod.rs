//! Static file serving.
//!
//! A request path is classified by the [`resolver`], then [`dispatch`] turns
//! the classification into a response: the file itself, a generated
//! [`listing`], the [`addnums`] pseudo-endpoint, or an error page.

pub mod addnums;
pub mod dispatch;
pub mod listing;
pub mod resolver;

use std::path::PathBuf;

use crate::http::request::Request;
use crate::http::response::Response;

pub use resolver::{ResolvedTarget, Resolver, TargetKind};

/// Serves one document root.
#[derive(Debug, Clone)]
pub struct FileServer {
    resolver: Resolver,
}

impl FileServer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            resolver: Resolver::new(root),
        }
    }

    /// Answers a fully read request.
    ///
    /// Requests without a target get 400 and never reach the resolver.
    pub async fn handle(&self, request: &Request) -> anyhow::Result<Response> {
        let Some(raw_path) = request.target() else {
            return Ok(Response::bad_request());
        };

        let target = self.resolver.resolve(raw_path).await;
        dispatch::dispatch(&target, raw_path).await
    }
}
