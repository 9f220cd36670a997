//! Lantern - minimal HTTP/1.x file server
//!
//! Serves files and directory listings from a document root, plus one
//! computed add-numbers endpoint.

pub mod config;
pub mod files;
pub mod html;
pub mod http;
pub mod server;
