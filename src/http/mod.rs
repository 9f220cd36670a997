//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.x: one GET per connection, no keep-alive, and
//! responses carrying only `Content-Length` and `Content-Type`.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection state machine that reads the request and writes the reply
//! - **`parser`**: line splitting and request-line recognition
//! - **`request`**: the request line plus ignored header lines
//! - **`response`**: status codes, bodies and the response builder
//! - **`writer`**: serializes a response onto the stream and mirrors it to the console
//! - **`mime`**: content type lookup by file name
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────────┐
//!        │ AwaitingRequestLine  │ ← discard lines until one contains GET
//!        └──────────┬───────────┘
//!                   │ GET line captured
//!                   ▼
//!        ┌──────────────────────┐
//!        │   AwaitingHeaders    │ ← skip headers
//!        └──────────┬───────────┘
//!                   │ blank line or end of stream
//!                   ▼
//!        ┌──────────────────────┐
//!        │      Dispatched      │ ← resolve, build and write the response
//!        └──────────┬───────────┘
//!                   ▼
//!                 Closed
//! ```
//!
//! A blank line or end of stream while still awaiting the request line also
//! leads to `Dispatched`, where the missing target becomes a 400.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
