//! HTTP/1.1 protocol implementation.
//!
//! A deliberately small subset of HTTP/1.1: GET and HEAD only, one request
//! per connection, the whole request in a single read.
//!
//! # Architecture
//!
//! - **`scanner`**: Cursor primitives (OWS, CRLF) over the raw request bytes
//! - **`parser`**: Turns the request bytes into a [`request::Request`] or a protocol error
//! - **`request`**: HTTP request representation
//! - **`response`**: Status codes and the outbound response status
//! - **`mime`**: MIME type detection based on file extensions
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`handler`**: Parse, resolve, read and respond for one request
//! - **`connection`**: Per-connection read/handle/close state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read of the request
//!        └──────┬──────┘
//!               │ Bytes received (nothing received → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Handling      │ ← Parse, resolve, read file, write response
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tinyserve::config::Config;
//! use tinyserve::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let listener = TcpListener::bind("127.0.0.1:8083").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, &config);
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod connection;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod scanner;
pub mod writer;
