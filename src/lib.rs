//! tinyserve - a minimal HTTP/1.1 static file server
//!
//! Parses GET and HEAD requests straight from the received bytes, maps the
//! request path onto a content root and writes the file back.

pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
