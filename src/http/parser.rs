use std::fmt;

use crate::http::request::{Header, Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::http::scanner::Scanner;

/// Longest method token we bother reading ("HEAD").
const MAX_METHOD_LEN: usize = 4;

const HTTP_VERSION: &[u8] = b"HTTP/1.1";

/// Why a request could not be turned into a [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Method token other than `GET` or `HEAD`, or no space after it.
    UnsupportedMethod,
    /// Empty, unterminated or non-UTF-8 request target.
    InvalidTarget,
    /// Version other than exactly `HTTP/1.1`.
    UnsupportedVersion,
    /// A field buffer could not be grown.
    ResourceExhausted,
}

impl ParseError {
    /// The protocol error response owed to the client, if any.
    ///
    /// Resource exhaustion has no response: the connection is dropped.
    pub fn response(&self) -> Option<Response> {
        let status = match self {
            ParseError::UnsupportedMethod => StatusCode::NotImplemented,
            ParseError::InvalidTarget => StatusCode::BadRequest,
            ParseError::UnsupportedVersion => StatusCode::HttpVersionNotSupported,
            ParseError::ResourceExhausted => return None,
        };
        Some(Response::new(status))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnsupportedMethod => write!(f, "method was missing or not supported"),
            ParseError::InvalidTarget => write!(f, "request target was missing or invalid"),
            ParseError::UnsupportedVersion => write!(f, "only HTTP/1.1 is supported"),
            ParseError::ResourceExhausted => write!(f, "out of memory while reading request"),
        }
    }
}

impl std::error::Error for ParseError {}

/// How the header section ended.
///
/// Both outcomes still let the request through; they are kept apart so
/// callers can tell a clean request from a truncated or broken one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSection {
    /// Terminated by an empty line.
    Complete,
    /// Ran out of input or hit a line that is not `key: value`.
    Malformed,
}

enum HeaderState<'a> {
    ExpectHeaderOrEnd,
    HeaderKey,
    HeaderValue(&'a [u8]),
    End,
    Malformed,
}

/// Parses a request that must fit entirely within `buf`.
///
/// On success the returned request has its method and path set, along with
/// every well-formed header that preceded the end (or breakdown) of the
/// header section. No body bytes are read.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, HeaderSection), ParseError> {
    let mut scanner = Scanner::new(buf);

    let method = parse_method(&mut scanner)?;
    let path = parse_target(&mut scanner)?;
    parse_version(&mut scanner)?;

    let mut headers = Vec::new();
    let section = parse_headers(&mut scanner, &mut headers)?;

    let request = Request {
        method,
        path,
        headers,
        body: None,
    };
    Ok((request, section))
}

fn parse_method(scanner: &mut Scanner<'_>) -> Result<Method, ParseError> {
    let token = scanner.take_while_max(MAX_METHOD_LEN, |b| b != b' ');
    let method = Method::from_bytes(token).ok_or(ParseError::UnsupportedMethod)?;

    // "HEADX" reads as "HEAD" followed by 'X'
    if !scanner.consume_byte(b' ') {
        return Err(ParseError::UnsupportedMethod);
    }
    Ok(method)
}

fn parse_target(scanner: &mut Scanner<'_>) -> Result<String, ParseError> {
    let target = scanner.take_while(|b| b != b' ');

    if target.is_empty() || !scanner.consume_byte(b' ') {
        return Err(ParseError::InvalidTarget);
    }
    if target.iter().any(|&b| b == b'\r' || b == b'\n') {
        return Err(ParseError::InvalidTarget);
    }

    let target = std::str::from_utf8(target).map_err(|_| ParseError::InvalidTarget)?;
    owned_text(target.as_bytes())
}

fn parse_version(scanner: &mut Scanner<'_>) -> Result<(), ParseError> {
    let start = scanner.position();
    scanner.find_crlf();

    if scanner.slice_since(start) != HTTP_VERSION {
        return Err(ParseError::UnsupportedVersion);
    }
    scanner.consume_crlf();
    Ok(())
}

fn parse_headers(
    scanner: &mut Scanner<'_>,
    headers: &mut Vec<Header>,
) -> Result<HeaderSection, ParseError> {
    let mut state = HeaderState::ExpectHeaderOrEnd;

    loop {
        state = match state {
            HeaderState::ExpectHeaderOrEnd => {
                if scanner.consume_crlf() {
                    HeaderState::End
                } else if scanner.is_at_end() {
                    HeaderState::Malformed
                } else {
                    HeaderState::HeaderKey
                }
            }

            HeaderState::HeaderKey => {
                let key = scanner.take_while(|b| b != b':' && b != b'\r' && b != b'\n');
                if key.is_empty() || !scanner.consume_byte(b':') {
                    HeaderState::Malformed
                } else {
                    scanner.skip_optional_whitespace();
                    HeaderState::HeaderValue(key)
                }
            }

            HeaderState::HeaderValue(key) => {
                let start = scanner.position();
                scanner.find_crlf();
                // trailing OWS stays part of the value
                let value = scanner.slice_since(start);

                if value.is_empty() || !scanner.consume_crlf() {
                    HeaderState::Malformed
                } else {
                    headers.try_reserve(1).map_err(|_| ParseError::ResourceExhausted)?;
                    headers.push(Header {
                        key: owned_text(key)?,
                        value: owned_text(value)?,
                    });
                    HeaderState::ExpectHeaderOrEnd
                }
            }

            HeaderState::End => return Ok(HeaderSection::Complete),
            HeaderState::Malformed => return Ok(HeaderSection::Malformed),
        };
    }
}

/// Copies a field out of the receive buffer. Invalid UTF-8 is replaced
/// rather than rejected.
fn owned_text(bytes: &[u8]) -> Result<String, ParseError> {
    let text = String::from_utf8_lossy(bytes);
    let mut owned = String::new();
    owned
        .try_reserve_exact(text.len())
        .map_err(|_| ParseError::ResourceExhausted)?;
    owned.push_str(&text);
    Ok(owned)
}
