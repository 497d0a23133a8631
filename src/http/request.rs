/// HTTP request methods.
///
/// Only GET and HEAD are served. Any other method token is rejected by the
/// parser with 501 Not Implemented before a `Method` is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
}

/// A single header field, kept exactly as it arrived.
///
/// Keys are not case-normalized and duplicates are kept as separate entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub value: String,
}

/// Represents a parsed HTTP request from a client.
///
/// A `Request` only exists once both the method and the path were parsed
/// successfully; every other outcome is reported as an error response.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET or HEAD)
    pub method: Method,
    /// The literal request target (e.g., "/index.html"), not percent-decoded
    pub path: String,
    /// Header fields in arrival order
    pub headers: Vec<Header>,
    /// Request body. `None` means absent, which is always the case for
    /// requests read by this server.
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    headers: Vec<Header>,
    body: Option<Vec<u8>>,
}

impl Method {
    /// Parses an HTTP method token.
    ///
    /// # Arguments
    ///
    /// * `token` - Raw method bytes (case-sensitive)
    ///
    /// # Returns
    ///
    /// `Some(Method)` for `GET` and `HEAD`, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyserve::http::request::Method;
    /// assert_eq!(Method::from_bytes(b"GET"), Some(Method::GET));
    /// assert_eq!(Method::from_bytes(b"get"), None);
    /// ```
    pub fn from_bytes(token: &[u8]) -> Option<Self> {
        match token {
            b"GET" => Some(Method::GET),
            b"HEAD" => Some(Method::HEAD),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
        }
    }
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(key, value));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        let path = self.path.ok_or("path missing")?;
        if path.is_empty() {
            return Err("path empty");
        }

        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path,
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Request {
    /// Retrieves the first header value with exactly this key.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.key == key)
            .map(|h| h.value.as_str())
    }

    /// All values for `key`, in arrival order.
    pub fn header_values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |h| h.key == key)
            .map(|h| h.value.as_str())
    }
}
