use std::io;

use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::request::Method;
use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Builds the status line and header block.
///
/// The blank line that ends the headers is only emitted together with a
/// body; a bodiless response ends after its last header line.
fn serialize_head(
    resp: &Response,
    content_type: Option<&str>,
    body_len: usize,
    has_body: bool,
) -> BytesMut {
    let mut buf = BytesMut::with_capacity(128);

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status_code(),
        resp.reason_phrase()
    );
    buf.put_slice(status_line.as_bytes());

    if let Some(content_type) = content_type {
        buf.put_slice(b"Content-Type: ");
        buf.put_slice(content_type.as_bytes());
        buf.put_slice(b"\r\n");
    }

    if body_len != 0 {
        buf.put_slice(format!("Content-Length: {}\r\n", body_len).as_bytes());
    }

    if has_body {
        buf.put_slice(b"\r\n");
    }

    buf
}

/// A response serialized and ready to be written to a client.
///
/// The head is pre-rendered; the body is borrowed and written as raw bytes
/// so that interior zero bytes go out like any other.
pub struct ResponseWriter<'a> {
    head: BytesMut,
    body: Option<&'a [u8]>,
}

impl<'a> ResponseWriter<'a> {
    /// Prepares `response` for sending.
    ///
    /// For HEAD requests the body and content type are dropped here, before
    /// anything is serialized. Content-Length still reports the size the
    /// body would have had.
    pub fn new(
        method: Method,
        response: &Response,
        body: Option<&'a [u8]>,
        content_type: Option<&str>,
    ) -> Self {
        let body_len = body.map_or(0, <[u8]>::len);
        let (body, content_type) = match method {
            Method::GET => (body, content_type),
            Method::HEAD => (None, None),
        };

        Self {
            head: serialize_head(response, content_type, body_len, body.is_some()),
            body,
        }
    }

    pub fn head(&self) -> &[u8] {
        &self.head
    }

    pub fn body(&self) -> Option<&'a [u8]> {
        self.body
    }

    /// Total number of bytes this response puts on the wire.
    pub fn len(&self) -> usize {
        self.head.len() + self.body.map_or(0, <[u8]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes the whole response and returns the number of bytes sent.
    ///
    /// Short writes resume where they stopped. A failed write abandons the
    /// rest of the message.
    pub async fn write_to_stream<W>(&self, stream: &mut W) -> io::Result<usize>
    where
        W: AsyncWrite + Unpin,
    {
        let mut written = write_fully(stream, &self.head).await?;
        if let Some(body) = self.body {
            written += write_fully(stream, body).await?;
        }
        stream.flush().await?;
        Ok(written)
    }
}

async fn write_fully<W>(stream: &mut W, buf: &[u8]) -> io::Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    while written < buf.len() {
        let n = stream.write(&buf[written..]).await?;

        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "connection closed while writing",
            ));
        }

        written += n;
    }
    Ok(written)
}

/// Serializes and sends a response in one go.
pub async fn send_response<W>(
    stream: &mut W,
    method: Method,
    response: &Response,
    body: Option<&[u8]>,
    content_type: Option<&str>,
) -> io::Result<usize>
where
    W: AsyncWrite + Unpin,
{
    ResponseWriter::new(method, response, body, content_type)
        .write_to_stream(stream)
        .await
}
