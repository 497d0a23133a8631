use anyhow::Context;
use tokio::io::AsyncWrite;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::http::parser::{parse_http_request, HeaderSection};
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::writer::send_response;
use crate::static_files::{read_resource, resolve};

/// How an exchange ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 200 with the requested resource.
    SentOk,
    /// A protocol error or 404.
    SentError,
}

/// Answers one raw request read from a client.
///
/// Parse errors and unreadable resources become error responses. Only a
/// failed write or resource exhaustion while parsing returns `Err`; in both
/// cases the client gets no (complete) response.
pub async fn handle_request<W>(
    buf: &[u8],
    stream: &mut W,
    config: &Config,
) -> anyhow::Result<Outcome>
where
    W: AsyncWrite + Unpin,
{
    let (request, section) = match parse_http_request(buf) {
        Ok(parsed) => parsed,
        Err(e) => {
            let response = e
                .response()
                .ok_or(e)
                .context("Failed to parse request")?;

            warn!(
                status = response.status_code(),
                error = %e,
                "Rejecting request"
            );
            // no body to suppress, so the method is irrelevant
            let bytes = send_response(stream, Method::GET, &response, None, None)
                .await
                .context("Failed to send error response")?;
            debug!(bytes, "Sent error response");
            return Ok(Outcome::SentError);
        }
    };

    log_request(&request, section);

    let resolved = resolve(&request.path, config);
    debug!(path = %resolved.path, "Opening requested file");

    let body = match read_resource(&resolved.path).await {
        Ok(body) => body,
        Err(e) => {
            warn!(path = %resolved.path, error = %e, "Failed to open requested file");
            let response = Response::not_found();
            let bytes = send_response(stream, request.method, &response, None, None)
                .await
                .context("Failed to send 404 response")?;
            info!(
                method = request.method.as_str(),
                path = %request.path,
                status = response.status_code(),
                bytes,
                "Sent response"
            );
            return Ok(Outcome::SentError);
        }
    };

    let response = Response::ok();
    let bytes = send_response(
        stream,
        request.method,
        &response,
        Some(&body),
        resolved.content_type,
    )
    .await
    .context("Failed to send response")?;

    info!(
        method = request.method.as_str(),
        path = %request.path,
        status = response.status_code(),
        content_type = resolved.content_type.unwrap_or("none"),
        body_len = body.len(),
        bytes,
        "Sent response"
    );
    Ok(Outcome::SentOk)
}

fn log_request(request: &Request, section: HeaderSection) {
    debug!(
        method = request.method.as_str(),
        path = %request.path,
        headers = request.headers.len(),
        header_section = ?section,
        "Received request"
    );
    for (i, header) in request.headers.iter().enumerate() {
        debug!("  #{}: {}: {}", i, header.key, header.value);
    }
}
