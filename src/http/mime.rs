//! Content-Type lookup by file extension.

/// Extension → MIME type. Matching is exact and case-sensitive.
const CONTENT_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("css", "text/css"),
    ("ico", "image/x-icon"),
    ("otf", "font/otf"),
    ("js", "text/javascript"),
    ("png", "image/png"),
];

/// Returns the content type for `path`, judged by the text after its last
/// `.`. Unknown or missing extensions yield `None`, in which case no
/// Content-Type header is sent.
///
/// # Example
///
/// ```
/// # use tinyserve::http::mime::content_type_for;
/// assert_eq!(content_type_for("public/style.css"), Some("text/css"));
/// assert_eq!(content_type_for("public/app"), None);
/// ```
pub fn content_type_for(path: &str) -> Option<&'static str> {
    let (_, extension) = path.rsplit_once('.')?;
    CONTENT_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
}
