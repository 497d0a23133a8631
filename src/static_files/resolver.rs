use crate::config::Config;
use crate::http::mime::content_type_for;

const SEPARATOR: char = '/';

/// A request path mapped onto the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: String,
    /// `None` when the extension is not one we know a type for.
    pub content_type: Option<&'static str>,
}

/// Maps a request path onto a file below `config.root_dir`.
///
/// - one leading `/` is dropped, since `root_dir` already ends in one
/// - a path that resolves to `root_dir` itself is replaced by the root file
/// - otherwise a single trailing `/` is stripped
///
/// `..` segments are passed through untouched, so requests can escape the
/// root directory. Do not expose this server to untrusted clients.
pub fn resolve(request_path: &str, config: &Config) -> ResolvedPath {
    let relative = request_path
        .strip_prefix(SEPARATOR)
        .unwrap_or(request_path);

    let mut path = String::with_capacity(
        config.root_dir.len() + relative.len() + config.root_file.len(),
    );
    path.push_str(&config.root_dir);
    path.push_str(relative);

    if path == config.root_dir {
        path.push_str(&config.root_file);
    } else if path.ends_with(SEPARATOR) {
        path.pop();
    }

    let content_type = content_type_for(&path);
    ResolvedPath { path, content_type }
}
