use tinyserve::config::Config;
use tinyserve::http::mime::content_type_for;
use tinyserve::static_files::{ResolvedPath, resolve};

fn public() -> Config {
    Config::new("127.0.0.1:0", "public/", "index.html", false).unwrap()
}

#[test]
fn test_root_path_serves_root_file() {
    let resolved = resolve("/", &public());

    assert_eq!(
        resolved,
        ResolvedPath {
            path: "public/index.html".to_string(),
            content_type: Some("text/html"),
        }
    );
}

#[test]
fn test_empty_path_serves_root_file() {
    assert_eq!(resolve("", &public()).path, "public/index.html");
}

#[test]
fn test_plain_file_is_joined_onto_root() {
    let resolved = resolve("/style.css", &public());

    assert_eq!(resolved.path, "public/style.css");
    assert_eq!(resolved.content_type, Some("text/css"));
}

#[test]
fn test_path_without_leading_slash() {
    assert_eq!(resolve("app.js", &public()).path, "public/app.js");
}

#[test]
fn test_one_trailing_slash_is_stripped() {
    assert_eq!(resolve("/sub/", &public()).path, "public/sub");
    assert_eq!(resolve("/sub//", &public()).path, "public/sub/");
}

#[test]
fn test_only_one_leading_slash_is_dropped() {
    // "//" trims to "/", which is not the root itself
    assert_eq!(resolve("//", &public()).path, "public/");
}

#[test]
fn test_dot_dot_segments_are_not_sanitized() {
    assert_eq!(resolve("/../secret.txt", &public()).path, "public/../secret.txt");
}

#[test]
fn test_query_string_is_part_of_the_path() {
    let resolved = resolve("/index.html?v=2", &public());

    assert_eq!(resolved.path, "public/index.html?v=2");
    assert_eq!(resolved.content_type, None);
}

#[test]
fn test_custom_root_file() {
    let cfg = Config::new("127.0.0.1:0", "/srv/www/", "home.htm", false).unwrap();

    let resolved = resolve("/", &cfg);
    assert_eq!(resolved.path, "/srv/www/home.htm");
    assert_eq!(resolved.content_type, None);
}

#[test]
fn test_content_type_mapping() {
    let cases = [
        ("public/index.html", Some("text/html")),
        ("public/style.css", Some("text/css")),
        ("public/favicon.ico", Some("image/x-icon")),
        ("public/font.otf", Some("font/otf")),
        ("public/app.js", Some("text/javascript")),
        ("public/logo.png", Some("image/png")),
        ("public/app", None),
        ("public/archive.tar.gz", None),
        ("public/INDEX.HTML", None),
        ("public/v1.2/readme", None),
        ("public/.html", Some("text/html")),
        ("public/trailing.", None),
    ];

    for (path, expected) in cases {
        assert_eq!(content_type_for(path), expected, "{}", path);
    }
}
