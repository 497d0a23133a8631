use std::collections::HashMap;

use tinyserve::config::{CONFIG_FILE_VAR, Config, ConfigError, verbose_flag};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:8083");
    assert_eq!(cfg.root_dir, "public/");
    assert_eq!(cfg.root_file, "index.html");
    assert!(!cfg.verbose);
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_config_from_env_vars() {
    let cfg = Config::from_lookup(lookup(&[
        ("LISTEN", "0.0.0.0:3000"),
        ("ROOT_DIR", "site/"),
        ("ROOT_FILE", "home.html"),
        ("VERBOSE", "true"),
    ]))
    .unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.root_dir, "site/");
    assert_eq!(cfg.root_file, "home.html");
    assert!(cfg.verbose);
}

#[test]
fn test_config_rejects_root_dir_without_slash() {
    let err = Config::new("127.0.0.1:0", "public", "index.html", false).unwrap_err();
    assert!(matches!(err, ConfigError::RootDirWithoutSeparator(ref dir) if dir == "public"));

    let err = Config::from_lookup(lookup(&[("ROOT_DIR", "www")])).unwrap_err();
    assert!(matches!(err, ConfigError::RootDirWithoutSeparator(_)));

    let err = Config::new("127.0.0.1:0", "", "index.html", false).unwrap_err();
    assert!(matches!(err, ConfigError::RootDirWithoutSeparator(_)));
}

#[test]
fn test_config_rejects_bad_verbose_value() {
    let err = Config::from_lookup(lookup(&[("VERBOSE", "loud")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidVerbose(_)));

    let cfg = Config::from_lookup(lookup(&[("VERBOSE", "0")])).unwrap();
    assert!(!cfg.verbose);
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml_str(
        "listen_addr: 127.0.0.1:9000\nroot_dir: static/\nverbose: true\n",
    )
    .unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.root_dir, "static/");
    assert_eq!(cfg.root_file, "index.html");
    assert!(cfg.verbose);
}

#[test]
fn test_config_yaml_is_validated() {
    let err = Config::from_yaml_str("root_dir: static\n").unwrap_err();
    assert!(matches!(err, ConfigError::RootDirWithoutSeparator(_)));

    let err = Config::from_yaml_str("port: 80\n").unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn test_config_file_then_env_overrides() {
    let path = std::env::temp_dir().join(format!("tinyserve-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "root_dir: from-file/\nroot_file: file.html\n").unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let cfg = Config::from_lookup(lookup(&[
        (CONFIG_FILE_VAR, path_str.as_str()),
        ("ROOT_FILE", "env.html"),
    ]))
    .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(cfg.root_dir, "from-file/");
    assert_eq!(cfg.root_file, "env.html");
}

#[test]
fn test_config_missing_file() {
    let err = Config::from_lookup(lookup(&[(CONFIG_FILE_VAR, "/nonexistent/tinyserve.yaml")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default().with_verbose(true);
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1, cfg2);
}

#[test]
fn test_verbose_flag() {
    let args = |a: &[&str]| a.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert!(!verbose_flag(args(&[])).unwrap());
    assert!(verbose_flag(args(&["--verbose"])).unwrap());
    assert!(matches!(
        verbose_flag(args(&["--quiet"])),
        Err(ConfigError::UnknownArgument(ref a)) if a == "--quiet"
    ));
}
