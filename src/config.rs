use std::fmt;

use serde::Deserialize;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8083";
const DEFAULT_ROOT_DIR: &str = "public/";
const DEFAULT_ROOT_FILE: &str = "index.html";

/// Env var naming an optional YAML config file.
pub const CONFIG_FILE_VAR: &str = "TINYSERVE_CONFIG";

/// Server configuration.
///
/// Built once at startup and only ever read afterwards; every connection
/// gets a shared reference to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Address the listener binds to, e.g. "127.0.0.1:8083".
    pub listen_addr: String,
    /// Static content root. Always ends in `/`.
    pub root_dir: String,
    /// File served when a request resolves to `root_dir` itself.
    pub root_file: String,
    /// Log every request and response in detail.
    pub verbose: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    RootDirWithoutSeparator(String),
    InvalidVerbose(String),
    UnknownArgument(String),
    Read {
        path: String,
        source: std::io::Error,
    },
    Yaml(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::RootDirWithoutSeparator(dir) => {
                write!(f, "`root_dir` must end in a slash, got {:?}", dir)
            }
            ConfigError::InvalidVerbose(value) => {
                write!(f, "VERBOSE must be a boolean, got {:?}", value)
            }
            ConfigError::UnknownArgument(arg) => {
                write!(f, "unknown argument {:?}, use `--verbose` to enable verbose output", arg)
            }
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config file {}: {}", path, source)
            }
            ConfigError::Yaml(e) => write!(f, "invalid config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Yaml(e) => Some(e),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            root_dir: DEFAULT_ROOT_DIR.to_string(),
            root_file: DEFAULT_ROOT_FILE.to_string(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn new(
        listen_addr: impl Into<String>,
        root_dir: impl Into<String>,
        root_file: impl Into<String>,
        verbose: bool,
    ) -> Result<Self, ConfigError> {
        Self {
            listen_addr: listen_addr.into(),
            root_dir: root_dir.into(),
            root_file: root_file.into(),
            verbose,
        }
        .validate()
    }

    /// Loads the configuration from the process environment.
    ///
    /// Defaults, then the YAML file named by `TINYSERVE_CONFIG`, then the
    /// `LISTEN`, `ROOT_DIR`, `ROOT_FILE` and `VERBOSE` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = match lookup(CONFIG_FILE_VAR) {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path, source })?;
                Self::parse_yaml(&contents)?
            }
            None => Self::default(),
        };

        if let Some(addr) = lookup("LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Some(dir) = lookup("ROOT_DIR") {
            cfg.root_dir = dir;
        }
        if let Some(file) = lookup("ROOT_FILE") {
            cfg.root_file = file;
        }
        if let Some(verbose) = lookup("VERBOSE") {
            cfg.verbose = parse_bool(&verbose)?;
        }

        cfg.validate()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse_yaml(yaml)?.validate()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(ConfigError::Yaml)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !self.root_dir.ends_with('/') {
            return Err(ConfigError::RootDirWithoutSeparator(self.root_dir));
        }
        Ok(self)
    }
}

/// Reads the command line (without the program name). `--verbose` is the
/// only flag; it returns `true` when present.
pub fn verbose_flag<I>(args: I) -> Result<bool, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut verbose = false;
    for arg in args {
        if arg != "--verbose" {
            return Err(ConfigError::UnknownArgument(arg));
        }
        verbose = true;
    }
    Ok(verbose)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidVerbose(other.to_string())),
    }
}
