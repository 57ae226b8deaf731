//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. The first config file found (see [`schema`] for the search order)
//!
//! # Example
//!
//! ```no_run
//! use gitsim::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let config = result.config;
//!
//! println!("Default branch: {}", config.default_branch());
//! println!("Empty commits allowed: {}", config.allow_empty_commits());
//! ```

pub mod schema;

pub use schema::{ColorConfig, CommitPolicy, ConfigFile};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::BranchName;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GITSIM_CONFIG";

/// Default branch created by `git init`.
pub const DEFAULT_BRANCH: &str = "main";

/// Default message of the root commit.
pub const DEFAULT_ROOT_MESSAGE: &str = "Initial commit";

/// Default color of the default branch.
pub const DEFAULT_BRANCH_COLOR: &str = "#2ecc71";

/// Default palette for new branches.
pub const DEFAULT_PALETTE: [&str; 5] = ["#3498db", "#9b59b6", "#e74c3c", "#f39c12", "#1abc9c"];

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// The file the configuration came from, if any.
    pub path: Option<PathBuf>,
}

/// Effective configuration.
///
/// Accessors apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Raw file contents
    pub file: ConfigFile,
}

impl Config {
    /// Wrap an already-parsed config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the file fails validation.
    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        file.validate()?;
        Ok(Self { file })
    }

    /// Load configuration.
    ///
    /// An explicit path, from the argument or `$GITSIM_CONFIG`, must exist;
    /// the implicit locations are optional and fall back to defaults when
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or if a config file
    /// exists but cannot be read, parsed or validated.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        if let Some(path) = explicit.map(Path::to_path_buf).or(from_env) {
            return Self::load_from(path);
        }

        match Self::search_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(path),
            None => Ok(ConfigLoadResult {
                config: Self::default(),
                path: None,
            }),
        }
    }

    fn load_from(path: PathBuf) -> Result<ConfigLoadResult, ConfigError> {
        tracing::debug!(path = %path.display(), "loading config");
        let file = Self::read_file(&path)?;
        Ok(ConfigLoadResult {
            config: Self::from_file(file)?,
            path: Some(path),
        })
    }

    /// Implicit config locations in precedence order.
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_home).join("gitsim/config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".gitsim/config.toml"));
        }

        paths
    }

    /// Read and parse a config file.
    fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for the config file.
    ///
    /// Returns `~/.gitsim/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".gitsim/config.toml"))
    }

    /// Write a config file with every default spelled out.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn write_defaults(path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        Self::write_atomic(path, &Self::default().effective())
    }

    /// Write a config file atomically (temp file, then rename).
    fn write_atomic(path: &Path, file: &ConfigFile) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(file).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let write_err = |source| ConfigError::WriteError {
            path: temp_path.clone(),
            source,
        };
        let mut out = fs::File::create(&temp_path).map_err(write_err)?;
        out.write_all(contents.as_bytes()).map_err(write_err)?;
        out.sync_all().map_err(write_err)?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// The configuration with every default filled in.
    pub fn effective(&self) -> ConfigFile {
        ConfigFile {
            default_branch: Some(self.default_branch().to_string()),
            root_message: Some(self.root_message().to_string()),
            commit: Some(CommitPolicy {
                allow_empty: Some(self.allow_empty_commits()),
            }),
            colors: Some(ColorConfig {
                default_branch: Some(self.default_branch_color().to_string()),
                palette: Some(self.palette()),
            }),
        }
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Name of the branch `git init` creates.
    pub fn default_branch(&self) -> BranchName {
        self.file
            .default_branch
            .as_deref()
            .and_then(|name| BranchName::new(name).ok())
            .unwrap_or_else(|| BranchName::new(DEFAULT_BRANCH).expect("default is valid"))
    }

    /// Message of the root commit.
    pub fn root_message(&self) -> &str {
        self.file
            .root_message
            .as_deref()
            .unwrap_or(DEFAULT_ROOT_MESSAGE)
    }

    /// Whether `git commit` accepts an empty staging area.
    ///
    /// Defaults to `false`.
    pub fn allow_empty_commits(&self) -> bool {
        self.file
            .commit
            .as_ref()
            .and_then(|c| c.allow_empty)
            .unwrap_or(false)
    }

    /// Color of the default branch.
    pub fn default_branch_color(&self) -> &str {
        self.file
            .colors
            .as_ref()
            .and_then(|c| c.default_branch.as_deref())
            .unwrap_or(DEFAULT_BRANCH_COLOR)
    }

    /// Palette for new branches (never empty).
    pub fn palette(&self) -> Vec<String> {
        self.file
            .colors
            .as_ref()
            .and_then(|c| c.palette.clone())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }

    /// Set the empty-commit policy.
    pub fn with_allow_empty_commits(mut self, allow: bool) -> Self {
        self.file.commit = Some(CommitPolicy {
            allow_empty: Some(allow),
        });
        self
    }
}
