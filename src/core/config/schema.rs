//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order of precedence:
//! 1. `--config <path>` on the command line
//! 2. `$GITSIM_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/gitsim/config.toml`
//! 4. `~/.gitsim/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Values are validated after parsing: the default branch must be a valid
//! branch name and every color must be a `#rrggbb` hex triplet.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::BranchName;

/// On-disk configuration.
///
/// Every field is optional; [`super::Config`] applies the defaults.
///
/// # Example
///
/// ```toml
/// default_branch = "main"
/// root_message = "Initial commit"
///
/// [commit]
/// allow_empty = false
///
/// [colors]
/// default_branch = "#2ecc71"
/// palette = ["#3498db", "#9b59b6", "#e74c3c", "#f39c12", "#1abc9c"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Name of the branch created by `git init`
    pub default_branch: Option<String>,

    /// Message of the root commit created by `git init`
    pub root_message: Option<String>,

    /// Commit policy
    pub commit: Option<CommitPolicy>,

    /// Branch colors
    pub colors: Option<ColorConfig>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.default_branch {
            BranchName::new(name).map_err(|e| {
                ConfigError::InvalidValue(format!("invalid default_branch: {}", e))
            })?;
        }

        if let Some(message) = &self.root_message {
            if message.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "root_message cannot be empty".to_string(),
                ));
            }
        }

        if let Some(colors) = &self.colors {
            colors.validate()?;
        }

        Ok(())
    }
}

/// Commit command policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CommitPolicy {
    /// Allow `git commit` with an empty staging area
    pub allow_empty: Option<bool>,
}

/// Display colors handed to renderers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Color of the default branch
    pub default_branch: Option<String>,

    /// Colors assigned to new branches
    pub palette: Option<Vec<String>>,
}

impl ColorConfig {
    /// Validate every configured color.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(color) = &self.default_branch {
            validate_color(color)?;
        }
        if let Some(palette) = &self.palette {
            if palette.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "colors.palette cannot be empty".to_string(),
                ));
            }
            for color in palette {
                validate_color(color)?;
            }
        }
        Ok(())
    }
}

/// Check that `color` is a `#rrggbb` hex triplet.
pub fn validate_color(color: &str) -> Result<(), ConfigError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue(format!(
            "invalid color '{}', expected #rrggbb",
            color
        )))
    }
}
