// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared default locations and names.
//!
//! The config, credentials, and secrets files live under one application root
//! directory with fixed file names. The root defaults to the OS-appropriate
//! configuration directory and can be relocated with the `LITCFG_ROOT`
//! environment variable.

use crate::domain::{ConfigError, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

/// Default file name of the configuration document.
pub const CONFIG_JSON: &str = "config.json";

/// Default file name of the credentials document.
pub const CREDENTIALS_JSON: &str = "credentials.json";

/// Default file name of the fetched secrets file.
pub const SECRETS_JSON: &str = "secrets.json";

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_VAR: &str = "LITCFG_CONFIG";

/// Environment variable overriding the credentials file path.
pub const CREDENTIALS_PATH_VAR: &str = "LITCFG_CREDENTIALS";

/// Environment variable relocating the application root directory.
pub const ROOT_VAR: &str = "LITCFG_ROOT";

/// GitHub organization hosting the private secrets repository.
pub const GITHUB_ORG: &str = "litcfg";

/// Name of the private secrets repository.
pub const SECRETS_GITHUB_REPO: &str = "litcfg-secrets";

/// OS-appropriate configuration directory, resolved once per process.
static PROJECT_ROOT: Lazy<Option<PathBuf>> =
    Lazy::new(|| ProjectDirs::from("", "", "litcfg").map(|dirs| dirs.config_dir().to_path_buf()));

/// Returns the application root directory.
///
/// The `LITCFG_ROOT` environment variable wins when set and non-empty;
/// otherwise the OS-appropriate configuration directory is used.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] when no project directory can be
/// determined for the current user.
pub fn default_root() -> Result<PathBuf> {
    if let Ok(root) = env::var(ROOT_VAR) {
        if !root.is_empty() {
            return Ok(PathBuf::from(root));
        }
    }
    PROJECT_ROOT.clone().ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default path of the configuration document.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(default_root()?.join(CONFIG_JSON))
}

/// Returns the default path of the credentials document.
pub fn default_credentials_path() -> Result<PathBuf> {
    Ok(default_root()?.join(CREDENTIALS_JSON))
}

/// Returns the default path of the fetched secrets file.
pub fn default_secrets_path() -> Result<PathBuf> {
    Ok(default_root()?.join(SECRETS_JSON))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_distinct() {
        assert_ne!(CONFIG_JSON, CREDENTIALS_JSON);
        assert_ne!(CREDENTIALS_JSON, SECRETS_JSON);
    }

    #[test]
    fn test_env_var_names_are_distinct() {
        assert_ne!(CONFIG_PATH_VAR, CREDENTIALS_PATH_VAR);
    }

    #[test]
    fn test_default_paths_share_root() {
        // Skip on systems without a resolvable home directory
        if let (Ok(config), Ok(credentials), Ok(secrets)) = (
            default_config_path(),
            default_credentials_path(),
            default_secrets_path(),
        ) {
            assert_eq!(config.parent(), credentials.parent());
            assert_eq!(credentials.parent(), secrets.parent());
            assert!(config.ends_with(CONFIG_JSON));
        }
    }
}
