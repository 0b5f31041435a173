// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration and credentials documents.
//!
//! This module provides the root-level documents loaded from JSON files. A
//! document resolves its file location (explicit path, then environment
//! variable, then default path), reads the file, and exposes the decoded
//! top-level keys as a flat namespace.

use crate::defaults;
use crate::domain::{ConfigEntry, ConfigError, ConfigNode, Literal, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolution order for a document's file location.
///
/// The order is a hard contract: the explicit path wins, then the value of
/// the environment variable, then the built-in default. Modeling the lookup
/// as an explicit struct keeps document loading testable without mutating the
/// process environment.
///
/// # Examples
///
/// ```
/// use litcfg::service::document::PathSpec;
/// use std::path::PathBuf;
///
/// let spec = PathSpec::new(
///     Some(PathBuf::from("/tmp/config.json")),
///     "MYAPP_CONFIG",
///     PathBuf::from("/home/user/.config/myapp/config.json"),
/// );
/// assert_eq!(spec.resolve(), PathBuf::from("/tmp/config.json"));
/// ```
#[derive(Clone, Debug)]
pub struct PathSpec {
    /// Explicitly requested path, if any.
    explicit: Option<PathBuf>,
    /// Name of the environment variable that may override the default.
    env_var: String,
    /// Built-in default path.
    default: PathBuf,
}

impl PathSpec {
    /// Creates a path specification.
    pub fn new(explicit: Option<PathBuf>, env_var: impl Into<String>, default: PathBuf) -> Self {
        PathSpec {
            explicit,
            env_var: env_var.into(),
            default,
        }
    }

    /// Resolves the file location, first match wins.
    ///
    /// An unset (or empty) environment variable is not an error; it falls
    /// through to the default path with a diagnostic log line.
    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.explicit {
            return path.clone();
        }
        match env::var(&self.env_var) {
            Ok(value) if !value.is_empty() => PathBuf::from(value),
            _ => {
                tracing::debug!(
                    "{} environment variable not set. Using default file {}",
                    self.env_var,
                    self.default.display()
                );
                self.default.clone()
            }
        }
    }
}

/// Reads a JSON file and builds the root namespace from its object keys.
fn read_root(path: &Path) -> Result<ConfigNode> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Load {
        path: path.to_path_buf(),
        source: e,
    })?;
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
        .map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    ConfigNode::from_object(&object)
}

/// The configuration document.
///
/// An instance holds the decoded configuration file: top-level keys become
/// direct namespace entries. The resolved file must exist; a missing or
/// malformed file is an error.
///
/// # Examples
///
/// ```no_run
/// use litcfg::service::document::ConfigDocument;
///
/// # fn main() -> litcfg::domain::Result<()> {
/// let config = ConfigDocument::load(None)?;
/// let api_url = config.node("API")?.value("URL")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ConfigDocument {
    path: PathBuf,
    root: ConfigNode,
}

impl ConfigDocument {
    /// Loads the configuration document.
    ///
    /// The file location is the explicit path when given, otherwise the
    /// `LITCFG_CONFIG` environment variable, otherwise `config.json` under
    /// the application root.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let spec = PathSpec::new(
            explicit.map(Path::to_path_buf),
            defaults::CONFIG_PATH_VAR,
            defaults::default_config_path()?,
        );
        Self::load_from(spec)
    }

    /// Loads the configuration document from a resolved path specification.
    pub fn load_from(spec: PathSpec) -> Result<Self> {
        let path = spec.resolve();
        let root = read_root(&path)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(ConfigDocument { path, root })
    }

    /// Returns the path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retrieves the entry for a top-level key.
    pub fn entry(&self, key: &str) -> Result<&ConfigEntry> {
        self.root.entry(key)
    }

    /// Retrieves the literal value for a top-level key.
    pub fn value(&self, key: &str) -> Result<&Literal> {
        self.root.value(key)
    }

    /// Retrieves the section namespace for a top-level key.
    pub fn node(&self, key: &str) -> Result<&ConfigNode> {
        self.root.node(key)
    }

    /// Returns an iterator over the top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys()
    }

    /// Returns `true` if the document contains the top-level key.
    pub fn contains(&self, key: &str) -> bool {
        self.root.contains(key)
    }

    /// Returns the root namespace of the document.
    pub fn root(&self) -> &ConfigNode {
        &self.root
    }
}

/// The credentials document.
///
/// Same shape as [`ConfigDocument`], but the backing file is optional: an
/// absent file yields an empty namespace with [`exists`](Self::exists)
/// returning `false`, not an error.
///
/// # Examples
///
/// ```no_run
/// use litcfg::service::document::CredentialsDocument;
///
/// # fn main() -> litcfg::domain::Result<()> {
/// let credentials = CredentialsDocument::load(None)?;
/// if credentials.exists() {
///     let api_key = credentials.node("SECRETS")?.value("API_KEY")?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsDocument {
    path: PathBuf,
    root: ConfigNode,
    exists: bool,
}

impl CredentialsDocument {
    /// Loads the credentials document.
    ///
    /// The file location is the explicit path when given, otherwise the
    /// `LITCFG_CREDENTIALS` environment variable, otherwise
    /// `credentials.json` under the application root.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let spec = PathSpec::new(
            explicit.map(Path::to_path_buf),
            defaults::CREDENTIALS_PATH_VAR,
            defaults::default_credentials_path()?,
        );
        Self::load_from(spec)
    }

    /// Loads the credentials document from a resolved path specification.
    pub fn load_from(spec: PathSpec) -> Result<Self> {
        let path = spec.resolve();
        if !path.exists() {
            tracing::debug!("No credentials file at {}", path.display());
            return Ok(CredentialsDocument {
                path,
                root: ConfigNode::new(),
                exists: false,
            });
        }
        let root = read_root(&path)?;
        tracing::debug!("Loaded credentials from {}", path.display());
        Ok(CredentialsDocument {
            path,
            root,
            exists: true,
        })
    }

    /// Returns `true` when the backing file was present at load time.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Returns the path the document was resolved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retrieves the entry for a top-level key.
    pub fn entry(&self, key: &str) -> Result<&ConfigEntry> {
        self.root.entry(key)
    }

    /// Retrieves the literal value for a top-level key.
    pub fn value(&self, key: &str) -> Result<&Literal> {
        self.root.value(key)
    }

    /// Retrieves the section namespace for a top-level key.
    pub fn node(&self, key: &str) -> Result<&ConfigNode> {
        self.root.node(key)
    }

    /// Returns an iterator over the top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys()
    }

    /// Returns the root namespace of the document.
    pub fn root(&self) -> &ConfigNode {
        &self.root
    }
}
