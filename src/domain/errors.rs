// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when decoding literal
//! values, building configuration namespaces, loading documents, or fetching
//! the remote secrets file. All errors use `thiserror` for proper error
//! handling and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when decoding,
/// loading, or accessing configuration values. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use litcfg::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::KeyNotFound {
///         key: "DATA.PATH".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested key was not found in the namespace.
    #[error("Configuration key not found: {key}")]
    KeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// A literal-expression string did not conform to the supported grammar.
    #[error("Failed to decode literal at offset {offset}: {message}")]
    Decode {
        /// Description of what was rejected
        message: String,
        /// Byte offset into the literal text where decoding failed
        offset: usize,
    },

    /// A JSON value was neither a literal string nor a nested object.
    #[error("Unsupported value for key '{key}': expected a literal string or a nested object")]
    UnsupportedValue {
        /// The key carrying the unsupported value
        key: String,
    },

    /// A required file could not be read.
    #[error("Failed to read configuration file '{path}': {source}")]
    Load {
        /// The resolved file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A configuration file did not contain valid JSON.
    #[error("Failed to parse configuration file '{path}': {source}")]
    Parse {
        /// The resolved file path
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// An output file could not be written.
    #[error("Failed to write file '{path}': {source}")]
    Write {
        /// The output file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The remote secrets download failed.
    #[error("Failed to fetch remote file: {message}")]
    Fetch {
        /// The error message
        message: String,
        /// The underlying transport error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No home or project directory could be determined for default paths.
    #[error("Failed to determine the application home directory")]
    NoHomeDirectory,
}

impl ConfigError {
    /// Creates a `Decode` error from a message and byte offset.
    pub fn decode(message: impl Into<String>, offset: usize) -> Self {
        ConfigError::Decode {
            message: message.into(),
            offset,
        }
    }

    /// Creates a `Fetch` error from a message alone.
    pub fn fetch(message: impl Into<String>) -> Self {
        ConfigError::Fetch {
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_error() {
        let error = ConfigError::KeyNotFound {
            key: "DATA.PATH".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: DATA.PATH");
    }

    #[test]
    fn test_decode_error() {
        let error = ConfigError::decode("unexpected character 'x'", 3);
        assert_eq!(
            error.to_string(),
            "Failed to decode literal at offset 3: unexpected character 'x'"
        );
    }

    #[test]
    fn test_unsupported_value_error() {
        let error = ConfigError::UnsupportedValue {
            key: "PORT".to_string(),
        };
        assert!(error.to_string().contains("PORT"));
    }

    #[test]
    fn test_load_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::Load {
            path: PathBuf::from("/tmp/config.json"),
            source: io_error,
        };
        assert!(error.to_string().contains("/tmp/config.json"));
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ConfigError::Parse {
            path: PathBuf::from("/tmp/config.json"),
            source: json_error,
        };
        assert!(error.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_fetch_error() {
        let error = ConfigError::fetch("connection refused");
        assert_eq!(
            error.to_string(),
            "Failed to fetch remote file: connection refused"
        );
    }

    #[test]
    fn test_no_home_directory_error() {
        let error = ConfigError::NoHomeDirectory;
        assert!(error.to_string().contains("home directory"));
    }
}
