// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for document loading and path resolution.
//!
//! These tests verify the resolution order (explicit path, then environment
//! variable, then default) and the namespace a loaded document exposes.

use litcfg::domain::ConfigError;
use litcfg::service::{ConfigDocument, CredentialsDocument, PathSpec};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_explicit_path_wins_over_env_and_default() {
    let explicit = write_json(r#"{"SOURCE": "'explicit'"}"#);
    let from_env = write_json(r#"{"SOURCE": "'env'"}"#);

    // Each test uses its own variable name, so parallel tests don't interfere
    std::env::set_var("LITCFG_TEST_EXPLICIT_WINS", from_env.path());
    let spec = PathSpec::new(
        Some(explicit.path().to_path_buf()),
        "LITCFG_TEST_EXPLICIT_WINS",
        PathBuf::from("/nonexistent/default.json"),
    );
    let config = ConfigDocument::load_from(spec).unwrap();

    assert_eq!(config.value("SOURCE").unwrap().as_str(), Some("explicit"));
}

#[test]
fn test_env_override_wins_over_default() {
    let from_env = write_json(r#"{"SOURCE": "'env'"}"#);
    let from_default = write_json(r#"{"SOURCE": "'default'"}"#);

    std::env::set_var("LITCFG_TEST_ENV_WINS", from_env.path());
    let spec = PathSpec::new(
        None,
        "LITCFG_TEST_ENV_WINS",
        from_default.path().to_path_buf(),
    );
    let config = ConfigDocument::load_from(spec).unwrap();

    assert_eq!(config.value("SOURCE").unwrap().as_str(), Some("env"));
}

#[test]
fn test_unset_env_falls_back_to_default() {
    let from_default = write_json(r#"{"SOURCE": "'default'"}"#);

    let spec = PathSpec::new(
        None,
        "LITCFG_TEST_NEVER_SET",
        from_default.path().to_path_buf(),
    );
    let config = ConfigDocument::load_from(spec).unwrap();

    assert_eq!(config.value("SOURCE").unwrap().as_str(), Some("default"));
}

#[test]
fn test_empty_env_value_falls_back_to_default() {
    let from_default = write_json(r#"{"SOURCE": "'default'"}"#);

    std::env::set_var("LITCFG_TEST_EMPTY_ENV", "");
    let spec = PathSpec::new(
        None,
        "LITCFG_TEST_EMPTY_ENV",
        from_default.path().to_path_buf(),
    );
    let config = ConfigDocument::load_from(spec).unwrap();

    assert_eq!(config.value("SOURCE").unwrap().as_str(), Some("default"));
}

#[test]
fn test_config_document_typed_sections() {
    let file = write_json(
        r#"{
            "API": {
                "URL": "'https://api.example.org'",
                "PORT": "8080",
                "TIMEOUT": "2.5",
                "VERIFY": "True",
                "PROXY": "None",
                "MIRRORS": "['a', 'b']"
            },
            "VERSION": "'1.0'"
        }"#,
    );
    let spec = PathSpec::new(
        Some(file.path().to_path_buf()),
        "LITCFG_TEST_UNSET",
        PathBuf::new(),
    );
    let config = ConfigDocument::load_from(spec).unwrap();

    assert_eq!(config.value("VERSION").unwrap().as_str(), Some("1.0"));
    let api = config.node("API").unwrap();
    assert_eq!(
        api.value("URL").unwrap().as_str(),
        Some("https://api.example.org")
    );
    assert_eq!(api.value("PORT").unwrap().as_i64(), Some(8080));
    assert_eq!(api.value("TIMEOUT").unwrap().as_f64(), Some(2.5));
    assert_eq!(api.value("VERIFY").unwrap().as_bool(), Some(true));
    assert!(api.value("PROXY").unwrap().is_null());
    let mirrors = api.value("MIRRORS").unwrap().as_list().unwrap();
    assert_eq!(mirrors.len(), 2);
}

#[test]
fn test_config_document_missing_file_is_fatal() {
    let spec = PathSpec::new(
        Some(PathBuf::from("/nonexistent/config.json")),
        "LITCFG_TEST_UNSET",
        PathBuf::new(),
    );
    assert!(matches!(
        ConfigDocument::load_from(spec),
        Err(ConfigError::Load { .. })
    ));
}

#[test]
fn test_config_document_invalid_literal_is_fatal() {
    let file = write_json(r#"{"EVIL": "__import__('os')"}"#);
    let spec = PathSpec::new(
        Some(file.path().to_path_buf()),
        "LITCFG_TEST_UNSET",
        PathBuf::new(),
    );
    assert!(matches!(
        ConfigDocument::load_from(spec),
        Err(ConfigError::Decode { .. })
    ));
}

#[test]
fn test_credentials_document_absent_file() {
    let spec = PathSpec::new(
        Some(PathBuf::from("/nonexistent/credentials.json")),
        "LITCFG_TEST_UNSET",
        PathBuf::new(),
    );
    let credentials = CredentialsDocument::load_from(spec).unwrap();

    assert!(!credentials.exists());
    assert_eq!(credentials.keys().count(), 0);
    assert!(matches!(
        credentials.value("SECRETS"),
        Err(ConfigError::KeyNotFound { .. })
    ));
}

#[test]
fn test_credentials_document_present_file() {
    let file = write_json(
        r#"{
            "SECRETS": {"API_KEY": "'xyz'"},
            "LOCAL": {"DEVEL_MODELS_PATH": "None"}
        }"#,
    );
    let spec = PathSpec::new(
        Some(file.path().to_path_buf()),
        "LITCFG_TEST_UNSET",
        PathBuf::new(),
    );
    let credentials = CredentialsDocument::load_from(spec).unwrap();

    assert!(credentials.exists());
    let keys: Vec<&str> = credentials.keys().collect();
    assert_eq!(keys, vec!["LOCAL", "SECRETS"]);
    assert_eq!(
        credentials
            .node("SECRETS")
            .unwrap()
            .value("API_KEY")
            .unwrap()
            .as_str(),
        Some("xyz")
    );
    assert!(credentials
        .node("LOCAL")
        .unwrap()
        .value("DEVEL_MODELS_PATH")
        .unwrap()
        .is_null());
}

#[test]
fn test_credentials_env_override() {
    let file = write_json(r#"{"SECRETS": {"K": "'v'"}}"#);

    std::env::set_var("LITCFG_TEST_CRED_ENV", file.path());
    let spec = PathSpec::new(
        None,
        "LITCFG_TEST_CRED_ENV",
        PathBuf::from("/nonexistent/credentials.json"),
    );
    let credentials = CredentialsDocument::load_from(spec).unwrap();

    assert!(credentials.exists());
    assert_eq!(credentials.path(), file.path());
}
