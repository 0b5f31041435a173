// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the secrets fetch and transform pipeline.
//!
//! These tests drive the pipeline end to end with in-memory collaborators:
//! fetch gated on authorization, transform into the credentials format, and
//! reload of the produced file through the credentials document.

use litcfg::domain::{ConfigError, Result};
use litcfg::ports::{ContributorAuth, FileFetcher, LocalPaths};
use litcfg::service::{CredentialsDocument, FetchOutcome, PathSpec, SecretsPipeline};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

struct StaticAuth {
    contributor: bool,
}

impl ContributorAuth for StaticAuth {
    fn is_contributor(&self) -> bool {
        self.contributor
    }

    fn token(&self) -> Result<String> {
        Ok("gho_test".to_string())
    }
}

/// Writes a fixed payload to the destination, counting calls.
struct PayloadFetcher {
    payload: &'static str,
    downloads: AtomicUsize,
}

impl PayloadFetcher {
    fn new(payload: &'static str) -> Self {
        PayloadFetcher {
            payload,
            downloads: AtomicUsize::new(0),
        }
    }
}

impl FileFetcher for PayloadFetcher {
    fn download_single(
        &self,
        _org: &str,
        _repo: &str,
        _remote_file: &str,
        dest: &Path,
        token: Option<&str>,
        overwrite: bool,
    ) -> Result<()> {
        assert_eq!(token, Some("gho_test"));
        if dest.exists() && !overwrite {
            return Ok(());
        }
        self.downloads.fetch_add(1, Ordering::SeqCst);
        fs::write(dest, self.payload).map_err(|e| ConfigError::Write {
            path: dest.to_path_buf(),
            source: e,
        })
    }
}

struct StaticPaths {
    devel_models: Option<PathBuf>,
}

impl LocalPaths for StaticPaths {
    fn development_models_path(&self) -> Option<PathBuf> {
        self.devel_models.clone()
    }
}

fn pipeline(
    dir: &TempDir,
    contributor: bool,
    payload: &'static str,
) -> SecretsPipeline<StaticAuth, PayloadFetcher> {
    // Keeps the default-path lookup inside new() independent of the host
    // having a resolvable home directory
    std::env::set_var("LITCFG_ROOT", dir.path());
    SecretsPipeline::new(StaticAuth { contributor }, PayloadFetcher::new(payload))
        .unwrap()
        .with_secrets_path(dir.path().join("secrets.json"))
}

#[test]
fn test_unauthorized_fetch_is_silent_noop() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(&dir, false, "{}");

    assert_eq!(
        pipeline.fetch_from_remote().unwrap(),
        FetchOutcome::Unauthorized
    );
    assert!(!pipeline.secrets_path().exists());
}

#[test]
fn test_fetch_then_transform_then_reload() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(&dir, true, r#"{"API_KEY": "xyz", "DB_PASSWORD": "hunter2"}"#);

    // Fetch
    assert_eq!(pipeline.fetch_from_remote().unwrap(), FetchOutcome::Fetched);

    // Transform
    let output = dir.path().join("credentials.json");
    let paths = StaticPaths {
        devel_models: Some(PathBuf::from("/work/models")),
    };
    assert!(pipeline.to_credentials(&paths, &output).unwrap());

    // Reload through the credentials document
    let spec = PathSpec::new(Some(output), "LITCFG_TEST_UNSET", PathBuf::new());
    let credentials = CredentialsDocument::load_from(spec).unwrap();
    assert!(credentials.exists());

    let secrets = credentials.node("SECRETS").unwrap();
    assert_eq!(secrets.value("API_KEY").unwrap().as_str(), Some("xyz"));
    assert_eq!(
        secrets.value("DB_PASSWORD").unwrap().as_str(),
        Some("hunter2")
    );
    assert_eq!(
        credentials
            .node("LOCAL")
            .unwrap()
            .value("DEVEL_MODELS_PATH")
            .unwrap()
            .as_str(),
        Some("/work/models")
    );
}

#[test]
fn test_transform_without_secrets_file_reports_nothing_to_do() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(&dir, true, "{}");
    let output = dir.path().join("credentials.json");

    let written = pipeline
        .to_credentials(&StaticPaths { devel_models: None }, &output)
        .unwrap();

    assert!(!written);
    assert!(!output.exists());
}

#[test]
fn test_transform_preserves_awkward_secret_values() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(&dir, true, "{}");
    fs::write(
        pipeline.secrets_path(),
        r#"{"QUOTED": "it's", "SLASHED": "a\\b"}"#,
    )
    .unwrap();

    let output = dir.path().join("credentials.json");
    pipeline
        .to_credentials(&StaticPaths { devel_models: None }, &output)
        .unwrap();

    let spec = PathSpec::new(Some(output), "LITCFG_TEST_UNSET", PathBuf::new());
    let credentials = CredentialsDocument::load_from(spec).unwrap();
    let secrets = credentials.node("SECRETS").unwrap();
    assert_eq!(secrets.value("QUOTED").unwrap().as_str(), Some("it's"));
    assert_eq!(secrets.value("SLASHED").unwrap().as_str(), Some("a\\b"));
}

#[test]
fn test_transform_output_is_key_sorted() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(&dir, true, "{}");
    fs::write(pipeline.secrets_path(), r#"{"ZETA": "z", "ALPHA": "a"}"#).unwrap();

    let output = dir.path().join("credentials.json");
    pipeline
        .to_credentials(&StaticPaths { devel_models: None }, &output)
        .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let local = content.find("\"LOCAL\"").unwrap();
    let secrets = content.find("\"SECRETS\"").unwrap();
    let alpha = content.find("\"ALPHA\"").unwrap();
    let zeta = content.find("\"ZETA\"").unwrap();
    assert!(local < secrets);
    assert!(alpha < zeta);
}

#[test]
fn test_overwrite_disabled_keeps_existing_secrets_file() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(&dir, true, r#"{"K": "new"}"#).overwrite(false);
    fs::write(pipeline.secrets_path(), r#"{"K": "old"}"#).unwrap();

    assert_eq!(pipeline.fetch_from_remote().unwrap(), FetchOutcome::Fetched);

    let content = fs::read_to_string(pipeline.secrets_path()).unwrap();
    assert_eq!(content, r#"{"K": "old"}"#);
}

#[test]
fn test_failed_transform_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(&dir, true, "{}");
    // Malformed secrets file
    fs::write(pipeline.secrets_path(), "{oops").unwrap();

    let output = dir.path().join("credentials.json");
    let result = pipeline.to_credentials(&StaticPaths { devel_models: None }, &output);

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
    assert!(!output.exists());
}
