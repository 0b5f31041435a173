// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secrets pipeline example with in-process port implementations.
//!
//! This example demonstrates:
//! - Plugging custom `ContributorAuth`, `FileFetcher`, and `LocalPaths`
//!   implementations into the pipeline
//! - Fetching a secrets file (here, served from memory) and transforming
//!   it into a credentials file
//! - Reloading the generated file as a `CredentialsDocument`
//!
//! To run this example:
//! ```bash
//! cargo run --example secrets_pipeline
//! ```

use litcfg::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Auth port that always reports contributor access.
struct DemoAuth;

impl ContributorAuth for DemoAuth {
    fn is_contributor(&self) -> bool {
        true
    }

    fn token(&self) -> Result<String> {
        Ok("demo-token".to_string())
    }
}

/// Fetcher port that writes a canned payload instead of hitting the network.
struct DemoFetcher {
    payload: &'static str,
}

impl FileFetcher for DemoFetcher {
    fn download_single(
        &self,
        org: &str,
        repo: &str,
        remote_file: &str,
        dest: &Path,
        _token: Option<&str>,
        _overwrite: bool,
    ) -> Result<()> {
        println!("fetching {}/{}/{} -> {}", org, repo, remote_file, dest.display());
        fs::write(dest, self.payload).map_err(|source| ConfigError::Write {
            path: dest.to_path_buf(),
            source,
        })
    }
}

/// Paths port with a fixed development checkout location.
struct DemoPaths;

impl LocalPaths for DemoPaths {
    fn development_models_path(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/opt/demo/models"))
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== litcfg: Secrets Pipeline ===\n");

    let dir = std::env::temp_dir().join("litcfg-secrets-pipeline");
    fs::create_dir_all(&dir)?;
    let secrets_path = dir.join("secrets.json");
    let credentials_path = dir.join("credentials.json");

    let fetcher = DemoFetcher {
        payload: r#"{"API_TOKEN": "abc123", "DB_PASSWORD": "hunter2"}"#,
    };
    let pipeline = SecretsPipeline::new(DemoAuth, fetcher)?.with_secrets_path(&secrets_path);

    println!("--- Step 1: Fetch ---");
    match pipeline.fetch_from_remote()? {
        FetchOutcome::Fetched => println!("secrets fetched to {}", secrets_path.display()),
        FetchOutcome::Unauthorized => println!("not a contributor, nothing fetched"),
    }

    println!("\n--- Step 2: Transform ---");
    let written = pipeline.to_credentials(&DemoPaths, &credentials_path)?;
    println!("credentials written = {}", written);

    println!("\n--- Step 3: Reload ---");
    let credentials = CredentialsDocument::load(Some(credentials_path.as_path()))?;
    let secrets = credentials.node("SECRETS")?;
    for key in secrets.keys() {
        println!("SECRETS.{} = {:?}", key, secrets.value(key)?.as_str());
    }
    let local = credentials.node("LOCAL")?;
    println!(
        "LOCAL.DEVEL_MODELS_PATH = {:?}",
        local.value("DEVEL_MODELS_PATH")?.as_str()
    );

    Ok(())
}
