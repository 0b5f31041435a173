// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secrets fetch and transform pipeline.
//!
//! This module provides [`SecretsPipeline`], which downloads the secrets file
//! from the private remote repository (subject to contributor authorization)
//! and rewrites it into the credentials document format, where every value is
//! a decodable literal string.

use crate::defaults;
use crate::domain::{ConfigError, Literal, Result};
use crate::ports::{ContributorAuth, FileFetcher, LocalPaths};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of the remote fetch step.
///
/// An unauthorized caller is a normal outcome, reported explicitly rather
/// than silently swallowed, so callers can distinguish "nothing fetched" from
/// "fetched".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The secrets file was downloaded.
    Fetched,
    /// The caller is not an authorized contributor; no download was attempted.
    Unauthorized,
}

/// On-disk shape of the credentials file.
///
/// Serialized with sorted keys at every level: the two section names are
/// emitted in order and the section maps are `BTreeMap`s.
#[derive(Serialize)]
struct CredentialsFile {
    #[serde(rename = "LOCAL")]
    local: BTreeMap<String, String>,
    #[serde(rename = "SECRETS")]
    secrets: BTreeMap<String, String>,
}

/// Pipeline that fetches the remote secrets file and rewrites it as
/// credentials.
///
/// The overall flow is fetch, then transform: [`fetch_from_remote`]
/// downloads `secrets.json` when the caller is an authorized contributor,
/// and [`to_credentials`] rewrites the fetched file into the credentials
/// document shape so it can be reloaded through
/// [`CredentialsDocument`](crate::service::document::CredentialsDocument).
///
/// [`fetch_from_remote`]: SecretsPipeline::fetch_from_remote
/// [`to_credentials`]: SecretsPipeline::to_credentials
///
/// # Examples
///
/// ```no_run
/// use litcfg::adapters::GitHubFetcher;
/// use litcfg::service::secrets::SecretsPipeline;
/// # use litcfg::ports::ContributorAuth;
/// # use litcfg::domain::Result;
/// # struct MyAuth;
/// # impl ContributorAuth for MyAuth {
/// #     fn is_contributor(&self) -> bool { true }
/// #     fn token(&self) -> Result<String> { Ok("t".to_string()) }
/// # }
///
/// # fn main() -> litcfg::domain::Result<()> {
/// let pipeline = SecretsPipeline::new(MyAuth, GitHubFetcher::new())?;
/// pipeline.fetch_from_remote()?;
/// # Ok(())
/// # }
/// ```
pub struct SecretsPipeline<A, F> {
    auth: A,
    fetcher: F,
    overwrite: bool,
    secrets_path: PathBuf,
}

impl<A: ContributorAuth, F: FileFetcher> SecretsPipeline<A, F> {
    /// Creates a pipeline with the default secrets location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] when the application root
    /// cannot be determined.
    pub fn new(auth: A, fetcher: F) -> Result<Self> {
        Ok(SecretsPipeline {
            auth,
            fetcher,
            overwrite: true,
            secrets_path: defaults::default_secrets_path()?,
        })
    }

    /// Overrides the local secrets file location.
    pub fn with_secrets_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.secrets_path = path.into();
        self
    }

    /// Sets whether an already-downloaded secrets file is overwritten.
    ///
    /// Enabled by default.
    pub fn overwrite(mut self, enabled: bool) -> Self {
        self.overwrite = enabled;
        self
    }

    /// Returns the local secrets file location.
    pub fn secrets_path(&self) -> &Path {
        &self.secrets_path
    }

    /// Fetches the secrets file from the private remote repository.
    ///
    /// When the caller is not an authorized contributor, no download is
    /// attempted and `Ok(FetchOutcome::Unauthorized)` is returned.
    ///
    /// # Errors
    ///
    /// Token issuance and transport failures propagate; there is no retry.
    pub fn fetch_from_remote(&self) -> Result<FetchOutcome> {
        if !self.auth.is_contributor() {
            tracing::debug!("Caller is not an authorized contributor, skipping secrets fetch");
            return Ok(FetchOutcome::Unauthorized);
        }
        let token = self.auth.token()?;
        self.fetcher.download_single(
            defaults::GITHUB_ORG,
            defaults::SECRETS_GITHUB_REPO,
            defaults::SECRETS_JSON,
            &self.secrets_path,
            Some(&token),
            self.overwrite,
        )?;
        tracing::debug!("Fetched secrets to {}", self.secrets_path.display());
        Ok(FetchOutcome::Fetched)
    }

    /// Rewrites the fetched secrets file into the credentials file format.
    ///
    /// Every secret value is wrapped as a quoted-string literal under the
    /// `SECRETS` section; `LOCAL.DEVEL_MODELS_PATH` carries the quoted
    /// development models path, or the literal `None` when no path is known.
    /// The output is indented, key-sorted JSON, rendered in full before the
    /// file is touched so a failed transform leaves no partial output.
    ///
    /// Returns `Ok(false)` without writing anything when the secrets file
    /// does not exist; `Ok(true)` after the output file has been written.
    /// An existing output file is overwritten.
    pub fn to_credentials<P: LocalPaths>(&self, paths: &P, output: &Path) -> Result<bool> {
        if !self.secrets_path.exists() {
            tracing::debug!(
                "No secrets file at {}, nothing to transform",
                self.secrets_path.display()
            );
            return Ok(false);
        }

        let content =
            fs::read_to_string(&self.secrets_path).map_err(|e| ConfigError::Load {
                path: self.secrets_path.clone(),
                source: e,
            })?;
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse {
                path: self.secrets_path.clone(),
                source: e,
            })?;

        let mut secrets = BTreeMap::new();
        for (key, value) in &raw {
            let text = value
                .as_str()
                .ok_or_else(|| ConfigError::UnsupportedValue { key: key.clone() })?;
            secrets.insert(key.clone(), Literal::quote(text));
        }

        let mut local = BTreeMap::new();
        let devel_models = match paths.development_models_path() {
            Some(path) => Literal::quote(&path.to_string_lossy()),
            None => "None".to_string(),
        };
        local.insert("DEVEL_MODELS_PATH".to_string(), devel_models);

        let document = CredentialsFile { local, secrets };
        let rendered = serde_json::to_string_pretty(&document).map_err(|e| ConfigError::Parse {
            path: output.to_path_buf(),
            source: e,
        })?;
        fs::write(output, rendered).map_err(|e| ConfigError::Write {
            path: output.to_path_buf(),
            source: e,
        })?;
        tracing::debug!("Wrote credentials file {}", output.display());
        Ok(true)
    }
}
