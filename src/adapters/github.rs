// SPDX-License-Identifier: MIT OR Apache-2.0

//! GitHub raw-content fetch adapter.
//!
//! This module provides an adapter that downloads a single file from a GitHub
//! repository over the raw-content endpoint, using a blocking HTTP client.
//! There is no retry or backoff; a failed download propagates to the caller.

use crate::domain::{ConfigError, Result};
use crate::ports::FileFetcher;
use std::fs;
use std::path::Path;

/// Builds the raw-content URL for a file in a repository.
fn raw_url(org: &str, repo: &str, branch: &str, remote_file: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/{}/{}/{}/{}",
        org, repo, branch, remote_file
    )
}

/// Remote file fetcher backed by the GitHub raw-content endpoint.
///
/// Private repositories require a token, which the secrets pipeline obtains
/// from its [`ContributorAuth`](crate::ports::ContributorAuth) collaborator
/// and passes per call.
///
/// # Examples
///
/// ```rust,no_run
/// use litcfg::adapters::GitHubFetcher;
/// use litcfg::ports::FileFetcher;
/// use std::path::Path;
///
/// # fn main() -> litcfg::domain::Result<()> {
/// let fetcher = GitHubFetcher::new();
/// fetcher.download_single(
///     "myorg",
///     "myrepo",
///     "secrets.json",
///     Path::new("/tmp/secrets.json"),
///     Some("gho_example"),
///     true,
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GitHubFetcher {
    client: reqwest::blocking::Client,
    branch: String,
}

impl GitHubFetcher {
    /// Creates a fetcher reading from the `main` branch.
    pub fn new() -> Self {
        GitHubFetcher {
            client: reqwest::blocking::Client::new(),
            branch: "main".to_string(),
        }
    }

    /// Sets the branch to read from.
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }
}

impl Default for GitHubFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FileFetcher for GitHubFetcher {
    fn download_single(
        &self,
        org: &str,
        repo: &str,
        remote_file: &str,
        dest: &Path,
        token: Option<&str>,
        overwrite: bool,
    ) -> Result<()> {
        if dest.exists() && !overwrite {
            tracing::debug!(
                "Destination {} already exists, skipping download",
                dest.display()
            );
            return Ok(());
        }

        let url = raw_url(org, repo, &self.branch, remote_file);
        let mut request = self.client.get(&url);
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().map_err(|e| ConfigError::Fetch {
            message: format!("request for {}/{}/{} failed", org, repo, remote_file),
            source: Some(Box::new(e)),
        })?;
        if !response.status().is_success() {
            return Err(ConfigError::fetch(format!(
                "server returned {} for {}/{}/{}",
                response.status(),
                org,
                repo,
                remote_file
            )));
        }
        let body = response.bytes().map_err(|e| ConfigError::Fetch {
            message: format!("failed to read response body for {}", remote_file),
            source: Some(Box::new(e)),
        })?;

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                    path: dest.to_path_buf(),
                    source: e,
                })?;
            }
        }
        fs::write(dest, &body).map_err(|e| ConfigError::Write {
            path: dest.to_path_buf(),
            source: e,
        })?;
        tracing::debug!("Downloaded {} to {}", remote_file, dest.display());
        Ok(())
    }
}
