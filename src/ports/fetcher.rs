// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote file fetcher trait definition.
//!
//! This module defines the `FileFetcher` trait, the transport boundary for
//! downloading a single file from a remote repository. The crate calls it and
//! reacts to success or failure; retry and transport policy belong to the
//! implementation.

use crate::domain::Result;
use std::path::Path;

/// A trait for downloading a single remote file.
///
/// # Examples
///
/// ```rust
/// use litcfg::ports::FileFetcher;
/// use litcfg::domain::Result;
/// use std::path::Path;
///
/// struct NullFetcher;
///
/// impl FileFetcher for NullFetcher {
///     fn download_single(
///         &self,
///         _org: &str,
///         _repo: &str,
///         _remote_file: &str,
///         _dest: &Path,
///         _token: Option<&str>,
///         _overwrite: bool,
///     ) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait FileFetcher {
    /// Downloads `remote_file` from `org/repo` to the local `dest` path.
    ///
    /// `token` carries the access credential when one is available. When
    /// `overwrite` is `false` and `dest` already exists, the implementation
    /// must leave the existing file untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Fetch`](crate::domain::ConfigError::Fetch) on
    /// any transport or authorization failure.
    fn download_single(
        &self,
        org: &str,
        repo: &str,
        remote_file: &str,
        dest: &Path,
        token: Option<&str>,
        overwrite: bool,
    ) -> Result<()>;
}
