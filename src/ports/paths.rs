// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local path resolver trait definition.
//!
//! This module defines the `LocalPaths` trait, a single side-effect-free
//! lookup of a locally known filesystem path that the secrets transform folds
//! into the credentials file.

use std::path::PathBuf;

/// A trait for resolving locally known filesystem paths.
///
/// # Examples
///
/// ```rust
/// use litcfg::ports::LocalPaths;
/// use std::path::PathBuf;
///
/// struct FixedPaths;
///
/// impl LocalPaths for FixedPaths {
///     fn development_models_path(&self) -> Option<PathBuf> {
///         Some(PathBuf::from("/data/models"))
///     }
/// }
/// ```
pub trait LocalPaths {
    /// Returns the local development models directory, if one is known.
    fn development_models_path(&self) -> Option<PathBuf>;
}
