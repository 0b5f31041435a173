// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing collaborator implementations.
//!
//! This module contains concrete implementations of the ports defined in the
//! ports layer. Currently that is the GitHub raw-content fetcher; contributor
//! authorization and local path resolution are provided by the embedding
//! application.

#[cfg(feature = "remote")]
pub mod github;

// Re-export adapters based on feature flags
#[cfg(feature = "remote")]
pub use github::GitHubFetcher;
