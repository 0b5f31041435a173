// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) for the external
//! collaborators of the secrets pipeline: contributor authorization, remote
//! file fetching, and local path resolution. These traits are implemented by
//! adapters in the adapters layer or by the embedding application.

pub mod auth;
pub mod fetcher;
pub mod paths;

// Re-export commonly used types
pub use auth::ContributorAuth;
pub use fetcher::FileFetcher;
pub use paths::LocalPaths;
