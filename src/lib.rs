// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hierarchical configuration, credentials, and secrets loading with
//! literal-typed values.
//!
//! This crate loads configuration, credentials, and secrets for a local
//! application from JSON files. File locations resolve through an explicit
//! argument, an environment-variable override, or a built-in default path,
//! and every leaf value is decoded from a literal-expression string into a
//! typed value (string, number, boolean, null, list, nested mapping). A
//! companion pipeline fetches a secrets file from a private remote repository
//! and rewrites it into the credentials file format.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`Literal`, the literal decoder,
//!   `ConfigNode`, errors)
//! - **Ports**: Trait definitions for external collaborators
//!   (`ContributorAuth`, `FileFetcher`, `LocalPaths`)
//! - **Adapters**: Implementations for specific collaborators (the GitHub
//!   raw-content fetcher)
//! - **Service**: The document loaders and the secrets pipeline
//!
//! # Value decoding
//!
//! Leaf values in the JSON files are strings holding literal expressions,
//! e.g. `"42"`, `"True"`, `"'hello'"`, `"['a', 'b']"`. The decoder is a
//! dedicated literal-only parser: it accepts exactly that grammar and rejects
//! everything else, so files fetched from remote sources are never treated as
//! code.
//!
//! # Feature Flags
//!
//! - `remote`: Enable the GitHub fetch adapter (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use litcfg::prelude::*;
//!
//! # fn main() -> litcfg::domain::Result<()> {
//! let config = ConfigDocument::load(None)?;
//! let credentials = CredentialsDocument::load(None)?;
//! if credentials.exists() {
//!     let key = credentials.node("SECRETS")?.value("API_KEY")?;
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod defaults;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{decode, ConfigEntry, ConfigError, ConfigNode, Literal, Result};
    pub use crate::ports::{ContributorAuth, FileFetcher, LocalPaths};
    pub use crate::service::{
        ConfigDocument, CredentialsDocument, FetchOutcome, PathSpec, SecretsPipeline,
    };

    // Re-export adapters based on feature flags
    #[cfg(feature = "remote")]
    pub use crate::adapters::GitHubFetcher;
}
