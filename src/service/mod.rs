// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the document loaders and the secrets pipeline.
//!
//! This module contains the concrete entry points of the crate: the
//! configuration and credentials documents, with their path-resolution rules,
//! and the pipeline that fetches and transforms the remote secrets file.

pub mod document;
pub mod secrets;

// Re-export commonly used types
pub use document::{ConfigDocument, CredentialsDocument, PathSpec};
pub use secrets::{FetchOutcome, SecretsPipeline};
