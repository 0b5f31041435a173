// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the core domain types and logic for the configuration
//! crate: the typed literal value, the literal decoder, the hierarchical
//! namespace, and the error types. It is independent of any external concerns
//! and defines the fundamental concepts used throughout the library.

pub mod decode;
pub mod errors;
pub mod literal;
pub mod node;

// Re-export commonly used types
pub use decode::decode;
pub use errors::{ConfigError, Result};
pub use literal::Literal;
pub use node::{ConfigEntry, ConfigNode};
