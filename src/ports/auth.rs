// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contributor authorization trait definition.
//!
//! This module defines the `ContributorAuth` trait, the boundary check that
//! determines whether the current caller may fetch the private secrets file.
//! The crate only consults this boundary; the authentication protocol itself
//! lives behind it.

use crate::domain::Result;

/// A trait for contributor authorization.
///
/// The secrets pipeline consults this trait before any remote fetch: when
/// [`is_contributor`](ContributorAuth::is_contributor) returns `false`, no
/// download is attempted.
///
/// # Examples
///
/// ```rust
/// use litcfg::ports::ContributorAuth;
/// use litcfg::domain::Result;
///
/// struct StaticAuth;
///
/// impl ContributorAuth for StaticAuth {
///     fn is_contributor(&self) -> bool {
///         true
///     }
///
///     fn token(&self) -> Result<String> {
///         Ok("gho_example".to_string())
///     }
/// }
/// ```
pub trait ContributorAuth {
    /// Returns `true` when the current caller is an authorized contributor.
    fn is_contributor(&self) -> bool;

    /// Issues an access token for the remote download.
    ///
    /// Only called after [`is_contributor`](ContributorAuth::is_contributor)
    /// has returned `true`.
    fn token(&self) -> Result<String>;
}
