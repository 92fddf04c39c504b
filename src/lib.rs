// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered resolution of named configuration values.
//!
//! This crate resolves a set of requested keys by consulting, in priority order, the
//! live process environment and then an ordered list of fallback files (dotenv or
//! YAML). The first value found for a key wins: the environment always takes
//! precedence, and among files the one listed first does.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`EnvKey`, `ResolvedValue`, `SourceList`, `Resolution`, errors)
//! - **Ports**: Trait definitions for the collaborators (`EnvironmentAccessor`, `SourceLoader`, `SourceParser`)
//! - **Adapters**: Implementations (process environment, in-memory environment, filesystem loader, parsers)
//! - **Service**: The `Resolver` that runs the layered lookup
//!
//! # Tolerances
//!
//! Two per-call flags relax the default strictness:
//!
//! - `skip_missing_files`: a source that does not exist is skipped with an informational
//!   log instead of failing the call
//! - `ignore_missing_keys`: keys that nothing resolves are marked unresolved (`None`)
//!   instead of failing the call
//!
//! A source that exists but cannot be parsed always fails the call.
//!
//! # Feature Flags
//!
//! - `dotenv`: Enable the dotenv (`KEY=VALUE`) parser (default)
//! - `yaml`: Enable the YAML parser and YAML source lists (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use envlayer::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Environment first, then .env.local, then .env
//! let resolution = envlayer::resolve_env(
//!     ["DATABASE_URL", "PORT"],
//!     vec![".env.local", ".env"],
//!     true,
//!     false,
//! )?;
//!
//! let port = resolution.get("PORT").map(|v| v.as_u64("PORT")).transpose()?;
//! println!("port = {:?}", port);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

use domain::{EnvKey, Resolution, Result, SourceList};
use service::{ResolveOptions, Resolver};

/// Resolves `keys` from the process environment and then from `sources`, in order.
///
/// `sources` may be a single path or a list of paths, highest priority first. This is
/// a shorthand for [`Resolver::new`] followed by [`Resolver::resolve`].
///
/// # Examples
///
/// ```rust
/// # fn main() -> envlayer::domain::Result<()> {
/// let resolution = envlayer::resolve_env(
///     ["ENVLAYER_DOC_UNSET_KEY"],
///     "no-such-file.env",
///     true,
///     true,
/// )?;
/// assert!(resolution.is_unresolved("ENVLAYER_DOC_UNSET_KEY"));
/// # Ok(())
/// # }
/// ```
pub fn resolve_env<I, K>(
    keys: I,
    sources: impl Into<SourceList>,
    skip_missing_files: bool,
    ignore_missing_keys: bool,
) -> Result<Resolution>
where
    I: IntoIterator<Item = K>,
    K: Into<EnvKey>,
{
    let options = ResolveOptions::new()
        .skip_missing_files(skip_missing_files)
        .ignore_missing_keys(ignore_missing_keys);
    Resolver::new().resolve(keys, sources, options)
}

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        EnvKey, Resolution, ResolutionReport, ResolveError, ResolvedValue, Result, SourceList,
        ValueOrigin,
    };
    pub use crate::ports::{EnvironmentAccessor, SourceLoader, SourceParser};
    pub use crate::service::{ResolveOptions, Resolver};

    pub use crate::adapters::{FileSourceLoader, MapEnvironment, ProcessEnvironment};
    // Re-export adapters based on feature flags
    #[cfg(feature = "dotenv")]
    pub use crate::adapters::DotenvParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
    pub use crate::resolve_env;
}
