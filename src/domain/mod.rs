// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the types the resolver works with: requested keys, resolved
//! values, ordered source lists, resolution results and errors. It is independent of
//! how the environment is read or how source files are parsed.

pub mod env_key;
pub mod errors;
pub mod resolution;
pub mod resolved_value;
pub mod source_list;

// Re-export commonly used types
pub use env_key::EnvKey;
pub use errors::{ResolveError, Result};
pub use resolution::{Resolution, ResolutionReport, ValueOrigin};
pub use resolved_value::ResolvedValue;
pub use source_list::SourceList;
