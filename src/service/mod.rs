// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the resolver.
//!
//! The resolver orchestrates the ports: it reads the environment, walks the fallback
//! sources in priority order and applies the per-call tolerance flags.

pub mod resolver;

// Re-export commonly used types
pub use resolver::{ResolveOptions, Resolver};
