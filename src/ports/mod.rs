// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the interfaces the resolver depends on: reading the
//! environment, loading fallback sources and parsing source content. They are
//! implemented by adapters in the adapters layer.

pub mod environment;
pub mod loader;
pub mod parser;

// Re-export commonly used types
pub use environment::EnvironmentAccessor;
pub use loader::SourceLoader;
pub use parser::SourceParser;
