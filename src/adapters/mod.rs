// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains the concrete implementations of the traits defined in the
//! ports layer: environment accessors, the filesystem source loader and the parsers
//! for the supported source formats.

#[cfg(feature = "dotenv")]
pub mod dotenv_file;
pub mod file_loader;
pub mod process_env;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "dotenv")]
pub use dotenv_file::DotenvParser;
pub use file_loader::FileSourceLoader;
pub use process_env::{MapEnvironment, ProcessEnvironment};
#[cfg(feature = "yaml")]
pub use yaml_file::YamlParser;
