// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for environment resolution.
//!
//! This module defines the errors that can occur while resolving keys against the
//! environment and the fallback sources. All errors use `thiserror` for proper error
//! handling and conversion.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for resolution operations.
///
/// The first four variants are the terminal failures of a resolution call. The
/// remaining variants are produced by collaborators (parsers, loaders, typed
/// accessors) and are either wrapped by the resolver or surfaced directly to
/// callers converting values.
///
/// # Examples
///
/// ```
/// use envlayer::domain::errors::ResolveError;
///
/// let error = ResolveError::UnresolvedKeys {
///     keys: vec!["FOO".to_string(), "BAR".to_string()],
/// };
/// assert!(error.to_string().ends_with("FOO,BAR"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// A source entry was not a usable path.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// A declared source does not exist and missing files are not tolerated.
    #[error("Could not find source file {}", .path.display())]
    MissingSource {
        /// The path that was not found
        path: PathBuf,
    },

    /// An existing source could not be loaded or parsed.
    #[error("Error while loading source file {}", .path.display())]
    SourceParseError {
        /// The path of the offending source
        path: PathBuf,
        /// The loader failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Keys remained unresolved after consulting every source.
    #[error(
        "Could not find values for the following keys in the provided sources: {}",
        .keys.join(",")
    )]
    UnresolvedKeys {
        /// The unresolved keys, in request order
        keys: Vec<String>,
    },

    /// Failed to parse the content of a source.
    #[error("Failed to parse source content: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to convert a resolved value to the requested type.
    #[error("Failed to convert value for key '{key}' to type {target_type}: {source}")]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An I/O error occurred while reading a source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResolveError {
    /// Creates the error returned for a malformed source list.
    pub fn invalid_sources() -> Self {
        ResolveError::InvalidInput {
            message: "sources must be a string or an array of strings".to_string(),
        }
    }

    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ResolveError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ResolveError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ResolveError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    /// Returns true for the failures that end a resolution call.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            ResolveError::InvalidInput { .. }
                | ResolveError::MissingSource { .. }
                | ResolveError::SourceParseError { .. }
                | ResolveError::UnresolvedKeys { .. }
        )
    }
}

/// A specialized Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
