// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem source loader.
//!
//! Reads fallback sources from disk and hands their content to the parser registered
//! for the file extension.

use crate::domain::{ResolveError, Result};
use crate::ports::{SourceLoader, SourceParser};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Maximum allowed size of a source file (10MB).
const MAX_SOURCE_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Source loader that reads files from the local filesystem.
///
/// The parser is chosen by file extension. Files whose extension no parser claims,
/// including extensionless names such as `.env` or `.env.local`, go to the fallback
/// parser. With default features the registered parsers are the YAML parser (`yaml`,
/// `yml`) and the dotenv parser, which is also the fallback.
///
/// # Examples
///
/// ```rust,no_run
/// use envlayer::adapters::FileSourceLoader;
/// use envlayer::ports::SourceLoader;
/// use std::path::Path;
///
/// let loader = FileSourceLoader::new();
/// if loader.exists(Path::new(".env")) {
///     let values = loader.load(Path::new(".env")).unwrap();
///     println!("{} values", values.len());
/// }
/// ```
pub struct FileSourceLoader {
    parsers: Vec<Box<dyn SourceParser>>,
    fallback: Option<Box<dyn SourceParser>>,
}

impl FileSourceLoader {
    /// Creates a loader with the parsers enabled by crate features.
    pub fn new() -> Self {
        let mut loader = Self::empty();

        #[cfg(feature = "yaml")]
        {
            loader = loader.with_parser(Box::new(crate::adapters::YamlParser::new()));
        }

        #[cfg(feature = "dotenv")]
        {
            loader = loader
                .with_parser(Box::new(crate::adapters::DotenvParser::new()))
                .with_fallback(Box::new(crate::adapters::DotenvParser::new()));
        }

        loader
    }

    /// Creates a loader with no parsers registered.
    pub fn empty() -> Self {
        Self {
            parsers: Vec::new(),
            fallback: None,
        }
    }

    /// Registers a parser for the extensions it supports.
    ///
    /// Parsers registered earlier win when several claim the same extension.
    pub fn with_parser(mut self, parser: Box<dyn SourceParser>) -> Self {
        self.parsers.push(parser);
        self
    }

    /// Sets the parser used when no registered parser claims the extension.
    pub fn with_fallback(mut self, parser: Box<dyn SourceParser>) -> Self {
        self.fallback = Some(parser);
        self
    }

    fn parser_for(&self, path: &Path) -> Result<&dyn SourceParser> {
        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.parsers.iter().find(|p| p.supports(ext)));

        by_extension
            .or(self.fallback.as_ref())
            .map(|parser| &**parser)
            .ok_or_else(|| ResolveError::ParseError {
                message: format!("No parser registered for {}", path.display()),
                source: None,
            })
    }
}

impl Default for FileSourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FileSourceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extensions: Vec<&str> = self
            .parsers
            .iter()
            .flat_map(|p| p.supported_extensions().iter().copied())
            .collect();
        f.debug_struct("FileSourceLoader")
            .field("extensions", &extensions)
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}

impl SourceLoader for FileSourceLoader {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn load(&self, path: &Path) -> Result<HashMap<String, String>> {
        let parser = self.parser_for(path)?;

        // Check file size before reading to avoid loading huge files
        let metadata = fs::metadata(path)?;
        if metadata.len() > MAX_SOURCE_FILE_SIZE {
            return Err(ResolveError::ParseError {
                message: format!(
                    "Source file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_SOURCE_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(path)?;
        let values = parser.parse(&content)?;

        tracing::debug!("Loaded {} values from {}", values.len(), path.display());

        Ok(values)
    }
}
