// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source parser trait definition.
//!
//! This module defines the `SourceParser` trait, which turns the text of a source file
//! (dotenv, YAML, ...) into a flat key-value map.

use crate::domain::Result;
use std::collections::HashMap;

/// A trait for parsing source file content.
///
/// # Examples
///
/// ```rust
/// use envlayer::ports::SourceParser;
/// use envlayer::domain::Result;
/// use std::collections::HashMap;
///
/// struct PairsParser;
///
/// impl SourceParser for PairsParser {
///     fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
///         Ok(content
///             .split_whitespace()
///             .filter_map(|pair| pair.split_once(':'))
///             .map(|(k, v)| (k.to_string(), v.to_string()))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["pairs"]
///     }
/// }
///
/// let parsed = PairsParser.parse("HOST:localhost PORT:80").unwrap();
/// assert_eq!(parsed.get("PORT"), Some(&"80".to_string()));
/// ```
pub trait SourceParser: Send + Sync {
    /// Parses source content into a flat key-value map.
    ///
    /// # Returns
    ///
    /// * `Ok(HashMap<String, String>)` - The parsed pairs
    /// * `Err(ResolveError::ParseError)` - The content is malformed
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;

    /// Returns the file extensions (without the leading dot) handled by this parser.
    fn supported_extensions(&self) -> &[&str];

    /// Returns true if this parser handles files with the given extension.
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestParser;

    impl SourceParser for TestParser {
        fn parse(&self, _content: &str) -> Result<HashMap<String, String>> {
            let mut map = HashMap::new();
            map.insert("TEST_KEY".to_string(), "test_value".to_string());
            Ok(map)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let result = TestParser.parse("ignored").unwrap();
        assert_eq!(result.get("TEST_KEY"), Some(&"test_value".to_string()));
    }

    #[test]
    fn test_supports_is_case_insensitive() {
        assert!(TestParser.supports("test"));
        assert!(TestParser.supports("TST"));
        assert!(!TestParser.supports("yaml"));
    }
}
