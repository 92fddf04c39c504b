// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotenv parser.
//!
//! Parses `KEY=VALUE` files with the `dotenvy` crate. The grammar (comments, quoting,
//! `export` prefixes) is dotenvy's; this adapter collects the pairs and maps failures
//! into [`ResolveError::ParseError`].
//!
//! Values are taken literally. dotenvy expands `$VAR` and `${VAR}` from the process
//! environment, so every `$` it would expand is escaped before parsing.

use crate::domain::{ResolveError, Result};
use crate::ports::SourceParser;
use std::collections::HashMap;

/// Parser for dotenv (`KEY=VALUE` per line) content.
///
/// When a key appears more than once, the last occurrence wins. A `$` in a value is
/// kept as written.
///
/// # Examples
///
/// ```rust
/// use envlayer::adapters::DotenvParser;
/// use envlayer::ports::SourceParser;
///
/// let parser = DotenvParser::new();
/// let parsed = parser.parse("# comment\nFOO=1\nBAR=\"two words\"\n").unwrap();
///
/// assert_eq!(parsed.get("FOO"), Some(&"1".to_string()));
/// assert_eq!(parsed.get("BAR"), Some(&"two words".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DotenvParser;

impl DotenvParser {
    /// Creates a new dotenv parser.
    pub fn new() -> Self {
        DotenvParser
    }
}

impl SourceParser for DotenvParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let mut result = HashMap::new();
        let escaped = escape_substitutions(content);
        for item in dotenvy::from_read_iter(escaped.as_bytes()) {
            let (key, value) = item.map_err(|e| ResolveError::ParseError {
                message: format!("Failed to parse dotenv content: {}", e),
                source: Some(Box::new(e)),
            })?;
            result.insert(key, value);
        }
        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["env"]
    }
}

/// Lexical position while scanning dotenv content, following dotenvy's line rules.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    LineStart,
    Blank,
    Plain,
    Escape,
    Weak,
    WeakEscape,
    Strong,
    Comment,
}

/// Prefixes a backslash to every `$` that dotenvy would treat as a substitution.
///
/// `$` is already literal inside single quotes, after a backslash and in comments.
fn escape_substitutions(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut state = Scan::LineStart;

    for c in content.chars() {
        if c == '$' && matches!(state, Scan::LineStart | Scan::Blank | Scan::Plain | Scan::Weak) {
            out.push('\\');
        }
        out.push(c);

        state = match (state, c) {
            (Scan::Comment, '\n') => Scan::LineStart,
            (Scan::Comment, _) => Scan::Comment,
            (Scan::Strong, '\'') => Scan::Plain,
            (Scan::Strong, _) => Scan::Strong,
            (Scan::Weak, '"') => Scan::Plain,
            (Scan::Weak, '\\') => Scan::WeakEscape,
            (Scan::Weak, _) | (Scan::WeakEscape, _) => Scan::Weak,
            (Scan::Escape, _) => Scan::Plain,
            (Scan::LineStart | Scan::Blank, '#') => Scan::Comment,
            (_, '\n') => Scan::LineStart,
            (_, ' ' | '\t') => Scan::Blank,
            (_, '\\') => Scan::Escape,
            (_, '"') => Scan::Weak,
            (_, '\'') => Scan::Strong,
            _ => Scan::Plain,
        };
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotenv_simple() {
        let result = DotenvParser::new().parse("KEY=value").unwrap();
        assert_eq!(result.get("KEY"), Some(&"value".to_string()));
    }

    #[test]
    fn test_dotenv_comments_and_blank_lines() {
        let content = "\n# database\nDB_HOST=localhost\n\nDB_PORT=5432\n";
        let result = DotenvParser::new().parse(content).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("DB_PORT"), Some(&"5432".to_string()));
    }

    #[test]
    fn test_dotenv_quoted_values() {
        let content = "SINGLE='a b'\nDOUBLE=\"c d\"\n";
        let result = DotenvParser::new().parse(content).unwrap();

        assert_eq!(result.get("SINGLE"), Some(&"a b".to_string()));
        assert_eq!(result.get("DOUBLE"), Some(&"c d".to_string()));
    }

    #[test]
    fn test_dotenv_dollar_is_literal() {
        let content = "PASSWORD=abc$def\nURL=postgres://u:p@h/${DB}\nDIR=$HOME/cache\n";
        let result = DotenvParser::new().parse(content).unwrap();

        assert_eq!(result.get("PASSWORD"), Some(&"abc$def".to_string()));
        assert_eq!(result.get("URL"), Some(&"postgres://u:p@h/${DB}".to_string()));
        assert_eq!(result.get("DIR"), Some(&"$HOME/cache".to_string()));
    }

    #[test]
    fn test_dotenv_dollar_in_quotes() {
        let content = "WEAK=\"cost $5\"\nSTRONG='$HOME'\nESCAPED=a\\$b\n";
        let result = DotenvParser::new().parse(content).unwrap();

        assert_eq!(result.get("WEAK"), Some(&"cost $5".to_string()));
        assert_eq!(result.get("STRONG"), Some(&"$HOME".to_string()));
        assert_eq!(result.get("ESCAPED"), Some(&"a$b".to_string()));
    }

    #[test]
    fn test_dotenv_dollar_after_comment_with_quote() {
        let content = "# don't expand $THIS\nA=x # it's $fine\nB=$y\n";
        let result = DotenvParser::new().parse(content).unwrap();

        assert_eq!(result.get("A"), Some(&"x".to_string()));
        assert_eq!(result.get("B"), Some(&"$y".to_string()));
    }

    #[test]
    fn test_dotenv_empty_value() {
        let result = DotenvParser::new().parse("EMPTY=\n").unwrap();
        assert_eq!(result.get("EMPTY"), Some(&String::new()));
    }

    #[test]
    fn test_dotenv_last_duplicate_wins() {
        let result = DotenvParser::new().parse("A=1\nA=2\n").unwrap();
        assert_eq!(result.get("A"), Some(&"2".to_string()));
    }

    #[test]
    fn test_dotenv_invalid_line() {
        let result = DotenvParser::new().parse("NOT A VALID LINE\n");
        assert!(matches!(result, Err(ResolveError::ParseError { .. })));
    }

    #[test]
    fn test_dotenv_empty_content() {
        let result = DotenvParser::new().parse("").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_dotenv_supported_extensions() {
        let parser = DotenvParser::new();
        assert!(parser.supports("env"));
        assert!(!parser.supports("yaml"));
    }
}
