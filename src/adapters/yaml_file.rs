// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML parser.
//!
//! Flattens YAML documents into key-value pairs so YAML files can serve as fallback
//! sources next to dotenv files.

use crate::domain::{ResolveError, Result};
use crate::ports::SourceParser;
use std::collections::HashMap;

/// YAML parser implementation.
///
/// Nested mappings are flattened with `.` as separator and sequence items are keyed by
/// their index. Scalars become their string form and `null` becomes an empty string.
///
/// Numeric and boolean mapping keys are stringified rather than dropped. YAML reads
/// unquoted keys such as `8080:` or `yes:` as non-strings, while the lookup keys they
/// stand for are always strings. Keys of any other type are skipped.
///
/// # Examples
///
/// ```rust
/// use envlayer::adapters::YamlParser;
/// use envlayer::ports::SourceParser;
///
/// let parser = YamlParser::new();
/// let parsed = parser.parse("DB_HOST: localhost\ndatabase:\n  port: 5432").unwrap();
///
/// assert_eq!(parsed.get("DB_HOST"), Some(&"localhost".to_string()));
/// assert_eq!(parsed.get("database.port"), Some(&"5432".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Flattens a YAML value into a flat map with dot notation keys.
    fn flatten_yaml(value: &serde_yaml::Value, prefix: &str, result: &mut HashMap<String, String>) {
        match value {
            serde_yaml::Value::Mapping(map) => {
                for (key, val) in map {
                    let key_str = match key {
                        serde_yaml::Value::String(s) => s.clone(),
                        serde_yaml::Value::Number(n) => n.to_string(),
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        _ => continue,
                    };
                    let new_prefix = if prefix.is_empty() {
                        key_str
                    } else {
                        format!("{}.{}", prefix, key_str)
                    };
                    Self::flatten_yaml(val, &new_prefix, result);
                }
            }
            serde_yaml::Value::Sequence(seq) => {
                for (i, val) in seq.iter().enumerate() {
                    let new_prefix = format!("{}.{}", prefix, i);
                    Self::flatten_yaml(val, &new_prefix, result);
                }
            }
            serde_yaml::Value::String(s) => {
                result.insert(prefix.to_string(), s.clone());
            }
            serde_yaml::Value::Number(n) => {
                result.insert(prefix.to_string(), n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                result.insert(prefix.to_string(), b.to_string());
            }
            serde_yaml::Value::Null => {
                result.insert(prefix.to_string(), String::new());
            }
            serde_yaml::Value::Tagged(tagged) => {
                Self::flatten_yaml(&tagged.value, prefix, result);
            }
        }
    }
}

impl SourceParser for YamlParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ResolveError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match value {
            // An empty document carries no pairs
            serde_yaml::Value::Null => Ok(HashMap::new()),
            serde_yaml::Value::Mapping(_) => {
                let mut result = HashMap::new();
                Self::flatten_yaml(&value, "", &mut result);
                Ok(result)
            }
            _ => Err(ResolveError::ParseError {
                message: "YAML source must be a mapping at the top level".to_string(),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_parser_simple() {
        let result = YamlParser::new().parse("API_KEY: secret").unwrap();
        assert_eq!(result.get("API_KEY"), Some(&"secret".to_string()));
    }

    #[test]
    fn test_yaml_parser_nested() {
        let yaml = r#"
database:
  connection:
    host: localhost
    port: 5432
"#;
        let result = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(
            result.get("database.connection.host"),
            Some(&"localhost".to_string())
        );
        assert_eq!(
            result.get("database.connection.port"),
            Some(&"5432".to_string())
        );
    }

    #[test]
    fn test_yaml_parser_array() {
        let yaml = "servers:\n  - one\n  - two\n";
        let result = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(result.get("servers.0"), Some(&"one".to_string()));
        assert_eq!(result.get("servers.1"), Some(&"two".to_string()));
    }

    #[test]
    fn test_yaml_parser_mixed_types() {
        let yaml = r#"
string_value: hello
number_value: 42
bool_value: true
null_value: null
"#;
        let result = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(result.get("number_value"), Some(&"42".to_string()));
        assert_eq!(result.get("bool_value"), Some(&"true".to_string()));
        assert_eq!(result.get("null_value"), Some(&"".to_string()));
    }

    #[test]
    fn test_yaml_parser_non_string_keys() {
        let yaml = "ports:\n  8080: http\nflags:\n  true: enabled\n";
        let result = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(result.get("ports.8080"), Some(&"http".to_string()));
        assert_eq!(result.get("flags.true"), Some(&"enabled".to_string()));
    }

    #[test]
    fn test_yaml_parser_empty_document() {
        let result = YamlParser::new().parse("").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_yaml_parser_invalid() {
        let result = YamlParser::new().parse("invalid: yaml: content:");
        assert!(matches!(result, Err(ResolveError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_parser_rejects_top_level_scalar() {
        let result = YamlParser::new().parse("just a string");
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_parser_supported_extensions() {
        let parser = YamlParser::new();
        assert!(parser.supports("yaml"));
        assert!(parser.supports("YML"));
        assert!(!parser.supports("env"));
    }
}
