// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment key newtype for type-safe key handling.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// The name of a configuration variable requested by the caller.
///
/// Keys are matched verbatim against the environment and the parsed sources; no
/// case folding or separator translation is applied.
///
/// # Examples
///
/// ```
/// use envlayer::domain::EnvKey;
///
/// let key = EnvKey::from("DATABASE_URL");
/// assert_eq!(key.as_str(), "DATABASE_URL");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvKey(String);

impl EnvKey {
    /// Creates a new `EnvKey` from a `String`.
    pub fn new(key: String) -> Self {
        EnvKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `EnvKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Collects keys from any iterable, keeping the first occurrence of duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use envlayer::domain::EnvKey;
    ///
    /// let keys = EnvKey::distinct(["FOO", "BAR", "FOO"]);
    /// assert_eq!(keys, vec![EnvKey::from("FOO"), EnvKey::from("BAR")]);
    /// ```
    pub fn distinct<I, K>(keys: I) -> Vec<EnvKey>
    where
        I: IntoIterator<Item = K>,
        K: Into<EnvKey>,
    {
        let mut out: Vec<EnvKey> = Vec::new();
        for key in keys {
            let key = key.into();
            if !out.contains(&key) {
                out.push(key);
            }
        }
        out
    }
}

impl From<String> for EnvKey {
    fn from(s: String) -> Self {
        EnvKey(s)
    }
}

impl From<&str> for EnvKey {
    fn from(s: &str) -> Self {
        EnvKey(s.to_string())
    }
}

impl From<&String> for EnvKey {
    fn from(s: &String) -> Self {
        EnvKey(s.clone())
    }
}

impl From<EnvKey> for String {
    fn from(key: EnvKey) -> Self {
        key.0
    }
}

impl AsRef<str> for EnvKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `EnvKey` be queried with `&str`.
impl Borrow<str> for EnvKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_key_from_string() {
        let key = EnvKey::from("API_TOKEN".to_string());
        assert_eq!(key.as_str(), "API_TOKEN");
    }

    #[test]
    fn test_env_key_into_string() {
        let key = EnvKey::from("API_TOKEN");
        assert_eq!(key.into_string(), "API_TOKEN");
    }

    #[test]
    fn test_env_key_display() {
        let key = EnvKey::from("PORT");
        assert_eq!(format!("{}", key), "PORT");
    }

    #[test]
    fn test_env_key_is_case_sensitive() {
        assert_ne!(EnvKey::from("port"), EnvKey::from("PORT"));
    }

    #[test]
    fn test_env_key_hash() {
        let mut map = HashMap::new();
        map.insert(EnvKey::from("PORT"), "8080");

        assert_eq!(map.get(&EnvKey::from("PORT")), Some(&"8080"));
        assert_eq!(map.get(&EnvKey::from("HOST")), None);
    }

    #[test]
    fn test_distinct_keeps_first_occurrence_order() {
        let keys = EnvKey::distinct(vec!["B", "A", "B", "C", "A"]);
        let names: Vec<&str> = keys.iter().map(EnvKey::as_str).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_distinct_empty() {
        let keys = EnvKey::distinct(Vec::<String>::new());
        assert!(keys.is_empty());
    }
}
