// SPDX-License-Identifier: MIT OR Apache-2.0

//! Results of a resolution call.

use crate::domain::errors::{ResolveError, Result};
use crate::domain::{EnvKey, ResolvedValue};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where a resolved value came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "path")]
pub enum ValueOrigin {
    /// The live process environment.
    Environment,
    /// A fallback source file.
    File(PathBuf),
}

/// The outcome of resolving a set of keys.
///
/// Every requested key is present. A key maps to `Some(value)` when the environment or
/// a source supplied it, and to `None` (the unresolved marker) when nothing did and the
/// caller chose to tolerate missing keys.
///
/// # Examples
///
/// ```
/// use envlayer::domain::{Resolution, ResolvedValue, ValueOrigin};
///
/// let mut resolution = Resolution::default();
/// resolution.insert("PORT".into(), ResolvedValue::from("8080"), ValueOrigin::Environment);
/// resolution.mark_unresolved("HOST".into());
///
/// assert_eq!(resolution.get_str("PORT"), Some("8080"));
/// assert!(resolution.is_unresolved("HOST"));
/// assert_eq!(resolution.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Resolution {
    values: HashMap<EnvKey, Option<ResolvedValue>>,
    #[serde(skip)]
    origins: HashMap<EnvKey, ValueOrigin>,
}

impl Resolution {
    /// Creates an empty resolution with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity(capacity),
            origins: HashMap::with_capacity(capacity),
        }
    }

    /// Records a value for `key` unless the key already holds one.
    ///
    /// Returns `true` if the value was recorded. A value recorded earlier always comes
    /// from a higher-priority source, so it is kept.
    pub fn insert(&mut self, key: EnvKey, value: ResolvedValue, origin: ValueOrigin) -> bool {
        if self.is_resolved(key.as_str()) {
            return false;
        }
        self.origins.insert(key.clone(), origin);
        self.values.insert(key, Some(value));
        true
    }

    /// Marks `key` as unresolved. Has no effect on a key that holds a value.
    pub fn mark_unresolved(&mut self, key: EnvKey) {
        self.values.entry(key).or_insert(None);
    }

    /// Returns the value for `key`, or `None` if it is unresolved or was not requested.
    pub fn get(&self, key: &str) -> Option<&ResolvedValue> {
        self.values.get(key).and_then(Option::as_ref)
    }

    /// Returns the value for `key` as a string slice.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).map(ResolvedValue::as_str)
    }

    /// Returns where the value for `key` came from.
    pub fn origin(&self, key: &str) -> Option<&ValueOrigin> {
        self.origins.get(key)
    }

    /// Returns true if `key` was requested.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns true if `key` holds a value.
    pub fn is_resolved(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if `key` was requested but no source supplied it.
    pub fn is_unresolved(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(None))
    }

    /// Returns the keys that are marked unresolved, sorted by name.
    pub fn unresolved_keys(&self) -> Vec<&EnvKey> {
        let mut keys: Vec<&EnvKey> = self
            .values
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key)
            .collect();
        keys.sort();
        keys
    }

    /// Returns the number of keys, resolved or not.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no key was requested.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over every key and its value or unresolved marker.
    pub fn iter(&self) -> impl Iterator<Item = (&EnvKey, Option<&ResolvedValue>)> {
        self.values.iter().map(|(key, value)| (key, value.as_ref()))
    }

    /// Converts the resolution into a plain map of strings.
    pub fn into_map(self) -> HashMap<String, Option<String>> {
        self.values
            .into_iter()
            .map(|(key, value)| (key.into_string(), value.map(ResolvedValue::into_string)))
            .collect()
    }
}

/// The outcome of a resolution that collects failures instead of stopping at the first.
///
/// Produced by [`Resolver::resolve_report`](crate::service::Resolver::resolve_report).
/// The resolution always contains every requested key; keys that could not be
/// resolved are marked unresolved.
#[derive(Debug, Default)]
pub struct ResolutionReport {
    /// Everything that was resolved, plus unresolved markers.
    pub resolution: Resolution,
    /// Failures encountered, in the order they happened.
    pub failures: Vec<ResolveError>,
    /// Sources that were skipped because they did not exist.
    pub skipped: Vec<PathBuf>,
}

impl ResolutionReport {
    /// Returns true if no failure was recorded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns true if `path` was skipped as missing.
    pub fn was_skipped(&self, path: impl AsRef<Path>) -> bool {
        self.skipped.iter().any(|p| p == path.as_ref())
    }

    /// Converts the report into a result, failing with the first recorded failure.
    pub fn into_result(self) -> Result<Resolution> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure),
            None => Ok(self.resolution),
        }
    }
}
