// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment accessor adapters.
//!
//! `ProcessEnvironment` reads the live process environment; `MapEnvironment` serves a
//! fixed set of variables and is what tests inject in place of the process.

use crate::ports::EnvironmentAccessor;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable names looked up by the adapter.
const MAX_ENV_KEY_LEN: usize = 512;

/// Environment accessor backed by the live process environment.
///
/// Every lookup reads the environment at call time; nothing is cached between calls.
/// An optional prefix is prepended to each requested key, so with the prefix `APP_` a
/// request for `PORT` reads `APP_PORT`.
///
/// # Examples
///
/// ```rust
/// use envlayer::adapters::ProcessEnvironment;
/// use envlayer::ports::EnvironmentAccessor;
///
/// let env = ProcessEnvironment::new();
/// assert_eq!(env.get("ENVLAYER_SURELY_UNSET_VARIABLE"), None);
///
/// let prefixed = ProcessEnvironment::with_prefix("MYAPP_");
/// assert_eq!(prefixed.prefix(), Some("MYAPP_"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessEnvironment {
    prefix: Option<String>,
}

impl ProcessEnvironment {
    /// Creates an accessor that looks keys up verbatim.
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Creates an accessor that prepends `prefix` to every key.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Returns the configured prefix.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn variable_name(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, key),
            None => key.to_string(),
        }
    }
}

impl EnvironmentAccessor for ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        let name = self.variable_name(key);

        // The platform cannot hold such names; looking them up is unspecified.
        if name.is_empty() || name.len() > MAX_ENV_KEY_LEN || name.contains(['=', '\0']) {
            tracing::debug!("Skipping lookup of unrepresentable variable name {:?}", name);
            return None;
        }

        let raw = env::var_os(&name)?;
        match raw.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::warn!(
                    "Environment variable '{}' is not valid UTF-8; using a lossy conversion",
                    name
                );
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }

    fn name(&self) -> &str {
        "process-env"
    }
}

/// Environment accessor serving a fixed set of variables.
///
/// # Examples
///
/// ```rust
/// use envlayer::adapters::MapEnvironment;
/// use envlayer::ports::EnvironmentAccessor;
///
/// let env = MapEnvironment::new().with("FOO", "1").with("EMPTY", "");
///
/// assert_eq!(env.get("FOO").as_deref(), Some("1"));
/// assert_eq!(env.get("EMPTY").as_deref(), Some(""));
/// assert_eq!(env.get("BAR"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    values: HashMap<String, String>,
}

impl MapEnvironment {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Captures the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are left out.
    pub fn snapshot() -> Self {
        Self {
            values: env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Returns the number of variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for MapEnvironment {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvironmentAccessor for MapEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn name(&self) -> &str {
        "map-env"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_process_env_get() {
        let mut guard = EnvGuard::new();
        guard.set("ENVLAYER_UNIT_PROCESS_GET", "value");

        let env = ProcessEnvironment::new();
        assert_eq!(env.get("ENVLAYER_UNIT_PROCESS_GET").as_deref(), Some("value"));
    }

    #[test]
    fn test_process_env_empty_value_is_defined() {
        let mut guard = EnvGuard::new();
        guard.set("ENVLAYER_UNIT_EMPTY", "");

        let env = ProcessEnvironment::new();
        assert_eq!(env.get("ENVLAYER_UNIT_EMPTY").as_deref(), Some(""));
    }

    #[test]
    fn test_process_env_missing() {
        let env = ProcessEnvironment::new();
        assert_eq!(env.get("ENVLAYER_UNIT_DEFINITELY_MISSING"), None);
    }

    #[test]
    fn test_process_env_with_prefix() {
        let mut guard = EnvGuard::new();
        guard.set("ENVLAYER_PFX_DATABASE_HOST", "localhost");

        let env = ProcessEnvironment::with_prefix("ENVLAYER_PFX_");
        assert_eq!(env.get("DATABASE_HOST").as_deref(), Some("localhost"));
        assert_eq!(env.get("ENVLAYER_PFX_DATABASE_HOST"), None);
    }

    #[test]
    fn test_process_env_unrepresentable_names() {
        let env = ProcessEnvironment::new();
        assert_eq!(env.get(""), None);
        assert_eq!(env.get("A=B"), None);
        assert_eq!(env.get("NUL\0NAME"), None);
        assert_eq!(env.get(&"K".repeat(MAX_ENV_KEY_LEN + 1)), None);
    }

    #[test]
    fn test_process_env_reads_live_values() {
        let mut guard = EnvGuard::new();
        let env = ProcessEnvironment::new();

        guard.set("ENVLAYER_UNIT_LIVE", "before");
        assert_eq!(env.get("ENVLAYER_UNIT_LIVE").as_deref(), Some("before"));

        guard.set("ENVLAYER_UNIT_LIVE", "after");
        assert_eq!(env.get("ENVLAYER_UNIT_LIVE").as_deref(), Some("after"));
    }

    #[test]
    fn test_map_env_from_iter() {
        let env: MapEnvironment = vec![("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.len(), 2);
        assert_eq!(env.get("B").as_deref(), Some("2"));
    }

    #[test]
    fn test_map_env_snapshot_sees_process_values() {
        let mut guard = EnvGuard::new();
        guard.set("ENVLAYER_UNIT_SNAPSHOT", "captured");

        let env = MapEnvironment::snapshot();
        assert_eq!(env.get("ENVLAYER_UNIT_SNAPSHOT").as_deref(), Some("captured"));
    }

    #[test]
    fn test_names() {
        assert_eq!(ProcessEnvironment::new().name(), "process-env");
        assert_eq!(MapEnvironment::new().name(), "map-env");
    }
}
