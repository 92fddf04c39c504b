// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

#![allow(dead_code)]

use envlayer::domain::{ResolveError, Result};
use envlayer::ports::SourceLoader;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Sets process environment variables and removes them when dropped.
pub struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
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

/// A temporary directory holding source files for one test.
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Writes `content` to `name` and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Returns the path of `name` without creating it.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// In-memory source loader that records every source it is asked about.
#[derive(Default)]
pub struct RecordingLoader {
    files: HashMap<PathBuf, Option<HashMap<String, String>>>,
    consulted: Mutex<Vec<PathBuf>>,
}

impl RecordingLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, pairs: &[(&str, &str)]) -> Self {
        self.files.insert(
            PathBuf::from(path),
            Some(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        );
        self
    }

    pub fn with_values(mut self, path: &str, values: HashMap<String, String>) -> Self {
        self.files.insert(PathBuf::from(path), Some(values));
        self
    }

    pub fn with_broken_file(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path), None);
        self
    }

    pub fn consulted(&self) -> Vec<PathBuf> {
        self.consulted.lock().unwrap().clone()
    }
}

impl SourceLoader for RecordingLoader {
    fn exists(&self, path: &Path) -> bool {
        self.consulted.lock().unwrap().push(path.to_path_buf());
        self.files.contains_key(path)
    }

    fn load(&self, path: &Path) -> Result<HashMap<String, String>> {
        match self.files.get(path) {
            Some(Some(values)) => Ok(values.clone()),
            _ => Err(ResolveError::ParseError {
                message: format!("cannot parse {}", path.display()),
                source: None,
            }),
        }
    }
}
