// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered list of fallback sources.
//!
//! Sources are file paths ordered from the highest priority to the lowest. A single
//! path converts into a one-element list, so callers can pass either shape.

use crate::domain::errors::{ResolveError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// An ordered list of source paths, highest priority first.
///
/// # Examples
///
/// ```
/// use envlayer::domain::SourceList;
///
/// let single = SourceList::from(".env");
/// let many = SourceList::from(vec![".env.local", ".env"]);
///
/// assert_eq!(single.len(), 1);
/// assert_eq!(many.paths()[0].to_str(), Some(".env.local"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceList {
    paths: Vec<PathBuf>,
}

impl SourceList {
    /// Creates an empty source list.
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Appends a source with a lower priority than every source already present.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    /// Builder-style variant of [`SourceList::push`].
    pub fn with(mut self, path: impl Into<PathBuf>) -> Self {
        self.push(path);
        self
    }

    /// Appends a file from the OS-specific configuration directory of a project.
    ///
    /// See [`SourceList::project_config_file`].
    pub fn with_project_file(self, app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let path = Self::project_config_file(app_name, qualifier, filename)?;
        Ok(self.with(path))
    }

    /// Returns the path of `filename` inside the configuration directory the current
    /// OS assigns to the project (e.g. `~/.config/<app>/` on Linux).
    ///
    /// The file does not need to exist; whether a missing file is tolerated is decided
    /// at resolution time.
    pub fn project_config_file(app_name: &str, qualifier: &str, filename: &str) -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ResolveError::InvalidInput {
                message: format!("Failed to determine project directories for '{}'", app_name),
            }
        })?;
        Ok(proj_dirs.config_dir().join(filename))
    }

    /// Returns the source paths in priority order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Returns an iterator over the source paths in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    /// Returns the number of sources.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if there are no sources.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl From<&str> for SourceList {
    fn from(path: &str) -> Self {
        Self::new().with(path)
    }
}

impl From<String> for SourceList {
    fn from(path: String) -> Self {
        Self::new().with(path)
    }
}

impl From<&Path> for SourceList {
    fn from(path: &Path) -> Self {
        Self::new().with(path)
    }
}

impl From<PathBuf> for SourceList {
    fn from(path: PathBuf) -> Self {
        Self::new().with(path)
    }
}

impl From<Vec<&str>> for SourceList {
    fn from(paths: Vec<&str>) -> Self {
        paths.into_iter().collect()
    }
}

impl From<Vec<String>> for SourceList {
    fn from(paths: Vec<String>) -> Self {
        paths.into_iter().collect()
    }
}

impl From<Vec<PathBuf>> for SourceList {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl From<&[&str]> for SourceList {
    fn from(paths: &[&str]) -> Self {
        paths.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for SourceList {
    fn from(paths: [&str; N]) -> Self {
        paths.into_iter().collect()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SourceList {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SourceList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Builds a source list from a dynamically typed value, such as a `sources:` entry
/// read from a YAML manifest.
///
/// A string becomes a one-element list and a sequence of strings keeps its order.
/// Anything else, including a sequence holding a non-string entry, is rejected with
/// [`ResolveError::InvalidInput`].
///
/// # Examples
///
/// ```
/// use envlayer::domain::SourceList;
///
/// let value: serde_yaml::Value = serde_yaml::from_str("[.env.local, .env]").unwrap();
/// let sources = SourceList::try_from(&value).unwrap();
/// assert_eq!(sources.len(), 2);
///
/// let value: serde_yaml::Value = serde_yaml::from_str("[.env, 42]").unwrap();
/// assert!(SourceList::try_from(&value).is_err());
/// ```
#[cfg(feature = "yaml")]
impl TryFrom<&serde_yaml::Value> for SourceList {
    type Error = ResolveError;

    fn try_from(value: &serde_yaml::Value) -> Result<Self> {
        match value {
            serde_yaml::Value::String(path) => Ok(SourceList::from(path.as_str())),
            serde_yaml::Value::Sequence(entries) => entries
                .iter()
                .map(|entry| {
                    entry
                        .as_str()
                        .map(PathBuf::from)
                        .ok_or_else(ResolveError::invalid_sources)
                })
                .collect::<Result<Vec<_>>>()
                .map(SourceList::from),
            _ => Err(ResolveError::invalid_sources()),
        }
    }
}
