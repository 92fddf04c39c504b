// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered resolver.
//!
//! This module provides the resolver that looks requested keys up in the environment
//! first and then in each fallback source, in priority order, keeping the first value
//! found for every key.

use crate::adapters::{FileSourceLoader, ProcessEnvironment};
use crate::domain::{
    EnvKey, Resolution, ResolutionReport, ResolveError, ResolvedValue, Result, SourceList,
    ValueOrigin,
};
use crate::ports::{EnvironmentAccessor, SourceLoader};
use std::path::Path;

/// Per-call tolerance flags.
///
/// Both flags default to `false`, which makes every missing source and every
/// unresolved key a failure.
///
/// # Examples
///
/// ```rust
/// use envlayer::service::ResolveOptions;
///
/// let options = ResolveOptions::new()
///     .skip_missing_files(true)
///     .ignore_missing_keys(false);
/// assert!(options.skips_missing_files());
/// assert!(!options.ignores_missing_keys());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    skip_missing_files: bool,
    ignore_missing_keys: bool,
}

impl ResolveOptions {
    /// Creates options with both tolerances disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether sources that do not exist are skipped instead of failing.
    pub fn skip_missing_files(mut self, enabled: bool) -> Self {
        self.skip_missing_files = enabled;
        self
    }

    /// Sets whether keys nothing resolves are marked unresolved instead of failing.
    pub fn ignore_missing_keys(mut self, enabled: bool) -> Self {
        self.ignore_missing_keys = enabled;
        self
    }

    /// Returns true if missing sources are skipped.
    pub fn skips_missing_files(&self) -> bool {
        self.skip_missing_files
    }

    /// Returns true if unresolved keys are tolerated.
    pub fn ignores_missing_keys(&self) -> bool {
        self.ignore_missing_keys
    }
}

/// Resolves keys against an environment and an ordered list of fallback sources.
///
/// The environment always wins. Among sources, the first one (highest priority) that
/// defines a key provides its value; later sources never overwrite it. Sources are
/// consulted strictly in order and every call is independent of the previous ones.
///
/// # Examples
///
/// ```rust
/// use envlayer::adapters::{FileSourceLoader, MapEnvironment};
/// use envlayer::service::{ResolveOptions, Resolver};
///
/// # fn main() -> envlayer::domain::Result<()> {
/// let env = MapEnvironment::new().with("FOO", "1");
/// let resolver = Resolver::with_adapters(env, FileSourceLoader::new());
///
/// let resolution = resolver.resolve(
///     ["FOO", "BAR"],
///     "does-not-exist.env",
///     ResolveOptions::new().skip_missing_files(true).ignore_missing_keys(true),
/// )?;
///
/// assert_eq!(resolution.get_str("FOO"), Some("1"));
/// assert!(resolution.is_unresolved("BAR"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver<E = ProcessEnvironment, L = FileSourceLoader> {
    env: E,
    loader: L,
}

impl Resolver {
    /// Creates a resolver reading the process environment and files on disk.
    pub fn new() -> Self {
        Self {
            env: ProcessEnvironment::new(),
            loader: FileSourceLoader::new(),
        }
    }
}

impl<E, L> Resolver<E, L>
where
    E: EnvironmentAccessor,
    L: SourceLoader,
{
    /// Creates a resolver from explicit adapters.
    pub fn with_adapters(env: E, loader: L) -> Self {
        Self { env, loader }
    }

    /// Returns the environment accessor.
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Returns the source loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Resolves `keys` against the environment and then `sources`, in order.
    ///
    /// Duplicate keys are resolved once. On success the resolution contains exactly the
    /// requested keys; a key maps to the unresolved marker only when
    /// `ignore_missing_keys` is set.
    ///
    /// # Errors
    ///
    /// The first failure aborts the call and no partial resolution is returned:
    ///
    /// * [`ResolveError::MissingSource`] - a source does not exist (an empty path never
    ///   does) and `skip_missing_files` is not set; later sources are not consulted
    /// * [`ResolveError::SourceParseError`] - an existing source failed to load
    /// * [`ResolveError::UnresolvedKeys`] - keys remain unresolved and
    ///   `ignore_missing_keys` is not set; all of them are named in request order
    pub fn resolve<I, K>(
        &self,
        keys: I,
        sources: impl Into<SourceList>,
        options: ResolveOptions,
    ) -> Result<Resolution>
    where
        I: IntoIterator<Item = K>,
        K: Into<EnvKey>,
    {
        let keys = EnvKey::distinct(keys);
        let sources = sources.into();

        let mut resolution = self.resolve_from_environment(&keys);
        let mut pending = pending_keys(&keys, &resolution);

        for path in &sources {
            match self.consult_source(path, &mut pending, &mut resolution) {
                Ok(()) => {}
                Err(ResolveError::MissingSource { path }) if options.skip_missing_files => {
                    tracing::info!("Skipping non-existing source file {}", path.display());
                }
                Err(e) => return Err(e),
            }
        }

        if !pending.is_empty() {
            if !options.ignore_missing_keys {
                return Err(unresolved(&pending));
            }
            for key in pending {
                resolution.mark_unresolved(key);
            }
        }

        Ok(resolution)
    }

    /// Resolves like [`Resolver::resolve`], but collects failures instead of stopping.
    ///
    /// A source that is missing or fails to load is recorded as a failure and the
    /// remaining sources are still consulted. Keys left unresolved are always marked
    /// unresolved in the returned resolution; unless `ignore_missing_keys` is set they
    /// are also reported as one [`ResolveError::UnresolvedKeys`] failure. Missing
    /// sources tolerated by `skip_missing_files` are listed in
    /// [`ResolutionReport::skipped`].
    pub fn resolve_report<I, K>(
        &self,
        keys: I,
        sources: impl Into<SourceList>,
        options: ResolveOptions,
    ) -> ResolutionReport
    where
        I: IntoIterator<Item = K>,
        K: Into<EnvKey>,
    {
        let keys = EnvKey::distinct(keys);
        let sources = sources.into();

        let mut report = ResolutionReport {
            resolution: self.resolve_from_environment(&keys),
            ..Default::default()
        };
        let mut pending = pending_keys(&keys, &report.resolution);

        for path in &sources {
            match self.consult_source(path, &mut pending, &mut report.resolution) {
                Ok(()) => {}
                Err(ResolveError::MissingSource { path }) if options.skip_missing_files => {
                    tracing::info!("Skipping non-existing source file {}", path.display());
                    report.skipped.push(path);
                }
                Err(e) => {
                    tracing::debug!("Recording failure and continuing: {}", e);
                    report.failures.push(e);
                }
            }
        }

        if !pending.is_empty() && !options.ignore_missing_keys {
            report.failures.push(unresolved(&pending));
        }
        for key in pending {
            report.resolution.mark_unresolved(key);
        }

        report
    }

    /// Records every key the environment defines. An empty value counts as defined.
    fn resolve_from_environment(&self, keys: &[EnvKey]) -> Resolution {
        let mut resolution = Resolution::with_capacity(keys.len());
        for key in keys {
            if let Some(value) = self.env.get(key.as_str()) {
                resolution.insert(key.clone(), ResolvedValue::from(value), ValueOrigin::Environment);
            }
        }
        tracing::debug!(
            "Resolved {} of {} keys from '{}'",
            resolution.len(),
            keys.len(),
            self.env.name()
        );
        resolution
    }

    /// Consults one source, filling pending keys it defines.
    ///
    /// Sources are loaded even when nothing is pending, so a missing or broken source
    /// is reported regardless of what earlier layers resolved.
    fn consult_source(
        &self,
        path: &Path,
        pending: &mut Vec<EnvKey>,
        resolution: &mut Resolution,
    ) -> Result<()> {
        if !self.loader.exists(path) {
            return Err(ResolveError::MissingSource {
                path: path.to_path_buf(),
            });
        }

        let values = self
            .loader
            .load(path)
            .map_err(|e| ResolveError::SourceParseError {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;

        let before = pending.len();
        for key in pending.iter() {
            if let Some(value) = values.get(key.as_str()) {
                resolution.insert(
                    key.clone(),
                    ResolvedValue::from(value.as_str()),
                    ValueOrigin::File(path.to_path_buf()),
                );
            }
        }
        pending.retain(|key| !resolution.is_resolved(key.as_str()));

        tracing::debug!(
            "Resolved {} keys from {} ({} still pending)",
            before - pending.len(),
            path.display(),
            pending.len()
        );

        Ok(())
    }
}

/// Requested keys without a value, in request order.
fn pending_keys(keys: &[EnvKey], resolution: &Resolution) -> Vec<EnvKey> {
    keys.iter()
        .filter(|key| !resolution.is_resolved(key.as_str()))
        .cloned()
        .collect()
}

fn unresolved(pending: &[EnvKey]) -> ResolveError {
    ResolveError::UnresolvedKeys {
        keys: pending.iter().map(|key| key.as_str().to_string()).collect(),
    }
}
