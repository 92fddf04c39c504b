// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source loader trait definition.
//!
//! This module defines the `SourceLoader` trait, the port through which the resolver
//! checks that a fallback source exists and obtains its key-value pairs. The syntax
//! of the source is entirely the loader's concern.

use crate::domain::Result;
use std::collections::HashMap;
use std::path::Path;

/// Loads fallback sources into flat key-value maps.
///
/// # Examples
///
/// ```rust
/// use envlayer::ports::SourceLoader;
/// use envlayer::domain::Result;
/// use std::collections::HashMap;
/// use std::path::Path;
///
/// struct OneFile;
///
/// impl SourceLoader for OneFile {
///     fn exists(&self, path: &Path) -> bool {
///         path == Path::new("app.env")
///     }
///
///     fn load(&self, _path: &Path) -> Result<HashMap<String, String>> {
///         Ok(HashMap::from([("PORT".to_string(), "8080".to_string())]))
///     }
/// }
///
/// let loader = OneFile;
/// assert!(loader.exists(Path::new("app.env")));
/// assert_eq!(loader.load(Path::new("app.env")).unwrap()["PORT"], "8080");
/// ```
pub trait SourceLoader: Send + Sync {
    /// Returns true if a source exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Loads the source at `path`.
    ///
    /// Any error is reported by the resolver as a parse failure of that source.
    fn load(&self, path: &Path) -> Result<HashMap<String, String>>;
}

impl<L: SourceLoader + ?Sized> SourceLoader for &L {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn load(&self, path: &Path) -> Result<HashMap<String, String>> {
        (**self).load(path)
    }
}

impl<L: SourceLoader + ?Sized> SourceLoader for Box<L> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn load(&self, path: &Path) -> Result<HashMap<String, String>> {
        (**self).load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResolveError;

    struct Nothing;

    impl SourceLoader for Nothing {
        fn exists(&self, _path: &Path) -> bool {
            false
        }

        fn load(&self, path: &Path) -> Result<HashMap<String, String>> {
            Err(ResolveError::MissingSource {
                path: path.to_path_buf(),
            })
        }
    }

    #[test]
    fn test_reference_forwards() {
        let loader = Nothing;
        let by_ref: &dyn SourceLoader = &loader;
        assert!(!by_ref.exists(Path::new("x.env")));
        assert!(by_ref.load(Path::new("x.env")).is_err());
    }

    #[test]
    fn test_loader_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn SourceLoader>>();
    }
}
