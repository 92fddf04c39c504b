// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment accessor trait definition.
//!
//! This module defines the `EnvironmentAccessor` trait, the port through which the
//! resolver reads the process environment. Injecting it keeps the resolver a function
//! of its explicit inputs and lets tests substitute a fixed environment.

/// Read-only access to an environment snapshot.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a resolver can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use envlayer::ports::EnvironmentAccessor;
///
/// struct Fixed;
///
/// impl EnvironmentAccessor for Fixed {
///     fn get(&self, key: &str) -> Option<String> {
///         (key == "MODE").then(|| "test".to_string())
///     }
/// }
///
/// assert_eq!(Fixed.get("MODE").as_deref(), Some("test"));
/// assert_eq!(Fixed.get("OTHER"), None);
/// assert_eq!(Fixed.name(), "env");
/// ```
pub trait EnvironmentAccessor: Send + Sync {
    /// Returns the value of `key`, or `None` if it is not defined.
    ///
    /// A defined but empty variable must be returned as `Some(String::new())`; the
    /// resolver treats it as resolved.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns a short name for logging.
    fn name(&self) -> &str {
        "env"
    }
}

impl<E: EnvironmentAccessor + ?Sized> EnvironmentAccessor for &E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<E: EnvironmentAccessor + ?Sized> EnvironmentAccessor for Box<E> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
