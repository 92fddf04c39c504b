// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved value type with typed conversions.
//!
//! Every source hands back plain strings. `ResolvedValue` keeps that string and offers
//! conversions to common Rust types at the point of use.

use crate::domain::errors::{ResolveError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A value obtained from the environment or from one of the fallback sources.
///
/// An empty string is a legitimate value; the unresolved state is modelled by the
/// absence of a `ResolvedValue`, never by an empty one.
///
/// # Examples
///
/// ```
/// use envlayer::domain::ResolvedValue;
///
/// let value = ResolvedValue::from("5432");
/// assert_eq!(value.as_str(), "5432");
/// assert_eq!(value.as_u64("DB_PORT").unwrap(), 5432);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedValue(String);

impl ResolvedValue {
    /// Creates a new `ResolvedValue` from a `String`.
    pub fn new(value: String) -> Self {
        ResolvedValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Converts the value to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// # Examples
    ///
    /// ```
    /// use envlayer::domain::ResolvedValue;
    ///
    /// assert!(ResolvedValue::from("yes").as_bool("FEATURE_X").unwrap());
    /// assert!(!ResolvedValue::from("OFF").as_bool("FEATURE_X").unwrap());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => self
                .0
                .parse::<bool>()
                .map_err(|e| ResolveError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| ResolveError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        self.0
            .parse::<u64>()
            .map_err(|e| ResolveError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.0
            .parse::<f64>()
            .map_err(|e| ResolveError::from_parse_float_error(key.to_string(), e))
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envlayer::domain::ResolvedValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ResolvedValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("BIND_ADDR").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ResolveError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ResolvedValue {
    fn from(s: String) -> Self {
        ResolvedValue(s)
    }
}

impl From<&str> for ResolvedValue {
    fn from(s: &str) -> Self {
        ResolvedValue(s.to_string())
    }
}

impl From<ResolvedValue> for String {
    fn from(value: ResolvedValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ResolvedValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
