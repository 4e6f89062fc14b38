// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! This module provides the `ConfigKey` type, which is a newtype wrapper around `String`
//! that provides type safety for environment keys and prevents accidental string confusion.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for environment configuration keys.
///
/// `ConfigKey` is a newtype that wraps a `String` to provide type safety when working
/// with environment keys. This prevents accidental mixing of configuration keys with
/// other string values and makes the API more self-documenting.
///
/// # Examples
///
/// ```
/// use envreg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("DATABASE_URL");
/// let key2 = ConfigKey::from("PORT".to_string());
///
/// assert_eq!(key.as_str(), "DATABASE_URL");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envreg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::new("APP_NAME".to_string());
    /// assert_eq!(key.as_str(), "APP_NAME");
    /// ```
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use envreg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("APP_VERSION");
    /// assert_eq!(key.as_str(), "APP_VERSION");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envreg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("APP_DEBUG");
    /// let inner = key.into_string();
    /// assert_eq!(inner, "APP_DEBUG");
    /// ```
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
