// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type.
//!
//! This module provides the `ConfigValue` type, which wraps resolved
//! configuration values. Values are opaque strings; interpreting them is
//! left to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A wrapper for resolved configuration values.
///
/// `ConfigValue` stores configuration values as strings. Environment sources
/// return a uniform type while the registry decides presence and fallback;
/// no coercion to other types is performed.
///
/// # Examples
///
/// ```
/// use envreg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::new("3000".to_string());
/// assert_eq!(value.as_str(), "3000");
/// assert!(!value.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envreg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::new("hello".to_string());
    /// assert_eq!(value.as_str(), "hello");
    /// ```
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use envreg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("world");
    /// assert_eq!(value.as_str(), "world");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envreg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("test");
    /// assert_eq!(value.as_string(), "test");
    /// ```
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Converts the `ConfigValue` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the value is the empty string.
    ///
    /// An empty environment variable counts as absent for lookup purposes.
    ///
    /// # Examples
    ///
    /// ```
    /// use envreg::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("").is_empty());
    /// assert!(!ConfigValue::from("x").is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_value_new() {
        let value = ConfigValue::new("test".to_string());
        assert_eq!(value.as_str(), "test");
    }

    #[test]
    fn test_config_value_from_str() {
        let value = ConfigValue::from("test");
        assert_eq!(value.as_str(), "test");
    }

    #[test]
    fn test_config_value_from_string() {
        let value = ConfigValue::from("test".to_string());
        assert_eq!(value.as_str(), "test");
    }

    #[test]
    fn test_as_string() {
        let value = ConfigValue::from("test");
        assert_eq!(value.as_string(), "test");
    }

    #[test]
    fn test_into_string() {
        let value = ConfigValue::from("test");
        assert_eq!(value.into_string(), "test");
    }

    #[test]
    fn test_display() {
        let value = ConfigValue::from("test");
        assert_eq!(format!("{}", value), "test");
    }

    #[test]
    fn test_equality() {
        let value1 = ConfigValue::from("test");
        let value2 = ConfigValue::from("test");
        let value3 = ConfigValue::from("other");

        assert_eq!(value1, value2);
        assert_ne!(value1, value3);
    }

    #[test]
    fn test_as_ref() {
        let value = ConfigValue::from("test");
        let s: &str = value.as_ref();
        assert_eq!(s, "test");
    }

    #[test]
    fn test_string_from_config_value() {
        let value = ConfigValue::from("test");
        let s: String = value.into();
        assert_eq!(s, "test");
    }

    #[test]
    fn test_empty_string() {
        let value = ConfigValue::from("");
        assert!(value.is_empty());
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let value = ConfigValue::from("  spaces  ");
        assert!(!value.is_empty());
        assert_eq!(value.as_str(), "  spaces  ");
    }
}
