// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory map environment source adapter.
//!
//! This module provides a `HashMap`-backed environment source. It is the
//! recommended source for tests, where mutating the real process
//! environment would leak between test cases, and for embedding a fixed
//! environment in larger systems.

use crate::domain::{ConfigKey, ConfigValue, Result};
use crate::ports::EnvSource;
use std::collections::HashMap;

/// Environment source adapter backed by an in-memory map.
///
/// # Examples
///
/// ```rust
/// use envreg::adapters::MapEnv;
/// use envreg::ports::EnvSource;
///
/// let source = MapEnv::new()
///     .with_value("CLIENT_URL", "https://x.test")
///     .with_value("PORT", "8080");
///
/// let value = source.get_str("CLIENT_URL").unwrap();
/// assert_eq!(value.unwrap().as_str(), "https://x.test");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    values: HashMap<String, String>,
}

impl MapEnv {
    /// Creates a new empty map source.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Creates a map source from an existing `HashMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envreg::adapters::MapEnv;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("APP_NAME".to_string(), "demo".to_string());
    ///
    /// let source = MapEnv::from_map(values);
    /// ```
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Adds a key/value pair, consuming and returning the source.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Inserts a key/value pair in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a key in place.
    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Returns the number of entries in the source.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the source holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl EnvSource for MapEnv {
    fn name(&self) -> &str {
        "map-env"
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self
            .values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str())))
    }

    fn keys(&self) -> Result<Vec<ConfigKey>> {
        Ok(self
            .values
            .keys()
            .map(|k| ConfigKey::from(k.as_str()))
            .collect())
    }
}
