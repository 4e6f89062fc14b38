// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment source trait definition.
//!
//! This module defines the `EnvSource` trait, the primary port (interface)
//! for reading the live environment. The registry depends on this trait
//! rather than on the process environment directly, so tests can supply a
//! fake mapping instead of mutating real process state.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// A trait for live environment sources.
///
/// This trait defines the read interface over a key/value environment.
/// Implementations return the *current* value for a key on every call;
/// the registry never caches resolved values.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded
/// contexts. The trait provides no synchronization of its own: the
/// underlying environment may be mutated externally, and `get` simply
/// observes whatever value is current at call time.
///
/// # Examples
///
/// ```rust
/// use envreg::ports::EnvSource;
/// use envreg::domain::{ConfigKey, ConfigValue, Result};
///
/// struct MySource;
///
/// impl EnvSource for MySource {
///     fn name(&self) -> &str {
///         "my-source"
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
///         Ok(None)
///     }
///
///     fn keys(&self) -> Result<Vec<ConfigKey>> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait EnvSource: Send + Sync {
    /// Returns the name of this environment source.
    ///
    /// This name is used for logging, error messages, and debugging. It
    /// should be a short, descriptive identifier like "process-env" or
    /// "map-env".
    fn name(&self) -> &str;

    /// Retrieves the current value for the given key.
    ///
    /// # Arguments
    ///
    /// * `key` - The configuration key to retrieve
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ConfigValue))` - The key is currently set
    /// * `Ok(None)` - The key is not set in this source
    /// * `Err(ConfigError)` - An error occurred
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use envreg::ports::EnvSource;
    /// # use envreg::domain::{ConfigKey, ConfigValue, Result};
    /// # struct MySource;
    /// # impl EnvSource for MySource {
    /// #     fn name(&self) -> &str { "my-source" }
    /// #     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
    /// #         if key.as_str() == "APP_NAME" {
    /// #             Ok(Some(ConfigValue::from("MyApp")))
    /// #         } else {
    /// #             Ok(None)
    /// #         }
    /// #     }
    /// #     fn keys(&self) -> Result<Vec<ConfigKey>> { Ok(vec![]) }
    /// # }
    /// let source = MySource;
    /// let key = ConfigKey::from("APP_NAME");
    /// let value = source.get(&key).unwrap();
    /// assert!(value.is_some());
    /// ```
    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>>;

    /// Returns all keys currently present in this source.
    ///
    /// The registry calls this once at construction to compute its known
    /// key set; the snapshot is not kept in sync with later mutations.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ConfigKey>)` - A list of all currently-set keys
    /// * `Err(ConfigError)` - An error occurred while enumerating keys
    fn keys(&self) -> Result<Vec<ConfigKey>>;

    /// Retrieves the current value for the given key string.
    ///
    /// This is a convenience method that automatically converts a string
    /// slice into a `ConfigKey`. It's equivalent to calling
    /// `get(&ConfigKey::from(key))`.
    fn get_str(&self, key: &str) -> Result<Option<ConfigValue>> {
        self.get(&ConfigKey::from(key))
    }
}
