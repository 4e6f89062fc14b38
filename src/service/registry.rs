// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment registry implementation.
//!
//! This module provides the `EnvRegistry`, which holds the declared key
//! set, the required-key subset, the default-value table, and the error
//! policy. Required keys are validated once, at construction; lookups
//! resolve against the live environment source on every call.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, ErrorPolicy, Result};
use crate::ports::EnvSource;
use std::collections::{HashMap, HashSet};

/// A validated registry over a live environment source.
///
/// The registry computes its known key set once at construction, as the
/// union of the caller-declared keys and the keys present in the source at
/// that moment. Each required key is checked for membership in the known
/// set; missing keys are collected into a single report whose handling is
/// governed by the registry's [`ErrorPolicy`].
///
/// Lookups always re-read the current value from the source. A present,
/// non-empty value is returned as-is; an absent or empty value either
/// falls back to the registered default (when default inclusion is
/// requested) or resolves to `None`, the "checked and missing" sentinel.
///
/// # Examples
///
/// ```rust
/// use envreg::prelude::*;
///
/// # fn main() -> envreg::domain::Result<()> {
/// let source = MapEnv::new().with_value("CLIENT_URL", "https://x.test");
///
/// let registry = EnvRegistry::builder()
///     .source(Box::new(source))
///     .declared_keys(["PORT", "CLIENT_URL", "COOKIE_AGE"])
///     .required_keys(["CLIENT_URL"])
///     .default_value("PORT", "3000")
///     .build()?;
///
/// assert_eq!(registry.get_str("CLIENT_URL")?.unwrap().as_str(), "https://x.test");
/// assert!(registry.get_str("PORT")?.is_none());
/// assert_eq!(registry.get_str_with("PORT", true)?.unwrap().as_str(), "3000");
/// # Ok(())
/// # }
/// ```
pub struct EnvRegistry {
    /// Live environment source, re-read at every lookup
    source: Box<dyn EnvSource>,
    /// Union of declared keys and source keys at construction time
    known_keys: HashSet<String>,
    /// Caller-declared required keys, in declaration order
    required_keys: Vec<String>,
    /// Fallback values for non-required declared keys
    defaults: HashMap<String, String>,
    /// Propagation policy for validation and lookup failures
    policy: ErrorPolicy,
    /// Instance-level default-inclusion flag for the short-form lookup
    include_defaults: bool,
}

impl EnvRegistry {
    /// Creates a new registry builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envreg::service::EnvRegistry;
    ///
    /// # fn main() -> envreg::domain::Result<()> {
    /// let registry = EnvRegistry::builder().build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> EnvRegistryBuilder {
        EnvRegistryBuilder::new()
    }

    /// Creates a registry, validating required keys against the known set.
    ///
    /// The known key set is the union of `declared_keys` and the keys the
    /// source reports at this moment; it is computed once and never
    /// recomputed. Every missing required key is collected before the
    /// policy decides the outcome: `Raise` fails construction with a
    /// [`ConfigError::MissingRequiredKeys`] naming all of them,
    /// `WarnAndContinue` logs the same enumeration and continues, and
    /// `Silent` continues with no signal.
    ///
    /// # Arguments
    ///
    /// * `source` - The live environment source
    /// * `declared_keys` - The full set of keys the caller cares about
    /// * `required_keys` - Subset of declared keys whose presence is mandatory
    /// * `defaults` - Fallback values for non-required declared keys
    /// * `policy` - Propagation policy for validation and lookup failures
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredKeys`] under the `Raise`
    /// policy when one or more required keys are absent from the known set.
    pub fn new(
        source: Box<dyn EnvSource>,
        declared_keys: Vec<String>,
        required_keys: Vec<String>,
        defaults: HashMap<String, String>,
        policy: ErrorPolicy,
    ) -> Result<Self> {
        Self::with_options(source, declared_keys, required_keys, defaults, policy, false)
    }

    /// Creates a registry with an explicit instance-level default-inclusion
    /// flag. See [`EnvRegistry::new`] for the validation semantics.
    pub fn with_options(
        source: Box<dyn EnvSource>,
        declared_keys: Vec<String>,
        required_keys: Vec<String>,
        defaults: HashMap<String, String>,
        policy: ErrorPolicy,
        include_defaults: bool,
    ) -> Result<Self> {
        let mut known_keys: HashSet<String> = declared_keys.into_iter().collect();

        match source.keys() {
            Ok(keys) => known_keys.extend(keys.into_iter().map(ConfigKey::into_string)),
            Err(e) => match policy {
                ErrorPolicy::Raise => return Err(e),
                ErrorPolicy::WarnAndContinue => {
                    tracing::warn!(
                        "Failed to enumerate keys from source '{}': {}",
                        source.name(),
                        e
                    );
                }
                ErrorPolicy::Silent => {}
            },
        }

        let missing: Vec<String> = required_keys
            .iter()
            .filter(|key| !known_keys.contains(key.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() {
            match policy {
                ErrorPolicy::Raise => {
                    return Err(ConfigError::MissingRequiredKeys { keys: missing })
                }
                ErrorPolicy::WarnAndContinue => {
                    tracing::warn!("Missing required configuration keys: {}", missing.join(", "));
                }
                ErrorPolicy::Silent => {}
            }
        }

        Ok(Self {
            source,
            known_keys,
            required_keys,
            defaults,
            policy,
            include_defaults,
        })
    }

    /// Retrieves the current value for a key, using the instance-level
    /// default-inclusion flag.
    ///
    /// Equivalent to `get_with(key, self.defaults_included())`.
    pub fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        self.get_with(key, self.include_defaults)
    }

    /// Retrieves the current value for a key.
    ///
    /// The source is consulted on every call; no resolved value is cached.
    /// A present, non-empty value is returned regardless of
    /// `include_default`. When the value is absent or empty:
    ///
    /// - with `include_default` set, the registered default is returned; a
    ///   key with no registered default is a lookup failure, handled per
    ///   the registry's policy
    /// - otherwise the result is `Ok(None)`, distinguishing "checked and
    ///   missing" from an error
    ///
    /// Required keys are not re-verified here. If the environment is
    /// mutated after construction to unset a required key, the lookup
    /// resolves to `Ok(None)` rather than re-raising the required-key
    /// violation.
    ///
    /// # Errors
    ///
    /// Under the `Raise` policy, source failures and missing-default
    /// lookups propagate as errors. Under `WarnAndContinue` and `Silent`
    /// the failure is substituted with `Ok(None)`, with and without a
    /// diagnostic respectively.
    pub fn get_with(&self, key: &ConfigKey, include_default: bool) -> Result<Option<ConfigValue>> {
        if !self.known_keys.contains(key.as_str()) {
            tracing::debug!("Looking up key '{}' outside the known key set", key);
        }

        match self.resolve(key, include_default) {
            Ok(value) => Ok(value),
            Err(e) => match self.policy {
                ErrorPolicy::Raise => Err(e),
                ErrorPolicy::WarnAndContinue => {
                    tracing::warn!("Lookup failed for configuration key '{}': {}", key, e);
                    Ok(None)
                }
                ErrorPolicy::Silent => Ok(None),
            },
        }
    }

    /// Retrieves the current value for a key string.
    ///
    /// Convenience wrapper over [`EnvRegistry::get`].
    pub fn get_str(&self, key: &str) -> Result<Option<ConfigValue>> {
        self.get(&ConfigKey::from(key))
    }

    /// Retrieves the current value for a key string with an explicit
    /// default-inclusion flag.
    ///
    /// Convenience wrapper over [`EnvRegistry::get_with`].
    pub fn get_str_with(&self, key: &str, include_default: bool) -> Result<Option<ConfigValue>> {
        self.get_with(&ConfigKey::from(key), include_default)
    }

    /// Resolves a key without applying the error policy.
    fn resolve(&self, key: &ConfigKey, include_default: bool) -> Result<Option<ConfigValue>> {
        if let Some(value) = self.source.get(key)? {
            if !value.is_empty() {
                return Ok(Some(value));
            }
        }

        if include_default {
            match self.defaults.get(key.as_str()) {
                Some(value) => Ok(Some(ConfigValue::from(value.as_str()))),
                None => Err(ConfigError::DefaultNotRegistered {
                    key: key.as_str().to_string(),
                }),
            }
        } else {
            Ok(None)
        }
    }

    /// Returns `true` if the key belongs to the known key set computed at
    /// construction time.
    ///
    /// The known set does not track later mutations of the environment.
    pub fn is_known(&self, key: &str) -> bool {
        self.known_keys.contains(key)
    }

    /// Returns the known key set computed at construction time.
    pub fn known_keys(&self) -> &HashSet<String> {
        &self.known_keys
    }

    /// Returns the declared required keys, in declaration order.
    pub fn required_keys(&self) -> &[String] {
        &self.required_keys
    }

    /// Returns `true` if the key has a registered default value.
    pub fn has_default(&self, key: &str) -> bool {
        self.defaults.contains_key(key)
    }

    /// Returns the registry's error policy.
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Returns the instance-level default-inclusion flag.
    pub fn defaults_included(&self) -> bool {
        self.include_defaults
    }
}

/// Builder for constructing an [`EnvRegistry`].
///
/// This builder provides a fluent interface for declaring keys, required
/// keys, defaults, and the error policy. When no source is supplied, the
/// live process environment is used.
///
/// # Examples
///
/// ```rust
/// use envreg::service::EnvRegistryBuilder;
/// use envreg::domain::ErrorPolicy;
///
/// # fn main() -> envreg::domain::Result<()> {
/// let registry = EnvRegistryBuilder::new()
///     .declared_keys(["PORT"])
///     .default_value("PORT", "3000")
///     .policy(ErrorPolicy::WarnAndContinue)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct EnvRegistryBuilder {
    source: Option<Box<dyn EnvSource>>,
    declared_keys: Vec<String>,
    required_keys: Vec<String>,
    defaults: HashMap<String, String>,
    policy: ErrorPolicy,
    include_defaults: bool,
}

impl EnvRegistryBuilder {
    /// Creates a new builder with the default `Raise` policy and defaults
    /// not included.
    pub fn new() -> Self {
        Self {
            source: None,
            declared_keys: Vec::new(),
            required_keys: Vec::new(),
            defaults: HashMap::new(),
            policy: ErrorPolicy::default(),
            include_defaults: false,
        }
    }

    /// Sets the environment source the registry resolves against.
    pub fn source(mut self, source: Box<dyn EnvSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Declares the keys the caller cares about.
    ///
    /// Declared keys join the known key set even when the environment does
    /// not currently define them.
    pub fn declared_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Declares the required subset of keys.
    ///
    /// Each required key is checked for membership in the known key set at
    /// build time; the outcome of a failed check is governed by the policy.
    pub fn required_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Registers a default value for a non-required declared key.
    pub fn default_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Replaces the default-value table wholesale.
    pub fn defaults(mut self, defaults: HashMap<String, String>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Sets the error policy.
    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the instance-level default-inclusion flag used by the
    /// short-form lookup.
    pub fn include_defaults(mut self, enabled: bool) -> Self {
        self.include_defaults = enabled;
        self
    }

    /// Builds the registry, running required-key validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredKeys`] under the `Raise`
    /// policy when one or more required keys are absent.
    pub fn build(self) -> Result<EnvRegistry> {
        let source = self
            .source
            .unwrap_or_else(|| Box::new(crate::adapters::ProcessEnv::new()));

        EnvRegistry::with_options(
            source,
            self.declared_keys,
            self.required_keys,
            self.defaults,
            self.policy,
            self.include_defaults,
        )
    }
}

impl Default for EnvRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
