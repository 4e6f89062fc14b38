// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment source adapter.
//!
//! This module provides an adapter that reads the live process environment.
//! Reads are never cached: every `get` observes the value current at call
//! time, so external mutations of the environment are visible immediately.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::EnvSource;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Environment source adapter for the live process environment.
///
/// This adapter reads directly from `std::env` on every call. Key
/// enumeration snapshots the environment at the moment `keys` is invoked;
/// value lookups always return the current value.
///
/// # Examples
///
/// ```rust
/// use envreg::adapters::ProcessEnv;
/// use envreg::ports::EnvSource;
///
/// let source = ProcessEnv::new();
/// assert_eq!(source.name(), "process-env");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Creates a new process environment adapter.
    pub fn new() -> Self {
        ProcessEnv
    }
}

impl EnvSource for ProcessEnv {
    fn name(&self) -> &str {
        "process-env"
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        match env::var(key.as_str()) {
            Ok(value) => {
                // Validate input sizes to prevent DoS
                if value.len() > MAX_ENV_VALUE_LEN {
                    tracing::debug!(
                        "Skipping oversized environment variable '{}': value_len={} (max {})",
                        key,
                        value.len(),
                        MAX_ENV_VALUE_LEN
                    );
                    return Ok(None);
                }
                Ok(Some(ConfigValue::from(value)))
            }
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e @ env::VarError::NotUnicode(_)) => Err(ConfigError::SourceError {
                source_name: self.name().to_string(),
                message: format!("environment variable '{}' is not valid unicode", key),
                source: Some(Box::new(e)),
            }),
        }
    }

    fn keys(&self) -> Result<Vec<ConfigKey>> {
        // vars_os avoids the panic env::vars raises on non-unicode entries;
        // such entries are skipped rather than enumerated.
        let keys: Vec<ConfigKey> = env::vars_os()
            .filter_map(|(key, _)| key.into_string().ok())
            .filter(|key| {
                if key.len() > MAX_ENV_KEY_LEN {
                    tracing::debug!(
                        "Skipping oversized environment variable key: key_len={} (max {})",
                        key.len(),
                        MAX_ENV_KEY_LEN
                    );
                    return false;
                }
                true
            })
            .map(ConfigKey::from)
            .collect();

        tracing::debug!("Enumerated {} process environment keys", keys.len());

        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_process_env_name() {
        let source = ProcessEnv::new();
        assert_eq!(source.name(), "process-env");
    }

    #[test]
    fn test_process_env_get() {
        let mut guard = EnvGuard::new();
        guard.set("ENVREG_PROCESS_TEST_VAR", "test_value");

        let source = ProcessEnv::new();
        let key = ConfigKey::from("ENVREG_PROCESS_TEST_VAR");
        let value = source.get(&key).unwrap();

        assert!(value.is_some());
        assert_eq!(value.unwrap().as_str(), "test_value");
    }

    #[test]
    fn test_process_env_get_nonexistent() {
        let source = ProcessEnv::new();
        let key = ConfigKey::from("ENVREG_NONEXISTENT_VAR_12345");
        let value = source.get(&key).unwrap();

        assert!(value.is_none());
    }

    #[test]
    fn test_process_env_observes_current_value() {
        let mut guard = EnvGuard::new();
        guard.set("ENVREG_LIVE_TEST_VAR", "initial");

        let source = ProcessEnv::new();
        let key = ConfigKey::from("ENVREG_LIVE_TEST_VAR");
        assert_eq!(source.get(&key).unwrap().unwrap().as_str(), "initial");

        // No reload step: the next get sees the mutation directly.
        guard.set("ENVREG_LIVE_TEST_VAR", "updated");
        assert_eq!(source.get(&key).unwrap().unwrap().as_str(), "updated");
    }

    #[test]
    fn test_process_env_keys_contains_set_var() {
        let mut guard = EnvGuard::new();
        guard.set("ENVREG_KEYS_TEST_VAR", "value");

        let source = ProcessEnv::new();
        let keys = source.keys().unwrap();

        assert!(keys.contains(&ConfigKey::from("ENVREG_KEYS_TEST_VAR")));
    }

    #[test]
    fn test_process_env_keys_snapshot_excludes_unset() {
        let source = ProcessEnv::new();
        let keys = source.keys().unwrap();
        assert!(!keys.contains(&ConfigKey::from("ENVREG_NEVER_SET_VAR_98765")));
    }

    #[test]
    fn test_process_env_default() {
        let source = ProcessEnv::default();
        assert_eq!(source.name(), "process-env");
    }
}
