// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loader facade over an environment-definition file.
//!
//! This module provides the `EnvLoader`, which merges a `.env` file into
//! the process environment via the `dotenvy` crate and then constructs an
//! [`EnvRegistry`] over the result. Parsing the file format is delegated
//! entirely to `dotenvy`; this facade only normalizes the path, invokes
//! the loader, and builds the registry.

use crate::adapters::ProcessEnv;
use crate::domain::{ConfigError, ErrorPolicy, Result};
use crate::service::{EnvRegistry, EnvRegistryBuilder};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Facade that populates the process environment from a `.env` file and
/// constructs a validated [`EnvRegistry`] over it.
///
/// The facade has no persistent state of its own: `load` consumes the
/// builder and returns the registry. A missing `.env` file is tolerated as
/// a no-op, so the same call site works in development (file present) and
/// in production (environment injected by the platform).
///
/// # Examples
///
/// ```rust,no_run
/// use envreg::prelude::*;
/// use envreg::domain::ErrorPolicy;
///
/// # fn main() -> envreg::domain::Result<()> {
/// let registry = EnvLoader::new()
///     .env_file(".env")
///     .declared_keys(["PORT", "CLIENT_URL", "COOKIE_AGE"])
///     .required_keys(["CLIENT_URL"])
///     .default_value("PORT", "3000")
///     .policy(ErrorPolicy::WarnAndContinue)
///     .load()?;
///
/// let url = registry.get_str("CLIENT_URL")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct EnvLoader {
    declared_keys: Vec<String>,
    required_keys: Vec<String>,
    defaults: HashMap<String, String>,
    policy: ErrorPolicy,
    include_defaults: bool,
    env_file: Option<PathBuf>,
}

impl EnvLoader {
    /// Creates a new loader with no `.env` file, the default `Raise`
    /// policy, and defaults not included.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader pointed at a `.env` file in the OS-appropriate
    /// configuration directory for the given application.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use envreg::service::EnvLoader;
    ///
    /// let loader = EnvLoader::from_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::EnvFile {
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(Self::new().env_file(proj_dirs.config_dir().join(".env")))
    }

    /// Sets the path to the environment-definition file.
    pub fn env_file(mut self, path: impl AsRef<Path>) -> Self {
        self.env_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Declares the keys the caller cares about.
    pub fn declared_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Declares the required subset of keys.
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

    /// Sets the error policy for the constructed registry.
    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the instance-level default-inclusion flag for the constructed
    /// registry.
    pub fn include_defaults(mut self, enabled: bool) -> Self {
        self.include_defaults = enabled;
        self
    }

    /// Merges the `.env` file (if any) into the process environment and
    /// constructs the registry.
    ///
    /// Variables already present in the process environment are not
    /// overwritten by the file; that precedence is `dotenvy`'s.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvFile`] when the file exists but cannot be
    /// parsed or read. A missing file is not an error. Required-key
    /// validation failures propagate from [`EnvRegistry`] per the
    /// configured policy.
    pub fn load(self) -> Result<EnvRegistry> {
        if let Some(path) = &self.env_file {
            Self::merge_env_file(path)?;
        }

        EnvRegistryBuilder::new()
            .source(Box::new(ProcessEnv::new()))
            .declared_keys(self.declared_keys)
            .required_keys(self.required_keys)
            .defaults(self.defaults)
            .policy(self.policy)
            .include_defaults(self.include_defaults)
            .build()
    }

    /// Invokes `dotenvy` against the normalized path.
    ///
    /// Error messages never include raw `.env` line contents, so a
    /// malformed line cannot leak a secret into logs.
    fn merge_env_file(path: &Path) -> Result<()> {
        let normalized = Self::normalize_path(path);

        match dotenvy::from_path(&normalized) {
            Ok(()) => {
                tracing::debug!(
                    "Merged environment file into process environment: {}",
                    normalized.display()
                );
                Ok(())
            }
            Err(e) if Self::is_not_found(&e) => {
                tracing::debug!(
                    "No environment file at {}, continuing with process environment",
                    normalized.display()
                );
                Ok(())
            }
            Err(dotenvy::Error::LineParse(_, index)) => Err(ConfigError::EnvFile {
                message: format!(
                    "Parse error at entry {} of {}",
                    index,
                    normalized.display()
                ),
                source: None,
            }),
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::EnvFile {
                message: format!("Failed to read {}", normalized.display()),
                source: Some(Box::new(io_err)),
            }),
            Err(e) => Err(ConfigError::EnvFile {
                message: format!("Failed to load {}", normalized.display()),
                source: Some(Box::new(e)),
            }),
        }
    }

    /// Normalizes a path to a canonical form.
    ///
    /// Canonicalization requires the file to exist; a missing file falls
    /// back to lexical absolutization so the not-found case still reports
    /// a full path.
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize()
            .or_else(|_| std::path::absolute(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }

    /// Checks if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Deprecated wrapper retaining the older class-shaped calling convention.
///
/// Earlier call sites constructed a configuration object and read the
/// registry from a single named field. The wrapper carries no additional
/// logic or validation.
///
/// # Examples
///
/// ```rust,no_run
/// # #![allow(deprecated)]
/// use envreg::service::{EnvLoader, LegacyEnv};
///
/// # fn main() -> envreg::domain::Result<()> {
/// let wrapper = LegacyEnv::new(EnvLoader::new().declared_keys(["PORT"]))?;
/// let value = wrapper.registry.get_str("PORT")?;
/// # Ok(())
/// # }
/// ```
#[deprecated(
    since = "0.2.0",
    note = "call `EnvLoader::load` and use the returned `EnvRegistry` directly"
)]
pub struct LegacyEnv {
    /// The registry produced by the loader facade.
    pub registry: EnvRegistry,
}

#[allow(deprecated)]
impl LegacyEnv {
    /// Runs the loader and stores the resulting registry.
    pub fn new(loader: EnvLoader) -> Result<Self> {
        Ok(Self {
            registry: loader.load()?,
        })
    }
}
