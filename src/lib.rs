// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture environment configuration crate.
//!
//! This crate provides validated, typed access to process environment
//! configuration. A registry is constructed over a declared set of keys, a
//! required subset of those keys is checked once at construction time, and
//! individual lookups resolve against the live environment with an optional
//! fallback to caller-supplied defaults.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and business logic (`ConfigKey`,
//!   `ConfigValue`, `ErrorPolicy`, errors)
//! - **Ports**: Trait definitions that define interfaces (`EnvSource`)
//! - **Adapters**: Implementations for specific environment sources
//!   (process environment, in-memory maps)
//! - **Service**: The registry that validates and resolves keys, and the
//!   loader facade that populates the environment from a `.env` file
//!
//! # Features
//!
//! - **Required-Key Validation**: Every missing required key is collected
//!   and reported at construction, not discovered one lookup at a time
//! - **Error Policy**: A single tri-state switch (`Raise`,
//!   `WarnAndContinue`, `Silent`) governs both construction-time
//!   validation and lookup-time failures
//! - **Live Lookups**: Values are re-read from the environment at every
//!   lookup rather than cached at construction
//! - **Default Fallback**: Non-required keys may carry a registered
//!   default value, returned when the live value is absent or empty
//! - **Extensible**: Alternative environment sources via trait
//!   implementation
//!
//! # Feature Flags
//!
//! - `dotenv`: Enable the `.env`-file loader facade (default)
//!
//! # Quick Start
//!
//! ```rust
//! use envreg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let source = MapEnv::new().with_value("CLIENT_URL", "https://x.test");
//!
//! let registry = EnvRegistry::builder()
//!     .source(Box::new(source))
//!     .declared_keys(["PORT", "CLIENT_URL"])
//!     .required_keys(["CLIENT_URL"])
//!     .default_value("PORT", "3000")
//!     .build()?;
//!
//! let url = registry.get_str("CLIENT_URL")?;
//! assert_eq!(url.unwrap().as_str(), "https://x.test");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{MapEnv, ProcessEnv};
    pub use crate::domain::{ConfigError, ConfigKey, ConfigValue, ErrorPolicy, Result};
    pub use crate::ports::EnvSource;
    pub use crate::service::{EnvRegistry, EnvRegistryBuilder};

    #[cfg(feature = "dotenv")]
    pub use crate::service::EnvLoader;
}
