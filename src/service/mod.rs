// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the registry and the loader facade.
//!
//! This module contains the `EnvRegistry`, which validates required keys
//! and resolves lookups against a live environment source, and the
//! `EnvLoader` facade, which populates the process environment from a
//! `.env` file before constructing a registry.

pub mod registry;

#[cfg(feature = "dotenv")]
pub mod loader;

// Re-export commonly used types
pub use registry::{EnvRegistry, EnvRegistryBuilder};

#[cfg(feature = "dotenv")]
pub use loader::EnvLoader;

#[cfg(feature = "dotenv")]
#[allow(deprecated)]
pub use loader::LegacyEnv;
