// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing environment source implementations.
//!
//! This module contains concrete implementations of the `EnvSource` trait
//! defined in the ports layer. Each adapter provides the live environment
//! from a specific backing store.

pub mod map_env;
pub mod process_env;

// Re-export adapters
pub use map_env::MapEnv;
pub use process_env::ProcessEnv;
