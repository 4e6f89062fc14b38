// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for basic registry operations.
//!
//! These tests verify that the registry resolves values correctly over
//! both the in-memory and live process environment sources.

use envreg::adapters::{MapEnv, ProcessEnv};
use envreg::domain::{ConfigError, ErrorPolicy};
use envreg::service::EnvRegistry;
use std::env;

/// Helper to set and clean up environment variables
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

    fn unset(&mut self, key: &str) {
        env::remove_var(key);
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
fn test_declared_keys_with_defaults_scenario() {
    let source = MapEnv::new().with_value("CLIENT_URL", "https://x.test");

    let registry = EnvRegistry::builder()
        .source(Box::new(source))
        .declared_keys(["PORT", "CLIENT_URL", "COOKIE_AGE"])
        .required_keys(["CLIENT_URL"])
        .default_value("PORT", "3000")
        .default_value("COOKIE_AGE", "604800")
        .build()
        .unwrap();

    assert_eq!(
        registry.get_str("CLIENT_URL").unwrap().unwrap().as_str(),
        "https://x.test"
    );
    assert!(registry.get_str("PORT").unwrap().is_none());
    assert_eq!(
        registry.get_str_with("PORT", true).unwrap().unwrap().as_str(),
        "3000"
    );
    assert_eq!(
        registry
            .get_str_with("COOKIE_AGE", true)
            .unwrap()
            .unwrap()
            .as_str(),
        "604800"
    );
}

#[test]
fn test_missing_required_key_fails_construction() {
    let result = EnvRegistry::builder()
        .source(Box::new(MapEnv::new()))
        .required_keys(["ENVREG_IT_ABSENT_CLIENT_URL"])
        .policy(ErrorPolicy::Raise)
        .build();

    let err = result.err().expect("construction should fail");
    assert!(matches!(err, ConfigError::MissingRequiredKeys { .. }));
    assert!(err.to_string().contains("ENVREG_IT_ABSENT_CLIENT_URL"));
}

#[test]
fn test_required_key_lookup_returns_value() {
    let source = MapEnv::new().with_value("DATABASE_URL", "postgres://db");

    let registry = EnvRegistry::builder()
        .source(Box::new(source))
        .declared_keys(["DATABASE_URL"])
        .required_keys(["DATABASE_URL"])
        .build()
        .unwrap();

    let value = registry.get_str("DATABASE_URL").unwrap();
    assert_eq!(value.unwrap().as_str(), "postgres://db");
}

#[test]
fn test_lookup_reads_live_process_environment() {
    let mut guard = EnvGuard::new();
    guard.set("ENVREG_IT_LIVE_KEY", "before");

    let registry = EnvRegistry::builder()
        .source(Box::new(ProcessEnv::new()))
        .declared_keys(["ENVREG_IT_LIVE_KEY"])
        .build()
        .unwrap();

    assert_eq!(
        registry.get_str("ENVREG_IT_LIVE_KEY").unwrap().unwrap().as_str(),
        "before"
    );

    // The registry holds no cached value; the mutation is visible on the
    // next lookup.
    guard.set("ENVREG_IT_LIVE_KEY", "after");
    assert_eq!(
        registry.get_str("ENVREG_IT_LIVE_KEY").unwrap().unwrap().as_str(),
        "after"
    );
}

#[test]
fn test_required_key_unset_after_construction_resolves_to_none() {
    let mut guard = EnvGuard::new();
    guard.set("ENVREG_IT_REQUIRED_THEN_UNSET", "present");

    let registry = EnvRegistry::builder()
        .source(Box::new(ProcessEnv::new()))
        .required_keys(["ENVREG_IT_REQUIRED_THEN_UNSET"])
        .build()
        .unwrap();

    guard.unset("ENVREG_IT_REQUIRED_THEN_UNSET");

    // The required-key guarantee is enforced at construction only; a later
    // unset yields the missing sentinel, not a required-key error.
    let value = registry.get_str("ENVREG_IT_REQUIRED_THEN_UNSET").unwrap();
    assert!(value.is_none());
}

#[test]
fn test_builder_defaults_to_process_environment() {
    let mut guard = EnvGuard::new();
    guard.set("ENVREG_IT_DEFAULT_SOURCE_KEY", "from-process");

    let registry = EnvRegistry::builder()
        .declared_keys(["ENVREG_IT_DEFAULT_SOURCE_KEY"])
        .build()
        .unwrap();

    assert_eq!(
        registry
            .get_str("ENVREG_IT_DEFAULT_SOURCE_KEY")
            .unwrap()
            .unwrap()
            .as_str(),
        "from-process"
    );
}

#[test]
fn test_empty_process_value_falls_back_to_default() {
    let mut guard = EnvGuard::new();
    guard.set("ENVREG_IT_EMPTY_VALUE_KEY", "");

    let registry = EnvRegistry::builder()
        .source(Box::new(ProcessEnv::new()))
        .declared_keys(["ENVREG_IT_EMPTY_VALUE_KEY"])
        .default_value("ENVREG_IT_EMPTY_VALUE_KEY", "fallback")
        .build()
        .unwrap();

    assert!(registry.get_str("ENVREG_IT_EMPTY_VALUE_KEY").unwrap().is_none());
    assert_eq!(
        registry
            .get_str_with("ENVREG_IT_EMPTY_VALUE_KEY", true)
            .unwrap()
            .unwrap()
            .as_str(),
        "fallback"
    );
}

#[test]
fn test_known_keys_snapshot_does_not_track_later_mutations() {
    let registry = EnvRegistry::builder()
        .source(Box::new(ProcessEnv::new()))
        .build()
        .unwrap();

    let mut guard = EnvGuard::new();
    guard.set("ENVREG_IT_SET_AFTER_CONSTRUCTION", "late");

    // The known set is fixed at construction, but lookups still observe
    // the live value.
    assert!(!registry.is_known("ENVREG_IT_SET_AFTER_CONSTRUCTION"));
    assert_eq!(
        registry
            .get_str("ENVREG_IT_SET_AFTER_CONSTRUCTION")
            .unwrap()
            .unwrap()
            .as_str(),
        "late"
    );
}

#[test]
fn test_instance_default_inclusion_mode() {
    let registry = EnvRegistry::builder()
        .source(Box::new(MapEnv::new()))
        .declared_keys(["PORT"])
        .default_value("PORT", "3000")
        .include_defaults(true)
        .build()
        .unwrap();

    // Callers binding the "defaults always included" mode once can omit
    // the flag on every lookup thereafter.
    assert_eq!(registry.get_str("PORT").unwrap().unwrap().as_str(), "3000");
}
