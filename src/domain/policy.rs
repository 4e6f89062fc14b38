// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error policy governing all fallible operations.
//!
//! This module defines the `ErrorPolicy` enum, the single cross-cutting
//! switch that decides how construction-time validation failures and
//! lookup-time failures are surfaced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The propagation policy for fallible registry operations.
///
/// The policy is fixed per registry instance and applies uniformly to
/// required-key validation at construction and to value resolution at
/// lookup time. There is no per-operation override.
///
/// # Examples
///
/// ```
/// use envreg::domain::policy::ErrorPolicy;
///
/// let policy = ErrorPolicy::default();
/// assert_eq!(policy, ErrorPolicy::Raise);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Surface failures as errors, halting the triggering operation.
    #[default]
    Raise,
    /// Emit a diagnostic via `tracing::warn!`, then substitute a safe
    /// fallback and continue.
    WarnAndContinue,
    /// Substitute the same fallback with no diagnostic.
    Silent,
}

impl ErrorPolicy {
    /// Returns `true` if failures should be surfaced as errors.
    pub fn raises(&self) -> bool {
        matches!(self, ErrorPolicy::Raise)
    }

    /// Returns `true` if a diagnostic should be emitted on failure.
    pub fn warns(&self) -> bool {
        matches!(self, ErrorPolicy::WarnAndContinue)
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorPolicy::Raise => "raise",
            ErrorPolicy::WarnAndContinue => "warn-and-continue",
            ErrorPolicy::Silent => "silent",
        };
        write!(f, "{}", name)
    }
}
