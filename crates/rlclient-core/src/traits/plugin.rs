// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait that every capability implementation must implement.

use crate::types::Capability;

/// The base trait for all capability implementations.
///
/// Provides identity information so that objects created through the
/// factory registry can be inspected without downcasting.
pub trait Plugin: Send + Sync + 'static {
    /// Returns the human-readable name of this implementation.
    fn name(&self) -> &str;

    /// Returns the semantic version of this implementation.
    fn version(&self) -> semver::Version;

    /// Returns the capability axis this implementation belongs to.
    fn capability(&self) -> Capability;
}
