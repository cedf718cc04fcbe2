// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `rlclient list` command implementation.

use std::fmt::Write;

use rlclient_core::Capability;
use rlclient_factory::FactoryRegistries;
use strum::IntoEnumIterator;

/// Render the registered keys of every axis, one axis per block.
pub fn render(registries: &FactoryRegistries) -> String {
    let mut out = String::new();
    for axis in Capability::iter() {
        let _ = writeln!(out, "{axis}:");
        let keys = registries.keys(axis);
        if keys.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for key in keys {
            let _ = writeln!(out, "  {key}");
        }
    }
    for error in registries.startup_errors() {
        let _ = writeln!(out, "startup error: {error}");
    }
    out
}
