// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only key/value view handed to every factory function.
//!
//! Options are flat dotted names (`observation.file.name`) mapped to string
//! values. Typed accessors parse on read and always take a caller-supplied
//! default, so a factory never fails just because an option is unset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat string-keyed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, String>,
}

impl Configuration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`Configuration::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns the value of `name`, or `default` if unset.
    pub fn get<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.values.get(name).map(String::as_str).unwrap_or(default)
    }

    /// Returns the value of `name` if set.
    pub fn get_opt(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns `name` parsed as an integer, or `default` if unset or unparsable.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        self.parse_or(name, default)
    }

    /// Returns `name` parsed as a float, or `default` if unset or unparsable.
    pub fn get_float(&self, name: &str, default: f64) -> f64 {
        self.parse_or(name, default)
    }

    /// Returns `name` as a boolean (`true`/`false`, case-insensitive), or
    /// `default` if unset or unparsable.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.values.get(name) {
            None => default,
            Some(raw) if raw.eq_ignore_ascii_case("true") => true,
            Some(raw) if raw.eq_ignore_ascii_case("false") => false,
            Some(raw) => {
                tracing::warn!(option = name, value = %raw, "not a boolean, using default");
                default
            }
        }
    }

    /// Returns true if `name` has a value.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over all options in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of options set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no options are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn parse_or<T: std::str::FromStr>(&self, name: &str, default: T) -> T {
        match self.values.get(name) {
            None => default,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(option = name, value = %raw, "unparsable value, using default");
                default
            }),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
