// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-load validation for well-known options.
//!
//! Arbitrary options are allowed (platform factories read their own), so
//! only the options the built-in factories depend on are checked.

use crate::configuration::Configuration;
use crate::constants::name;
use crate::diagnostic::{ConfigError, suggest_key};

/// Validate well-known options for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &Configuration) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Options that must not be blank when present
    for option in name::ALL {
        if let Some(value) = config.get_opt(option)
            && value.trim().is_empty()
        {
            errors.push(ConfigError::Validation {
                message: format!("{option} must not be empty"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Returns a warning for every option that looks like a misspelling of a
/// well-known option.
pub fn unrecognized_options(config: &Configuration) -> Vec<ConfigError> {
    config
        .iter()
        .filter(|(key, _)| !name::ALL.contains(key))
        .filter_map(|(key, _)| {
            suggest_key(key, name::ALL).map(|suggestion| ConfigError::UnknownKey {
                key: key.to_string(),
                suggestion,
            })
        })
        .collect()
}
