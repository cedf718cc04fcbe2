// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for rlclient factories.
//!
//! Provides the flat [`Configuration`] view every factory reads its options
//! from, the well-known option names and implementation keys, and a Figment
//! based loader (TOML or JSON plus `RLCLIENT_` environment overrides) with
//! miette diagnostics.
//!
//! # Usage
//!
//! ```no_run
//! use rlclient_config::{constants::name, load_and_validate};
//!
//! let config = load_and_validate(std::path::Path::new("rlclient.toml")).expect("config errors");
//! println!("model: {}", config.get(name::MODEL_IMPLEMENTATION, "VW"));
//! ```

pub mod configuration;
pub mod constants;
pub mod diagnostic;
pub mod loader;
pub mod validation;

use std::path::Path;

pub use configuration::Configuration;
pub use diagnostic::{ConfigError, render_errors};
pub use loader::{
    load_config_from_env, load_config_from_json, load_config_from_path, load_config_from_str,
};
pub use validation::{unrecognized_options, validate_config};

/// Load configuration from a file with env overrides and validate it.
///
/// Returns either a valid `Configuration` or a list of diagnostic errors.
pub fn load_and_validate(path: &Path) -> Result<Configuration, Vec<ConfigError>> {
    let config = loader::load_config_from_path(path).map_err(|e| vec![e])?;
    validation::validate_config(&config)?;
    Ok(config)
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<Configuration, Vec<ConfigError>> {
    let config = loader::load_config_from_str(toml_content).map_err(|e| vec![e])?;
    validation::validate_config(&config)?;
    Ok(config)
}
