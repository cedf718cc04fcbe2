// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Sources are merged into a nested document and then flattened into dotted
//! option names, so `[observation.file] name = "x"` and
//! `"observation.file.name" = "x"` produce the same [`Configuration`].
//! Environment variables prefixed with `RLCLIENT_` override file values;
//! `__` in the variable name separates path segments
//! (`RLCLIENT_OBSERVATION__FILE__NAME` sets `observation.file.name`).

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Json, Toml},
};
use serde_json::Value;

use crate::configuration::Configuration;
use crate::diagnostic::ConfigError;

/// Prefix of environment variables that override configuration options.
pub const ENV_PREFIX: &str = "RLCLIENT_";

/// Load configuration from a TOML file with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. the file at `path`
/// 2. `RLCLIENT_*` environment variables
pub fn load_config_from_path(path: &Path) -> Result<Configuration, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let figment = Figment::new().merge(Toml::file(path)).merge(env_provider());
    extract(&figment)
}

/// Load configuration from environment variables only.
pub fn load_config_from_env() -> Result<Configuration, ConfigError> {
    extract(&Figment::new().merge(env_provider()))
}

/// Load configuration from a TOML string (no env overrides).
pub fn load_config_from_str(toml_content: &str) -> Result<Configuration, ConfigError> {
    extract(&Figment::new().merge(Toml::string(toml_content)))
}

/// Load configuration from a JSON string (no env overrides).
pub fn load_config_from_json(json_content: &str) -> Result<Configuration, ConfigError> {
    extract(&Figment::new().merge(Json::string(json_content)))
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).map(|key| key.as_str().replace("__", ".").into())
}

fn extract(figment: &Figment) -> Result<Configuration, ConfigError> {
    let document: Value = figment.extract().map_err(ConfigError::from_figment)?;
    let mut config = Configuration::new();
    flatten_into(&mut config, String::new(), document)?;
    tracing::debug!(options = config.len(), "configuration loaded");
    Ok(config)
}

fn flatten_into(config: &mut Configuration, prefix: String, value: Value) -> Result<(), ConfigError> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(config, path, child)?;
            }
        }
        Value::String(s) => config.set(prefix, s),
        Value::Bool(b) => config.set(prefix, b.to_string()),
        Value::Number(n) => config.set(prefix, n.to_string()),
        Value::Null => {}
        Value::Array(_) => {
            return Err(ConfigError::UnsupportedValue {
                key: prefix,
                detail: "arrays are not supported, use a scalar value".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_tables_flatten_to_dotted_names() {
        let config = load_config_from_str(
            r#"
[observation.file]
name = "obs.dat"

[model]
implementation = "VW"
"#,
        )
        .expect("valid toml");
        assert_eq!(config.get("observation.file.name", ""), "obs.dat");
        assert_eq!(config.get("model.implementation", ""), "VW");
    }

    #[test]
    fn scalars_are_stored_as_strings() {
        let config = load_config_from_str("batch_size = 32\nenabled = true\nratio = 0.5\n")
            .expect("valid toml");
        assert_eq!(config.get_int("batch_size", 0), 32);
        assert!(config.get_bool("enabled", false));
        assert_eq!(config.get("ratio", ""), "0.5");
    }

    #[test]
    fn json_source_is_accepted() {
        let config = load_config_from_json(r#"{"interaction.file.name": "int.dat"}"#)
            .expect("valid json");
        assert_eq!(config.get("interaction.file.name", ""), "int.dat");
    }

    #[test]
    fn arrays_are_rejected() {
        let err = load_config_from_str("hosts = [\"a\", \"b\"]\n").expect_err("arrays rejected");
        assert!(matches!(err, ConfigError::UnsupportedValue { ref key, .. } if key == "hosts"));
    }

    #[test]
    fn malformed_toml_is_a_load_error() {
        let err = load_config_from_str("model = [").expect_err("malformed");
        assert!(matches!(err, ConfigError::Load { .. }));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_config_from_path(Path::new("/definitely/not/here.toml"))
            .expect_err("missing file");
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn env_overrides_file_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "rlclient.toml",
                "[observation.file]\nname = \"from-file.dat\"\n",
            )?;
            jail.set_env("RLCLIENT_OBSERVATION__FILE__NAME", "from-env.dat");

            let config = load_config_from_path(Path::new("rlclient.toml"))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.get("observation.file.name", ""), "from-env.dat");
            Ok(())
        });
    }
}
