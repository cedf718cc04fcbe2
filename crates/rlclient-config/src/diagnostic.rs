// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration diagnostics with fuzzy match suggestions.
//!
//! Load failures and option warnings are miette diagnostics so the CLI can
//! render them with help text. Unknown option names get a "did you mean?"
//! suggestion using Jaro-Winkler string similarity.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::Diagnostic;
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// A configuration error with diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// The configuration source could not be parsed.
    #[error("failed to load configuration: {message}")]
    #[diagnostic(code(rlclient::config::load))]
    Load {
        /// Rendered figment error.
        message: String,
    },

    /// The requested configuration file does not exist.
    #[error("configuration file not found: {path}")]
    #[diagnostic(
        code(rlclient::config::file_not_found),
        help("pass an existing TOML file with --config")
    )]
    FileNotFound {
        /// Path that was looked up.
        path: String,
    },

    /// A value cannot be represented as a flat option.
    #[error("unsupported value for `{key}`: {detail}")]
    #[diagnostic(code(rlclient::config::unsupported_value))]
    UnsupportedValue {
        /// Dotted option name.
        key: String,
        /// What was wrong with the value.
        detail: String,
    },

    /// An option name close to, but not equal to, a well-known option.
    #[error("unrecognized option `{key}`")]
    #[diagnostic(
        code(rlclient::config::unknown_key),
        severity(Warning),
        help("did you mean `{suggestion}`?")
    )]
    UnknownKey {
        /// The option as written.
        key: String,
        /// The closest well-known option.
        suggestion: String,
    },

    /// A semantic validation error for an option value.
    #[error("validation error: {message}")]
    #[diagnostic(code(rlclient::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn from_figment(err: figment::Error) -> Self {
        ConfigError::Load {
            message: err.to_string(),
        }
    }
}

/// Suggest a similar key name using Jaro-Winkler string similarity.
///
/// Returns the best match above the similarity threshold, or `None` if
/// no valid key is close enough to the unknown key.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    let mut best_score = SUGGESTION_THRESHOLD;
    let mut best_match = None;

    for &key in valid_keys {
        let score = strsim::jaro_winkler(unknown, key);
        if score > best_score {
            best_score = score;
            best_match = Some(key.to_string());
        }
    }

    best_match
}

/// Render a list of `ConfigError`s to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_option_name() {
        let valid = &["observation.file.name", "interaction.file.name"];
        assert_eq!(
            suggest_key("observation.file.nmae", valid),
            Some("observation.file.name".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_distant_name() {
        let valid = &["observation.file.name", "model.implementation"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn unknown_key_is_a_warning() {
        let err = ConfigError::UnknownKey {
            key: "model.implementaton".into(),
            suggestion: "model.implementation".into(),
        };
        assert_eq!(err.severity(), Some(miette::Severity::Warning));
        assert!(err.help().is_some());
    }
}
