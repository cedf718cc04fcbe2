// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `rlclient check` command implementation.
//!
//! Creates the implementation named by each `*.implementation` option (and
//! `model.source`) exactly as a client would at startup, without
//! initializing senders or fetching model data, and reports the result code
//! of each creation.

use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rlclient_config::constants::{name, value};
use rlclient_config::{ConfigError, Configuration};
use rlclient_core::{ClientError, ErrorCallback, Plugin, SUCCESS, TraceLogger};
use rlclient_factory::FactoryRegistries;

/// Status of a single creation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
}

/// Result of creating one configured implementation.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Option that names the implementation.
    pub option: &'static str,
    /// Factory key that was looked up.
    pub key: String,
    pub status: CheckStatus,
    /// `SUCCESS` or the error's result code.
    pub code: i32,
    pub message: String,
    pub duration: Duration,
}

/// Load the configuration for `check`.
///
/// Unrecognized options are reported as warnings but do not fail the load.
pub fn load_configuration(path: Option<&Path>) -> Result<Configuration, Vec<ConfigError>> {
    let config = match path {
        Some(path) => rlclient_config::load_and_validate(path)?,
        None => {
            let config = rlclient_config::load_config_from_env().map_err(|e| vec![e])?;
            rlclient_config::validate_config(&config)?;
            config
        }
    };

    let warnings = rlclient_config::unrecognized_options(&config);
    if !warnings.is_empty() {
        rlclient_config::render_errors(&warnings);
    }
    Ok(config)
}

/// Create every configured implementation, trace logger first so the
/// others receive it.
pub fn run_checks(config: &Configuration, registries: &FactoryRegistries) -> Vec<CheckResult> {
    let mut results = Vec::with_capacity(5);

    let key = config.get(name::TRACE_LOG_IMPLEMENTATION, value::NULL_TRACE_LOGGER);
    let start = Instant::now();
    let created = registries.create_trace_logger(key, config, None);
    let trace_logger: Option<Arc<dyn TraceLogger>> = created.as_ref().ok().cloned().flatten();
    results.push(outcome(
        name::TRACE_LOG_IMPLEMENTATION,
        key,
        start,
        created,
        |logger| match logger {
            Some(logger) => describe(logger.as_ref()),
            None => "no trace logger".to_string(),
        },
    ));
    let trace_logger = trace_logger.as_ref();

    let key = config.get(name::MODEL_IMPLEMENTATION, value::VW);
    let start = Instant::now();
    let created = registries.create_model(key, config, trace_logger);
    results.push(outcome(name::MODEL_IMPLEMENTATION, key, start, created, |m| {
        describe(m.as_ref())
    }));

    let key = config.get(name::MODEL_SRC, value::FILE_MODEL_DATA);
    let start = Instant::now();
    let created = registries.create_data_transport(key, config, trace_logger);
    results.push(outcome(name::MODEL_SRC, key, start, created, |t| {
        describe(t.as_ref())
    }));

    for (option, default_key) in [
        (
            name::INTERACTION_SENDER_IMPLEMENTATION,
            value::INTERACTION_FILE_SENDER,
        ),
        (
            name::OBSERVATION_SENDER_IMPLEMENTATION,
            value::OBSERVATION_FILE_SENDER,
        ),
    ] {
        let key = config.get(option, default_key);
        let start = Instant::now();
        let created = registries.create_sender(key, config, log_errors(option), trace_logger);
        results.push(outcome(option, key, start, created, |s| describe(s.as_ref())));
    }

    results
}

fn outcome<T>(
    option: &'static str,
    key: &str,
    start: Instant,
    created: Result<T, ClientError>,
    on_success: impl FnOnce(&T) -> String,
) -> CheckResult {
    let duration = start.elapsed();
    match created {
        Ok(object) => CheckResult {
            option,
            key: key.to_string(),
            status: CheckStatus::Pass,
            code: SUCCESS,
            message: on_success(&object),
            duration,
        },
        Err(e) => {
            tracing::debug!(option, key, error = %e, "creation failed");
            CheckResult {
                option,
                key: key.to_string(),
                status: CheckStatus::Fail,
                code: e.code(),
                message: e.to_string(),
                duration,
            }
        }
    }
}

fn describe<P: Plugin + ?Sized>(plugin: &P) -> String {
    format!("created {} v{}", plugin.name(), plugin.version())
}

fn log_errors(option: &'static str) -> ErrorCallback {
    Arc::new(move |err: &ClientError| {
        tracing::error!(option, error = %err, "sender reported an error");
    })
}

/// Print results and return the number of failures.
pub fn print_results(results: &[CheckResult], plain: bool) -> usize {
    use colored::Colorize;

    let use_color = !plain && std::io::stdout().is_terminal();
    let mut fail_count = 0;

    println!();
    println!("  rlclient check");
    println!("  {}", "-".repeat(60));

    for result in results {
        let duration_us = result.duration.as_micros();
        let target = format!("{} = {}", result.option, result.key);
        let line = match (result.status, use_color) {
            (CheckStatus::Pass, true) => format!(
                "    {} {target:<52} {} ({duration_us}us)",
                "✓".green(),
                result.message
            ),
            (CheckStatus::Pass, false) => format!(
                "    [OK]   {target:<52} {} ({duration_us}us)",
                result.message
            ),
            (CheckStatus::Fail, true) => format!(
                "    {} {target:<52} {} [code {}]",
                "✗".red(),
                result.message.red(),
                result.code
            ),
            (CheckStatus::Fail, false) => format!(
                "    [FAIL] {target:<52} {} [code {}]",
                result.message, result.code
            ),
        };
        if result.status == CheckStatus::Fail {
            fail_count += 1;
        }
        println!("{line}");
    }

    println!();
    if fail_count > 0 {
        let word = if fail_count == 1 { "failure" } else { "failures" };
        println!("  {fail_count} {word}.");
    } else {
        println!("  All implementations created.");
    }
    println!();

    fail_count
}
