// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! rlclient - inspect the factory registries and dry-run creation.
//!
//! This is the binary entry point. `list` prints the registered keys of all
//! four capability axes; `check` loads a configuration and creates the
//! implementation each `*.implementation` option names.

mod check;
mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rlclient_factory::FactoryGuard;

/// rlclient - plugin factory registry tooling.
#[derive(Parser, Debug)]
#[command(name = "rlclient", version, about, long_about = None)]
struct Cli {
    /// Log level for the `rlclient` crates (overridden by `RUST_LOG`).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the keys registered for each capability axis.
    List,
    /// Create every implementation named by a configuration.
    Check {
        /// Configuration file (TOML). Without it, only `RLCLIENT_*`
        /// environment variables are read.
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Some(Commands::List) => {
            let guard = FactoryGuard::acquire();
            print!("{}", list::render(&guard));
        }
        Some(Commands::Check { config, plain }) => {
            let config = match check::load_configuration(config.as_deref()) {
                Ok(config) => config,
                Err(errors) => {
                    rlclient_config::render_errors(&errors);
                    std::process::exit(1);
                }
            };
            let guard = FactoryGuard::acquire();
            let results = check::run_checks(&config, &guard);
            let failures = check::print_results(&results, plain);
            drop(guard);
            if failures > 0 {
                std::process::exit(1);
            }
        }
        None => {
            println!("rlclient: use --help for available commands");
        }
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rlclient={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
