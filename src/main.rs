// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Repos | Branches | Status | Publish | Clone | Fetch | Pull | Options
//! ```

use std::process::ExitCode;

use gitdeck::cli::global::GlobalOptions;
use gitdeck::cli::{self, Command};
use gitdeck::cmd::clone::run_clone_command;
use gitdeck::cmd::config::run_options_command;
use gitdeck::cmd::inspect::{run_branches_command, run_status_command};
use gitdeck::cmd::list::run_repos_command;
use gitdeck::cmd::publish::run_publish_command;
use gitdeck::cmd::sync::{run_fetch_command, run_pull_command};
use gitdeck::config::Config;
use gitdeck::config::loader::ConfigLoader;
use gitdeck::logging::init_logging;
use gitdeck::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Repos) => load_config(&cli.global).map(|config| run_repos_command(&config)),
        Some(Command::Branches(args)) => match load_config(&cli.global) {
            Ok(config) => run_branches_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Status(args)) => match load_config(&cli.global) {
            Ok(config) => run_status_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Publish(args)) => match load_config(&cli.global) {
            Ok(config) => run_publish_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Clone(args)) => match load_config(&cli.global) {
            Ok(config) => run_clone_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Fetch(args)) => match load_config(&cli.global) {
            Ok(config) => run_fetch_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Pull(args)) => match load_config(&cli.global) {
            Ok(config) => run_pull_command(args, &config).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> gitdeck::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional("gitdeck.toml");
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader = loader.with_env_prefix("GITDECK");
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(&key, value)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> gitdeck::error::Result<Config> {
    let loader = build_config_loader(global)?;
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
