// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --base DIR        ← scan.base override
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← global.log_file override
//!
//! Precedence: CLI flags > GITDECK_* env > --config > gitdeck.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Base directory scanned for git repositories.
    #[arg(short = 'd', long = "base", value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides in
    /// `section.key=value` form.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".to_string(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".to_string(), level.to_string()));
        }

        if let Some(path) = &self.log_file {
            overrides.push(("global.log_file".to_string(), path.display().to_string()));
        }

        if let Some(base) = &self.base {
            overrides.push(("scan.base".to_string(), base.display().to_string()));
        }

        overrides
    }
}
