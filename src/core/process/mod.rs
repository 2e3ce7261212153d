// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .capture_output()
//!   .run() / .run_with_cancellation()
//!       --> tokio::process::Command
//!           stream stdout/stderr line by line
//!       --> CommandResult { exit_code, stdout, stderr, interrupted }
//! ```

pub mod builder;
mod runner;
