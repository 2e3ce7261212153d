// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command execution.
//!
//! ```text
//! git(args, cwd) --> ProcessBuilder --> git CLI
//! ```
//!
//! ALWAYS sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so a
//! missing credential fails the command instead of blocking on a prompt.
//!
//! A non-zero exit is NOT an error at this layer; the exit code and captured
//! streams come back in the `CommandResult` and each caller decides what a
//! failure means. Only launch problems (git not installed, spawn failure)
//! surface as errors here.

use std::path::Path;

use tokio_util::sync::CancellationToken;

use crate::core::process::builder::{CommandResult, ProcessBuilder, ProcessFlags};
use crate::error::Result;

/// Run a git command in `cwd`, capturing stdout and stderr.
///
/// # Errors
///
/// Returns an error only if the git executable cannot be found or the
/// process cannot be spawned.
pub async fn git(args: &[&str], cwd: &Path) -> Result<CommandResult> {
    git_with_cancellation(args, cwd, CancellationToken::new()).await
}

/// Run a git command with cancellation support.
///
/// # Errors
///
/// Same as [`git`]; a cancelled command is returned with the interrupted
/// flag set, not as an error.
pub async fn git_with_cancellation(
    args: &[&str],
    cwd: &Path,
    token: CancellationToken,
) -> Result<CommandResult> {
    ProcessBuilder::which("git")?
        .args(args)
        .cwd(cwd)
        .env("GCM_INTERACTIVE", "never")
        .env("GIT_TERMINAL_PROMPT", "0")
        .flag(ProcessFlags::ALLOW_FAILURE)
        .capture_output()
        .name("git")
        .run_with_cancellation(token)
        .await
}
