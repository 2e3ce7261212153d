// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-command argument structs.
//!
//! ```text
//! branches/status/fetch/pull REPO
//! publish REPO [-b BRANCH] [-m MESSAGE]
//! clone URL
//! ```
//!
//! REPO is a path to a repository root, or a repository name resolved
//! against the scan base.

use clap::Args;
use std::path::PathBuf;

/// Arguments for commands that target one repository.
#[derive(Debug, Clone, Args)]
pub struct RepoArgs {
    /// Repository root path, or a repository name under the scan base.
    #[arg(value_name = "REPO")]
    pub repo: PathBuf,
}

/// Arguments for the publish command.
#[derive(Debug, Clone, Args)]
pub struct PublishArgs {
    /// Repository root path, or a repository name under the scan base.
    #[arg(value_name = "REPO")]
    pub repo: PathBuf,

    /// Branch to push. Defaults to the checked-out branch; a configured
    /// pinned branch overrides both.
    #[arg(short = 'b', long = "branch", value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Commit message. A generated message is used when omitted or blank.
    #[arg(short = 'm', long = "message", value_name = "MESSAGE")]
    pub message: Option<String>,
}

/// Arguments for the clone command.
#[derive(Debug, Clone, Args)]
pub struct CloneArgs {
    /// URL of the repository to clone into the scan base.
    #[arg(value_name = "URL")]
    pub url: String,
}
