// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branches and status command implementations.

use tracing::error;

use crate::cli::args::RepoArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::branches::list_branches;
use crate::git::changes::list_changes;

use super::resolve_repo;

/// List the branches of one repository.
///
/// A failed enumeration is logged and rendered as an empty list; it does
/// not fail the command.
///
/// # Errors
///
/// Returns an error if the REPO argument does not resolve to a repository.
pub async fn run_branches_command(args: &RepoArgs, config: &Config) -> Result<()> {
    let repo = resolve_repo(&args.repo, config)?;

    let branches = match list_branches(&repo).await {
        Ok(branches) => branches,
        Err(e) => {
            error!(repo = %repo.name(), "failed to list branches: {e:#}");
            Vec::new()
        }
    };

    if branches.is_empty() {
        println!("no branches in {}", repo.name());
        return Ok(());
    }
    for branch in &branches {
        println!("{branch}");
    }
    Ok(())
}

/// Show working-tree changes of one repository in short form.
///
/// # Errors
///
/// Returns an error if the REPO argument does not resolve to a repository
/// or the status command fails.
pub async fn run_status_command(args: &RepoArgs, config: &Config) -> Result<()> {
    let repo = resolve_repo(&args.repo, config)?;
    let changes = list_changes(&repo).await?;

    if changes.is_empty() {
        println!("{} is clean", repo.name());
        return Ok(());
    }
    for change in &changes {
        println!("{change}");
    }
    Ok(())
}
