// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fetch and pull command implementations.

use crate::cli::args::RepoArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::ops;

use super::resolve_repo;

/// Fetch from the repository's default remote.
///
/// # Errors
///
/// Returns an error if the REPO argument does not resolve to a repository
/// or the fetch fails.
pub async fn run_fetch_command(args: &RepoArgs, config: &Config) -> Result<()> {
    let repo = resolve_repo(&args.repo, config)?;
    ops::fetch(&repo).await?;
    println!("fetched {}", repo.name());
    Ok(())
}

/// Pull into the repository's current branch.
///
/// # Errors
///
/// Returns an error if the REPO argument does not resolve to a repository
/// or the pull fails.
pub async fn run_pull_command(args: &RepoArgs, config: &Config) -> Result<()> {
    let repo = resolve_repo(&args.repo, config)?;
    let output = ops::pull(&repo).await?;

    let summary = output.stdout().trim();
    if summary.is_empty() {
        println!("pulled {}", repo.name());
    } else {
        println!("{summary}");
    }
    Ok(())
}
