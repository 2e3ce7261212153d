// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clone, fetch and pull operations.
//!
//! ```text
//! clone  git clone <url>   (run in destination dir)
//! fetch  git fetch         (run in repo)
//! pull   git pull          (run in repo)
//! ```

use std::path::Path;

use tracing::info;

use crate::core::process::builder::CommandResult;
use crate::error::{GitError, Result};

use super::cmd::git;
use super::types::RepoRoot;

/// Clone `url` into `destination`.
///
/// The URL is not validated beyond non-emptiness; a malformed URL surfaces
/// through the clone command's own exit code and error text. Callers
/// re-scan the destination for new roots after a successful clone.
///
/// # Errors
///
/// Returns `GitError::EmptyUrl` before any external invocation if the
/// trimmed URL is empty, and `GitError::CloneFailed` on non-zero exit.
pub async fn clone(url: &str, destination: &Path) -> Result<CommandResult> {
    let url = url.trim();
    if url.is_empty() {
        return Err(GitError::EmptyUrl.into());
    }

    info!(url, destination = %destination.display(), "cloning repository");
    let output = git(&["clone", url], destination).await?;
    if !output.success() {
        return Err(GitError::CloneFailed {
            url: url.to_string(),
            message: output.stderr().trim().to_string(),
        }
        .into());
    }
    Ok(output)
}

/// Fetch from the default remote.
///
/// # Errors
///
/// Returns `GitError::FetchFailed` on non-zero exit.
pub async fn fetch(repo: &RepoRoot) -> Result<CommandResult> {
    info!(repo = %repo.name(), "fetching");
    let output = git(&["fetch"], repo.path()).await?;
    if !output.success() {
        return Err(GitError::FetchFailed {
            path: repo.to_string(),
            message: output.stderr().trim().to_string(),
        }
        .into());
    }
    Ok(output)
}

/// Pull from the default remote into the current branch.
///
/// # Errors
///
/// Returns `GitError::PullFailed` on non-zero exit.
pub async fn pull(repo: &RepoRoot) -> Result<CommandResult> {
    info!(repo = %repo.name(), "pulling");
    let output = git(&["pull"], repo.path()).await?;
    if !output.success() {
        return Err(GitError::PullFailed {
            path: repo.to_string(),
            message: output.stderr().trim().to_string(),
        }
        .into());
    }
    Ok(output)
}
