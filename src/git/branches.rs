// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch enumeration and normalization.
//!
//! ```text
//! git branch --all
//!   "* main"                    -> "main"
//!   "  remotes/origin/feat-x"   -> "origin/feat-x"
//!   "  remotes/origin/HEAD -> origin/main"  (dropped)
//! ```
//!
//! Normalization makes local and remote-tracking names read alike; it does
//! NOT de-duplicate, so `main` and `origin/main` both appear.

use crate::error::{GitError, Result};

use super::cmd::git;
use super::types::{BranchName, RepoRoot};

/// List every local and remote-tracking branch of `repo`, normalized.
///
/// # Errors
///
/// Returns `GitError::ListBranches` if the enumeration command exits
/// non-zero. Callers log this and present an empty list.
pub async fn list_branches(repo: &RepoRoot) -> Result<Vec<BranchName>> {
    let output = git(&["branch", "--all"], repo.path()).await?;
    if !output.success() {
        return Err(GitError::ListBranches {
            path: repo.to_string(),
            message: output.stderr().trim().to_string(),
        }
        .into());
    }

    Ok(output
        .stdout()
        .lines()
        .filter_map(normalize_branch_line)
        .collect())
}

/// Resolve the currently checked-out branch, or `None` for a detached HEAD.
///
/// # Errors
///
/// Returns an error only if git cannot be launched.
pub async fn current_branch(repo: &RepoRoot) -> Result<Option<BranchName>> {
    let output = git(&["symbolic-ref", "--short", "HEAD"], repo.path()).await?;
    if !output.success() {
        return Ok(None);
    }
    let name = output.stdout().trim();
    if name.is_empty() {
        Ok(None)
    } else {
        Ok(Some(BranchName::new(name)))
    }
}

/// Normalize one line of `git branch --all` output.
///
/// Strips the current-branch marker and the `remotes/` prefix; drops blank
/// lines and symbolic `HEAD ->` pointers.
fn normalize_branch_line(line: &str) -> Option<BranchName> {
    let name = line
        .trim()
        .trim_start_matches("* ")
        .trim_start_matches("+ ")
        .trim();

    if name.is_empty() || name.contains("HEAD ->") || name == "HEAD" {
        return None;
    }

    let name = name.strip_prefix("remotes/").unwrap_or(name);
    Some(BranchName::new(name))
}
