// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working-tree change detection.
//!
//! ```text
//! git status --short
//!   " M src/lib.rs"  -> ChangeEntry { status: " M", path: "src/lib.rs" }
//!   "?? new.txt"     -> ChangeEntry { status: "??", path: "new.txt" }
//! ```
//!
//! An empty result is a clean tree, not an error.

use crate::error::{GitError, Result};

use super::cmd::git;
use super::types::{ChangeEntry, RepoRoot};

/// List working-tree modifications of `repo` in short-status form.
///
/// # Errors
///
/// Returns an error if git cannot be launched or status exits non-zero
/// (e.g. the directory stopped being a repository).
pub async fn list_changes(repo: &RepoRoot) -> Result<Vec<ChangeEntry>> {
    let output = git(&["status", "--short"], repo.path()).await?;
    if !output.success() {
        return Err(GitError::RepoNotFound {
            path: repo.to_string(),
        }
        .into());
    }

    Ok(output.stdout().lines().filter_map(parse_status_line).collect())
}

/// Parse one line of short-status output into a `ChangeEntry`.
///
/// The first two characters are the status code, the rest (after the
/// separating space) is the path, verbatim. Blank or malformed lines are
/// dropped.
fn parse_status_line(line: &str) -> Option<ChangeEntry> {
    if line.trim().is_empty() || line.len() < 4 {
        return None;
    }
    Some(ChangeEntry {
        status: line[..2].to_string(),
        path: line[3..].to_string(),
    })
}
