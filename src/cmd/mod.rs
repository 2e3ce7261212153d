// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   list, inspect, publish, clone, sync, config
//! ```

pub mod clone;
pub mod config;
pub mod inspect;
pub mod list;
pub mod publish;
pub mod sync;

use std::path::Path;

use crate::config::Config;
use crate::error::{GitError, Result};
use crate::git::types::RepoRoot;

/// Resolve a REPO argument to a repository root.
///
/// A path that is itself a repository root wins; otherwise the argument is
/// treated as a name under the scan base.
///
/// # Errors
///
/// Returns `GitError::RepoNotFound` if neither interpretation yields a
/// repository root.
pub fn resolve_repo(arg: &Path, config: &Config) -> Result<RepoRoot> {
    if let Ok(repo) = RepoRoot::new(arg) {
        return Ok(repo);
    }
    if arg.is_relative()
        && let Ok(repo) = RepoRoot::new(config.scan.base.join(arg))
    {
        return Ok(repo);
    }
    Err(GitError::RepoNotFound {
        path: arg.display().to_string(),
    }
    .into())
}
