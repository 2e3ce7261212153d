// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Domain types shared across the git layer.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::GitError;

/// A directory confirmed to contain a `.git` marker at construction time.
///
/// Identity is the path. The marker check is a snapshot; callers that act
/// later (the publish workflow) re-validate instead of trusting this.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepoRoot(PathBuf);

impl RepoRoot {
    /// Wraps `path` after verifying it contains a `.git` marker directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepoNotFound` if the marker is missing.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, GitError> {
        let path = path.into();
        if path.join(".git").is_dir() {
            Ok(Self(path))
        } else {
            Err(GitError::RepoNotFound {
                path: path.display().to_string(),
            })
        }
    }

    /// Wraps `path` without checking for the marker.
    ///
    /// For callers that have already established the marker exists, such as
    /// the discovery walk.
    pub(crate) fn new_unchecked(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// The directory name, used as a short label in output.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
    }

    /// Whether the directory still looks like a repository root.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.join(".git").is_dir()
    }
}

impl fmt::Display for RepoRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A normalized branch name.
///
/// No current-branch marker, no `remotes/` prefix. A local branch and its
/// remote-tracking twin remain distinct entries (`main` vs `origin/main`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BranchName(String);

impl BranchName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BranchName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// One working-tree modification as reported by short status.
///
/// Superseded wholesale on each refresh; never diffed against a previous
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    /// Two-character status code, e.g. `" M"`, `"A "`, `"??"`.
    pub status: String,
    /// Path relative to the repository root, verbatim from git.
    pub path: String,
}

impl fmt::Display for ChangeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.path)
    }
}
