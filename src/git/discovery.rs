// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository discovery.
//!
//! ```text
//! list_repositories(base)
//!   walk directories under base
//!   dir has .git  -> report it, do NOT descend into it
//!   dir is hidden -> skip
//!   base missing  -> empty list, no error
//! ```
//!
//! The shallow-stop rule means a vendored sub-repository inside a reported
//! root is never scanned or reported on its own.

use std::path::Path;

use tracing::{debug, trace};

use super::types::RepoRoot;

/// Walk `base` and return every repository root beneath it, sorted by path.
///
/// A missing or unreadable base yields an empty list; the caller decides
/// whether that is worth reporting.
#[must_use]
pub fn list_repositories(base: &Path) -> Vec<RepoRoot> {
    let mut repos = Vec::new();
    scan_dir(base, &mut repos);
    repos.sort();
    debug!(base = %base.display(), count = repos.len(), "repository scan complete");
    repos
}

fn scan_dir(dir: &Path, repos: &mut Vec<RepoRoot>) {
    if dir.join(".git").is_dir() {
        trace!(repo = %dir.display(), "found repository root");
        repos.push(RepoRoot::new_unchecked(dir));
        return;
    }

    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'))
        {
            continue;
        }
        scan_dir(&path, repos);
    }
}
