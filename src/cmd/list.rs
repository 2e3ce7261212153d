// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repos command implementation.

use tracing::warn;

use crate::config::Config;
use crate::git::discovery::list_repositories;

/// List every repository root under the scan base.
pub fn run_repos_command(config: &Config) {
    if !config.scan.base.exists() {
        warn!(base = %config.scan.base.display(), "scan base does not exist");
    }

    let repos = list_repositories(&config.scan.base);
    if repos.is_empty() {
        println!("no repositories under {}", config.scan.base.display());
        return;
    }

    for repo in &repos {
        println!("{:30} {}", repo.name(), repo);
    }
}
