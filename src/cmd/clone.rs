// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clone command implementation.

use tracing::info;

use crate::cli::args::CloneArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::discovery::list_repositories;
use crate::git::ops;

/// Clone a URL into the scan base, then re-scan for new roots.
///
/// # Errors
///
/// Returns an error if cloning is disabled in the configuration, the URL
/// is empty, or the clone command fails.
pub async fn run_clone_command(args: &CloneArgs, config: &Config) -> Result<()> {
    if !config.workflow.allow_clone {
        anyhow::bail!("cloning is disabled (workflow.allow_clone = false)");
    }

    if !config.scan.base.exists() {
        std::fs::create_dir_all(&config.scan.base)?;
    }

    ops::clone(&args.url, &config.scan.base).await?;
    info!("clone finished, rescanning");

    let repos = list_repositories(&config.scan.base);
    println!("{} repositories under {}", repos.len(), config.scan.base.display());
    for repo in &repos {
        println!("{:30} {}", repo.name(), repo);
    }
    Ok(())
}
