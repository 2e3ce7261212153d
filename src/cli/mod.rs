// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitdeck using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitdeck [global options] <command>
//! repos
//! branches REPO
//! status REPO
//! publish REPO [-b BRANCH] [-m MESSAGE]
//! clone URL
//! fetch REPO
//! pull REPO
//! options
//! version
//! ```

pub mod args;
pub mod global;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};

use crate::cli::args::{CloneArgs, PublishArgs, RepoArgs};
use crate::cli::global::GlobalOptions;

/// Git Publishing Workflow Tool
///
/// Discovers git repositories under a base directory and runs a
/// stage/commit/push publish workflow against them.
#[derive(Debug, Parser)]
#[command(
    name = "gitdeck",
    author,
    version,
    about = "Git Publishing Workflow Tool",
    long_about = "gitdeck Copyright (C) 2026 The gitdeck developers\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  gitdeck discovers git repositories under a base directory and\n\
                  drives a stage/commit/push publish workflow against them.\n\
                  `gitdeck -d ~/projects repos` lists repositories, `gitdeck\n\
                  publish REPO` stages, commits and pushes everything in one go.\n\
                  See `gitdeck <command> --help` for more information.",
    after_help = "CONFIG FILES:\n\n\
                  By default, gitdeck loads `gitdeck.toml` from the current\n\
                  directory if present. Additional files can be specified with\n\
                  --config and are loaded afterwards, overriding earlier values.\n\
                  GITDECK_* environment variables override all files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists git repositories under the scan base.
    Repos,

    /// Lists local and remote-tracking branches of a repository.
    Branches(RepoArgs),

    /// Shows working-tree changes of a repository in short form.
    Status(RepoArgs),

    /// Stages, commits and pushes all changes in a repository.
    Publish(PublishArgs),

    /// Clones a repository into the scan base.
    Clone(CloneArgs),

    /// Fetches from a repository's default remote.
    Fetch(RepoArgs),

    /// Pulls into a repository's current branch.
    Pull(RepoArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
