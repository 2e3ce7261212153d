// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use gitdeck::cli::{Cli, Command};

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["gitdeck", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["gitdeck", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_publish_long_flags() {
    let cli = Cli::try_parse_from([
        "gitdeck",
        "publish",
        "/srv/repos/app",
        "--branch",
        "release",
        "--message",
        "cut release",
    ])
    .unwrap();

    let Some(Command::Publish(args)) = cli.command else {
        panic!("expected publish");
    };
    assert_eq!(args.branch.as_deref(), Some("release"));
    assert_eq!(args.message.as_deref(), Some("cut release"));
}

#[test]
fn cli_branches_requires_repo() {
    let result = Cli::try_parse_from(["gitdeck", "branches"]);
    assert!(result.is_err());
}

#[test]
fn cli_clone_requires_url() {
    let result = Cli::try_parse_from(["gitdeck", "clone"]);
    assert!(result.is_err());
}

#[test]
fn cli_unknown_command_rejected() {
    let result = Cli::try_parse_from(["gitdeck", "frobnicate"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_flags_before_command() {
    let cli = Cli::try_parse_from([
        "gitdeck",
        "--base",
        "/srv/repos",
        "--log-level",
        "5",
        "status",
        "app",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert!(matches!(cli.command, Some(Command::Status(_))));
}
