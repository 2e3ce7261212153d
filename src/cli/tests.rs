// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Command, parse_from};
use clap::Parser as _;
use std::path::PathBuf;

#[test]
fn test_parse_repos() {
    let cli = parse_from(["gitdeck", "repos"]);
    assert!(matches!(cli.command, Some(Command::Repos)));
}

#[test]
fn test_parse_no_command() {
    let cli = parse_from(["gitdeck"]);
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_branches_with_repo() {
    let cli = parse_from(["gitdeck", "branches", "/srv/repos/app"]);
    let Some(Command::Branches(args)) = cli.command else {
        panic!("expected branches command");
    };
    assert_eq!(args.repo, PathBuf::from("/srv/repos/app"));
}

#[test]
fn test_parse_publish_full() {
    let cli = parse_from([
        "gitdeck", "publish", "app", "-b", "main", "-m", "release notes",
    ]);
    let Some(Command::Publish(args)) = cli.command else {
        panic!("expected publish command");
    };
    assert_eq!(args.repo, PathBuf::from("app"));
    assert_eq!(args.branch.as_deref(), Some("main"));
    assert_eq!(args.message.as_deref(), Some("release notes"));
}

#[test]
fn test_parse_publish_minimal() {
    let cli = parse_from(["gitdeck", "publish", "app"]);
    let Some(Command::Publish(args)) = cli.command else {
        panic!("expected publish command");
    };
    assert!(args.branch.is_none());
    assert!(args.message.is_none());
}

#[test]
fn test_parse_clone() {
    let cli = parse_from(["gitdeck", "clone", "https://example.com/repo.git"]);
    let Some(Command::Clone(args)) = cli.command else {
        panic!("expected clone command");
    };
    assert_eq!(args.url, "https://example.com/repo.git");
}

#[test]
fn test_parse_global_options() {
    let cli = parse_from([
        "gitdeck",
        "-d",
        "/srv/repos",
        "-l",
        "4",
        "--log-file",
        "deck.log",
        "repos",
    ]);
    assert_eq!(cli.global.base, Some(PathBuf::from("/srv/repos")));
    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.log_file, Some(PathBuf::from("deck.log")));
}

#[test]
fn test_log_level_range_is_enforced() {
    let result = super::Cli::try_parse_from(["gitdeck", "-l", "9", "repos"]);
    assert!(result.is_err());
}

#[test]
fn test_config_flag_repeats() {
    let cli = parse_from(["gitdeck", "-c", "a.toml", "-c", "b.toml", "options"]);
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
}

#[test]
fn test_config_overrides_mapping() {
    let cli = parse_from(["gitdeck", "-d", "/base", "-l", "2", "repos"]);
    let overrides = cli.global.to_config_overrides();

    assert!(
        overrides.contains(&("global.output_log_level".to_string(), "2".to_string()))
    );
    // file level falls back to console level
    assert!(overrides.contains(&("global.file_log_level".to_string(), "2".to_string())));
    assert!(overrides.contains(&("scan.base".to_string(), "/base".to_string())));
}
