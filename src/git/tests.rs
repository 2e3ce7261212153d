// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use tempfile::TempDir;

use super::discovery::list_repositories;
use super::ops;
use super::types::{ChangeEntry, RepoRoot};

fn fake_repo(base: &std::path::Path, name: &str) -> std::path::PathBuf {
    let repo = base.join(name);
    fs::create_dir_all(repo.join(".git")).expect("create marker");
    repo
}

#[test]
fn test_discovery_finds_nested_repos() {
    let tmp = TempDir::new().expect("tempdir");
    fake_repo(tmp.path(), "alpha");
    fake_repo(&tmp.path().join("group"), "beta");
    fs::create_dir_all(tmp.path().join("empty/dir")).expect("create dirs");

    let repos = list_repositories(tmp.path());
    let names: Vec<_> = repos.iter().map(RepoRoot::name).collect();
    assert_eq!(names, ["alpha", "beta"]);
}

#[test]
fn test_discovery_is_sorted() {
    let tmp = TempDir::new().expect("tempdir");
    fake_repo(tmp.path(), "zulu");
    fake_repo(tmp.path(), "alpha");
    fake_repo(tmp.path(), "mike");

    let repos = list_repositories(tmp.path());
    let names: Vec<_> = repos.iter().map(RepoRoot::name).collect();
    assert_eq!(names, ["alpha", "mike", "zulu"]);
}

#[test]
fn test_discovery_shallow_stops_at_first_marker() {
    let tmp = TempDir::new().expect("tempdir");
    let outer = fake_repo(tmp.path(), "outer");
    // vendored sub-repository must not be reported on its own
    fake_repo(&outer.join("vendor"), "inner");

    let repos = list_repositories(tmp.path());
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name(), "outer");
}

#[test]
fn test_discovery_skips_hidden_directories() {
    let tmp = TempDir::new().expect("tempdir");
    fake_repo(&tmp.path().join(".cache"), "hidden");
    fake_repo(tmp.path(), "visible");

    let repos = list_repositories(tmp.path());
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name(), "visible");
}

#[test]
fn test_discovery_missing_base_is_empty() {
    let repos = list_repositories(std::path::Path::new("/nonexistent/base/dir"));
    assert!(repos.is_empty());
}

#[test]
fn test_discovery_reports_base_itself() {
    let tmp = TempDir::new().expect("tempdir");
    fs::create_dir_all(tmp.path().join(".git")).expect("create marker");

    let repos = list_repositories(tmp.path());
    assert_eq!(repos.len(), 1);
}

#[test]
fn test_repo_root_rejects_plain_directory() {
    let tmp = TempDir::new().expect("tempdir");
    assert!(RepoRoot::new(tmp.path()).is_err());
}

#[test]
fn test_repo_root_accepts_marker_directory() {
    let tmp = TempDir::new().expect("tempdir");
    fs::create_dir_all(tmp.path().join(".git")).expect("create marker");

    let repo = RepoRoot::new(tmp.path()).expect("should qualify");
    assert!(repo.is_valid());
}

#[tokio::test]
async fn test_clone_empty_url_never_spawns() {
    let tmp = TempDir::new().expect("tempdir");
    let result = ops::clone("   ", tmp.path()).await;

    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("url cannot be empty"), "{message}");
    // no clone directory appeared
    assert_eq!(fs::read_dir(tmp.path()).expect("read dir").count(), 0);
}

#[test]
fn test_change_entry_display() {
    let entry = ChangeEntry {
        status: " M".to_string(),
        path: "src/lib.rs".to_string(),
    };
    insta::assert_snapshot!(entry.to_string(), @" M src/lib.rs");
}
