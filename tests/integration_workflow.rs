// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the publish workflow.
//!
//! Each test drives a working clone against a local bare remote and
//! verifies what actually arrived on the remote.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use gitdeck::config::types::WorkflowConfig;
use gitdeck::git::types::RepoRoot;
use gitdeck::workflow::engine::{
    DEFAULT_COMMIT_MESSAGE, PublishEngine, PublishOutcome, PublishRequest,
};
use gitdeck::workflow::events::{EventSink, WorkflowEvent};

fn run_git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .expect("git should run");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// A bare remote plus a working clone with one initial commit on `main`.
fn remote_and_clone() -> (TempDir, TempDir, RepoRoot) {
    let remote = TempDir::new().expect("tempdir");
    run_git(&["init", "-q", "--bare", "."], remote.path());
    run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], remote.path());

    let base = TempDir::new().expect("tempdir");
    let work = base.path().join("work");
    fs::create_dir(&work).expect("create work dir");
    run_git(&["init", "-q", "."], &work);
    run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], &work);
    run_git(&["config", "user.email", "test@test.com"], &work);
    run_git(&["config", "user.name", "Test"], &work);
    run_git(
        &["remote", "add", "origin", remote.path().to_str().unwrap()],
        &work,
    );

    fs::write(work.join("README.md"), "# Test").expect("write file");
    run_git(&["add", "."], &work);
    run_git(&["commit", "-q", "-m", "Initial commit"], &work);
    run_git(&["push", "-q", "origin", "main"], &work);

    let repo = RepoRoot::new(&work).expect("work should be a repository");
    (remote, base, repo)
}

fn last_remote_subject(remote: &TempDir) -> String {
    run_git(&["log", "--format=%s", "-1", "main"], remote.path())
        .trim()
        .to_string()
}

#[tokio::test]
async fn workflow_publishes_changes_to_remote() {
    let (remote, _base, repo) = remote_and_clone();
    fs::write(repo.path().join("README.md"), "# Changed").expect("write file");

    let engine = PublishEngine::new(WorkflowConfig::default());
    let request = PublishRequest::builder()
        .repo(repo)
        .message("update readme".to_string())
        .build();

    let outcome = engine
        .publish(request, &EventSink::disabled())
        .await
        .unwrap();

    let PublishOutcome::Pushed { branch, message } = outcome else {
        panic!("expected a push");
    };
    assert_eq!(branch.as_str(), "main");
    assert_eq!(message, "update readme");
    assert_eq!(last_remote_subject(&remote), "update readme");
}

#[tokio::test]
async fn workflow_uses_default_message_when_blank() {
    let (remote, _base, repo) = remote_and_clone();
    fs::write(repo.path().join("new.txt"), "content").expect("write file");

    let engine = PublishEngine::new(WorkflowConfig::default());
    let request = PublishRequest::builder()
        .repo(repo)
        .message("   ".to_string())
        .build();

    engine
        .publish(request, &EventSink::disabled())
        .await
        .unwrap();

    assert_eq!(last_remote_subject(&remote), DEFAULT_COMMIT_MESSAGE);
}

#[tokio::test]
async fn workflow_clean_tree_is_noop() {
    let (remote, _base, repo) = remote_and_clone();

    let engine = PublishEngine::new(WorkflowConfig::default());
    let request = PublishRequest::builder().repo(repo).build();

    let outcome = engine
        .publish(request, &EventSink::disabled())
        .await
        .unwrap();

    assert_eq!(outcome, PublishOutcome::NothingToCommit);
    // no new commit arrived
    assert_eq!(last_remote_subject(&remote), "Initial commit");
}

#[tokio::test]
async fn workflow_noop_still_signals_completion() {
    let (_remote, _base, repo) = remote_and_clone();

    let engine = PublishEngine::new(WorkflowConfig::default());
    let request = PublishRequest::builder().repo(repo).build();

    let (tx, rx) = flume::unbounded();
    engine
        .publish(request, &EventSink::new(tx))
        .await
        .unwrap();

    let events: Vec<WorkflowEvent> = rx.drain().collect();
    let final_progress = events
        .iter()
        .filter_map(|e| match e {
            WorkflowEvent::Progress { step, total } => Some((*step, *total)),
            WorkflowEvent::Log(_) => None,
        })
        .next_back();
    assert_eq!(final_progress, Some((4, 4)));
}

#[tokio::test]
async fn workflow_emits_ordered_progress_steps() {
    let (_remote, _base, repo) = remote_and_clone();
    fs::write(repo.path().join("new.txt"), "content").expect("write file");

    let engine = PublishEngine::new(WorkflowConfig::default());
    let request = PublishRequest::builder().repo(repo).build();

    let (tx, rx) = flume::unbounded();
    engine
        .publish(request, &EventSink::new(tx))
        .await
        .unwrap();

    let steps: Vec<u8> = rx
        .drain()
        .filter_map(|e| match e {
            WorkflowEvent::Progress { step, .. } => Some(step),
            WorkflowEvent::Log(_) => None,
        })
        .collect();
    assert_eq!(steps, [1, 2, 3, 4]);
}

#[tokio::test]
async fn workflow_pinned_branch_overrides_request() {
    let (remote, _base, repo) = remote_and_clone();
    fs::write(repo.path().join("new.txt"), "content").expect("write file");

    let config = WorkflowConfig {
        pinned_branch: Some("main".to_string()),
        ..WorkflowConfig::default()
    };
    let engine = PublishEngine::new(config);
    let request = PublishRequest::builder()
        .repo(repo)
        .branch("some-other-branch".into())
        .build();

    let outcome = engine
        .publish(request, &EventSink::disabled())
        .await
        .unwrap();

    let PublishOutcome::Pushed { branch, .. } = outcome else {
        panic!("expected a push");
    };
    assert_eq!(branch.as_str(), "main");
    assert_eq!(last_remote_subject(&remote), DEFAULT_COMMIT_MESSAGE);
}

#[tokio::test]
async fn workflow_push_failure_reaches_errored() {
    let (remote, _base, repo) = remote_and_clone();
    fs::write(repo.path().join("new.txt"), "content").expect("write file");
    // remote vanishes between commit and push
    drop(remote);

    let engine = PublishEngine::new(WorkflowConfig::default());
    let request = PublishRequest::builder().repo(repo).build();

    let result = engine.publish(request, &EventSink::disabled()).await;
    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("failed to push"), "{message}");
}

#[tokio::test]
async fn workflow_runs_for_different_repos_are_independent() {
    let (remote_a, _base_a, repo_a) = remote_and_clone();
    let (remote_b, _base_b, repo_b) = remote_and_clone();
    fs::write(repo_a.path().join("a.txt"), "a").expect("write file");
    fs::write(repo_b.path().join("b.txt"), "b").expect("write file");

    let engine = PublishEngine::new(WorkflowConfig::default());
    let request_a = PublishRequest::builder().repo(repo_a).build();
    let request_b = PublishRequest::builder().repo(repo_b).build();

    let sink = EventSink::disabled();
    let (outcome_a, outcome_b) = tokio::join!(
        engine.publish(request_a, &sink),
        engine.publish(request_b, &sink),
    );

    assert!(outcome_a.is_ok());
    assert!(outcome_b.is_ok());
    assert_eq!(last_remote_subject(&remote_a), DEFAULT_COMMIT_MESSAGE);
    assert_eq!(last_remote_subject(&remote_b), DEFAULT_COMMIT_MESSAGE);
}
