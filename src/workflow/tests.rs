// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use tempfile::TempDir;

use crate::config::types::WorkflowConfig;
use crate::git::types::RepoRoot;

use super::engine::{
    DEFAULT_COMMIT_MESSAGE, PublishEngine, PublishRequest, redact_token, resolve_message,
};
use super::events::{EventLevel, EventSink, LogLine, WorkflowEvent};

fn marker_repo() -> (TempDir, RepoRoot) {
    let tmp = TempDir::new().expect("tempdir");
    fs::create_dir_all(tmp.path().join(".git")).expect("create marker");
    let repo = RepoRoot::new(tmp.path()).expect("should qualify");
    (tmp, repo)
}

#[test]
fn test_default_commit_message_verbatim() {
    insta::assert_snapshot!(DEFAULT_COMMIT_MESSAGE, @"Automatic commit: Updated repository");
}

#[test]
fn test_resolve_message_uses_supplied() {
    assert_eq!(resolve_message(Some("fix typo")), "fix typo");
}

#[test]
fn test_resolve_message_trims() {
    assert_eq!(resolve_message(Some("  fix typo  ")), "fix typo");
}

#[test]
fn test_resolve_message_defaults_on_empty() {
    assert_eq!(resolve_message(None), DEFAULT_COMMIT_MESSAGE);
    assert_eq!(resolve_message(Some("")), DEFAULT_COMMIT_MESSAGE);
    assert_eq!(resolve_message(Some("   \t ")), DEFAULT_COMMIT_MESSAGE);
}

#[test]
fn test_redact_token_masks_every_occurrence() {
    let text = "fatal: https://ghp_abc123@github.com/x/y.git rejected (ghp_abc123)";
    let redacted = redact_token(text, Some("ghp_abc123"));
    assert!(!redacted.contains("ghp_abc123"));
    insta::assert_snapshot!(redacted, @"fatal: https://***@github.com/x/y.git rejected (***)");
}

#[test]
fn test_redact_token_without_token_is_identity() {
    assert_eq!(redact_token("some output", None), "some output");
    assert_eq!(redact_token("some output", Some("")), "some output");
}

#[tokio::test]
async fn test_publish_rejects_busy_repository() {
    let (_tmp, repo) = marker_repo();
    let engine = PublishEngine::new(WorkflowConfig::default());

    let _guard = engine
        .acquire(repo.path())
        .expect("first acquisition should succeed");

    let request = PublishRequest::builder().repo(repo).build();
    let result = engine.publish(request, &EventSink::disabled()).await;

    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("already running"), "{message}");
}

#[test]
fn test_in_flight_guard_releases_on_drop() {
    let (_tmp, repo) = marker_repo();
    let engine = PublishEngine::new(WorkflowConfig::default());

    {
        let _guard = engine.acquire(repo.path()).expect("acquire");
        assert!(engine.acquire(repo.path()).is_err());
    }

    // released; a new run may start
    assert!(engine.acquire(repo.path()).is_ok());
}

#[test]
fn test_in_flight_guard_collides_on_alternate_spellings() {
    let (_tmp, repo) = marker_repo();
    let engine = PublishEngine::new(WorkflowConfig::default());

    let _guard = engine.acquire(repo.path()).expect("acquire");

    // `./`-style and trailing-dot spellings name the same repository
    let dotted = repo.path().join(".");
    assert!(engine.acquire(&dotted).is_err());
}

#[test]
fn test_in_flight_guard_is_per_repository() {
    let (_tmp_a, repo_a) = marker_repo();
    let (_tmp_b, repo_b) = marker_repo();
    let engine = PublishEngine::new(WorkflowConfig::default());

    let _guard_a = engine.acquire(repo_a.path()).expect("acquire a");
    assert!(engine.acquire(repo_b.path()).is_ok());
}

#[tokio::test]
async fn test_publish_invalid_repository() {
    let tmp = TempDir::new().expect("tempdir");
    fs::create_dir_all(tmp.path().join(".git")).expect("create marker");
    let repo = RepoRoot::new(tmp.path()).expect("should qualify");
    // the marker disappears between selection and execution
    fs::remove_dir_all(tmp.path().join(".git")).expect("remove marker");

    let engine = PublishEngine::new(WorkflowConfig::default());
    let request = PublishRequest::builder().repo(repo).build();
    let result = engine.publish(request, &EventSink::disabled()).await;

    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("invalid repository"), "{message}");
}

#[test]
fn test_event_sink_forwards_to_channel() {
    let (tx, rx) = flume::unbounded();
    let sink = EventSink::new(tx);

    sink.progress(1, 4);
    sink.info("starting");
    sink.success("done");
    sink.error("boom");

    let events: Vec<WorkflowEvent> = rx.drain().collect();
    assert_eq!(events.len(), 4);

    assert!(matches!(
        events[0],
        WorkflowEvent::Progress { step: 1, total: 4 }
    ));
    let levels: Vec<EventLevel> = events[1..]
        .iter()
        .map(|e| match e {
            WorkflowEvent::Log(line) => line.level,
            WorkflowEvent::Progress { .. } => panic!("expected log line"),
        })
        .collect();
    assert_eq!(
        levels,
        [EventLevel::Info, EventLevel::Success, EventLevel::Error]
    );
}

#[test]
fn test_event_sink_disabled_does_not_panic() {
    let sink = EventSink::disabled();
    sink.progress(4, 4);
    sink.info("ignored");
}

#[test]
fn test_log_line_display_format() {
    let line = LogLine {
        timestamp: chrono::Local::now(),
        level: EventLevel::Success,
        message: "pushed".to_string(),
    };
    let rendered = line.to_string();
    // [HH:MM:SS] LEVEL: message
    assert!(rendered.starts_with('['));
    assert!(rendered.contains("] SUCCESS: pushed"));
}
