// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{DeckError, DeckResult, GitError, WorkflowError};

#[test]
fn test_git_error_display() {
    let err = GitError::CloneFailed {
        url: "https://example.invalid/repo.git".to_string(),
        message: "could not resolve host".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"failed to clone https://example.invalid/repo.git: could not resolve host"
    );
}

#[test]
fn test_workflow_error_display() {
    let err = WorkflowError::Busy {
        path: "/work/repo".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"a publish is already running for /work/repo");
}

#[test]
fn test_empty_url_display() {
    insta::assert_snapshot!(GitError::EmptyUrl.to_string(), @"repository url cannot be empty");
}

#[test]
fn test_deck_error_size() {
    // Box<str> variant (Other) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<DeckError>();
    assert!(size <= 24, "DeckError is {size} bytes, expected <= 24");
}

#[test]
fn test_deck_result_size() {
    let size = std::mem::size_of::<DeckResult<()>>();
    assert!(size <= 24, "DeckResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_boxing_conversions() {
    fn takes_deck_error(e: impl Into<DeckError>) -> DeckError {
        e.into()
    }

    let e = takes_deck_error(GitError::EmptyUrl);
    assert!(matches!(e, DeckError::Git(_)));

    let e = takes_deck_error(WorkflowError::StageFailed {
        message: "boom".to_string(),
    });
    assert!(matches!(e, DeckError::Workflow(_)));
}
