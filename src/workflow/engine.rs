// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! The publish workflow state machine.
//!
//! ```text
//! Idle -> Staging -> CheckingForChanges -> Committing -> Pushing -> Done
//!                          |
//!                          +--> NoOpExit (nothing staged, success)
//!
//! Staging/Committing/Pushing -> Errored
//! ```
//!
//! Progress is reported as 4 fixed steps (stage, check+commit, push,
//! complete). A `NoOpExit` jumps straight to the final step so observers
//! always see a completion signal.
//!
//! One run per repository at a time; a second request for the same root is
//! rejected with `Busy` before any side effect. Runs for different
//! repositories are independent.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use bon::Builder;
use tracing::debug;

use crate::config::types::WorkflowConfig;
use crate::error::{Result, WorkflowError};
use crate::git::branches::current_branch;
use crate::git::cmd::git;
use crate::git::types::{BranchName, RepoRoot};

use super::events::EventSink;

/// Commit message used when the request carries none (or only whitespace).
pub const DEFAULT_COMMIT_MESSAGE: &str = "Automatic commit: Updated repository";

/// Placeholder for the token in any user-visible string.
const TOKEN_MASK: &str = "***";

const TOTAL_STEPS: u8 = 4;

/// Everything one publish run needs, captured up front.
///
/// `branch` and `message` are optional; the engine resolves a branch from
/// configuration or the checked-out branch, and falls back to
/// [`DEFAULT_COMMIT_MESSAGE`].
#[derive(Debug, Clone, Builder)]
pub struct PublishRequest {
    /// Repository to publish. Re-validated when the run starts.
    pub repo: RepoRoot,
    /// Branch to push, if the caller picked one.
    pub branch: Option<BranchName>,
    /// Commit message, if the caller supplied one.
    pub message: Option<String>,
}

/// Observable workflow states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishState {
    Idle,
    Staging,
    CheckingForChanges,
    Committing,
    Pushing,
    NoOpExit,
    Done,
    Errored,
}

/// Terminal result of a successful run.
///
/// `NothingToCommit` is a success distinct from `Pushed`; no commit was
/// created and nothing left the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Pushed {
        branch: BranchName,
        message: String,
    },
    NothingToCommit,
}

/// Runs publish workflows, enforcing one in-flight run per repository.
#[derive(Debug, Clone)]
pub struct PublishEngine {
    config: WorkflowConfig,
    in_flight: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl PublishEngine {
    #[must_use]
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            in_flight: Arc::new(Mutex::new(BTreeSet::new())),
        }
    }

    /// Run the full publish sequence for one repository.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Busy` if a run for the same repository is
    /// already in flight, `InvalidRepository` if the path no longer is a
    /// repository root, and `StageFailed`/`CommitFailed`/`PushFailed` when
    /// the corresponding git command exits non-zero. Errors from one
    /// repository never affect runs for other repositories.
    pub async fn publish(
        &self,
        request: PublishRequest,
        sink: &EventSink,
    ) -> Result<PublishOutcome> {
        let _guard = self.acquire(request.repo.path())?;
        let started = Instant::now();
        let repo = &request.repo;

        // Idle -> Staging: re-validate rather than trusting the cached scan
        let mut state = transition(PublishState::Idle, PublishState::Staging);
        if !repo.is_valid() {
            transition(state, PublishState::Errored);
            sink.error(format!("not a valid repository: {repo}"));
            return Err(WorkflowError::InvalidRepository {
                path: repo.to_string(),
            }
            .into());
        }

        sink.info(format!("publishing {}", repo.name()));
        sink.progress(1, TOTAL_STEPS);
        sink.info("staging changes");
        let output = git(&["add", "."], repo.path()).await?;
        if !output.success() {
            transition(state, PublishState::Errored);
            let message = output.stderr().trim().to_string();
            sink.error(format!("staging failed: {message}"));
            return Err(WorkflowError::StageFailed { message }.into());
        }

        state = transition(state, PublishState::CheckingForChanges);
        sink.progress(2, TOTAL_STEPS);
        let output = git(&["diff", "--cached", "--quiet"], repo.path()).await?;
        if output.success() {
            // nothing staged; terminate successfully without commit or push
            transition(state, PublishState::NoOpExit);
            sink.progress(TOTAL_STEPS, TOTAL_STEPS);
            sink.success(format!("{} is already up to date", repo.name()));
            return Ok(PublishOutcome::NothingToCommit);
        }

        state = transition(state, PublishState::Committing);
        let message = resolve_message(request.message.as_deref());
        sink.info(format!("committing: {message}"));
        let output = git(&["commit", "-m", &message], repo.path()).await?;
        if !output.success() {
            transition(state, PublishState::Errored);
            let detail = output.stderr().trim().to_string();
            sink.error(format!("commit failed: {detail}"));
            return Err(WorkflowError::CommitFailed { message: detail }.into());
        }

        state = transition(state, PublishState::Pushing);
        sink.progress(3, TOTAL_STEPS);
        let branch = self.resolve_branch(&request).await?;
        let target = self.push_target(repo).await;
        sink.info(format!(
            "pushing {} to {} ({})",
            repo.name(),
            branch,
            target.display
        ));
        let output = git(&["push", &target.argument, branch.as_str()], repo.path()).await?;
        if !output.success() {
            transition(state, PublishState::Errored);
            let detail = self.redact(output.stderr().trim());
            sink.error(format!("push failed: {detail}"));
            return Err(WorkflowError::PushFailed { message: detail }.into());
        }

        transition(state, PublishState::Done);
        sink.progress(TOTAL_STEPS, TOTAL_STEPS);
        sink.success(format!(
            "published {} to {} in {:.1}s",
            repo.name(),
            branch,
            started.elapsed().as_secs_f64()
        ));
        Ok(PublishOutcome::Pushed { branch, message })
    }

    /// Resolve the branch to push: pinned config branch first, then the
    /// requested branch, then whatever is checked out.
    async fn resolve_branch(&self, request: &PublishRequest) -> Result<BranchName> {
        if let Some(pinned) = &self.config.pinned_branch {
            return Ok(BranchName::new(pinned.clone()));
        }
        if let Some(branch) = &request.branch {
            return Ok(branch.clone());
        }
        match current_branch(&request.repo).await? {
            Some(branch) => Ok(branch),
            None => Err(WorkflowError::PushFailed {
                message: "no branch requested and HEAD is detached".to_string(),
            }
            .into()),
        }
    }

    /// Decide what `git push` targets: the plain remote name, or the remote
    /// URL with the access token embedded.
    ///
    /// Token embedding only applies to `https://` URLs; anything else falls
    /// back to the plain remote name. The returned display form is always
    /// safe to print.
    async fn push_target(&self, repo: &RepoRoot) -> PushTarget {
        let remote = self.config.remote.clone();
        let Some(token) = &self.config.token else {
            return PushTarget::remote(remote);
        };

        let Ok(output) = git(&["remote", "get-url", &remote], repo.path()).await else {
            return PushTarget::remote(remote);
        };
        if !output.success() {
            return PushTarget::remote(remote);
        }

        let url = output.stdout().trim();
        url.strip_prefix("https://").map_or_else(
            || {
                debug!(remote = %remote, "remote url is not https, pushing without token");
                PushTarget::remote(remote.clone())
            },
            |rest| PushTarget {
                argument: format!("https://{token}@{rest}"),
                display: format!("https://{TOKEN_MASK}@{rest}"),
            },
        )
    }

    /// Replace the configured token with a mask wherever it appears.
    fn redact(&self, text: &str) -> String {
        redact_token(text, self.config.token.as_deref())
    }

    pub(super) fn acquire(
        &self,
        path: &Path,
    ) -> std::result::Result<InFlightGuard, WorkflowError> {
        // alternate spellings of one repository (trailing slash, `./`,
        // symlinks) must collide on the same in-flight entry
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let mut set = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !set.insert(path.clone()) {
            return Err(WorkflowError::Busy {
                path: path.display().to_string(),
            });
        }
        Ok(InFlightGuard {
            set: Arc::clone(&self.in_flight),
            path,
        })
    }
}

/// Pick the commit message: the trimmed caller message, or the default.
pub(super) fn resolve_message(message: Option<&str>) -> String {
    message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_COMMIT_MESSAGE)
        .to_string()
}

/// Replace `token` with a mask wherever it appears in `text`.
pub(super) fn redact_token(text: &str, token: Option<&str>) -> String {
    match token {
        Some(token) if !token.is_empty() => text.replace(token, TOKEN_MASK),
        _ => text.to_string(),
    }
}

fn transition(from: PublishState, to: PublishState) -> PublishState {
    debug!(?from, ?to, "workflow transition");
    to
}

/// Removes its repository from the in-flight set when dropped, whether the
/// run finished or bailed early.
pub(super) struct InFlightGuard {
    set: Arc<Mutex<BTreeSet<PathBuf>>>,
    path: PathBuf,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut set = self.set.lock().unwrap_or_else(PoisonError::into_inner);
        set.remove(&self.path);
    }
}

/// What `git push` is pointed at, with a printable form.
struct PushTarget {
    argument: String,
    display: String,
}

impl PushTarget {
    fn remote(name: String) -> Self {
        Self {
            display: name.clone(),
            argument: name,
        }
    }
}
