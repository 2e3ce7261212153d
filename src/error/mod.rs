// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!             DeckError (~16 bytes)
//!                    |
//!      +------+------+------+------+
//!      |      |      |      |      |
//!      v      v      v      v      v
//!     Git  Workflow Config Process Io/Other
//!     Box    Box     Box    Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git      ListBranches, EmptyUrl, CloneFailed, FetchFailed, PullFailed
//!   Workflow InvalidRepository, StageFailed, CommitFailed, PushFailed, Busy
//!   Config   ReadError, ParseError, InvalidValue
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit, Timeout
//!
//! All variants boxed => DeckError stays small on the stack.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DeckError`].
pub type DeckResult<T> = std::result::Result<T, DeckError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum DeckError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Publish workflow failed.
    #[error("workflow error: {0}")]
    Workflow(#[from] Box<WorkflowError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DeckError {
                fn from(err: $error) -> Self {
                    DeckError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    WorkflowError => Workflow,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Errors from individual git invocations outside the publish workflow.
#[derive(Debug, Error)]
pub enum GitError {
    /// Path is not a repository root.
    #[error("not a git repository: {path}")]
    RepoNotFound { path: String },

    /// Branch enumeration failed; callers log this and show an empty list.
    #[error("failed to list branches in {path}: {message}")]
    ListBranches { path: String, message: String },

    /// Clone was requested with an empty URL.
    #[error("repository url cannot be empty")]
    EmptyUrl,

    /// Clone operation failed.
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// Fetch operation failed.
    #[error("failed to fetch in {path}: {message}")]
    FetchFailed { path: String, message: String },

    /// Pull operation failed.
    #[error("failed to pull in {path}: {message}")]
    PullFailed { path: String, message: String },
}

// --- Workflow Errors ---

/// Publish workflow errors; each maps to the `Errored` terminal state,
/// except `Busy`, which rejects the request before the workflow starts.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Repository path vanished or never was a repo root.
    #[error("invalid repository: {path}")]
    InvalidRepository { path: String },

    /// `git add` exited non-zero.
    #[error("failed to stage changes: {message}")]
    StageFailed { message: String },

    /// `git commit` exited non-zero.
    #[error("failed to commit: {message}")]
    CommitFailed { message: String },

    /// `git push` exited non-zero, or no branch could be resolved.
    #[error("failed to push: {message}")]
    PushFailed { message: String },

    /// A publish run is already in flight for this repository.
    #[error("a publish is already running for {path}")]
    Busy { path: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
///
/// `ExecutableNotFound` and `SpawnFailed` are launch failures: the external
/// binary itself is unusable. A git operation that ran and exited non-zero
/// is never reported through these.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process timed out.
    #[error("process '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },
}

#[cfg(test)]
mod tests;
