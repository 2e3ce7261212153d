// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!            Public API
//!  discovery  branches  changes  ops
//!       \        |         |      /
//!        v       v         v     v
//!          ,-------------------,
//!          |   cmd::git (CLI)  |
//!          '---------+---------'
//!                    |
//!                    v
//!             ProcessBuilder
//!          GIT_TERMINAL_PROMPT=0
//!          non-zero exit captured,
//!          never raised by the runner
//! ```
//!
//! Every operation shells out to the git CLI; exit codes and output are
//! captured into a [`crate::core::process::builder::CommandResult`] and
//! interpreted by the calling layer.

pub mod branches;
pub mod changes;
pub mod cmd;
pub mod discovery;
pub mod ops;
pub mod types;

#[cfg(test)]
mod tests;
