// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish workflow orchestration.
//!
//! ```text
//! PublishRequest --> PublishEngine::publish --> PublishOutcome
//!                         |
//!                         v
//!                     EventSink
//!               progress + log lines
//! ```

pub mod engine;
pub mod events;

#[cfg(test)]
mod tests;
