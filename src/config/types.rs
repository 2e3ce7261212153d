// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for gitdeck.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ScanConfig, WorkflowConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. Logging to file is disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Repository discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Base directory scanned for repository roots.
    pub base: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from("."),
        }
    }
}

/// Publish workflow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkflowConfig {
    /// Remote name pushed to.
    pub remote: String,
    /// When set, every push targets this branch regardless of the
    /// requested or current branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_branch: Option<String>,
    /// Whether the clone subcommand is enabled.
    pub allow_clone: bool,
    /// Access token embedded into the push URL. Secret, never printed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            pinned_branch: None,
            allow_clone: true,
            token: None,
        }
    }
}
