// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitdeck.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitdeck.toml (cwd)
//! 3. --config
//! 4. GITDECK_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITDECK_SCAN_BASE=/repos        → scan.base = "/repos"
//! GITDECK_WORKFLOW_REMOTE=origin  → workflow.remote = "origin"
//! GITDECK_WORKFLOW_TOKEN=...      → workflow.token = "..."
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, ScanConfig, WorkflowConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Repository discovery options.
    pub scan: ScanConfig,
    /// Publish workflow options.
    pub workflow: WorkflowConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitdeck::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitdeck.toml")
    ///     .with_env_prefix("GITDECK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is structurally valid TOML but unusable,
    /// such as an empty remote name or an empty pinned branch.
    pub fn validate(&self) -> Result<()> {
        if self.workflow.remote.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "workflow".to_string(),
                key: "remote".to_string(),
                message: "remote name cannot be empty".to_string(),
            }
            .into());
        }
        if let Some(branch) = &self.workflow.pinned_branch
            && branch.trim().is_empty()
        {
            return Err(ConfigError::InvalidValue {
                section: "workflow".to_string(),
                key: "pinned_branch".to_string(),
                message: "pinned branch cannot be empty; omit the key instead".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration options.
    /// Sensitive fields (the workflow token) are hidden with a `[hidden]` marker.
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_scan_options(&mut options);
        self.format_workflow_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| {
                let line = format!("{key:<max_key_len$} = {value}");
                // empty values would otherwise leave trailing padding
                line.trim_end().to_string()
            })
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_scan_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("scan.base".into(), self.scan.base.display().to_string());
    }

    fn format_workflow_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("workflow.remote".into(), self.workflow.remote.clone());
        options.insert(
            "workflow.pinned_branch".into(),
            self.workflow.pinned_branch.clone().unwrap_or_default(),
        );
        options.insert(
            "workflow.allow_clone".into(),
            self.workflow.allow_clone.to_string(),
        );
        if self.workflow.token.is_some() {
            options.insert("workflow.token".into(), "[hidden]".into());
        }
    }
}
