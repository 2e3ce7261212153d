// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish command implementation.
//!
//! ```text
//! PublishArgs --> PublishRequest --> PublishEngine
//!                                         |
//!                       flume channel <---+
//!                            |
//!                            v
//!                  indicatif step bar + log lines
//! ```

use std::sync::OnceLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::PublishArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::types::BranchName;
use crate::workflow::engine::{PublishEngine, PublishOutcome, PublishRequest};
use crate::workflow::events::{EventSink, WorkflowEvent};

use super::resolve_repo;

/// Pre-validated style for the fixed-step workflow bar.
fn step_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} [{bar:20.cyan/blue}] step {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-")
        })
        .clone()
}

/// Run the publish workflow for one repository, rendering progress and log
/// lines to the terminal.
///
/// # Errors
///
/// Returns an error if the REPO argument does not resolve to a repository
/// or the workflow fails at any step.
pub async fn run_publish_command(args: &PublishArgs, config: &Config) -> Result<()> {
    let repo = resolve_repo(&args.repo, config)?;

    let request = PublishRequest::builder()
        .repo(repo)
        .maybe_branch(args.branch.as_deref().map(BranchName::from))
        .maybe_message(args.message.clone())
        .build();

    let engine = PublishEngine::new(config.workflow.clone());

    let (tx, rx) = flume::unbounded::<WorkflowEvent>();
    let renderer = tokio::spawn(async move {
        let bar = ProgressBar::new(4);
        bar.set_style(step_style());
        while let Ok(event) = rx.recv_async().await {
            match event {
                WorkflowEvent::Progress { step, total } => {
                    bar.set_length(u64::from(total));
                    bar.set_position(u64::from(step));
                }
                WorkflowEvent::Log(line) => bar.println(line.to_string()),
            }
        }
        bar.finish_and_clear();
    });

    let sink = EventSink::new(tx);
    let result = engine.publish(request, &sink).await;

    // dropping the sink closes the channel, letting the renderer drain and exit
    drop(sink);
    let _ = renderer.await;

    match result? {
        PublishOutcome::Pushed { branch, message } => {
            println!("pushed to {branch} ({message})");
        }
        PublishOutcome::NothingToCommit => {
            println!("nothing to commit");
        }
    }
    Ok(())
}
