// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run() / run_with_cancellation(token)
//!              |
//!              v
//!     build_command()
//!     args, cwd, env, stdio
//!              |
//!              v
//!          spawn()
//!              |
//!     stdout/stderr reader tasks
//!     accumulate captured lines
//!     wait (or cancel/timeout)
//!              |
//!              v
//!    validate exit_code
//!    (skip if ALLOW_FAILURE)
//!              |
//!              v
//!       CommandResult
//!    { exit_code, stdout, stderr, interrupted }
//! ```

use crate::error::{ProcessError, Result};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace, warn};

use super::builder::{CommandResult, ProcessBuilder, ProcessFlags, StreamFlags};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            use std::fmt::Write as _;
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// This is the main entry point for executing a process.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails (`ProcessError::SpawnFailed`).
    /// - The process exits with a non-zero status and `ALLOW_FAILURE` is
    ///   not set (`ProcessError::NonZeroExit`).
    pub async fn run(self) -> Result<CommandResult> {
        self.run_with_cancellation(CancellationToken::new()).await
    }

    /// Spawns and runs the process with cancellation support.
    ///
    /// When the token is cancelled the child is killed and the result is
    /// returned with `interrupted = true`; the caller decides how to surface
    /// that. Cancellation never leaves the command in a silent hang.
    ///
    /// # Errors
    ///
    /// Same as [`ProcessBuilder::run`]; an interrupted process is not an
    /// exit-code failure.
    pub async fn run_with_cancellation(self, token: CancellationToken) -> Result<CommandResult> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if token.is_cancelled() {
            return Ok(CommandResult::new(-1, String::new(), String::new(), true));
        }

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let mut child = command.spawn().map_err(|e| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source: e,
        })?;

        let pid = child.id();
        trace!(process = %name, pid = ?pid, "spawned");

        let output = self.run_child(&name, &mut child, token).await?;

        if !output.is_interrupted()
            && !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE)
            && !output.success()
        {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(
            process = %name,
            exit_code = output.exit_code(),
            interrupted = output.is_interrupted(),
            "completed"
        );
        Ok(output)
    }

    /// Runs the spawned child, handling I/O streaming and waiting for
    /// completion, cancellation or timeout.
    async fn run_child(
        &self,
        name: &str,
        child: &mut Child,
        token: CancellationToken,
    ) -> Result<CommandResult> {
        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_config(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_config(), name, "stderr");

        let timeout = self.timeout_duration();
        // Disabled sleep branches are constructed but never polled, so the
        // fallback duration is irrelevant.
        let sleep_for = timeout.unwrap_or(std::time::Duration::from_secs(86_400));

        let (exit_status, interrupted) = tokio::select! {
            status = child.wait() => (status?, false),
            () = token.cancelled() => {
                warn!(process = %name, "cancellation requested, terminating process");
                child.kill().await.ok();
                let status = child.wait().await?;
                (status, true)
            }
            () = tokio::time::sleep(sleep_for), if timeout.is_some() => {
                warn!(process = %name, timeout = ?timeout, "process timed out");
                child.kill().await.ok();
                let _ = await_readers(stdout_handle, stderr_handle).await;
                return Err(ProcessError::Timeout {
                    command: name.to_string(),
                    timeout_secs: timeout.map_or(0, |d| d.as_secs()),
                }
                .into());
            }
        };

        let (stdout, stderr) = await_readers(stdout_handle, stderr_handle).await;

        Ok(CommandResult::new(
            exit_status.code().unwrap_or(-1),
            stdout,
            stderr,
            interrupted,
        ))
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        for (key, value) in self.environment() {
            command.env(key, value);
        }

        command.stdin(Stdio::null());
        command.stdout(stdio_from_flags(self.stdout_config()));
        command.stderr(stdio_from_flags(self.stderr_config()));

        // Kill on drop for safety
        command.kill_on_drop(true);

        command
    }
}

/// Converts `StreamFlags` to Stdio configuration.
fn stdio_from_flags(flags: StreamFlags) -> Stdio {
    if flags.contains(StreamFlags::INHERIT) {
        Stdio::inherit()
    } else if flags.contains(StreamFlags::BIT_BUCKET) {
        Stdio::null()
    } else {
        Stdio::piped()
    }
}

/// Spawns a line-reader task for a captured stream if needed.
///
/// The task owns its capture buffer and hands it back on join, so a
/// process may emit arbitrarily much output without anyone blocking.
fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<String>>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    stream.map(|stream| {
        let name = process_name.to_string();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stream).lines();
            let mut captured = String::new();
            while let Ok(Some(line)) = lines.next_line().await {
                if flags.contains(StreamFlags::FORWARD_TO_LOG) {
                    trace!(process = %name, stream = %stream_name, line = %line, "output");
                }
                if flags.contains(StreamFlags::KEEP_IN_STRING) {
                    if !captured.is_empty() {
                        captured.push('\n');
                    }
                    captured.push_str(&line);
                }
            }
            captured
        })
    })
}

/// Waits for reader tasks to complete and returns the captured output.
async fn await_readers(
    stdout_handle: Option<JoinHandle<String>>,
    stderr_handle: Option<JoinHandle<String>>,
) -> (String, String) {
    let mut stdout = String::new();
    let mut stderr = String::new();
    if let Some(handle) = stdout_handle
        && let Ok(captured) = handle.await
    {
        stdout = captured;
    }
    if let Some(handle) = stderr_handle
        && let Ok(captured) = handle.await
    {
        stderr = captured;
    }
    (stdout, stderr)
}
