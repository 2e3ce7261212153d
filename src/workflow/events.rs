// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Workflow events for front-end consumption.
//!
//! ```text
//! engine --> EventSink --> flume channel --> renderer
//!               |
//!               +--> tracing (mirror)
//! ```
//!
//! Events are a side channel, not return values. A sink without a channel
//! still mirrors everything to tracing, so a headless caller loses nothing.

use chrono::{DateTime, Local};
use std::fmt;
use tracing::{error, info};

/// Severity of one workflow log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Info,
    Success,
    Error,
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("INFO"),
            Self::Success => f.write_str("SUCCESS"),
            Self::Error => f.write_str("ERROR"),
        }
    }
}

/// One timestamped, leveled line destined for a front-end log panel.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub level: EventLevel,
    pub message: String,
}

impl LogLine {
    fn now(level: EventLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format("%H:%M:%S"),
            self.level,
            self.message
        )
    }
}

/// An observable workflow event.
#[derive(Debug, Clone)]
pub enum WorkflowEvent {
    /// Progress through the fixed publish steps, `step` out of `total`.
    Progress { step: u8, total: u8 },
    /// A log line for the front-end panel.
    Log(LogLine),
}

/// Emits workflow events to an optional channel, mirroring to tracing.
///
/// Cloneable; send failures (receiver gone) are silently dropped since the
/// tracing mirror already has the line.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: Option<flume::Sender<WorkflowEvent>>,
}

impl EventSink {
    /// A sink that forwards events into `tx`.
    #[must_use]
    pub const fn new(tx: flume::Sender<WorkflowEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// A sink with no channel; events only reach tracing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { tx: None }
    }

    /// Emit a progress step.
    pub fn progress(&self, step: u8, total: u8) {
        info!(step, total, "workflow progress");
        self.send(WorkflowEvent::Progress { step, total });
    }

    /// Emit an INFO log line.
    pub fn info(&self, message: impl Into<String>) {
        let line = LogLine::now(EventLevel::Info, message);
        info!("{}", line.message);
        self.send(WorkflowEvent::Log(line));
    }

    /// Emit a SUCCESS log line.
    pub fn success(&self, message: impl Into<String>) {
        let line = LogLine::now(EventLevel::Success, message);
        info!("{}", line.message);
        self.send(WorkflowEvent::Log(line));
    }

    /// Emit an ERROR log line.
    pub fn error(&self, message: impl Into<String>) {
        let line = LogLine::now(EventLevel::Error, message);
        error!("{}", line.message);
        self.send(WorkflowEvent::Log(line));
    }

    fn send(&self, event: WorkflowEvent) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(event);
        }
    }
}

impl Default for EventSink {
    fn default() -> Self {
        Self::disabled()
    }
}
