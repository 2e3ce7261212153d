// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        list / inspect / publish / clone
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-----+---------------+-----'
//!                    |               |
//!                    v               v
//!                workflow           git
//!              engine, events   discovery, branches,
//!              (state machine)  changes, ops, cmd
//!                    |               |
//!                    +-------+-------+
//!                            v
//!   +-----------------------------------------+
//!   |  core        process (async git spawns) |
//!   +-----------------------------------------+
//!   |  foundation       error, logging        |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod workflow;
