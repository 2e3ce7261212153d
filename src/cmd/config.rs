// gitdeck: Git Publishing Workflow Tool
//
// SPDX-FileCopyrightText: 2026 The gitdeck developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options command implementation.

use crate::config::Config;

/// Print every configuration option and its effective value.
///
/// The workflow token is masked; everything else prints verbatim.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}
