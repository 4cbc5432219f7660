//! # Folio CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and builds its commands with `folio_cmd()` or
//! `isolated_cmd()`.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// Command for the compiled `folio` binary of the current test run.
pub fn folio_cmd() -> Command {
    Command::cargo_bin("folio").expect("Failed to find folio binary for testing")
}

/// `folio_cmd()` running in `dir`, with the user config directory pointed
/// inside `dir` so a developer's own `config.toml` cannot leak into the test.
pub fn isolated_cmd(dir: &Path) -> Command {
    let mut cmd = folio_cmd();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG");
    cmd
}
