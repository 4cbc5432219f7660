//! # Folio CLI Srv Integration Tests
//!
//! File: cli/tests/srv.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A running server never exits on its own, so these tests only cover the
//! startup failures. Routing and the JSON endpoints are tested against the
//! router directly in `server_logic.rs`.
//!
mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_srv_missing_directory_fails() {
    let temp = tempdir().expect("temp dir");
    isolated_cmd(temp.path())
        .args(["srv", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be found"));
}

#[test]
fn test_srv_defaults_to_unbuilt_output_dir() {
    let temp = tempdir().expect("temp dir");
    isolated_cmd(temp.path())
        .arg("srv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("folio build"));
}

#[test]
fn test_srv_rejects_invalid_host() {
    folio_cmd()
        .args(["srv", "--host", "not-an-ip"])
        .assert()
        .failure();
}
