//! # Folio CLI Build Integration Tests
//!
//! File: cli/tests/build.rs
//! Author: Christi Mahu
//!
//! Runs `folio build` inside a temporary project with its own `.folio.toml`.
//!
mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SECTION_IDS: [&str; 7] = [
    "home",
    "about",
    "skills",
    "achievements",
    "projects",
    "hobbies",
    "contact",
];

#[test]
fn test_build_with_defaults() {
    let temp = tempdir().expect("temp dir");

    isolated_cmd(temp.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Site built"));

    let html = fs::read_to_string(temp.path().join("dist/index.html")).expect("index.html");
    for id in SECTION_IDS {
        assert!(
            html.contains(&format!("id=\"{id}\"")),
            "missing section {id}"
        );
    }
    assert!(html.contains("/api/ask"));
}

#[test]
fn test_build_uses_project_config() {
    let temp = tempdir().expect("temp dir");
    fs::create_dir_all(temp.path().join("public/img")).expect("assets dir");
    fs::write(temp.path().join("public/img/me.png"), b"png").expect("asset");
    fs::write(temp.path().join("cv.pdf"), b"%PDF").expect("resume");
    fs::write(
        temp.path().join(".folio.toml"),
        r#"
[site]
title = "Folio Test Site"
output_dir = "site"
assets_dir = "public"
resume = "cv.pdf"
"#,
    )
    .expect("config");

    isolated_cmd(temp.path()).arg("build").assert().success();

    let out = temp.path().join("site");
    let html = fs::read_to_string(out.join("index.html")).expect("index.html");
    assert!(html.contains("<title>Folio Test Site</title>"));
    assert!(html.contains("href=\"resume.pdf\""));
    assert!(out.join("resume.pdf").is_file());
    assert!(out.join("img/me.png").is_file());
}

#[test]
fn test_build_out_flag_overrides_config() {
    let temp = tempdir().expect("temp dir");
    isolated_cmd(temp.path())
        .args(["build", "--out", "elsewhere"])
        .assert()
        .success();
    assert!(temp.path().join("elsewhere/index.html").is_file());
    assert!(!temp.path().join("dist").exists());
}

#[test]
fn test_build_rejects_unknown_config_field() {
    let temp = tempdir().expect("temp dir");
    fs::write(temp.path().join(".folio.toml"), "[site]\ntheme = \"dark\"\n").expect("config");

    isolated_cmd(temp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
