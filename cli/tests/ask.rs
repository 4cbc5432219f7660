//! # Folio CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//!
//! End-to-end checks of `folio ask` through the compiled binary.
//!
mod common;
use common::*;
use folio::assistant::{Topic, FALLBACK_ANSWER};
use predicates::prelude::*;

#[test]
fn test_ask_identity() {
    folio_cmd()
        .args(["ask", "Who", "are", "you?"])
        .assert()
        .success()
        .stdout(format!("{}\n", Topic::Identity.answer()));
}

#[test]
fn test_ask_is_case_insensitive() {
    folio_cmd()
        .args(["ask", "WHAT ARE YOUR SKILLS"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("My technical skills include"));
}

#[test]
fn test_ask_fallback_verbatim() {
    folio_cmd()
        .args(["ask", "hello", "there"])
        .assert()
        .success()
        .stdout(format!("{}\n", FALLBACK_ANSWER));
}

#[test]
fn test_ask_contact_wins_over_project() {
    folio_cmd()
        .args(["ask", "tell me about your project contact info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("manishsahu81128@gmail.com"))
        .stdout(predicate::str::contains("featured projects").not());
}

#[test]
fn test_ask_requires_question() {
    folio_cmd().arg("ask").assert().failure();
}
