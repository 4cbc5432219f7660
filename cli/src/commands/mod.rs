//! # Folio Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! One module per top-level `folio` command. Each defines a clap argument
//! struct and an async `handle_*` function that `main.rs` dispatches to.
//!
//! ## Commands
//!
//! - `ask`: answer one question with the FAQ assistant
//! - `chat`: interactive assistant session on the terminal
//! - `topics`: list the assistant's keyword rules in evaluation order
//! - `build`: render the portfolio site into a directory
//! - `srv`: serve the built site with the assistant and contact endpoints
//!

/// Answers a single question.
pub mod ask;
/// Renders the static site.
pub mod build;
/// Interactive question and answer loop.
pub mod chat;
/// Local preview server.
pub mod srv;
/// Prints the keyword rule table.
pub mod topics;
