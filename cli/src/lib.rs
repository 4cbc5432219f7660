//! # Folio
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Library half of the `folio` CLI. It holds the portfolio content, the
//! keyword FAQ assistant and the infrastructure used to build and serve the
//! site. The binary in `main.rs` only parses arguments and dispatches.
//!
//! ## Examples
//!
//! ```
//! use folio::assistant;
//!
//! let answer = assistant::resolve("How can I contact you?");
//! assert!(answer.contains("manishsahu81128@gmail.com"));
//! ```
//!
pub mod assistant;
pub mod commands;
pub mod content;
pub mod core;
