//! # Folio Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `folio ask <QUESTION...>` answers a single question with the FAQ assistant
//! and prints the answer to stdout. The words are joined with spaces, so the
//! question does not need quoting.
//!
//! ## Examples
//!
//! ```bash
//! folio ask who are you
//! folio -v ask "How can I contact you?"
//! ```
//!
use crate::assistant::Resolver;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question to answer. Matching is case-insensitive.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    let question = args.question.join(" ");
    let resolver = Resolver::default();

    match resolver.classify(&question) {
        Some(topic) => info!("Question matched topic '{}'", topic),
        None => info!("Question matched no topic, using fallback answer"),
    }

    println!("{}", resolver.resolve(&question));
    Ok(())
}
