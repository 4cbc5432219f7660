//! # Folio Topics Command
//!
//! File: cli/src/commands/topics.rs
//! Author: Christi Mahu
//!
//! `folio topics` prints the assistant's keyword table in evaluation order.
//! The first rule whose keyword appears in a question wins, so the order shown
//! here is the order in which overlapping questions are settled.
//!
use crate::assistant::{KeywordRule, Resolver};
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct TopicsArgs {}

pub async fn handle_topics(_args: TopicsArgs) -> Result<()> {
    info!("Handling topics command...");
    print_topic_table(Resolver::default().rules());
    Ok(())
}

fn print_topic_table(rules: &[KeywordRule]) {
    let key_width = rules
        .iter()
        .map(|rule| rule.topic.key().len())
        .max()
        .unwrap_or(5)
        .max("TOPIC".len());
    let keyword_width = rules
        .iter()
        .map(|rule| format_keywords(rule).len())
        .max()
        .unwrap_or(8)
        .max("KEYWORDS".len());

    println!(
        "{:<3} {:<key_width$}  {:<keyword_width$}  EXAMPLE",
        "#", "TOPIC", "KEYWORDS"
    );
    println!(
        "{:-<3} {:-<key_width$}  {:-<keyword_width$}  {:-<7}",
        "", "", "", ""
    );
    for (index, rule) in rules.iter().enumerate() {
        println!(
            "{:<3} {:<key_width$}  {:<keyword_width$}  {}",
            index + 1,
            rule.topic.key(),
            format_keywords(rule),
            rule.topic.sample_question()
        );
    }
}

fn format_keywords(rule: &KeywordRule) -> String {
    rule.keywords.join(", ")
}
