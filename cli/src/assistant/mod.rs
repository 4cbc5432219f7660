//! # Folio FAQ Assistant
//!
//! File: cli/src/assistant/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The rule-based assistant behind the portfolio's chat widget. It is not a
//! language model: questions are matched against a fixed, ordered keyword
//! table and answered with canned text.
//!
//! ## Architecture
//!
//! - `topics`: the `Topic` keys and their answers
//! - `rules`: the ordered keyword table
//! - `resolver`: first-match evaluation and the `resolve` entry point
//! - `chat`: the append-only transcript used by interactive front ends
//!
pub mod chat;
pub mod resolver;
pub mod rules;
pub mod topics;

pub use chat::{ChatLog, Message, Speaker, EMPTY_LOG_PLACEHOLDER};
pub use resolver::{first_match, resolve, Resolver, Rule};
pub use rules::{KeywordRule, KEYWORD_RULES};
pub use topics::{responses, ResponseEntry, Topic, FALLBACK_ANSWER};
