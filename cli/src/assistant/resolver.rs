//! # Keyword Response Resolver
//!
//! File: cli/src/assistant/resolver.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a free-text question into one canned answer. The question is
//! lower-cased, the rules are tried in order and the first rule that matches
//! picks the topic. When nothing matches, `FALLBACK_ANSWER` is returned.
//!
//! `resolve` is total: every string, including the empty string, gets an
//! answer. It holds no state, so repeated calls with the same input always
//! return the same text.
//!
//! ## Architecture
//!
//! - `Rule`: a (predicate, outcome) pair
//! - `first_match`: the single evaluation loop shared by every rule table
//! - `Resolver`: binds `first_match` to a keyword table and the topic answers
//!
//! ## Examples
//!
//! ```rust
//! use folio::assistant::{resolve, Resolver, Topic};
//!
//! assert_eq!(Resolver::default().classify("Who are you?"), Some(Topic::Identity));
//! assert_eq!(resolve("WHO ARE YOU"), resolve("who are you"));
//! ```
//!
use super::rules::{KeywordRule, KEYWORD_RULES};
use super::topics::{Topic, FALLBACK_ANSWER};

/// A predicate over normalized input paired with the outcome it selects.
pub trait Rule {
    type Outcome;

    fn matches(&self, normalized: &str) -> bool;
    fn outcome(&self) -> Self::Outcome;
}

/// Plain `(predicate, outcome)` tuples are rules too.
impl<F, T> Rule for (F, T)
where
    F: Fn(&str) -> bool,
    T: Clone,
{
    type Outcome = T;

    fn matches(&self, normalized: &str) -> bool {
        (self.0)(normalized)
    }

    fn outcome(&self) -> T {
        self.1.clone()
    }
}

/// Outcome of the first rule in `rules` that matches, if any.
pub fn first_match<R: Rule>(rules: &[R], normalized: &str) -> Option<R::Outcome> {
    rules
        .iter()
        .find(|rule| rule.matches(normalized))
        .map(|rule| rule.outcome())
}

/// Case folding applied before matching. Punctuation and whitespace are kept.
pub fn normalize(input: &str) -> String {
    input.to_lowercase()
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    rules: &'static [KeywordRule],
}

impl Default for Resolver {
    fn default() -> Self {
        Self::with_rules(KEYWORD_RULES)
    }
}

impl Resolver {
    pub const fn with_rules(rules: &'static [KeywordRule]) -> Self {
        Self { rules }
    }

    /// Rules in precedence order.
    pub fn rules(&self) -> &'static [KeywordRule] {
        self.rules
    }

    /// The topic selected for `input`, or `None` when the fallback applies.
    pub fn classify(&self, input: &str) -> Option<Topic> {
        first_match(self.rules, &normalize(input))
    }

    pub fn resolve(&self, input: &str) -> &'static str {
        self.classify(input)
            .map(Topic::answer)
            .unwrap_or(FALLBACK_ANSWER)
    }
}

/// Resolves `input` against the built-in keyword table.
pub fn resolve(input: &str) -> &'static str {
    Resolver::default().resolve(input)
}
