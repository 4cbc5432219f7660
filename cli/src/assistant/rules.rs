//! # Keyword Rules
//!
//! File: cli/src/assistant/rules.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The ordered keyword table used to classify questions. A rule matches when
//! the lower-cased question contains any of its keywords. Rules are evaluated
//! top to bottom and the first match wins, so the position of a rule in
//! `KEYWORD_RULES` is its priority.
//!
//! Keywords are plain substrings, not words: `tech` also matches
//! "architecture", and `who` also matches "whole". This is the historical
//! behavior of the site's chat widget and is kept as is.
//!
use super::resolver::Rule;
use super::topics::Topic;

/// An association between a set of substrings and a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub topic: Topic,
}

impl KeywordRule {
    pub const fn new(keywords: &'static [&'static str], topic: Topic) -> Self {
        Self { keywords, topic }
    }
}

impl Rule for KeywordRule {
    type Outcome = Topic;

    /// `normalized` must already be lower-cased.
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|kw| normalized.contains(kw))
    }

    fn outcome(&self) -> Topic {
        self.topic
    }
}

/// Rule precedence, highest first.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule::new(&["who"], Topic::Identity),
    KeywordRule::new(&["skill"], Topic::Skills),
    KeywordRule::new(&["work"], Topic::Work),
    KeywordRule::new(&["achieve", "award"], Topic::Achievements),
    KeywordRule::new(&["contact", "email"], Topic::Contact),
    KeywordRule::new(&["project"], Topic::Projects),
    KeywordRule::new(&["education", "study"], Topic::Education),
    KeywordRule::new(&["specializ", "focus"], Topic::Specializations),
    KeywordRule::new(&["technolog", "tech", "tools"], Topic::Technologies),
];
