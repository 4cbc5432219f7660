//! # Chat Transcript
//!
//! File: cli/src/assistant/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `ChatLog` is the ordered record behind the chat widget and `folio chat`.
//! Every accepted question appends two messages, the user's text followed by
//! the resolved answer. Messages are never removed or reordered.
//!
use super::resolver::Resolver;
use serde::Serialize;
use tracing::debug;

/// Shown while the transcript is still empty.
pub const EMPTY_LOG_PLACEHOLDER: &str =
    "Ask me about my skills, work, achievements, or how to contact me!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub from: Speaker,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    resolver: Resolver,
    messages: Vec<Message>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: Resolver) -> Self {
        Self {
            resolver,
            messages: Vec::new(),
        }
    }

    /// Records `input` and its answer, returning the answer message.
    ///
    /// Blank input (empty or whitespace only) is ignored and returns `None`.
    /// Accepted input is stored verbatim, surrounding whitespace included.
    pub fn send(&mut self, input: &str) -> Option<&Message> {
        if input.trim().is_empty() {
            debug!("Ignoring blank chat input");
            return None;
        }
        let answer = self.resolver.resolve(input);
        self.messages.push(Message {
            from: Speaker::User,
            text: input.to_string(),
        });
        self.messages.push(Message {
            from: Speaker::Assistant,
            text: answer.to_string(),
        });
        self.messages.last()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
