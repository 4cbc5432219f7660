//! # Contact Form Validation
//!
//! File: cli/src/content/contact.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Validates the "Send a message" form. Every field is required and the email
//! must look like `local@domain.tld`. All failing fields are reported at once,
//! keyed by field name, so the page can show each message next to its input.
//!
//! Nothing is delivered: a valid submission is only acknowledged and logged.
//!
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Per-field validation messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("contact form has {} invalid field(s)", .0.len())]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.insert("email", "Please enter a valid email address");
        }

        if self.message.trim().is_empty() {
            errors.insert("message", "Message is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }
}
