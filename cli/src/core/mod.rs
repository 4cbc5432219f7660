//! # Folio Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Infrastructure shared by the command handlers: configuration loading,
//! the error type, and page rendering.
//!
//! ## Architecture
//!
//! - `config`: `.folio.toml` discovery, layering and validation
//! - `error`: `FolioError` and the crate-wide `Result` alias
//! - `templating`: renders the portfolio page and the assets directory
//!
//! ## Usage
//!
//! ```ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{FolioError, Result}; // For error handling
//! use crate::core::templating; // For page rendering
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
