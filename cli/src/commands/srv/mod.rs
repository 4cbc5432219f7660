//! # Folio Site Server
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Serves a built portfolio site for local preview, together with the two
//! JSON endpoints the page calls:
//! - `POST /api/ask`: answers a question with the FAQ assistant
//! - `POST /api/contact`: validates the contact form
//!
//! Everything else is a static file lookup in the served directory.
//!
//! ## Architecture
//!
//! - `config.rs`: CLI arguments and their merge with the `[srv]` config table
//! - `server_logic.rs`: router, handlers, port selection and shutdown
//! - `utils.rs`: directory inspection and network address lookup
//!
//! ## Examples
//!
//! ```bash
//! # Serve the configured output directory (default: dist)
//! folio build && folio srv
//!
//! # Specify a port and host interface
//! folio srv --port 9000 --host 0.0.0.0 ./dist
//!
//! # Disable CORS headers
//! folio srv --no-cors
//! ```
//!
//! Server startup flow:
//! 1. Merge CLI arguments with the loaded configuration
//! 2. Find an available port (if the requested port is in use)
//! 3. Build the router with the API routes and the static file fallback
//! 4. Print the server URLs and serve until Ctrl+C or SIGTERM
//!
use crate::core::error::Result;
use tracing::info;

pub use config::SrvArgs;

/// Merges `folio srv` arguments with the `[srv]` configuration.
pub mod config;

/// Axum router, request handlers and server lifecycle.
pub mod server_logic;

/// Directory inspection and network address helpers.
pub mod utils;

/// Entry point for `folio srv`.
pub async fn handle_srv(args: SrvArgs) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let config = config::load_and_merge_config(args).await?;
    info!("Effective server config: {:?}", config);

    server_logic::run_server(config).await
}
