//! # Folio Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Builds the effective `ServerConfig` for `folio srv` from two sources:
//! 1. Command-line arguments (highest priority, when they differ from their defaults)
//! 2. The `[srv]` table and `site.output_dir` of the loaded `.folio.toml` configuration
//!
//! The served directory defaults to the configured output directory, so
//! `folio build && folio srv` previews the freshly built site.
//!
//! ## Examples
//!
//! ```toml
//! [site]
//! output_dir = "dist"
//!
//! [srv]
//! port = 9000
//! host = "0.0.0.0"
//! enable_cors = false
//! ```
//!
use crate::core::config::{self, Config};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::net::IpAddr;
use std::{env, path::PathBuf};
use tracing::debug;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_HOST: &str = "127.0.0.1";

/// Arguments for `folio srv`.
#[derive(Parser, Debug)]
pub struct SrvArgs {
    /// Directory to serve. Defaults to the configured `site.output_dir`.
    pub directory: Option<PathBuf>,

    /// Port to listen on. The next free port is used if it is taken.
    #[arg(long, short, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface address to bind.
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Do not send CORS headers.
    #[arg(long)]
    pub no_cors: bool,
}

/// Effective settings for one server run.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub directory: PathBuf,
    pub enable_cors: bool,
}

pub async fn load_and_merge_config(args: SrvArgs) -> Result<ServerConfig> {
    let loaded = config::load_config()?;
    let mut effective_config = merge_args(args, &loaded)?;
    effective_config.resolve_directory().await?;
    Ok(effective_config)
}

/// Flags left at their defaults defer to the config file. `--no-cors` can
/// only turn CORS off.
fn merge_args(args: SrvArgs, loaded: &Config) -> Result<ServerConfig> {
    let port = if args.port == DEFAULT_PORT {
        loaded.srv.port
    } else {
        args.port
    };

    let default_host: IpAddr = DEFAULT_HOST
        .parse()
        .context("Built-in default host is not an IP address")?;
    let host = if args.host == default_host {
        loaded.srv.host_addr()?
    } else {
        args.host
    };

    let directory = match args.directory {
        Some(dir) => dir,
        None => {
            debug!(
                "No directory given, serving configured output directory '{}'",
                loaded.site.output_dir
            );
            loaded.site.output_path()
        }
    };

    Ok(ServerConfig {
        port,
        host,
        directory,
        enable_cors: loaded.srv.enable_cors && !args.no_cors,
    })
}

impl ServerConfig {
    async fn resolve_directory(&mut self) -> Result<()> {
        let absolute_path = if self.directory.is_absolute() {
            self.directory.clone()
        } else {
            env::current_dir()
                .context("Failed to get current working directory")?
                .join(&self.directory)
        };

        let canonical_path = tokio::fs::canonicalize(&absolute_path)
            .await
            .with_context(|| {
                format!(
                    "Directory '{}' could not be found or accessed (run `folio build` first?)",
                    absolute_path.display()
                )
            })?;
        let metadata = tokio::fs::metadata(&canonical_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to get metadata for path '{}'",
                    canonical_path.display()
                )
            })?;
        if !metadata.is_dir() {
            anyhow::bail!("Path is not a directory: {}", canonical_path.display());
        }

        debug!(
            "Resolved serving directory to: {}",
            canonical_path.display()
        );
        self.directory = canonical_path;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use tempfile::TempDir;

    fn default_args() -> SrvArgs {
        SrvArgs::parse_from(["srv"])
    }

    #[test]
    fn test_args_defaults() {
        let args = default_args();
        assert!(args.directory.is_none());
        assert_eq!(args.port, 8000);
        assert_eq!(args.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(!args.no_cors);
    }

    #[test]
    fn test_default_args_take_config_values() -> Result<()> {
        let mut loaded = Config::default();
        loaded.srv.port = 9090;
        loaded.srv.host = "0.0.0.0".to_string();
        loaded.srv.enable_cors = false;
        loaded.site.output_dir = "public_html".to_string();

        let merged = merge_args(default_args(), &loaded)?;
        assert_eq!(merged.port, 9090);
        assert_eq!(merged.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(merged.directory, PathBuf::from("public_html"));
        assert!(!merged.enable_cors);
        Ok(())
    }

    #[test]
    fn test_explicit_args_override_config() -> Result<()> {
        let mut loaded = Config::default();
        loaded.srv.port = 9090;

        let args = SrvArgs::parse_from([
            "srv",
            "site",
            "--port",
            "7000",
            "--host",
            "0.0.0.0",
            "--no-cors",
        ]);
        let merged = merge_args(args, &loaded)?;
        assert_eq!(merged.port, 7000);
        assert_eq!(merged.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(merged.directory, PathBuf::from("site"));
        assert!(!merged.enable_cors);
        Ok(())
    }

    #[test]
    fn test_cors_enabled_by_default() -> Result<()> {
        let merged = merge_args(default_args(), &Config::default())?;
        assert!(merged.enable_cors);
        assert_eq!(merged.directory, PathBuf::from("dist"));
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_directory_existing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut config = ServerConfig {
            port: 0,
            host: Ipv4Addr::LOCALHOST.into(),
            directory: temp_dir.path().to_path_buf(),
            enable_cors: true,
        };
        config.resolve_directory().await?;
        assert_eq!(config.directory, std::fs::canonicalize(temp_dir.path())?);
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_directory_nonexistent() {
        let mut config = ServerConfig {
            port: 0,
            host: Ipv4Addr::LOCALHOST.into(),
            directory: PathBuf::from("/path/that/definitely/does/not/exist"),
            enable_cors: true,
        };
        let result = config.resolve_directory().await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("folio build"));
    }

    #[tokio::test]
    async fn test_resolve_directory_rejects_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("index.html");
        std::fs::write(&file, "<html></html>")?;
        let mut config = ServerConfig {
            port: 0,
            host: Ipv4Addr::LOCALHOST.into(),
            directory: file,
            enable_cors: true,
        };
        let err = config.resolve_directory().await.unwrap_err();
        assert!(err.to_string().contains("not a directory"));
        Ok(())
    }
}
