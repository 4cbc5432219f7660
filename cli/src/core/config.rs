//! # Folio Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for Folio, handling loading,
//! merging, validation, and access to configuration data. Configuration only
//! covers the site plumbing (where to write the rendered page, which assets to
//! copy, server defaults). The assistant's rule table is hard-coded and is not
//! configurable.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.folio.toml` in current directory or ancestors
//! 2. User-specific `config.toml` in the platform config directory
//! 3. Default values defined in the code
//!
//! The project search stops at the first directory containing `.git`.
//!
//! ## Examples
//!
//! ```toml
//! [site]
//! title = "Manish Sahu | Portfolio"
//! output_dir = "dist"
//! assets_dir = "public"
//! resume = "public/resume.pdf"
//!
//! [srv]
//! port = 8000
//! host = "127.0.0.1"
//! enable_cors = true
//! ```
//!
//! ```ignore
//! let cfg = config::load_config()?;
//! let out = cfg.site.output_path();
//! ```
//!
use crate::core::error::{FolioError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::IpAddr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub srv: SrvDefaults,
}

/// Settings for `folio build`.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Value of the page `<title>`.
    #[serde(default = "default_site_title")]
    pub title: String,
    /// Directory the rendered site is written to (can use ~).
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Optional directory of static assets (images, icons) copied next to `index.html`.
    #[serde(default)]
    pub assets_dir: Option<String>,
    /// Optional resume file, published as `resume.pdf`.
    #[serde(default)]
    pub resume: Option<String>,
}

/// Defaults for `folio srv`. Command-line flags override these.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SrvDefaults {
    #[serde(default = "default_srv_port")]
    pub port: u16,
    #[serde(default = "default_srv_host")]
    pub host: String,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            output_dir: default_output_dir(),
            assets_dir: None,
            resume: None,
        }
    }
}

impl Default for SrvDefaults {
    fn default() -> Self {
        Self {
            port: default_srv_port(),
            host: default_srv_host(),
            enable_cors: default_enable_cors(),
        }
    }
}

impl SiteConfig {
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}

impl SrvDefaults {
    /// Parsed host address. Only valid after `validate_config` has accepted the config.
    pub fn host_addr(&self) -> Result<IpAddr> {
        self.host.parse().map_err(|e| {
            anyhow!(FolioError::Config(format!(
                "Invalid srv.host '{}': {}",
                self.host, e
            )))
        })
    }
}

fn default_site_title() -> String {
    "Manish Sahu | Portfolio".to_string()
}
fn default_output_dir() -> String {
    "dist".to_string()
}
fn default_srv_port() -> u16 {
    8000
}
fn default_srv_host() -> String {
    "127.0.0.1".to_string()
}
fn default_enable_cors() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".folio.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "Folio", "folio") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.folio.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.site.title = if project_cfg.site.title != default_site_title() {
        project_cfg.site.title
    } else {
        user.site.title
    };
    merged.site.output_dir = if project_cfg.site.output_dir != default_output_dir() {
        project_cfg.site.output_dir
    } else {
        user.site.output_dir
    };
    merged.site.assets_dir = project_cfg.site.assets_dir.or(user.site.assets_dir);
    merged.site.resume = project_cfg.site.resume.or(user.site.resume);
    merged.srv.port = if project_cfg.srv.port != default_srv_port() {
        project_cfg.srv.port
    } else {
        user.srv.port
    };
    merged.srv.host = if project_cfg.srv.host != default_srv_host() {
        project_cfg.srv.host
    } else {
        user.srv.host
    };
    // Disabling CORS anywhere keeps it disabled.
    merged.srv.enable_cors = project_cfg.srv.enable_cors && user.srv.enable_cors;
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.site.output_dir = shellexpand::tilde(&config.site.output_dir).into_owned();
    debug!("Expanded output directory: {}", config.site.output_dir);
    if let Some(assets) = config.site.assets_dir.as_mut() {
        *assets = shellexpand::tilde(assets).into_owned();
        debug!("Expanded assets directory: {}", assets);
    }
    if let Some(resume) = config.site.resume.as_mut() {
        *resume = shellexpand::tilde(resume).into_owned();
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.site.output_dir.trim().is_empty() {
        return Err(anyhow!(FolioError::Config(
            "site.output_dir cannot be empty.".to_string()
        )));
    }
    if let Some(assets) = &config.site.assets_dir {
        let assets_path = PathBuf::from(assets);
        if !assets_path.exists() {
            warn!(
                "Configured assets directory '{}' does not exist.",
                assets_path.display()
            );
        } else if !assets_path.is_dir() {
            return Err(anyhow!(FolioError::Config(format!(
                "Configured assets path '{}' exists but is not a directory.",
                assets_path.display()
            ))));
        }
    }
    config.srv.host_addr()?;
    info!("Configuration validation successful.");
    Ok(())
}
