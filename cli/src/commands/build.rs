//! # Folio Build Command
//!
//! File: cli/src/commands/build.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `folio build` renders the portfolio into a static directory:
//! - `index.html` rendered from the embedded page template
//! - the configured assets directory, mirrored (files ending in `.tera` are
//!   rendered with the same context as the page)
//! - the configured resume, published as `resume.pdf`
//!
//! When no resume is available the page is built without a download link.
//!
//! ## Examples
//!
//! ```bash
//! folio build
//! folio build --out public
//! ```
//!
use crate::content;
use crate::core::config::{self, SiteConfig};
use crate::core::error::{FolioError, Result};
use crate::core::templating::{self, PageContext};
use anyhow::Context;
use clap::Parser;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name the resume is published under. The page links to it.
pub const RESUME_FILE_NAME: &str = "resume.pdf";

const INDEX_FILE_NAME: &str = "index.html";

const ASSET_TEMPLATE_EXTENSIONS: &[&str] = &[".tera"];

#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Output directory. Overrides `site.output_dir`.
    #[arg(long, short, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

pub async fn handle_build(args: BuildArgs) -> Result<()> {
    info!("Handling build command...");
    let cfg = config::load_config().context("Failed to load Folio configuration")?;
    let out_dir = args.out.unwrap_or_else(|| cfg.site.output_path());

    let index = build_site(&cfg.site, &out_dir)?;

    let shown = env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(&index, cwd))
        .unwrap_or(index);
    println!("✅ Site built: {}", shown.display());
    Ok(())
}

/// Writes the site for `site` into `out_dir` and returns the path of `index.html`.
///
/// Assets are mirrored first, so the generated `index.html` and the configured
/// resume always win over same-named asset files.
pub fn build_site(site: &SiteConfig, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).with_context(|| {
        format!("Failed to create output directory '{}'", out_dir.display())
    })?;

    let assets = existing_assets_dir(site.assets_dir.as_deref())?;
    let resume = resume_source(site.resume.as_deref());
    let asset_resume = assets.is_some_and(|dir| dir.join(RESUME_FILE_NAME).is_file());
    if let Some(dir) = assets {
        warn_reserved_collisions(dir, resume.is_some());
    }

    let has_resume = resume.is_some() || asset_resume;
    let ctx = PageContext::new(&site.title, content::portfolio(), has_resume);

    if let Some(dir) = assets {
        templating::render_asset_directory(dir, out_dir, &ctx, ASSET_TEMPLATE_EXTENSIONS)
            .with_context(|| format!("Failed to process assets from '{}'", dir.display()))?;
    }

    if let Some(source) = resume {
        publish_resume(source, out_dir)?;
    }

    let html = templating::render_page(&ctx)?;
    let index = out_dir.join(INDEX_FILE_NAME);
    fs::write(&index, html).with_context(|| format!("Failed to write '{}'", index.display()))?;
    info!("Wrote {}", index.display());
    Ok(index)
}

/// The assets directory, if one is configured and present.
fn existing_assets_dir(assets: Option<&str>) -> Result<Option<&Path>> {
    let Some(assets) = assets.map(Path::new) else {
        return Ok(None);
    };
    if assets.is_dir() {
        Ok(Some(assets))
    } else if assets.exists() {
        Err(FolioError::FileSystem(format!(
            "Assets path is not a directory: {}",
            assets.display()
        ))
        .into())
    } else {
        warn!(
            "Assets directory '{}' does not exist, skipping.",
            assets.display()
        );
        Ok(None)
    }
}

/// Top-level asset files whose output name is also written by the build.
fn reserved_collisions(assets: &Path, resume_configured: bool) -> Vec<PathBuf> {
    let mut reserved = vec![INDEX_FILE_NAME.to_string()];
    reserved.extend(
        ASSET_TEMPLATE_EXTENSIONS
            .iter()
            .map(|ext| format!("{INDEX_FILE_NAME}{ext}")),
    );
    if resume_configured {
        reserved.push(RESUME_FILE_NAME.to_string());
    }
    reserved
        .into_iter()
        .map(|name| assets.join(name))
        .filter(|path| path.is_file())
        .collect()
}

fn warn_reserved_collisions(assets: &Path, resume_configured: bool) {
    for path in reserved_collisions(assets, resume_configured) {
        warn!(
            "Asset '{}' is overwritten by the generated site and will not be published.",
            path.display()
        );
    }
}

/// The configured resume file, if it exists.
fn resume_source(resume: Option<&str>) -> Option<&Path> {
    let Some(resume) = resume else {
        info!(
            "No resume configured (site.resume); the download link is omitted."
        );
        return None;
    };

    let source = Path::new(resume);
    if source.is_file() {
        Some(source)
    } else {
        warn!(
            "Resume file '{}' not found; the download link is omitted.",
            source.display()
        );
        None
    }
}

fn publish_resume(source: &Path, out_dir: &Path) -> Result<()> {
    let target = out_dir.join(RESUME_FILE_NAME);
    fs::copy(source, &target).with_context(|| {
        format!(
            "Failed to copy resume '{}' to '{}'",
            source.display(),
            target.display()
        )
    })?;
    debug!("Copied resume to {}", target.display());
    Ok(())
}
