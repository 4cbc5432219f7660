//! # Folio Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module renders the portfolio page and processes the optional assets
//! directory for `folio build`.
//!
//! ## Architecture
//!
//! - `PageContext`: everything the page template reads, built from the
//!   content store and the assistant tables
//! - `render_page`: renders the embedded `index.html.tera` template
//! - `render_asset_directory`: mirrors an assets directory into the output,
//!   rendering files with a template extension and copying everything else
//!
//! Asset processing rules:
//! - Handles template files with extensions like `.tera`, `.tmpl`
//! - Preserves directory structure
//! - Skips hidden files and directories (starting with `.`)
//!
//! ## Examples
//!
//! ```ignore
//! let ctx = PageContext::new("Manish Sahu | Portfolio", content::portfolio(), true);
//! let html = templating::render_page(&ctx)?;
//! templating::render_asset_directory(&assets, &out, &ctx, &[".tera"])?;
//! ```
//!
use crate::assistant::{self, Topic};
use crate::content::{carousel::DEFAULT_ITEMS_PER_SLIDE, Achievement, DomainProjects, Portfolio};
use crate::core::error::{FolioError, Result};
use anyhow::{anyhow, Context};
use chrono::Datelike;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::Tera;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// The single-page site template.
pub const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html.tera");

/// Data handed to the page template.
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub portfolio: &'a Portfolio,
    pub featured: Vec<DomainProjects<'a>>,
    pub certifications: Vec<&'a Achievement>,
    pub awards: Vec<&'a Achievement>,
    pub achievement_slides: Vec<&'a [Achievement]>,
    pub assistant: AssistantView,
    pub has_resume: bool,
    pub year: i32,
}

#[derive(Debug, Serialize)]
pub struct AssistantView {
    pub placeholder: &'static str,
    pub suggestions: Vec<&'static str>,
}

impl<'a> PageContext<'a> {
    pub fn new(title: &'a str, portfolio: &'a Portfolio, has_resume: bool) -> Self {
        Self {
            title,
            portfolio,
            featured: portfolio.projects_by_domain(),
            certifications: portfolio.certifications().collect(),
            awards: portfolio.awards().collect(),
            achievement_slides: portfolio.achievement_slides(DEFAULT_ITEMS_PER_SLIDE),
            assistant: AssistantView {
                placeholder: assistant::EMPTY_LOG_PLACEHOLDER,
                suggestions: Topic::ALL.iter().map(|t| t.sample_question()).collect(),
            },
            has_resume,
            year: chrono::Local::now().year(),
        }
    }

    fn to_tera(&self) -> Result<tera::Context> {
        tera::Context::from_serialize(self).map_err(|e| {
            anyhow!(FolioError::Template { source: e })
                .context("Failed to create Tera context from page data")
        })
    }
}

pub fn render_page(ctx: &PageContext<'_>) -> Result<String> {
    let tera_context = ctx.to_tera()?;
    Tera::one_off(PAGE_TEMPLATE, &tera_context, true).map_err(|e| {
        anyhow!(FolioError::Template { source: e })
            .context("Tera rendering failed for page template")
    })
}

pub fn render_asset_directory(
    source_dir: &Path,
    target_dir: &Path,
    ctx: &PageContext<'_>,
    template_extensions: &[&str],
) -> Result<()> {
    info!(
        "Processing assets from '{}' into '{}'",
        source_dir.display(),
        target_dir.display()
    );
    fs::create_dir_all(target_dir).with_context(|| {
        format!(
            "Failed to create target directory '{}'",
            target_dir.display()
        )
    })?;

    let tera_context = ctx.to_tera()?;

    for entry_result in WalkDir::new(source_dir) {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to access entry during walk in '{}': {}",
                    source_dir.display(),
                    e
                );
                continue;
            }
        };
        let src_path = entry.path();
        let relative_path = match src_path.strip_prefix(source_dir) {
            Ok(p) => p,
            Err(_) => {
                warn!(
                    "Could not determine relative path for '{}' based on '{}'",
                    src_path.display(),
                    source_dir.display()
                );
                continue;
            }
        };
        let target_path = target_dir.join(relative_path);

        if relative_path
            .components()
            .any(|comp| comp.as_os_str().to_string_lossy().starts_with('.'))
        {
            debug!("Skipping hidden path: {}", src_path.display());
            continue;
        }

        if src_path.is_dir() {
            fs::create_dir_all(&target_path).with_context(|| {
                format!(
                    "Failed to create target subdirectory '{}'",
                    target_path.display()
                )
            })?;
        } else if src_path.is_file() {
            let file_name = match src_path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => {
                    warn!("Skipping file without a name: {}", src_path.display());
                    continue;
                }
            };
            let lower_name = file_name.to_lowercase();
            let matching_ext = template_extensions
                .iter()
                .find(|ext| lower_name.ends_with(&ext.to_lowercase()));

            if let Some(ext) = matching_ext {
                let template_content = fs::read_to_string(src_path).with_context(|| {
                    format!("Failed to read template file '{}'", src_path.display())
                })?;
                let rendered = Tera::one_off(&template_content, &tera_context, true).map_err(|e| {
                    anyhow!(FolioError::Template { source: e }).context(format!(
                        "Tera rendering failed for template file '{}'",
                        src_path.display()
                    ))
                })?;
                let final_target_path =
                    target_path.with_file_name(&file_name[..file_name.len() - ext.len()]);
                fs::write(&final_target_path, rendered).with_context(|| {
                    format!(
                        "Failed to write rendered file '{}'",
                        final_target_path.display()
                    )
                })?;
                debug!(
                    "Rendered template '{}' to '{}'",
                    src_path.display(),
                    final_target_path.display()
                );
            } else {
                fs::copy(src_path, &target_path).with_context(|| {
                    format!(
                        "Failed to copy file '{}' to '{}'",
                        src_path.display(),
                        target_path.display()
                    )
                })?;
                debug!(
                    "Copied file '{}' to '{}'",
                    src_path.display(),
                    target_path.display()
                );
            }
        } else {
            warn!(
                "Skipping unsupported file system entry type at '{}'",
                src_path.display()
            );
        }
    }
    info!("Asset processing completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use tempfile::tempdir;

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn page() -> PageContext<'static> {
        PageContext::new("Test Folio", content::portfolio(), false)
    }

    #[test]
    fn test_render_page_contains_every_section() -> Result<()> {
        let html = render_page(&page())?;
        for id in [
            "home",
            "about",
            "skills",
            "achievements",
            "projects",
            "hobbies",
            "contact",
        ] {
            assert!(
                html.contains(&format!("id=\"{id}\"")),
                "missing section {id}"
            );
        }
        assert!(html.contains("<title>Test Folio</title>"));
        Ok(())
    }

    #[test]
    fn test_render_page_lists_content() -> Result<()> {
        let html = render_page(&page())?;
        assert!(html.contains("Cloud &amp; DevOps"));
        assert!(html.contains("Event-Driven Architecture on AWS"));
        assert!(html.contains("Playing Cricket"));
        assert!(html.contains("Social Media Lead at CII"));
        assert!(html.contains("Firefox Setup in Docker"));
        Ok(())
    }

    #[test]
    fn test_resume_link_only_when_available() -> Result<()> {
        let without = render_page(&page())?;
        assert!(!without.contains("href=\"resume.pdf\""));

        let with = render_page(&PageContext::new("T", content::portfolio(), true))?;
        assert!(with.contains("href=\"resume.pdf\""));
        Ok(())
    }

    #[test]
    fn test_title_is_escaped() -> Result<()> {
        let html = render_page(&PageContext::new("<b>x</b>", content::portfolio(), false))?;
        assert!(html.contains("&lt;b&gt;x&lt;&#x2F;b&gt;"));
        Ok(())
    }

    #[test]
    fn test_render_and_copy_assets() -> Result<()> {
        let source = tempdir().unwrap();
        let target = tempdir().unwrap();

        create_file(
            &source.path().join("404.html.tera"),
            "<h1>{{ portfolio.profile.name }}</h1>",
        );
        create_file(&source.path().join("img/manish.jpg"), "jpeg");
        create_file(&source.path().join(".DS_Store"), "junk");
        create_file(&source.path().join(".cache/x"), "junk");

        render_asset_directory(source.path(), target.path(), &page(), &[".tera"])?;

        let rendered = fs::read_to_string(target.path().join("404.html"))?;
        assert_eq!(rendered, "<h1>Manish Sahu</h1>");
        assert!(target.path().join("img/manish.jpg").is_file());
        assert!(!target.path().join(".DS_Store").exists());
        assert!(!target.path().join(".cache").exists());
        Ok(())
    }

    #[test]
    fn test_render_case_insensitive_extension() -> Result<()> {
        let source = tempdir().unwrap();
        let target = tempdir().unwrap();
        create_file(&source.path().join("ROBOTS.TXT.TERA"), "# {{ title }}");

        render_asset_directory(source.path(), target.path(), &page(), &[".tera"])?;

        let content = fs::read_to_string(target.path().join("ROBOTS.TXT"))?;
        assert_eq!(content, "# Test Folio");
        Ok(())
    }

    #[test]
    fn test_render_invalid_asset_template() {
        let source = tempdir().unwrap();
        let target = tempdir().unwrap();
        create_file(&source.path().join("invalid.tera"), "Hello {{ title");

        let result = render_asset_directory(source.path(), target.path(), &page(), &[".tera"]);
        assert!(result.is_err());
        let error_string = result.unwrap_err().to_string();
        assert!(error_string.contains("Tera rendering failed"));
        assert!(error_string.contains("invalid.tera"));
    }
}
