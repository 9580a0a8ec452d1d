//! HTML site generation.
//!
//! Renders every page into the output directory and writes the assets the
//! pages link to.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html            # Redirect to /about/
//! ├── about/index.html
//! ├── projects/index.html
//! ├── uses/index.html
//! ├── style.1a2b3c4d.css    # Content-hashed stylesheet
//! ├── site.webmanifest
//! └── ...                   # Everything from <source>/public/
//! ```
//!
//! ## CSS
//!
//! The stylesheet is assembled at build time from three parts: color custom
//! properties from config, the animation rules compiled from the entrance
//! timelines, and the base styles embedded from `static/style.css`. Its file
//! name carries a hash of its contents so a changed stylesheet never collides
//! with a cached one.
//!
//! ## Assets
//!
//! Images referenced by the content tables must exist under the public
//! directory. `build` reports missing ones and carries on (the page still
//! renders, the browser shows alt text); `check` treats them as an error.

use crate::animation;
use crate::config::{self, SiteConfig};
use crate::content::{self, ABOUT, ContentError};
use crate::layout::{self, MANIFEST_HREF};
use crate::pages;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Asset copy error: {0}")]
    WalkDir(#[from] walkdir::Error),
    #[error("Missing assets in public directory: {}", .0.join(", "))]
    MissingAssets(Vec<String>),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Result of a build, consumed by [`crate::output`].
#[derive(Debug)]
pub struct BuildReport {
    pub pages: Vec<PageReport>,
    /// File name of the stylesheet, relative to the output root.
    pub stylesheet: String,
    pub assets_copied: usize,
    /// Referenced assets not found in the public directory.
    pub missing_assets: Vec<String>,
}

/// One written page.
#[derive(Debug)]
pub struct PageReport {
    pub title: &'static str,
    /// Output file, relative to the output root.
    pub file: String,
    /// Number of list blocks rendered on the page.
    pub blocks: usize,
}

/// Web app manifest linked from every page.
#[derive(Debug, Serialize)]
struct WebManifest<'a> {
    name: &'a str,
    short_name: &'a str,
    description: &'a str,
    start_url: String,
    display: &'static str,
    background_color: &'a str,
    theme_color: &'a str,
}

/// Full stylesheet for the site: colors, animations, base styles.
pub fn build_stylesheet(config: &SiteConfig) -> String {
    let color_css = config::generate_color_css(&config.colors);
    let animation_css = animation::stylesheet(&config.animation);
    format!("{color_css}\n{animation_css}\n{CSS_STATIC}")
}

/// First 8 hex digits of the SHA-256 of `contents`.
pub fn fingerprint(contents: &str) -> String {
    let digest = Sha256::digest(contents.as_bytes());
    digest.iter().take(4).map(|b| format!("{b:02x}")).collect()
}

/// Render the web app manifest JSON.
pub fn web_manifest(config: &SiteConfig) -> Result<String, GenerateError> {
    let manifest = WebManifest {
        name: &config.site.default_title,
        short_name: &config.site.author,
        description: &config.site.description,
        start_url: ABOUT.path(),
        display: "browser",
        background_color: &config.colors.light.background,
        theme_color: &config.colors.light.surface,
    };
    Ok(serde_json::to_string_pretty(&manifest)?)
}

/// Referenced images absent from `public_dir`, as site-absolute paths.
pub fn missing_assets(public_dir: &Path) -> Vec<String> {
    content::referenced_images()
        .into_iter()
        .filter(|image| !public_dir.join(image.public_path()).is_file())
        .map(|image| image.src.to_string())
        .collect()
}

/// Validate content and assets without writing anything.
pub fn check(source: &Path, config: &SiteConfig) -> Result<(), GenerateError> {
    content::validate()?;
    let missing = missing_assets(&source.join(&config.public_dir));
    if !missing.is_empty() {
        return Err(GenerateError::MissingAssets(missing));
    }
    Ok(())
}

/// Build the site from `source` into `output_dir`.
pub fn generate(
    source: &Path,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<BuildReport, GenerateError> {
    content::validate()?;
    fs::create_dir_all(output_dir)?;
    remove_stale_stylesheets(output_dir)?;

    let public_dir = source.join(&config.public_dir);
    let assets_copied = if public_dir.is_dir() {
        copy_public(&public_dir, output_dir)?
    } else {
        0
    };
    let missing = missing_assets(&public_dir);

    let css = build_stylesheet(config);
    let stylesheet = format!("style.{}.css", fingerprint(&css));
    fs::write(output_dir.join(&stylesheet), &css)?;
    let stylesheet_href = format!("/{stylesheet}");

    fs::write(
        output_dir.join(MANIFEST_HREF.trim_start_matches('/')),
        web_manifest(config)?,
    )?;

    let block_counts = pages::block_counts();
    let mut reports = Vec::new();
    for page in pages::all() {
        let html = layout::render_page(&config.site, &page.meta, &stylesheet_href, page.body);
        let page_dir = output_dir.join(page.meta.slug);
        fs::create_dir_all(&page_dir)?;
        fs::write(page_dir.join("index.html"), html.into_string())?;
        reports.push(PageReport {
            title: page.meta.title,
            file: format!("{}/index.html", page.meta.slug),
            blocks: block_counts
                .iter()
                .find(|(slug, _)| *slug == page.meta.slug)
                .map(|(_, n)| *n)
                .unwrap_or(0),
        });
    }

    let index = layout::redirect_document(&config.site, &stylesheet_href, &ABOUT);
    fs::write(output_dir.join("index.html"), index.into_string())?;

    Ok(BuildReport {
        pages: reports,
        stylesheet,
        assets_copied,
        missing_assets: missing,
    })
}

/// Copy every file under `src` into `dst`, preserving relative paths.
fn copy_public(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Whether `name` has the shape of a generated stylesheet, `style.<8 hex>.css`.
fn is_generated_stylesheet(name: &str) -> bool {
    name.strip_prefix("style.")
        .and_then(|rest| rest.strip_suffix(".css"))
        .is_some_and(|hash| hash.len() == 8 && hash.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Delete stylesheets left by earlier builds. Runs before public assets are
/// copied, so nothing from `public/` is touched.
fn remove_stale_stylesheets(output_dir: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(output_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if is_generated_stylesheet(&name.to_string_lossy()) && entry.path().is_file() {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
