//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! describe the shipped site; a `config.toml` in the source directory only
//! needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! public_dir = "public"     # Static assets, copied to the output root
//!
//! [site]
//! author = "Bradley Dirheimer"
//! title_template = "%s - Bradley Dirheimer"   # %s = page title
//! default_title = "Bradley Dirheimer - Senior Consultant and Software Engineer"
//! description = "..."
//! lang = "en"
//! # site_url = "https://example.com"         # Enables the RSS alternate link
//!
//! [animation]
//! enabled = true                 # false = render everything at rest
//! respect_reduced_motion = true  # skip animations for prefers-reduced-motion
//!
//! [colors.light]
//! background = "#fafafa"
//! surface = "#ffffff"
//! text = "#27272a"
//! text_muted = "#52525b"
//! border = "#f4f4f5"
//! accent = "#8b5cf6"
//!
//! [colors.dark]
//! background = "#000000"
//! surface = "#18181b"
//! text = "#f4f4f5"
//! text_muted = "#a1a1aa"
//! border = "#3f3f46"
//! accent = "#8b5cf6"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (relative to the source dir) holding static assets.
    pub public_dir: String,
    /// Document head metadata.
    pub site: SiteMeta,
    /// Entrance animation switches.
    pub animation: AnimationConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            public_dir: "public".to_string(),
            site: SiteMeta::default(),
            animation: AnimationConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.site.title_template.contains("%s") {
            return Err(ConfigError::Validation(
                "site.title_template must contain %s".into(),
            ));
        }
        if self.site.author.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.author must not be empty".into(),
            ));
        }
        if let Some(url) = &self.site.site_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::Validation(format!(
                    "site.site_url must be an http(s) URL, got '{url}'"
                )));
            }
        }
        if self.public_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "public_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Metadata used to populate every page's `<head>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Site owner, shown in the footer.
    pub author: String,
    /// Page title template; `%s` is replaced by the page title.
    pub title_template: String,
    /// Title for documents without a page title (the root redirect).
    pub default_title: String,
    /// Site-wide description, used by the root redirect document and the
    /// web app manifest. Pages carry their own.
    pub description: String,
    /// Document language.
    pub lang: String,
    /// Public base URL. When set, pages link an RSS feed at `{site_url}/feed.xml`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            author: "Bradley Dirheimer".to_string(),
            title_template: "%s - Bradley Dirheimer".to_string(),
            default_title: "Bradley Dirheimer - Senior Consultant and Software Engineer"
                .to_string(),
            description: "I'm Bradley Dirheimer, a Senior Consultant and Software Engineer \
                          based in Hamilton, Ohio. I specialize in Salesforce, data platforms, \
                          and building cutting-edge solutions that optimize business processes \
                          and improve customer experiences."
                .to_string(),
            lang: "en".to_string(),
            site_url: None,
        }
    }
}

impl SiteMeta {
    /// Full document title for a page.
    pub fn page_title(&self, title: &str) -> String {
        self.title_template.replace("%s", title)
    }

    /// RSS feed URL, if a site URL is configured.
    pub fn feed_url(&self) -> Option<String> {
        self.site_url
            .as_deref()
            .map(|url| format!("{}/feed.xml", url.trim_end_matches('/')))
    }
}

/// Entrance animation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// When false no animation CSS is emitted and every region renders at rest.
    pub enabled: bool,
    /// Only animate for visitors without `prefers-reduced-motion: reduce`.
    pub respect_reduced_motion: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            respect_reduced_motion: true,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background, behind the framed column.
    pub background: String,
    /// Framed column background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (intros, card descriptions, link labels).
    pub text_muted: String,
    /// Hairlines: frame ring, section rule, divider.
    pub border: String,
    /// Hover color for links and icons.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fafafa".to_string(),
            surface: "#ffffff".to_string(),
            text: "#27272a".to_string(),
            text_muted: "#52525b".to_string(),
            border: "#f4f4f5".to_string(),
            accent: "#8b5cf6".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#000000".to_string(),
            surface: "#18181b".to_string(),
            text: "#f4f4f5".to_string(),
            text_muted: "#a1a1aa".to_string(),
            border: "#3f3f46".to_string(),
            accent: "#8b5cf6".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the source directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(source: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(source)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directory of static assets (portrait, logos, favicon), relative to the
# source directory. Its contents are copied to the output root, so
# public/infosys-logo.png is served as /infosys-logo.png.
public_dir = "public"

# ---------------------------------------------------------------------------
# Document head
# ---------------------------------------------------------------------------
[site]
author = "Bradley Dirheimer"

# Page titles. %s is replaced by the page title ("About", "Projects", ...).
title_template = "%s - Bradley Dirheimer"

# Title for documents without a page title.
default_title = "Bradley Dirheimer - Senior Consultant and Software Engineer"

description = "I'm Bradley Dirheimer, a Senior Consultant and Software Engineer based in Hamilton, Ohio. I specialize in Salesforce, data platforms, and building cutting-edge solutions that optimize business processes and improve customer experiences."

lang = "en"

# Public base URL of the site. When set, every page links an RSS feed
# at {site_url}/feed.xml.
# site_url = "https://example.com"

# ---------------------------------------------------------------------------
# Entrance animations
# ---------------------------------------------------------------------------
[animation]
# Set to false to render every region at rest with no animation CSS.
enabled = true

# Skip animations for visitors who ask for reduced motion.
respect_reduced_motion = true

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fafafa"
surface = "#ffffff"
text = "#27272a"
text_muted = "#52525b"
border = "#f4f4f5"
accent = "#8b5cf6"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#000000"
surface = "#18181b"
text = "#f4f4f5"
text_muted = "#a1a1aa"
border = "#3f3f46"
accent = "#8b5cf6"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    fn vars(scheme: &ColorScheme, indent: &str) -> String {
        [
            ("bg", &scheme.background),
            ("surface", &scheme.surface),
            ("text", &scheme.text),
            ("text-muted", &scheme.text_muted),
            ("border", &scheme.border),
            ("accent", &scheme.accent),
        ]
        .iter()
        .map(|(name, value)| format!("{indent}--color-{name}: {value};\n"))
        .collect()
    }

    format!(
        ":root {{\n{light}}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{dark}    }}\n}}\n",
        light = vars(&colors.light, "    "),
        dark = vars(&colors.dark, "        "),
    )
}
