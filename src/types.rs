//! Content record types shared by the content tables, components and pages.
//!
//! Every record is `'static` literal data: declared once in [`crate::content`],
//! never mutated, rendered on every build.

use serde::Serialize;

/// A static image asset, referenced by its site-absolute path.
///
/// Assets live under `<source>/public/` and are copied to the output root,
/// so `src = "/infosys-logo.png"` maps to `public/infosys-logo.png`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: &'static str,
    /// Alt text. Empty for decorative images.
    pub alt: &'static str,
}

impl ImageRef {
    /// Path of the asset relative to the `public/` directory.
    pub fn public_path(&self) -> &'static str {
        self.src.trim_start_matches('/')
    }
}

/// Outbound link shown under a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// A project on the Projects page. `name` is the list key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub link: ProjectLink,
    pub logo: ImageRef,
}

/// A tool on the Uses page. `title` is the list key within its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolEntry {
    pub title: &'static str,
    pub href: Option<&'static str>,
    pub body: &'static str,
}

/// A titled group of tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolSection {
    pub title: &'static str,
    pub tools: &'static [ToolEntry],
}

/// Fixed icon shapes available to social links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    X,
    GitHub,
    LinkedIn,
    Instagram,
    Mail,
    Link,
}

/// Vertical spacing above a social link row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// First row, no extra spacing.
    #[default]
    None,
    /// Regular gap between rows.
    Normal,
    /// Wide gap with a divider line, separating contact links from profiles.
    Divided,
}

/// A social/contact link on the About page. `href` is the list key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub href: &'static str,
    pub icon: Icon,
    pub label: &'static str,
    pub spacing: Spacing,
}

/// Descriptive metadata for a page's document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// URL segment; the page is written to `<slug>/index.html`.
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl PageMeta {
    /// Site-absolute URL of the page.
    pub fn path(&self) -> String {
        format!("/{}/", self.slug)
    }
}
