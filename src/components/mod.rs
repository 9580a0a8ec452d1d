//! Presentational building blocks shared by the pages.
//!
//! Everything here is a pure function from data to [`Markup`]. Repeated
//! content goes through [`render_list`], which is the only place list markup is
//! produced: one `li` per record, in input order, tagged with the record's key.

pub mod icons;

use crate::animation::{SECTION_BLOCK, SECTION_BODY, SECTION_HEADING};
use crate::naming;
use crate::types::{Icon, ProjectEntry, SocialLink, Spacing, ToolEntry, ToolSection};
use maud::{Markup, html};

pub use icons::icon;

/// A record that renders as one block of a list.
pub trait ListItem {
    /// Identity of the record within its list (`data-key`).
    fn key(&self) -> &str;

    /// Extra class for the `li`.
    fn class(&self) -> Option<&'static str> {
        None
    }

    /// Contents of the `li`.
    fn render(&self) -> Markup;
}

/// Render records as a `ul role="list"`, one `li` per record in input order.
///
/// An empty slice yields an empty list element.
pub fn render_list<T: ListItem>(items: &[T], class: &str) -> Markup {
    html! {
        ul role="list" class=(class) {
            @for item in items {
                li class=[item.class()] data-key=(item.key()) {
                    (item.render())
                }
            }
        }
    }
}

// ============================================================================
// Cards
// ============================================================================

impl ListItem for ProjectEntry {
    fn key(&self) -> &str {
        self.name
    }

    fn class(&self) -> Option<&'static str> {
        Some("card")
    }

    fn render(&self) -> Markup {
        html! {
            div.card-logo {
                img src=(self.logo.src) alt=(self.logo.alt) width="32" height="32";
            }
            h2.card-title {
                a.card-link href=(self.link.href) { (self.name) }
            }
            p.card-description { (self.description) }
            p.card-cta {
                (icon(Icon::Link, "card-cta-icon"))
                span { (self.link.label) }
            }
        }
    }
}

impl ListItem for ToolEntry {
    fn key(&self) -> &str {
        self.title
    }

    fn class(&self) -> Option<&'static str> {
        Some("card")
    }

    fn render(&self) -> Markup {
        html! {
            h3.card-title {
                @match self.href {
                    Some(href) => { a.card-link href=(href) { (self.title) } }
                    None => { (self.title) }
                }
            }
            p.card-description { (self.body) }
        }
    }
}

// ============================================================================
// Social links
// ============================================================================

impl ListItem for SocialLink {
    fn key(&self) -> &str {
        self.href
    }

    fn class(&self) -> Option<&'static str> {
        match self.spacing {
            Spacing::None => Some("social"),
            Spacing::Normal => Some("social social-spaced"),
            Spacing::Divided => Some("social social-divided"),
        }
    }

    fn render(&self) -> Markup {
        html! {
            a.social-link href=(self.href) {
                (icon(self.icon, "social-icon"))
                span { (self.label) }
            }
        }
    }
}

// ============================================================================
// Sections and layouts
// ============================================================================

/// A titled block labelled by its heading, with the section entrance sequence.
pub fn section(title: &str, body: Markup) -> Markup {
    let id = naming::element_id("section", title);
    html! {
        section class={ "section " (SECTION_BLOCK.class()) } aria-labelledby=(id) {
            div.section-grid {
                h2 class={ "section-title " (SECTION_HEADING.class()) } id=(id) { (title) }
                div class={ "section-body " (SECTION_BODY.class()) } {
                    (body)
                }
            }
        }
    }
}

/// A section listing one group of tools.
pub fn tools_section(group: &ToolSection) -> Markup {
    section(group.title, render_list(group.tools, "tool-list"))
}

/// Headline, intro paragraph and page content, used by list pages.
pub fn simple_layout(title: &str, intro: &str, content: Markup) -> Markup {
    html! {
        div.container.simple-layout {
            header.page-header {
                h1.page-title { (title) }
                p.page-intro { (intro) }
            }
            div.page-content {
                (content)
            }
        }
    }
}
