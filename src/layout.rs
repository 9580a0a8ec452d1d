//! Document head and the animated page shell.
//!
//! Every page goes through [`render_page`]: the page's content is placed in
//! the shell's main slot, the shell is placed in the document body, and the
//! head is filled from the site config and the page's [`PageMeta`].
//!
//! ```text
//! body
//! ├── div.shell-backdrop        anim-shell-backdrop
//! │   └── div.shell-frame       anim-shell-frame
//! │       └── div.shell-surface
//! └── div.shell-wrapper         anim-shell-wrapper
//!     ├── div.shell-header      anim-shell-header
//!     ├── main.shell-main       anim-shell-main     ← page content
//!     └── div.shell-footer      anim-shell-footer
//! ```
//!
//! The content is written into `main` unconditionally. Animation classes only
//! style the regions; see [`crate::animation`].

use crate::animation::{
    SHELL_BACKDROP, SHELL_FOOTER, SHELL_FRAME, SHELL_HEADER, SHELL_MAIN, SHELL_WRAPPER,
};
use crate::config::SiteMeta;
use crate::content::PAGES;
use crate::types::PageMeta;
use maud::{DOCTYPE, Markup, html};

/// Site-absolute path of the web app manifest.
pub const MANIFEST_HREF: &str = "/site.webmanifest";

/// What the document head needs to know about one document.
#[derive(Debug, Clone)]
pub struct Head<'a> {
    /// Full document title, template already applied.
    pub title: String,
    pub description: &'a str,
    /// Href of the site stylesheet.
    pub stylesheet: &'a str,
}

/// Renders the base HTML document structure.
pub fn base_document(site: &SiteMeta, head: &Head, extra_head: Markup, body: Markup) -> Markup {
    let feed = site.feed_url();
    html! {
        (DOCTYPE)
        html lang=(site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (head.title) }
                meta name="description" content=(head.description);
                meta property="og:title" content=(head.title);
                meta property="og:description" content=(head.description);
                meta property="og:type" content="website";
                @if let Some(feed) = feed {
                    link rel="alternate" type="application/rss+xml" href=(feed);
                }
                link rel="manifest" href=(MANIFEST_HREF);
                link rel="stylesheet" href=(head.stylesheet);
                (extra_head)
            }
            body {
                (body)
            }
        }
    }
}

/// Site navigation; the current page is marked with `aria-current`.
pub fn site_nav(current: &str) -> Markup {
    html! {
        nav.site-nav {
            ul role="list" {
                @for page in PAGES {
                    @let is_current = page.slug == current;
                    li class=[is_current.then_some("current")] {
                        a href=(page.path()) aria-current=[is_current.then_some("page")] {
                            (page.title)
                        }
                    }
                }
            }
        }
    }
}

/// Header region: home link plus navigation.
pub fn site_header(current: &str) -> Markup {
    html! {
        header.site-header {
            a.site-home href="/" aria-label="Home" { "BD" }
            (site_nav(current))
        }
    }
}

/// Footer region: navigation repeated plus the copyright line.
pub fn site_footer(current: &str, author: &str) -> Markup {
    html! {
        footer.site-footer {
            (site_nav(current))
            p.site-copyright { "© " (author) ". All rights reserved." }
        }
    }
}

/// Wrap page content in the animated shell.
pub fn page_shell(current: &str, author: &str, content: Markup) -> Markup {
    html! {
        div class={ "shell-backdrop " (SHELL_BACKDROP.class()) } {
            div class={ "shell-frame " (SHELL_FRAME.class()) } {
                div.shell-surface {}
            }
        }
        div class={ "shell-wrapper " (SHELL_WRAPPER.class()) } {
            div class={ "shell-header " (SHELL_HEADER.class()) } {
                (site_header(current))
            }
            main class={ "shell-main " (SHELL_MAIN.class()) } {
                (content)
            }
            div class={ "shell-footer " (SHELL_FOOTER.class()) } {
                (site_footer(current, author))
            }
        }
    }
}

/// Render a complete page document.
pub fn render_page(site: &SiteMeta, page: &PageMeta, stylesheet: &str, content: Markup) -> Markup {
    let head = Head {
        title: site.page_title(page.title),
        description: page.description,
        stylesheet,
    };
    base_document(
        site,
        &head,
        html! {},
        page_shell(page.slug, &site.author, content),
    )
}

/// Root document that forwards visitors to `target`.
pub fn redirect_document(site: &SiteMeta, stylesheet: &str, target: &PageMeta) -> Markup {
    let head = Head {
        title: site.default_title.clone(),
        description: &site.description,
        stylesheet,
    };
    let target_path = target.path();
    let extra_head = html! {
        meta http-equiv="refresh" content={ "0; url=" (target_path) };
        link rel="canonical" href=(target_path);
    };
    base_document(
        site,
        &head,
        extra_head,
        html! {
            p.redirect {
                a href=(target_path) { (target.title) }
            }
        },
    )
}
