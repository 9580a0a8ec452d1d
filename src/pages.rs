//! Page content renderers.
//!
//! Each page maps its content table from [`crate::content`] into components.
//! The result is the page's main-slot content; [`crate::layout::render_page`]
//! turns it into a document.

use crate::components::{render_list, simple_layout, tools_section};
use crate::content::{
    ABOUT, ABOUT_HEADLINE, BIO, PORTRAIT, PROJECTS, PROJECTS_HEADLINE, PROJECTS_INTRO,
    PROJECTS_META, SOCIAL_LINKS, TOOL_SECTIONS, USES_HEADLINE, USES_INTRO, USES_META,
};
use crate::types::PageMeta;
use maud::{Markup, html};

/// A page ready to be wrapped in the shell.
pub struct PageContent {
    pub meta: PageMeta,
    pub body: Markup,
}

/// About: portrait, headline, bio and social links in a two-column grid.
pub fn about() -> Markup {
    html! {
        div.container.about {
            div.about-grid {
                div.about-portrait {
                    img.portrait src=(PORTRAIT.src) alt=(PORTRAIT.alt)
                        sizes="(min-width: 1024px) 32rem, 20rem";
                }
                div.about-text {
                    h1.page-title { (ABOUT_HEADLINE) }
                    div.about-bio {
                        @for paragraph in BIO {
                            p { (paragraph) }
                        }
                    }
                }
                div.about-links {
                    (render_list(SOCIAL_LINKS, "social-links"))
                }
            }
        }
    }
}

/// Projects: one card per project in a responsive grid.
pub fn projects() -> Markup {
    simple_layout(
        PROJECTS_HEADLINE,
        PROJECTS_INTRO,
        render_list(PROJECTS, "project-grid"),
    )
}

/// Uses: one section per tool group.
pub fn uses() -> Markup {
    simple_layout(
        USES_HEADLINE,
        USES_INTRO,
        html! {
            div.tool-sections {
                @for group in TOOL_SECTIONS {
                    (tools_section(group))
                }
            }
        },
    )
}

/// Every page of the site, in navigation order.
pub fn all() -> Vec<PageContent> {
    vec![
        PageContent {
            meta: ABOUT,
            body: about(),
        },
        PageContent {
            meta: PROJECTS_META,
            body: projects(),
        },
        PageContent {
            meta: USES_META,
            body: uses(),
        },
    ]
}

/// Number of list blocks each page renders, for build reporting.
pub fn block_counts() -> Vec<(&'static str, usize)> {
    vec![
        (ABOUT.slug, SOCIAL_LINKS.len()),
        (PROJECTS_META.slug, PROJECTS.len()),
        (
            USES_META.slug,
            TOOL_SECTIONS.iter().map(|s| s.tools.len()).sum(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ListItem;
    use crate::test_helpers::*;

    #[test]
    fn about_renders_headline_and_bio() {
        let html = about().into_string();
        assert!(html.contains("I help companies harness the power of Salesforce"));
        assert_eq!(count(&html, "<p>"), BIO.len());
    }

    #[test]
    fn about_portrait_is_decorative() {
        let html = about().into_string();
        assert!(html.contains(r#"alt="""#));
        assert!(html.contains(PORTRAIT.src));
    }

    #[test]
    fn about_social_links_in_order() {
        let html = about().into_string();
        let hrefs: Vec<&str> = SOCIAL_LINKS.iter().map(|s| s.href).collect();
        assert_eq!(data_keys(&html), hrefs);
    }

    #[test]
    fn about_mail_link_target_is_literal() {
        let html = about().into_string();
        let anchor = r#"<a class="social-link" href="mailto:b.dirheimer@gmail.com">"#;
        assert_eq!(count(&html, anchor), 1);
    }

    #[test]
    fn projects_renders_five_cards() {
        let html = projects().into_string();
        assert_eq!(count(&html, r#"<li class="card""#), 5);
        assert_eq!(element_texts(&html, "h2")[0], "Infosys Apex Optimization");
    }

    #[test]
    fn uses_renders_four_labelled_sections() {
        let html = uses().into_string();
        assert_eq!(count(&html, "aria-labelledby="), 4);
        let headings = element_texts(&html, "h2");
        assert_eq!(
            headings,
            ["Workstation", "Development tools", "Design and Prototyping", "Productivity"]
        );
    }

    #[test]
    fn uses_renders_every_tool_in_order() {
        let html = uses().into_string();
        let expected: Vec<String> = TOOL_SECTIONS
            .iter()
            .flat_map(|s| s.tools.iter())
            .map(|t| t.key().to_string())
            .collect();
        assert_eq!(data_keys(&html), expected);
    }

    #[test]
    fn all_pages_follow_navigation_order() {
        let slugs: Vec<&str> = all().iter().map(|p| p.meta.slug).collect();
        assert_eq!(slugs, ["about", "projects", "uses"]);
    }

    #[test]
    fn block_counts_match_tables() {
        assert_eq!(block_counts(), [("about", 4), ("projects", 5), ("uses", 16)]);
    }
}
