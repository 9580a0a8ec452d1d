//! Literal site content.
//!
//! Each page owns one table here; nothing else declares content. Tables are
//! `'static` and rendered as-is: no sorting, filtering or deduplication happens
//! downstream, so the order below is the order on the page.
//!
//! [`validate`] checks the one structural invariant the renderers rely on:
//! list keys (project names, tool titles, social hrefs) are unique within
//! their list, and no key is empty. Section titles must also produce distinct
//! element ids, since each section is labelled by its heading's id.

use crate::naming;
use crate::types::{
    Icon, ImageRef, PageMeta, ProjectEntry, ProjectLink, SocialLink, Spacing, ToolEntry,
    ToolSection,
};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate key '{key}' in {list}")]
    DuplicateKey { list: String, key: String },
    #[error("empty key in {0}")]
    EmptyKey(String),
}

// ============================================================================
// About
// ============================================================================

pub const ABOUT: PageMeta = PageMeta {
    slug: "about",
    title: "About",
    description: "I'm Bradley Dirheimer, a Senior Consultant and Software Engineer.",
};

pub const ABOUT_HEADLINE: &str = "I'm Bradley Dirheimer. I help companies harness the power of \
Salesforce, data platforms, and automation.";

pub const PORTRAIT: ImageRef = ImageRef {
    src: "/219E6740-D00E-49C3-A541-19149E44F5BA_1_105_c.jpeg",
    alt: "",
};

pub const BIO: &[&str] = &[
    "With over a decade of experience in the IT sector, I've developed cutting-edge solutions \
     in Salesforce, data management, and customer data platforms (CDP). From leading teams to \
     building complex projects, I've ensured that every project aligns with the latest \
     technology trends.",
    "I'm passionate about solving problems, creating custom integrations, and streamlining \
     processes for maximum efficiency. My projects have reduced manual processing time by 40% \
     and improved user satisfaction significantly.",
    "Today, I work with businesses across industries, enabling them to integrate data \
     environments, build efficient APIs, and scale their operations with technology.",
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "https://twitter.com/brd513",
        icon: Icon::X,
        label: "Follow on X",
        spacing: Spacing::None,
    },
    SocialLink {
        href: "https://github.com/dirheimerb",
        icon: Icon::GitHub,
        label: "Follow on GitHub",
        spacing: Spacing::Normal,
    },
    SocialLink {
        href: "https://www.linkedin.com/in/bradley-dirheimer-88465b181",
        icon: Icon::LinkedIn,
        label: "Follow on LinkedIn",
        spacing: Spacing::Normal,
    },
    SocialLink {
        href: "mailto:b.dirheimer@gmail.com",
        icon: Icon::Mail,
        label: "b.dirheimer@gmail.com",
        spacing: Spacing::Divided,
    },
];

// ============================================================================
// Projects
// ============================================================================

pub const PROJECTS_META: PageMeta = PageMeta {
    slug: "projects",
    title: "Projects",
    description: "Some of the projects I've worked on to help organizations improve their \
                  operations and customer data management.",
};

pub const PROJECTS_HEADLINE: &str =
    "Projects I've contributed to that have driven business transformation.";

pub const PROJECTS_INTRO: &str = "These projects represent my work across industries, focusing \
on Salesforce optimization, data integration, and system efficiency improvements.";

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        name: "Infosys Apex Optimization",
        description: "Engineered and optimized Apex classes, triggers, and batch processes for \
                      high-volume data operations, improving data processing speed by 30%.",
        link: ProjectLink {
            href: "https://www.infosys.com/",
            label: "infosys.com",
        },
        logo: ImageRef {
            src: "/infosys-logo.png",
            alt: "Infosys Apex Optimization",
        },
    },
    ProjectEntry {
        name: "Golden Technology LWC Development",
        description: "Developed custom Salesforce solutions, including dynamic Lightning Web \
                      Components, improving user satisfaction and reducing development time \
                      by 15%.",
        link: ProjectLink {
            href: "https://goldenitinc.com/",
            label: "goldentechnology.com",
        },
        logo: ImageRef {
            src: "/golden-logo.jpeg",
            alt: "Golden Technology LWC Development",
        },
    },
    ProjectEntry {
        name: "Cincom Salesforce Integration",
        description: "Integrated Salesforce with third-party systems for seamless data exchange, \
                      improving data accuracy by 20%.",
        link: ProjectLink {
            href: "https://www.cincom.com/us/",
            label: "cincom.com",
        },
        logo: ImageRef {
            src: "/cincom-logo.png",
            alt: "Cincom Salesforce Integration",
        },
    },
    ProjectEntry {
        name: "Fidelity Investments Custom Workflows",
        description: "Developed custom workflows and processes using Apex, Visualforce, and \
                      Lightning components, increasing operational efficiency by 25%.",
        link: ProjectLink {
            href: "https://www.fidelity.com/",
            label: "fidelity.com",
        },
        logo: ImageRef {
            src: "/fidelity-logo.png",
            alt: "Fidelity Investments Custom Workflows",
        },
    },
    ProjectEntry {
        name: "Fifth Third Securities Compliance System",
        description: "Created a comprehensive compliance program, reducing the risk of \
                      non-compliance by 25%.",
        link: ProjectLink {
            href: "https://www.53.com/content/fifth-third/en.html",
            label: "53.com",
        },
        logo: ImageRef {
            src: "/fifth-third-logo.png",
            alt: "Fifth Third Securities Compliance System",
        },
    },
];

// ============================================================================
// Uses
// ============================================================================

pub const USES_META: PageMeta = PageMeta {
    slug: "uses",
    title: "Uses",
    description: "Tools, software, and gadgets I use daily as a software engineer.",
};

pub const USES_HEADLINE: &str =
    "Tools and software I use daily to build, optimize, and stay productive.";

pub const USES_INTRO: &str = "Here's a list of tools and gadgets I use for developing software, \
staying productive, and keeping up with the latest technologies. Some of these tools have been \
real game changers for me.";

const fn tool(title: &'static str, body: &'static str) -> ToolEntry {
    ToolEntry {
        title,
        href: None,
        body,
    }
}

pub const TOOL_SECTIONS: &[ToolSection] = &[
    ToolSection {
        title: "Workstation",
        tools: &[
            tool(
                "16\u{201d} MacBook Pro, M1 Max, 64GB RAM (2021)",
                "This machine handles everything I throw at it, from large Salesforce \
                 deployments to complex React apps. The performance is incredible and the fan \
                 noise is non-existent.",
            ),
            tool(
                "Dell UltraSharp 32\u{201d} 4K USB-C Hub Monitor",
                "A high-resolution monitor that provides plenty of screen real estate for \
                 multitasking, coding, and reviewing data dashboards.",
            ),
            tool(
                "Logitech MX Master 3",
                "My go-to mouse for productivity. Its ergonomic design and programmable buttons \
                 make it perfect for long coding sessions.",
            ),
            tool(
                "ErgoDox EZ Keyboard",
                "A split mechanical keyboard designed for ergonomics. I love the customization \
                 options and the way it reduces hand strain over long periods.",
            ),
            tool(
                "Herman Miller Embody Chair",
                "Sitting for long hours can be taxing, and this chair provides the support I \
                 need to maintain comfort during work.",
            ),
        ],
    },
    ToolSection {
        title: "Development tools",
        tools: &[
            tool(
                "Visual Studio Code",
                "My favorite code editor. With its vast ecosystem of extensions and built-in Git \
                 support, it\u{2019}s perfect for both TypeScript and Salesforce development.",
            ),
            tool(
                "iTerm2",
                "A powerful terminal replacement for macOS. I use it for everything from running \
                 scripts to working with APIs via the command line.",
            ),
            tool(
                "Postman",
                "Postman is my go-to tool for testing APIs and integrating external systems, \
                 making API workflows much more manageable.",
            ),
            tool(
                "TablePlus",
                "Excellent software for managing and querying databases. It makes working with \
                 SQL databases much easier and more efficient.",
            ),
            tool(
                "GitHub Copilot",
                "AI-driven code suggestions that speed up my coding process significantly, \
                 especially for repetitive tasks and code patterns.",
            ),
        ],
    },
    ToolSection {
        title: "Design and Prototyping",
        tools: &[
            tool(
                "Figma",
                "I use Figma for quick mockups and wireframing. It's a fantastic collaboration \
                 tool that helps to communicate ideas visually.",
            ),
            tool(
                "Mermaid",
                "I use Mermaid for creating diagrams and visualizing workflows within \
                 documentation. It\u{2019}s great for flowcharts, Gantt charts, and sequence \
                 diagrams.",
            ),
        ],
    },
    ToolSection {
        title: "Productivity",
        tools: &[
            tool(
                "Notion",
                "My digital brain for managing tasks, tracking projects, and storing \
                 documentation. I use Notion for everything from note-taking to creating \
                 personal and professional knowledge bases.",
            ),
            tool(
                "Reflect",
                "A fantastic daily notes system that helps me track ideas, progress, and \
                 personal reflections. It\u{2019}s part of my daily routine to clear my mind \
                 and track what matters.",
            ),
            tool(
                "SavvyCal",
                "Scheduling meetings without overloading my calendar is key for maintaining \
                 productivity. SavvyCal helps me balance work and deep focus time.",
            ),
            tool(
                "Focus",
                "A simple tool for blocking distracting websites and apps during focused work \
                 sessions, ensuring that I stay on task.",
            ),
        ],
    },
];

// ============================================================================
// Site-wide
// ============================================================================

/// Pages in navigation order.
pub const PAGES: &[PageMeta] = &[ABOUT, PROJECTS_META, USES_META];

/// Every image asset referenced by the content tables.
pub fn referenced_images() -> Vec<ImageRef> {
    std::iter::once(PORTRAIT)
        .chain(PROJECTS.iter().map(|p| p.logo))
        .collect()
}

/// Check that every list key is non-empty and unique within its list.
pub fn validate() -> Result<(), ContentError> {
    check_keys("projects", PROJECTS.iter().map(|p| p.name))?;
    check_keys("social links", SOCIAL_LINKS.iter().map(|s| s.href))?;
    check_keys("tool sections", TOOL_SECTIONS.iter().map(|s| s.title))?;
    check_section_ids(TOOL_SECTIONS.iter().map(|s| s.title))?;
    for section in TOOL_SECTIONS {
        check_keys(
            &format!("tools of '{}'", section.title),
            section.tools.iter().map(|t| t.title),
        )?;
    }
    check_keys("pages", PAGES.iter().map(|p| p.slug))?;
    Ok(())
}

/// Reject section titles whose element ids collide, such as
/// "Development tools" and "Development Tools!".
pub fn check_section_ids<'a>(
    titles: impl IntoIterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let ids: Vec<String> = titles
        .into_iter()
        .map(|title| naming::element_id("section", title))
        .collect();
    check_keys("section ids", ids.iter().map(String::as_str))
}

/// Reject empty or repeated keys, reporting the first offender.
pub fn check_keys<'a>(
    list: &str,
    keys: impl IntoIterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for key in keys {
        if key.trim().is_empty() {
            return Err(ContentError::EmptyKey(list.to_string()));
        }
        if !seen.insert(key) {
            return Err(ContentError::DuplicateKey {
                list: list.to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_content_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn projects_has_five_records() {
        assert_eq!(PROJECTS.len(), 5);
        assert_eq!(PROJECTS[0].name, "Infosys Apex Optimization");
    }

    #[test]
    fn uses_has_four_sections() {
        let titles: Vec<&str> = TOOL_SECTIONS.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            ["Workstation", "Development tools", "Design and Prototyping", "Productivity"]
        );
        let counts: Vec<usize> = TOOL_SECTIONS.iter().map(|s| s.tools.len()).collect();
        assert_eq!(counts, [5, 5, 2, 4]);
    }

    #[test]
    fn mail_link_is_last_and_divided() {
        let last = SOCIAL_LINKS.last().unwrap();
        assert_eq!(last.href, "mailto:b.dirheimer@gmail.com");
        assert_eq!(last.spacing, Spacing::Divided);
    }

    #[test]
    fn check_keys_rejects_duplicates() {
        let err = check_keys("projects", ["a", "b", "a"]).unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateKey {
                list: "projects".into(),
                key: "a".into()
            }
        );
    }

    #[test]
    fn check_keys_rejects_blank() {
        let err = check_keys("tools", ["a", "  "]).unwrap_err();
        assert_eq!(err, ContentError::EmptyKey("tools".into()));
    }

    #[test]
    fn section_ids_reject_titles_with_same_slug() {
        let err = check_section_ids(["Development tools", "Development Tools!"]).unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateKey {
                list: "section ids".into(),
                key: "section-development-tools".into()
            }
        );
    }

    #[test]
    fn shipped_section_ids_are_distinct() {
        assert!(check_section_ids(TOOL_SECTIONS.iter().map(|s| s.title)).is_ok());
    }

    #[test]
    fn check_keys_accepts_empty_list() {
        assert!(check_keys("empty", std::iter::empty()).is_ok());
    }

    #[test]
    fn referenced_images_covers_portrait_and_logos() {
        let images = referenced_images();
        assert_eq!(images.len(), 1 + PROJECTS.len());
        assert_eq!(images[0], PORTRAIT);
        assert!(images.iter().any(|i| i.src == "/fifth-third-logo.png"));
    }

    #[test]
    fn bio_text_has_no_stray_indentation() {
        for paragraph in BIO {
            assert!(!paragraph.contains("  "), "double space in: {paragraph}");
        }
    }
}
