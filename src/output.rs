//! CLI output formatting.
//!
//! Output lists what the site is made of, not which files were touched. Each
//! page leads with its positional index and title, followed by `→` and the
//! file it was written to; secondary details are indented below.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Pages
//! 001 About → about/index.html (4 blocks)
//! 002 Projects → projects/index.html (5 blocks)
//! 003 Uses → uses/index.html (16 blocks)
//!
//! Assets
//!     style.1a2b3c4d.css
//!     site.webmanifest
//!     7 files copied from public/
//!
//! Warnings
//!     Missing asset: /cincom-logo.png
//!
//! Generated 3 pages
//! ```
//!
//! ## Check
//!
//! ```text
//! Pages
//! 001 About (4 blocks)
//! 002 Projects (5 blocks)
//! 003 Uses (16 blocks)
//!
//! Assets
//!     7 images referenced, all present
//! ```
//!
//! ## Timeline
//!
//! ```text
//! Page shell (settles at 0.90s)
//!     shell-backdrop   0.00s → 0.50s  ease-in-out  from opacity 0
//!     shell-frame      0.00s → 0.70s  ease-out     from opacity 0, y -30px
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::animation::{Pose, Timeline, Transition};
use crate::generate::BuildReport;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the result of a build.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {} ({})",
            format_index(i + 1),
            page.title,
            page.file,
            plural(page.blocks, "block", "blocks")
        ));
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!("    {}", report.stylesheet));
    lines.push("    site.webmanifest".to_string());
    lines.push(format!(
        "    {} copied from public/",
        plural(report.assets_copied, "file", "files")
    ));

    if !report.missing_assets.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for asset in &report.missing_assets {
            lines.push(format!("    Missing asset: {}", asset));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}",
        plural(report.pages.len(), "page", "pages")
    ));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    print_lines(format_build_output(report));
}

// ============================================================================
// Check
// ============================================================================

/// Format a content inventory for `check`.
///
/// `pages` is `(title, block count)` in navigation order.
pub fn format_check_output(pages: &[(&str, usize)], images_referenced: usize) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, (title, blocks)) in pages.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            title,
            plural(*blocks, "block", "blocks")
        ));
    }
    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!(
        "    {} referenced, all present",
        plural(images_referenced, "image", "images")
    ));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(pages: &[(&str, usize)], images_referenced: usize) {
    print_lines(format_check_output(pages, images_referenced));
}

// ============================================================================
// Timeline
// ============================================================================

/// Start pose of a transition, listing only the properties it animates.
fn describe_from(transition: &Transition) -> String {
    let from = transition.from;
    let rest = Pose::REST;
    let mut parts = Vec::new();
    if from.opacity != rest.opacity {
        parts.push(format!("opacity {}", from.opacity));
    }
    if from.x != rest.x {
        parts.push(format!("x {}px", from.x));
    }
    if from.y != rest.y {
        parts.push(format!("y {}px", from.y));
    }
    if from.scale != rest.scale {
        parts.push(format!("scale {}", from.scale));
    }
    if parts.is_empty() {
        "rest".to_string()
    } else {
        parts.join(", ")
    }
}

/// Format one timeline: a header with its settle time, then one line per
/// transition in declaration order.
pub fn format_timeline(timeline: &Timeline) -> Vec<String> {
    let mut lines = vec![format!(
        "{} (settles at {:.2}s)",
        timeline.name,
        timeline.settle_time()
    )];
    for t in timeline.transitions {
        lines.push(format!(
            "    {:<16} {:.2}s \u{2192} {:.2}s  {:<11}  from {}",
            t.name,
            t.delay,
            t.end(),
            t.easing.css(),
            describe_from(t)
        ));
    }
    lines
}

/// Print every timeline, separated by blank lines.
pub fn print_timelines(timelines: &[Timeline]) {
    for (i, timeline) in timelines.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_lines(format_timeline(timeline));
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{SECTION, SHELL};
    use crate::generate::PageReport;

    fn report(missing: Vec<String>) -> BuildReport {
        BuildReport {
            pages: vec![
                PageReport {
                    title: "About",
                    file: "about/index.html".into(),
                    blocks: 4,
                },
                PageReport {
                    title: "Projects",
                    file: "projects/index.html".into(),
                    blocks: 1,
                },
            ],
            stylesheet: "style.abcd1234.css".into(),
            assets_copied: 7,
            missing_assets: missing,
        }
    }

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn build_output_lists_pages_with_paths() {
        let lines = format_build_output(&report(vec![]));
        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[1], "001 About \u{2192} about/index.html (4 blocks)");
        assert_eq!(lines[2], "002 Projects \u{2192} projects/index.html (1 block)");
    }

    #[test]
    fn build_output_lists_assets() {
        let lines = format_build_output(&report(vec![]));
        assert!(lines.contains(&"    style.abcd1234.css".to_string()));
        assert!(lines.contains(&"    7 files copied from public/".to_string()));
        assert_eq!(lines.last().unwrap(), "Generated 2 pages");
    }

    #[test]
    fn build_output_omits_warnings_when_complete() {
        let lines = format_build_output(&report(vec![]));
        assert!(!lines.contains(&"Warnings".to_string()));
    }

    #[test]
    fn build_output_warns_on_missing_assets() {
        let lines = format_build_output(&report(vec!["/cincom-logo.png".into()]));
        assert!(lines.contains(&"Warnings".to_string()));
        assert!(lines.contains(&"    Missing asset: /cincom-logo.png".to_string()));
    }

    #[test]
    fn check_output_inventories_pages() {
        let lines = format_check_output(&[("About", 4), ("Uses", 16)], 7);
        assert_eq!(lines[1], "001 About (4 blocks)");
        assert_eq!(lines[2], "002 Uses (16 blocks)");
        assert_eq!(lines.last().unwrap(), "    7 images referenced, all present");
    }

    #[test]
    fn timeline_header_shows_settle_time() {
        let lines = format_timeline(&SHELL);
        assert_eq!(lines[0], "Page shell (settles at 0.90s)");
        assert_eq!(lines.len(), SHELL.transitions.len() + 1);
    }

    #[test]
    fn timeline_lines_describe_start_pose() {
        let lines = format_timeline(&SHELL);
        assert!(lines[1].contains("shell-backdrop"));
        assert!(lines[1].ends_with("from opacity 0"));
        assert!(lines[2].ends_with("from opacity 0, y -30px"));
        assert!(lines[3].ends_with("from opacity 0, scale 0.95"));
    }

    #[test]
    fn section_timeline_shows_delays() {
        let lines = format_timeline(&SECTION);
        assert_eq!(lines[0], "Section (settles at 1.20s)");
        assert!(lines[2].contains("0.20s \u{2192} 0.70s"));
        assert!(lines[2].ends_with("from opacity 0, x -20px"));
    }
}
