//! Shared test utilities for inspecting rendered markup.
//!
//! Rendered HTML is plain strings, so these helpers do just enough scanning
//! to answer the questions the tests ask: how many times something appears,
//! which list keys were rendered in which order, and what text a heading holds.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = pages::projects().into_string();
//! assert_eq!(data_keys(&html)[0], "Infosys Apex Optimization");
//! assert_eq!(element_texts(&html, "h2")[0], "Infosys Apex Optimization");
//! ```

use std::path::Path;
use tempfile::TempDir;

/// Number of non-overlapping occurrences of `needle`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Values of every `data-key` attribute, in document order.
pub fn data_keys(html: &str) -> Vec<String> {
    const ATTR: &str = "data-key=\"";
    html.match_indices(ATTR)
        .filter_map(|(pos, _)| {
            let rest = &html[pos + ATTR.len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .collect()
}

/// Text content of every `<tag>` element, inner tags stripped, in document order.
///
/// Panics on an unclosed element.
pub fn element_texts(html: &str, tag: &str) -> Vec<String> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut texts = Vec::new();
    let mut cursor = 0;
    while let Some(found) = html[cursor..].find(&open) {
        let start = cursor + found;
        let after = &html[start + open.len()..];
        // `<h2` must not match `<h2x`
        if !after.starts_with([' ', '>']) {
            cursor = start + open.len();
            continue;
        }
        let body_start = start + open.len() + after.find('>').expect("unterminated tag") + 1;
        let body_len = html[body_start..]
            .find(&close)
            .unwrap_or_else(|| panic!("unclosed <{tag}> at byte {start}"));
        texts.push(strip_tags(&html[body_start..body_start + body_len]));
        cursor = body_start + body_len + close.len();
    }
    texts
}

/// Remove everything between angle brackets.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

/// A source directory with a `public/` folder holding every referenced image.
pub fn source_with_assets() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let public = tmp.path().join("public");
    std::fs::create_dir_all(&public).unwrap();
    for image in crate::content::referenced_images() {
        write_file(&public.join(image.public_path()), b"img");
    }
    tmp
}

/// Write a file, creating parent directories.
pub fn write_file(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_texts_strips_inner_tags() {
        let html = r#"<h2 class="a"><a href="/">One</a></h2><h2>Two</h2><h3>x</h3>"#;
        assert_eq!(element_texts(html, "h2"), ["One", "Two"]);
    }

    #[test]
    fn element_texts_ignores_longer_tag_names() {
        let html = "<header>no</header><h>yes</h>";
        assert_eq!(element_texts(html, "h"), ["yes"]);
    }

    #[test]
    fn data_keys_in_document_order() {
        let html = r#"<li data-key="b"></li><li data-key="a"></li>"#;
        assert_eq!(data_keys(html), ["b", "a"]);
    }
}
