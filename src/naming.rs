//! Deterministic identifiers derived from display titles.
//!
//! Sections label themselves for assistive technology with
//! `aria-labelledby`, which needs an element id that is stable across builds.
//! Ids are derived from the section title, so the same title always yields the
//! same id:
//!
//! - `"Workstation"` → `section-workstation`
//! - `"Design and Prototyping"` → `section-design-and-prototyping`
//! - `"16” MacBook Pro"` → `section-16-macbook-pro`

const MAX_SLUG_LEN: usize = 60;

/// Lowercase a title into an id-safe slug.
///
/// - Keeps ASCII letters and digits (lowercased)
/// - Replaces everything else with a single dash
/// - Strips leading and trailing dashes
/// - Truncates to `MAX_SLUG_LEN` characters at the last dash before the limit
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut prev_dash = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }
    let trimmed = slug.trim_end_matches('-');

    if trimmed.len() <= MAX_SLUG_LEN {
        trimmed.to_string()
    } else {
        let truncated = &trimmed[..MAX_SLUG_LEN];
        match truncated.rfind('-') {
            Some(pos) => truncated[..pos].to_string(),
            None => truncated.to_string(),
        }
    }
}

/// Element id for a titled block: `{prefix}-{slug}`, or just `prefix` when the
/// title has no id-safe characters.
pub fn element_id(prefix: &str, title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}-{slug}")
    }
}
