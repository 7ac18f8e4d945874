use regex::Regex;
use std::sync::OnceLock;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_SLUG_LEN: usize = 50;
pub const MAX_EXCERPT_LEN: usize = 500;
pub const MAX_TAGS_LEN: usize = 200;

fn slug_regex() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("slug pattern is valid"))
}

/// Letters, digits, hyphens and underscores only.
pub fn is_valid_slug(slug: &str) -> bool {
    slug_regex().is_match(slug)
}

/// Splits a comma-separated tag string, dropping blanks.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
