//! URL slug generation.
//!
//! Slugs are lowercase ASCII with single hyphens between alphanumeric runs:
//! `"Growth Project: Phase #2"` → `"growth-project-phase-2"`.

use std::collections::HashSet;

/// Convert a title to a URL-safe slug.
///
/// Runs of anything outside `[a-z0-9]` (after lowercasing) collapse to one
/// hyphen. Leading and trailing hyphens are trimmed, also after `max_len`
/// cuts the slug short.
pub fn slugify(title: &str, max_len: Option<usize>) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    match max_len {
        Some(max) => cap(&slug, max).to_owned(),
        None => slug,
    }
}

/// Cut `slug` to at most `max` bytes, dropping hyphens left at the end.
fn cap(slug: &str, max: usize) -> &str {
    if slug.len() <= max {
        return slug;
    }
    let mut end = max;
    while !slug.is_char_boundary(end) {
        end -= 1;
    }
    slug[..end].trim_end_matches('-')
}

/// Turn a slug back into a display title: `"growth-project"` → `"Growth Project"`.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hands out unique slugs within one extraction batch.
///
/// The first request for a base slug gets it unchanged, later ones get
/// `-2`, `-3`, ... appended. With a length cap the base is shortened so the
/// suffixed slug still fits.
#[derive(Debug, Default)]
pub struct SlugSet {
    taken: HashSet<String>,
    max_len: Option<usize>,
}

impl SlugSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            taken: HashSet::new(),
            max_len: Some(max_len),
        }
    }

    /// Reserve and return a unique slug derived from `base`.
    pub fn claim(&mut self, base: &str) -> String {
        if self.taken.insert(base.to_owned()) {
            return base.to_owned();
        }

        let mut counter = 2;
        loop {
            let suffix = format!("-{counter}");
            let stem = match self.max_len {
                Some(max) => cap(base, max.saturating_sub(suffix.len())),
                None => base,
            };
            let candidate = format!("{stem}{suffix}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Growth Project", None), "growth-project");
        assert_eq!(slugify("Hello, World!", None), "hello-world");
    }

    #[test]
    fn test_slugify_collapses_and_trims() {
        assert_eq!(slugify("  --Ops   & Control--  ", None), "ops-control");
        assert_eq!(slugify("a///b", None), "a-b");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Café Menu", None), "caf-menu");
        assert_eq!(slugify("你好", None), "");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Q3 2024 Review", None), "q3-2024-review");
    }

    #[test]
    fn test_slugify_max_len_trims_trailing_hyphen() {
        // "abcd-efgh" cut at 5 would leave "abcd-"
        assert_eq!(slugify("abcd efgh", Some(5)), "abcd");
        assert_eq!(slugify("abcd efgh", Some(6)), "abcd-e");
    }

    #[test]
    fn test_slugify_max_len_80() {
        let title = "word ".repeat(40);
        let slug = slugify(&title, Some(80));
        assert!(slug.len() <= 80);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_slugify_uncapped() {
        let title = "word ".repeat(40);
        assert_eq!(slugify(&title, None).len(), 40 * 5 - 1);
    }

    #[test]
    fn test_title_from_slug() {
        assert_eq!(title_from_slug("growth-project"), "Growth Project");
        assert_eq!(title_from_slug("q3-review"), "Q3 Review");
        assert_eq!(title_from_slug(""), "");
    }

    #[test]
    fn test_slug_set_suffixes_duplicates() {
        let mut slugs = SlugSet::new();
        assert_eq!(slugs.claim("growth-project"), "growth-project");
        assert_eq!(slugs.claim("growth-project"), "growth-project-2");
        assert_eq!(slugs.claim("growth-project"), "growth-project-3");
        assert_eq!(slugs.claim("other"), "other");
        assert_eq!(slugs.claim("other"), "other-2");
    }

    #[test]
    fn test_slug_set_suffix_respects_max_len() {
        let mut slugs = SlugSet::with_max_len(10);
        assert_eq!(slugs.claim("abcdefghij"), "abcdefghij");
        assert_eq!(slugs.claim("abcdefghij"), "abcdefgh-2");
        // a hyphen left at the cut is dropped
        assert_eq!(slugs.claim("abcdefg-ij"), "abcdefg-ij");
        assert_eq!(slugs.claim("abcdefg-ij"), "abcdefg-2");
    }

    #[test]
    fn test_slug_set_skips_taken_suffix() {
        let mut slugs = SlugSet::new();
        assert_eq!(slugs.claim("a-2"), "a-2");
        assert_eq!(slugs.claim("a"), "a");
        assert_eq!(slugs.claim("a"), "a-3");
    }
}
