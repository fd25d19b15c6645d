//! Derived document metadata: descriptions, reading time and image pools.

use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// Fenced code blocks, dropped before counting words in Markdown.
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Markdown punctuation that should not count as (part of) a word.
static MARKDOWN_MARKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[>#*_`-]").unwrap());

/// Knobs for the reading-time estimate.
#[derive(Debug, Clone, Copy)]
pub struct ReadingTime {
    pub words_per_minute: u32,
    pub min_minutes: u32,
}

impl Default for ReadingTime {
    fn default() -> Self {
        Self {
            words_per_minute: 220,
            min_minutes: 2,
        }
    }
}

impl ReadingTime {
    /// Estimate minutes for plain text (whitespace-delimited words).
    pub fn for_text(&self, text: &str) -> u32 {
        self.for_word_count(text.split_whitespace().count())
    }

    /// Estimate minutes for Markdown source.
    ///
    /// Code blocks and Markdown punctuation are stripped before counting.
    pub fn for_markdown(&self, markdown: &str) -> u32 {
        let without_code = CODE_FENCE.replace_all(markdown, " ");
        let plain = MARKDOWN_MARKS.replace_all(&without_code, " ");
        self.for_text(&plain)
    }

    fn for_word_count(&self, words: usize) -> u32 {
        let wpm = f64::from(self.words_per_minute.max(1));
        let minutes = (words as f64 / wpm).round() as u32;
        minutes.max(self.min_minutes)
    }
}

/// First sentence of `text` (split on `.`, `!` or `?`), or `fallback` when empty.
pub fn first_sentence(text: &str, fallback: &str) -> String {
    let sentence = text.split(['.', '!', '?']).next().unwrap_or_default().trim();
    if sentence.is_empty() {
        fallback.to_owned()
    } else {
        sentence.to_owned()
    }
}

/// Immutable snapshot of the images available for one role (card, hero).
///
/// Built once by [`ImagePool::scan`] and passed to whoever assigns images,
/// so tests can hand in a fixed set instead of a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePool {
    urls: Vec<String>,
}

impl ImagePool {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }

    /// List image files in `dir` as URL paths under `url_prefix`.
    ///
    /// Only files whose extension matches one of `extensions`
    /// (case-insensitive) are kept. Names are sorted so assignment is
    /// stable across platforms. A missing directory yields an empty pool.
    pub fn scan(dir: &Path, url_prefix: &str, extensions: &[String]) -> Self {
        let Ok(entries) = fs::read_dir(dir) else {
            return Self::default();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| has_extension(name, extensions))
            .collect();
        names.sort();

        let prefix = url_prefix.trim_end_matches('/');
        Self::new(names.into_iter().map(|name| format!("{prefix}/{name}")).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Round-robin pick for the `index`-th document of a batch.
    pub fn round_robin(&self, index: usize) -> Option<&str> {
        if self.urls.is_empty() {
            return None;
        }
        Some(&self.urls[index % self.urls.len()])
    }

    /// Stable pick keyed by a slug (sum of its character codes).
    pub fn for_slug(&self, slug: &str) -> Option<&str> {
        let hash = slug.chars().map(|c| c as usize).sum::<usize>();
        self.round_robin(hash)
    }
}

fn has_extension(name: &str, extensions: &[String]) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Resolve a site URL path like `/assets/images/a.jpg` inside the public directory.
pub fn public_file(public_dir: &Path, url: &str) -> PathBuf {
    public_dir.join(url.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reading_time_floor() {
        let rt = ReadingTime::default();
        assert_eq!(rt.for_text(""), 2);
        assert_eq!(rt.for_text(&"word ".repeat(100)), 2);
        assert_eq!(rt.for_text(&"word ".repeat(439)), 2);
    }

    #[test]
    fn test_reading_time_rounds() {
        let rt = ReadingTime::default();
        // 770 / 220 = 3.5 -> 4
        assert_eq!(rt.for_text(&"word ".repeat(770)), 4);
        // 700 / 220 = 3.18 -> 3
        assert_eq!(rt.for_text(&"word ".repeat(700)), 3);
    }

    #[test]
    fn test_reading_time_markdown_ignores_code_and_marks() {
        let rt = ReadingTime {
            words_per_minute: 1,
            min_minutes: 0,
        };
        let markdown = "## Title\n\n- one\n- two\n\n```rust\nfn main() { lots of code here }\n```\n\n> quoted *word*";
        // Title, one, two, quoted, word
        assert_eq!(rt.for_markdown(markdown), 5);
    }

    #[test]
    fn test_first_sentence() {
        assert_eq!(first_sentence("Hello world. More text.", "T"), "Hello world");
        assert_eq!(first_sentence("  Really? Yes!", "T"), "Really");
        assert_eq!(first_sentence("No punctuation here", "T"), "No punctuation here");
    }

    #[test]
    fn test_first_sentence_fallback() {
        assert_eq!(first_sentence("", "Title"), "Title");
        assert_eq!(first_sentence(". starts with a dot", "Title"), "Title");
    }

    #[test]
    fn test_image_pool_round_robin() {
        let pool = ImagePool::new(vec!["/a.jpg".into(), "/b.jpg".into()]);
        assert_eq!(pool.round_robin(0), Some("/a.jpg"));
        assert_eq!(pool.round_robin(1), Some("/b.jpg"));
        assert_eq!(pool.round_robin(2), Some("/a.jpg"));
        assert_eq!(ImagePool::default().round_robin(0), None);
    }

    #[test]
    fn test_image_pool_for_slug_is_stable() {
        let pool = ImagePool::new(vec!["/a.jpg".into(), "/b.jpg".into(), "/c.jpg".into()]);
        // 'a' + 'b' = 97 + 98 = 195, 195 % 3 = 0
        assert_eq!(pool.for_slug("ab"), Some("/a.jpg"));
        assert_eq!(pool.for_slug("ab"), pool.for_slug("ab"));
    }

    #[test]
    fn test_image_pool_scan() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.JPG"), "").unwrap();
        fs::write(dir.path().join("a.jpg"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let pool = ImagePool::scan(dir.path(), "/assets/images/cards/", &["jpg".to_string()]);
        assert_eq!(
            pool,
            ImagePool::new(vec![
                "/assets/images/cards/a.jpg".into(),
                "/assets/images/cards/b.JPG".into(),
            ])
        );
    }

    #[test]
    fn test_image_pool_scan_missing_dir() {
        let dir = TempDir::new().unwrap();
        let pool = ImagePool::scan(&dir.path().join("missing"), "/x", &["jpg".to_string()]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_public_file() {
        let path = public_file(Path::new("/site/public"), "/assets/a.jpg");
        assert_eq!(path, PathBuf::from("/site/public/assets/a.jpg"));
    }
}
