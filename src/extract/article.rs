//! Heading-delimited articles.
//!
//! Every `<h1>` in the export starts an article that runs until the next
//! `<h1>` (or the end of the document):
//!
//! ```text
//! <h1>Title A</h1> ...body A... <h1>Title B</h1> ...body B...
//! ```

use crate::html::{flatten_text, region};
use regex::Regex;
use std::sync::LazyLock;

static BODY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").unwrap());
static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap());

/// One article cut out of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Heading text, tags stripped.
    pub title: String,
    /// Raw HTML between this heading and the next, trimmed.
    pub html: String,
    /// Flattened text of `html`.
    pub text: String,
}

/// Split an export into articles.
///
/// Headings with empty text are ignored. Articles whose flattened text is
/// shorter than `min_chars` characters are dropped as placeholder sections.
pub fn extract_articles(document: &str, min_chars: usize) -> Vec<Article> {
    let body = region(document, &BODY);

    let headings: Vec<(String, usize, usize)> = H1
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let title = flatten_text(&caps[1]);
            (!title.is_empty()).then(|| (title, whole.start(), whole.end()))
        })
        .collect();

    headings
        .iter()
        .enumerate()
        .filter_map(|(i, (title, _, content_start))| {
            let content_end = headings.get(i + 1).map_or(body.len(), |next| next.1);
            let html = body[*content_start..content_end].trim();
            let text = flatten_text(html);

            (text.chars().count() >= min_chars).then(|| Article {
                title: title.clone(),
                html: html.to_owned(),
                text,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_paragraph(words: &str) -> String {
        format!("<p>{}</p>", words.repeat(12))
    }

    #[test]
    fn test_extract_two_articles() {
        let doc = format!(
            "<html><head><title>x</title></head><body><h1 id=\"a\">First <em>Post</em></h1>{}<h1>Second</h1>{}</body></html>",
            long_paragraph("alpha beta "),
            long_paragraph("gamma delta "),
        );

        let articles = extract_articles(&doc, 80);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "First Post");
        assert!(articles[0].html.starts_with("<p>alpha"));
        assert!(articles[0].text.starts_with("alpha beta"));
        assert_eq!(articles[1].title, "Second");
        assert!(articles[1].html.ends_with("</p>"));
    }

    #[test]
    fn test_heading_followed_by_heading_is_dropped() {
        let doc = format!("<body><h1>Empty</h1><h1>Real</h1>{}</body>", long_paragraph("text here "));
        let articles = extract_articles(&doc, 80);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Real");
    }

    #[test]
    fn test_short_section_is_dropped() {
        let doc = "<body><h1>Stub</h1><p>Coming soon.</p></body>";
        assert!(extract_articles(doc, 80).is_empty());
    }

    #[test]
    fn test_exact_threshold_is_kept() {
        let doc = format!("<h1>Edge</h1><p>{}</p>", "x".repeat(80));
        assert_eq!(extract_articles(&doc, 80).len(), 1);

        let doc = format!("<h1>Edge</h1><p>{}</p>", "x".repeat(79));
        assert!(extract_articles(&doc, 80).is_empty());
    }

    #[test]
    fn test_empty_heading_text_is_skipped() {
        // The empty heading does not start an article, so its content
        // belongs to nothing; the real heading still gets its own.
        let doc = format!("<h1> </h1>{}<h1>Kept</h1>{}", long_paragraph("a b "), long_paragraph("c d "));
        let articles = extract_articles(&doc, 10);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Kept");
    }

    #[test]
    fn test_no_body_uses_whole_document() {
        let doc = format!("<h1>Loose</h1>{}", long_paragraph("words go "));
        assert_eq!(extract_articles(&doc, 80).len(), 1);
    }
}
