//! HTML to Markdown conversion for exported article bodies.
//!
//! # Rule order
//!
//! ```text
//! <hr>                      → ---
//! <h2><strong>..</strong>   → ## ..      (before the generic heading rule)
//! <h2>..</h2>, <h3>..</h3>  → ## .., ### ..
//! <p>, <div>, <br>          → paragraph / line breaks
//! <strong>/<b>, <em>/<i>    → **, *
//! any other tag             → dropped, inner text kept
//! ```
//!
//! The order matters: if the generic tag rule ran first, headings would be
//! flattened to plain text; if the emphasis rule ran before the headings,
//! `**` would leak into heading text.

use super::{Entities, TAG, collapse_whitespace, decode_entities};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static HR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<hr[^>]*>").unwrap());

static H2_STRONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h2[^>]*>\s*<(?:strong|b)(?:\s[^>]*)?>([^<]*)</(?:strong|b)>\s*</h2>").unwrap()
});
static H3_STRONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h3[^>]*>\s*<(?:strong|b)(?:\s[^>]*)?>([^<]*)</(?:strong|b)>\s*</h3>").unwrap()
});
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<h2[^>]*>(.*?)</h2>").unwrap());
static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<h3[^>]*>(.*?)</h3>").unwrap());

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?p(?:\s[^>]*)?>").unwrap());
static DIV: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?div(?:\s[^>]*)?>").unwrap());
static BR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:strong|b)(?:\s[^>]*)?>").unwrap());
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:em|i)(?:\s[^>]*)?>").unwrap());

static EDGE_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]*\n[ \t]*").unwrap());
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());

/// Convert an exported HTML fragment to Markdown.
///
/// Best effort: unknown or malformed tags are dropped silently. The result is
/// trimmed and ends with exactly one newline, and converting it again yields
/// the same text.
pub fn html_to_markdown(html: &str) -> String {
    let text = HR.replace_all(html, "\n\n---\n\n");

    let text = H2_STRONG.replace_all(&text, heading(2));
    let text = H3_STRONG.replace_all(&text, heading(3));
    let text = H2.replace_all(&text, heading(2));
    let text = H3.replace_all(&text, heading(3));

    let text = PARAGRAPH.replace_all(&text, "\n\n");
    let text = DIV.replace_all(&text, "\n\n");
    let text = BR.replace_all(&text, "\n");
    let text = STRONG.replace_all(&text, "**");
    let text = EMPHASIS.replace_all(&text, "*");

    let text = TAG.replace_all(&text, "");
    let text = decode_entities(&text, Entities::Typographic);

    let text = text.replace('\r', "");
    let text = EDGE_SPACE.replace_all(&text, "\n");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    let text = SPACE_RUN.replace_all(&text, " ");

    format!("{}\n", text.trim())
}

/// Replacement producing a Markdown heading from the first capture.
///
/// Inner markup is reduced to plain text so a heading stays on one line and
/// carries no emphasis markers.
fn heading(level: usize) -> impl Fn(&Captures) -> String {
    move |caps: &Captures| {
        let inner = collapse_whitespace(&TAG.replace_all(&caps[1], ""));
        if inner.is_empty() {
            "\n\n".to_owned()
        } else {
            format!("\n\n{} {}\n\n", "#".repeat(level), inner)
        }
    }
}
