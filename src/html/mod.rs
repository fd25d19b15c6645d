//! Text helpers for the fixed HTML export format.
//!
//! The exports are machine-generated and shaped the same way every time, so
//! these helpers work on regexes rather than a parse tree.

pub mod markdown;

use regex::{Captures, Regex};
use std::{borrow::Cow, sync::LazyLock};

/// Any tag, opening or closing.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// A named or numeric character reference.
static ENTITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&(#?[A-Za-z0-9]+);").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Entities that only affect whitespace and typography.
///
/// Decoding them can never introduce new markup.
const TYPOGRAPHIC_ENTITIES: &[(&str, &str)] = &[
    ("nbsp", " "),
    ("#160", " "),
    ("quot", "\""),
    ("#34", "\""),
    ("#39", "'"),
    ("apos", "'"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201C}"),
    ("rdquo", "\u{201D}"),
    ("ndash", "\u{2013}"),
    ("mdash", "\u{2014}"),
    ("hellip", "\u{2026}"),
];

/// Entities that spell markup characters.
const MARKUP_ENTITIES: &[(&str, &str)] = &[("amp", "&"), ("lt", "<"), ("gt", ">")];

/// Which entity set to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entities {
    /// Whitespace and typographic entities only; `&amp;`, `&lt;`, `&gt;` stay encoded.
    Typographic,
    /// Everything known, for plain-text metadata.
    All,
}

/// Decode character references in a single pass.
///
/// Unknown references are kept verbatim, and a decoded `&amp;` is never
/// decoded again (`&amp;lt;` → `&lt;`).
pub fn decode_entities(text: &str, set: Entities) -> Cow<'_, str> {
    let markup: &[(&str, &str)] = match set {
        Entities::All => MARKUP_ENTITIES,
        Entities::Typographic => &[],
    };
    let decoded = ENTITY.replace_all(text, |caps: &Captures| {
        let name = &caps[1];
        let found = TYPOGRAPHIC_ENTITIES
            .iter()
            .chain(markup)
            .find(|(entity, _)| *entity == name);
        match found {
            Some((_, value)) => (*value).to_owned(),
            None => caps[0].to_owned(),
        }
    });

    if decoded.contains('\u{a0}') {
        Cow::Owned(decoded.replace('\u{a0}', " "))
    } else {
        decoded
    }
}

/// Remove tags, decode all entities and trim.
///
/// Used for single block elements (a heading, a paragraph) where tags never
/// separate words.
pub fn strip_tags(html: &str) -> String {
    let without_tags = TAG.replace_all(html, "");
    decode_entities(&without_tags, Entities::All).trim().to_owned()
}

/// Replace tags with spaces, decode all entities and collapse whitespace.
///
/// Used for whole sections, where adjacent blocks must not run together.
pub fn flatten_text(html: &str) -> String {
    let spaced = TAG.replace_all(html, " ");
    let decoded = decode_entities(&spaced, Entities::All);
    WHITESPACE.replace_all(&decoded, " ").trim().to_owned()
}

/// Collapse runs of whitespace to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_owned()
}

/// Return the first capture of `region` in `html`, or the whole document.
pub fn region<'a>(html: &'a str, region: &Regex) -> &'a str {
    region
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map_or(html, |m| m.as_str())
}
