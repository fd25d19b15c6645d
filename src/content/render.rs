use pulldown_cmark::{Options, Parser, html};

/// Render a document body to HTML.
///
/// Tables, footnotes, strikethrough and task lists are enabled. Raw HTML in
/// the body (bodies that were never normalized) passes through unchanged.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
