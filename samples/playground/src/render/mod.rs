//! Server-side HTML rendering.
//!
//! Pages are assembled as plain strings. Every piece of user-supplied or
//! stored text goes through [`escape_html`] before it is written.

mod pages;

pub use pages::{error_page, index_page, profiles_page, structure_page};

/// Escapes the characters that are significant in HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
nav a{margin-right:1rem}\
.message{padding:.5rem;background:#f3f3f3;border-left:4px solid #888}\
.elements{display:flex;gap:.5rem;list-style:none;padding:0}\
.elements li{border:1px solid #444;padding:.25rem .75rem}\
form{display:inline-block;margin:.25rem}";

/// Wraps `body` in the shared document shell. `title` is escaped here.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
<html lang=\"en\">\
<head><meta charset=\"utf-8\"><title>{title}</title><style>{STYLE}</style></head>\
<body>\
<nav><a href=\"/\">Home</a><a href=\"/queue\">Queue</a><a href=\"/deque\">Deque</a><a href=\"/profiles\">Profiles</a></nav>\
<main>{body}</main>\
</body>\
</html>",
        title = escape_html(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("<script>", "&lt;script&gt;")]
    #[case("a & b", "a &amp; b")]
    #[case("\"quoted\" 'single'", "&quot;quoted&quot; &#39;single&#39;")]
    #[case("émoji ✅", "émoji ✅")]
    fn escapes_markup(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html(input), expected);
    }

    #[rstest]
    fn layout_escapes_title_and_keeps_body() {
        let html = layout("<Title>", "<p>body</p>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>&lt;Title&gt;</title>"));
        assert!(html.contains("<main><p>body</p></main>"));
    }
}
