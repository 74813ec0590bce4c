//! Ammonia-backed HTML sanitizer for post content.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;

use blog_core::ports::HtmlSanitizer;

/// Baseline tag set considered safe for user content.
const BASE_TAGS: &[&str] = &[
    "address", "article", "aside", "footer", "header", "h1", "h2", "h3", "h4", "h5", "h6",
    "hgroup", "main", "nav", "section", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "hr", "li", "ol", "p", "pre", "ul", "a", "abbr", "b", "bdi", "bdo", "br", "cite",
    "code", "data", "dfn", "em", "i", "kbd", "mark", "q", "rb", "rp", "rt", "rtc", "ruby", "s",
    "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var", "wbr", "caption", "col",
    "colgroup", "table", "tbody", "td", "tfoot", "th", "thead", "tr",
];

/// Formatting tags posts are explicitly allowed to use.
const POST_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "blockquote", "ul", "ol", "li", "a",
    "img", "strong", "em", "u", "s", "code", "pre", "table", "thead", "tbody", "tr", "th", "td",
];

const LINK_ATTRIBUTES: &[&str] = &["href", "name", "target"];
const IMAGE_ATTRIBUTES: &[&str] = &["src", "alt", "width", "height"];
const GENERIC_ATTRIBUTES: &[&str] = &["class", "style"];
const URL_SCHEMES: &[&str] = &["http", "https", "ftp", "mailto"];

/// Sanitizer applying the post content allow-list.
///
/// `script` and `style` elements are dropped with their content, comments are
/// removed and any other disallowed tag is unwrapped to its text.
pub struct AmmoniaSanitizer {
    builder: Builder<'static>,
}

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        let tags: HashSet<&'static str> = BASE_TAGS.iter().chain(POST_TAGS).copied().collect();

        let tag_attributes: HashMap<&'static str, HashSet<&'static str>> = HashMap::from([
            ("a", LINK_ATTRIBUTES.iter().copied().collect()),
            ("img", IMAGE_ATTRIBUTES.iter().copied().collect()),
        ]);

        let mut builder = Builder::default();
        builder
            .tags(tags)
            .tag_attributes(tag_attributes)
            .generic_attributes(GENERIC_ATTRIBUTES.iter().copied().collect())
            .url_schemes(URL_SCHEMES.iter().copied().collect())
            .link_rel(None)
            .strip_comments(true);

        Self { builder }
    }
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> String {
        restore_pre_newlines(&self.builder.clean(html).to_string())
    }
}

/// Write back the line feed the parser swallows right after a `<pre>` start tag.
///
/// The parser drops one leading newline from `pre` content and the serializer
/// does not emit it again, so every pass would eat another blank line.
/// Operates on serializer output only: text `<` is escaped there and attribute
/// values are always double-quoted.
fn restore_pre_newlines(html: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }

        let start = i + 1;
        let mut in_quotes = false;
        let mut end = None;
        for (offset, byte) in bytes[start..].iter().enumerate() {
            match byte {
                b'"' => in_quotes = !in_quotes,
                b'>' if !in_quotes => {
                    end = Some(start + offset);
                    break;
                }
                _ => {}
            }
        }
        let Some(end) = end else { break };

        let name_len = bytes[start..end]
            .iter()
            .position(|b| b.is_ascii_whitespace() || *b == b'/')
            .unwrap_or(end - start);
        i = end + 1;

        let is_pre = html[start..start + name_len].eq_ignore_ascii_case("pre");
        if is_pre && bytes.get(i) == Some(&b'\n') {
            out.push_str(&html[copied..i]);
            out.push('\n');
            copied = i;
        }
    }

    out.push_str(&html[copied..]);
    out
}
