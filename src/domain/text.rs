//! HTML entity escaping and unescaping
//!
//! ljdump exports store the entry body HTML-escaped inside the XML, so
//! after the XML layer has decoded its own entities one more round of
//! unescaping is needed to recover the literal text. Going the other
//! way, the post title is escaped for embedding in front matter.

use regex::Regex;
use std::sync::OnceLock;

/// Regex for a numeric character reference at the cursor: &#123; or &#x7B;
fn numeric_entity_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^&#(x[0-9a-fA-F]+|[0-9]+);").unwrap())
}

/// Escape `& ' < > "` for use inside an HTML/front-matter value.
/// All other characters pass through unchanged.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(c),
        }
    }
    out
}

/// Resolve a named entity (without the surrounding & and ;)
fn named_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}

/// Undo one round of HTML entity escaping: the common named entities
/// plus decimal and hex character references. Unknown entities are left
/// as-is, and a decoded "&" is never re-interpreted.
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some(m) = numeric_entity_regex().find(rest) {
            let reference = &rest[2..m.end() - 1];
            let parsed = if let Some(hex) = reference.strip_prefix('x') {
                u32::from_str_radix(hex, 16)
            } else {
                reference.parse::<u32>()
            };
            match parsed.ok().and_then(char::from_u32) {
                Some(c) => out.push(c),
                None => out.push_str(m.as_str()),
            }
            rest = &rest[m.end()..];
            continue;
        }

        let replaced = rest[1..]
            .find(';')
            .and_then(|end| named_entity(&rest[1..end + 1]).map(|c| (c, end + 2)));
        match replaced {
            Some((c, after)) => {
                out.push(c);
                rest = &rest[after..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
