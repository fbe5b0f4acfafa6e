//! Markup escaping.
//!
//! Two flavours: [`escape_markup`] for plain fields and [`escape_prose`] for
//! descriptions, which are rendered as formatted text and keep tabs and
//! fenced code.

use regex::Regex;
use std::sync::LazyLock;

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());

/// Escape `& < > " '` for embedding in markup
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a description: like [`escape_markup`], plus tabs become `&#9;`
/// and ```` ```fenced``` ```` spans become `<code>` elements
pub fn escape_prose(text: &str) -> String {
    let escaped = escape_markup(text).replace('\t', "&#9;");
    FENCED_CODE
        .replace_all(&escaped, "<code>$1</code>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_escapes_all_five_characters() {
        assert_eq!(
            escape_markup(r#"a & <b> "c" 'd'"#),
            "a &amp; &lt;b&gt; &quot;c&quot; &#039;d&#039;"
        );
    }

    #[test]
    fn markup_leaves_plain_text_alone() {
        assert_eq!(escape_markup("plain text"), "plain text");
    }

    #[test]
    fn prose_keeps_tabs_and_fenced_code() {
        assert_eq!(
            escape_prose("Use\tit:\n```\nfoo(<x>)\n```"),
            "Use&#9;it:\n<code>\nfoo(&lt;x&gt;)\n</code>"
        );
    }

    #[test]
    fn prose_converts_each_fence_pair() {
        assert_eq!(
            escape_prose("```a``` and ```b```"),
            "<code>a</code> and <code>b</code>"
        );
    }
}
