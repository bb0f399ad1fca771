// src/formatting/html/styles.rs
//! Escaping and inline style wrapping for HTML output.

use crate::model::RichText;

/// Escapes the three HTML metacharacters `&`, `<` and `>`.
///
/// Quotes are left alone, so attribute values containing `"` are not safe.
/// Each input character is visited once, so nothing is escaped twice.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renderer for span styles to HTML.
pub struct HtmlStyleRenderer;

impl HtmlStyleRenderer {
    /// Wraps escaped span text in its style tags.
    ///
    /// Nesting is fixed, outermost first: `<strong>`, `<em>`, `<code>`,
    /// `<u>`, `<s>`, `<a>`. The link is always innermost. The `href` is
    /// emitted as given.
    pub fn apply_styles(span: &RichText) -> String {
        let mut result = escape_html(&span.text);

        if let Some(href) = &span.href {
            result = format!("<a href=\"{}\">{}</a>", href, result);
        }

        if span.strikethrough {
            result = format!("<s>{}</s>", result);
        }

        if span.underline {
            result = format!("<u>{}</u>", result);
        }

        if span.code {
            result = format!("<code>{}</code>", result);
        }

        if span.italic {
            result = format!("<em>{}</em>", result);
        }

        if span.bold {
            result = format!("<strong>{}</strong>", result);
        }

        result
    }

    /// Renders a span sequence with no separators between spans.
    pub fn render_spans(spans: &[RichText]) -> String {
        spans.iter().map(Self::apply_styles).collect()
    }
}
