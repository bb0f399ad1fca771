use crate::model::RichText;
use crate::source::{flag_at, str_at};
use serde_json::Value;

/// Converts a source span array into one `RichText` per span.
///
/// Anything that is not an array yields an empty vector. Missing text reads
/// as `""`, missing annotations as `false`, a missing `href` as no link.
pub fn extract_rich_text(spans: Option<&Value>) -> Vec<RichText> {
    let Some(spans) = spans.and_then(Value::as_array) else {
        return Vec::new();
    };

    spans.iter().map(extract_span).collect()
}

fn extract_span(span: &Value) -> RichText {
    RichText {
        text: str_at(span, &["plain_text"]).unwrap_or_default().to_string(),
        bold: flag_at(span, &["annotations", "bold"]),
        italic: flag_at(span, &["annotations", "italic"]),
        code: flag_at(span, &["annotations", "code"]),
        underline: flag_at(span, &["annotations", "underline"]),
        strikethrough: flag_at(span, &["annotations", "strikethrough"]),
        href: str_at(span, &["href"]).map(str::to_string),
    }
}
