use serde::Serialize;

/// A run of text with independent style flags and an optional hyperlink.
///
/// Flags combine freely; the HTML encoder decides how they nest. Serialized
/// spans carry `"type": "text"` ahead of their fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct RichText {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub href: Option<String>,
}

impl RichText {
    /// Create an unstyled span.
    ///
    /// ```ignore
    /// RichText::plain("hello").bold()
    /// ```
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn code(mut self) -> Self {
        self.code = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn linked(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// Concatenates span text with no separators and no style markers.
pub fn concat_plain_text(spans: &[RichText]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_only_requested_flags() {
        let span = RichText::plain("x").bold().linked("https://example.com");
        assert!(span.bold);
        assert!(!span.italic && !span.code && !span.underline && !span.strikethrough);
        assert_eq!(span.href.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_serialized_span_is_tagged_as_text() {
        let value = serde_json::to_value(RichText::plain("x").italic()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "text",
                "text": "x",
                "bold": false,
                "italic": true,
                "code": false,
                "underline": false,
                "strikethrough": false,
                "href": null
            })
        );
    }

    #[test]
    fn test_concat_plain_text() {
        let spans = vec![RichText::plain("Hello, ").bold(), RichText::plain("world")];
        assert_eq!(concat_plain_text(&spans), "Hello, world");
        assert_eq!(concat_plain_text(&[]), "");
    }
}
