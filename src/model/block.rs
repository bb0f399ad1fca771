use super::rich_text::RichText;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Heading depth. The source format only knows three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    pub fn as_number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// One normalized unit of document content.
///
/// The variant fixes the shape of the content: span-bearing blocks carry
/// `Vec<RichText>`, code carries a plain string, image and divider carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Paragraph(Vec<RichText>),
    Heading {
        level: HeadingLevel,
        content: Vec<RichText>,
    },
    /// `ordered` is true for numbered items, false for bulleted ones.
    ListItem {
        ordered: bool,
        content: Vec<RichText>,
    },
    Code {
        language: Option<String>,
        content: String,
    },
    Image {
        url: Option<String>,
        alt: String,
    },
    Divider,
    Quote(Vec<RichText>),
    Callout(Vec<RichText>),
}

/// Borrowed view of a block's content in its type-determined shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockContent<'a> {
    Spans(&'a [RichText]),
    Text(&'a str),
    Empty,
}

/// Type-dependent block metadata, as exposed in the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct BlockMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered: Option<bool>,
}

impl BlockMetadata<'_> {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ContentBlock {
    /// The block's type name in the source vocabulary.
    pub fn block_type(&self) -> &'static str {
        match self {
            Self::Paragraph(_) => "paragraph",
            Self::Heading {
                level: HeadingLevel::One,
                ..
            } => "heading_1",
            Self::Heading {
                level: HeadingLevel::Two,
                ..
            } => "heading_2",
            Self::Heading {
                level: HeadingLevel::Three,
                ..
            } => "heading_3",
            Self::ListItem { .. } => "list",
            Self::Code { .. } => "code",
            Self::Image { .. } => "image",
            Self::Divider => "divider",
            Self::Quote(_) => "quote",
            Self::Callout(_) => "callout",
        }
    }

    pub fn content(&self) -> BlockContent<'_> {
        match self {
            Self::Paragraph(spans) | Self::Quote(spans) | Self::Callout(spans) => {
                BlockContent::Spans(spans)
            }
            Self::Heading { content, .. } | Self::ListItem { content, .. } => {
                BlockContent::Spans(content)
            }
            Self::Code { content, .. } => BlockContent::Text(content),
            Self::Image { .. } | Self::Divider => BlockContent::Empty,
        }
    }

    pub fn metadata(&self) -> BlockMetadata<'_> {
        match self {
            Self::Heading { level, .. } => BlockMetadata {
                level: Some(level.as_number()),
                ..Default::default()
            },
            Self::ListItem { ordered, .. } => BlockMetadata {
                ordered: Some(*ordered),
                ..Default::default()
            },
            Self::Code { language, .. } => BlockMetadata {
                language: language.as_deref(),
                ..Default::default()
            },
            Self::Image { url, alt } => BlockMetadata {
                url: url.as_deref(),
                alt: Some(alt.as_str()),
                ..Default::default()
            },
            Self::Paragraph(_) | Self::Divider | Self::Quote(_) | Self::Callout(_) => {
                BlockMetadata::default()
            }
        }
    }
}

impl Serialize for BlockContent<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Spans(spans) => {
                let mut seq = serializer.serialize_seq(Some(spans.len()))?;
                for span in spans.iter() {
                    seq.serialize_element(span)?;
                }
                seq.end()
            }
            Self::Text(text) => serializer.serialize_str(text),
            Self::Empty => serializer.serialize_str(""),
        }
    }
}

/// Serialized as `{ "type", "content", "metadata"? }`.
impl Serialize for ContentBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct BlockRecord<'a> {
            #[serde(rename = "type")]
            block_type: &'static str,
            content: BlockContent<'a>,
            #[serde(skip_serializing_if = "BlockMetadata::is_empty")]
            metadata: BlockMetadata<'a>,
        }

        BlockRecord {
            block_type: self.block_type(),
            content: self.content(),
            metadata: self.metadata(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_heading_level_numbers() {
        assert_eq!(HeadingLevel::One.as_number(), 1);
        assert_eq!(HeadingLevel::Two.as_number(), 2);
        assert_eq!(HeadingLevel::Three.as_number(), 3);
    }

    #[test]
    fn test_content_shape_follows_type() {
        let code = ContentBlock::Code {
            language: Some("rust".to_string()),
            content: "fn main() {}".to_string(),
        };
        assert_eq!(code.content(), BlockContent::Text("fn main() {}"));

        assert_eq!(ContentBlock::Divider.content(), BlockContent::Empty);

        let quote = ContentBlock::Quote(vec![RichText::plain("q")]);
        let BlockContent::Spans(spans) = quote.content() else {
            panic!("quote should carry spans");
        };
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_list_item_serializes_with_ordered_flag() {
        let item = ContentBlock::ListItem {
            ordered: true,
            content: vec![RichText::plain("one")],
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "list");
        assert_eq!(value["metadata"], json!({ "ordered": true }));
        assert_eq!(value["content"][0]["text"], "one");
    }

    #[test]
    fn test_divider_serializes_without_metadata() {
        let value = serde_json::to_value(ContentBlock::Divider).unwrap();
        assert_eq!(value, json!({ "type": "divider", "content": "" }));
    }

    #[test]
    fn test_image_without_url_omits_it() {
        let image = ContentBlock::Image {
            url: None,
            alt: String::new(),
        };
        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(value["metadata"], json!({ "alt": "" }));
    }
}
