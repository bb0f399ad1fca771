//! Block mapping from raw block records to `ContentBlock`.
//!
//! | source type          | output                      | metadata            |
//! |----------------------|-----------------------------|---------------------|
//! | `paragraph`          | `Paragraph`                 |                     |
//! | `heading_1..3`       | `Heading`                   | level 1–3           |
//! | `bulleted_list_item` | `ListItem`                  | `ordered = false`   |
//! | `numbered_list_item` | `ListItem`                  | `ordered = true`    |
//! | `code`               | `Code` (plain text only)    | language, if any    |
//! | `image`              | `Image`                     | url, alt            |
//! | `divider`            | `Divider`                   |                     |
//! | `quote`              | `Quote`                     |                     |
//! | `callout`            | `Callout`                   |                     |
//! | anything else        | dropped                     |                     |

use super::rich_text::extract_rich_text;
use crate::model::{ContentBlock, ContentBody};
use crate::source::{
    array_at, block_kind, block_payload, joined_plain_text, str_at, ImageHosting, SourceBlockKind,
};
use serde_json::Value;

/// Maps raw block records to a `ContentBody`, preserving input order.
///
/// Each recognized record yields exactly one block; unrecognized types are
/// omitted without error.
pub fn transform(records: &[Value]) -> ContentBody {
    let body: ContentBody = records.iter().filter_map(map_block).collect();

    log::debug!(
        "Transformed {} source blocks into {} content blocks",
        records.len(),
        body.len()
    );

    body
}

/// Maps a single record; `None` for types outside the table above.
pub fn map_block(record: &Value) -> Option<ContentBlock> {
    let kind = block_kind(record);
    let payload = block_payload(record, &kind);
    let rich_text = || extract_rich_text(payload.and_then(|p| p.get("rich_text")));

    let block = match kind {
        SourceBlockKind::Paragraph => ContentBlock::Paragraph(rich_text()),
        SourceBlockKind::Heading(level) => ContentBlock::Heading {
            level,
            content: rich_text(),
        },
        SourceBlockKind::BulletedListItem => ContentBlock::ListItem {
            ordered: false,
            content: rich_text(),
        },
        SourceBlockKind::NumberedListItem => ContentBlock::ListItem {
            ordered: true,
            content: rich_text(),
        },
        SourceBlockKind::Code => map_code(payload),
        SourceBlockKind::Image => map_image(payload),
        SourceBlockKind::Divider => ContentBlock::Divider,
        SourceBlockKind::Quote => ContentBlock::Quote(rich_text()),
        SourceBlockKind::Callout => ContentBlock::Callout(rich_text()),
        SourceBlockKind::Unrecognized(tag) => {
            log::debug!("Skipping unrecognized block type '{}'", tag);
            return None;
        }
    };

    Some(block)
}

/// Code keeps only the concatenated text; span styling is discarded.
fn map_code(payload: Option<&Value>) -> ContentBlock {
    let Some(payload) = payload else {
        return ContentBlock::Code {
            language: None,
            content: String::new(),
        };
    };

    ContentBlock::Code {
        language: str_at(payload, &["language"]).map(str::to_string),
        content: joined_plain_text(array_at(payload, &["rich_text"])),
    }
}

fn map_image(payload: Option<&Value>) -> ContentBlock {
    let Some(payload) = payload else {
        return ContentBlock::Image {
            url: None,
            alt: String::new(),
        };
    };

    let hosting = ImageHosting::from_type_tag(str_at(payload, &["type"]));
    let url = str_at(payload, &[hosting.url_key(), "url"]).map(str::to_string);
    let alt = array_at(payload, &["caption"])
        .first()
        .and_then(|span| str_at(span, &["plain_text"]))
        .unwrap_or_default()
        .to_string();

    ContentBlock::Image { url, alt }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, RichText};
    use serde_json::json;

    #[test]
    fn test_heading_levels() {
        let blocks = [
            json!({ "type": "heading_1", "heading_1": { "rich_text": [{ "plain_text": "A" }] } }),
            json!({ "type": "heading_3", "heading_3": { "rich_text": [{ "plain_text": "C" }] } }),
        ];
        let body = transform(&blocks);
        assert_eq!(
            body.blocks(),
            &[
                ContentBlock::Heading {
                    level: HeadingLevel::One,
                    content: vec![RichText::plain("A")]
                },
                ContentBlock::Heading {
                    level: HeadingLevel::Three,
                    content: vec![RichText::plain("C")]
                },
            ]
        );
    }

    #[test]
    fn test_code_discards_styling() {
        let block = json!({
            "type": "code",
            "code": {
                "language": "rust",
                "rich_text": [
                    { "plain_text": "let x", "annotations": { "bold": true } },
                    { "plain_text": " = 1;" }
                ]
            }
        });
        assert_eq!(
            map_block(&block),
            Some(ContentBlock::Code {
                language: Some("rust".to_string()),
                content: "let x = 1;".to_string(),
            })
        );
    }

    #[test]
    fn test_code_without_language() {
        let block = json!({ "type": "code", "code": { "rich_text": [] } });
        assert_eq!(
            map_block(&block),
            Some(ContentBlock::Code {
                language: None,
                content: String::new(),
            })
        );
    }

    #[test]
    fn test_image_reads_file_branch() {
        let block = json!({
            "type": "image",
            "image": {
                "type": "file",
                "file": { "url": "https://s3.example.com/signed", "expiry_time": "2025-01-01T00:00:00.000Z" },
                "external": { "url": "https://wrong.example.com" },
                "caption": []
            }
        });
        assert_eq!(
            map_block(&block),
            Some(ContentBlock::Image {
                url: Some("https://s3.example.com/signed".to_string()),
                alt: String::new(),
            })
        );
    }

    #[test]
    fn test_image_uses_first_caption_span_only() {
        let block = json!({
            "type": "image",
            "image": {
                "type": "external",
                "external": { "url": "https://example.com/a.png" },
                "caption": [{ "plain_text": "first" }, { "plain_text": " second" }]
            }
        });
        let Some(ContentBlock::Image { alt, .. }) = map_block(&block) else {
            panic!("expected an image block");
        };
        assert_eq!(alt, "first");
    }

    #[test]
    fn test_image_missing_url_is_absent() {
        let block = json!({ "type": "image", "image": { "type": "file" } });
        assert_eq!(
            map_block(&block),
            Some(ContentBlock::Image {
                url: None,
                alt: String::new(),
            })
        );
    }

    #[test]
    fn test_missing_payload_still_maps() {
        let block = json!({ "type": "quote" });
        assert_eq!(map_block(&block), Some(ContentBlock::Quote(Vec::new())));
    }

    #[test]
    fn test_untagged_and_unknown_records_are_dropped() {
        assert_eq!(map_block(&json!({ "type": "toggle", "toggle": {} })), None);
        assert_eq!(map_block(&json!({ "paragraph": {} })), None);
        assert_eq!(map_block(&json!(42)), None);
    }
}
