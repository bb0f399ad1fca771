//! Transforms raw document-store records into the normalized content model.
//!
//! Every function here is pure and total: no I/O, no shared state, no
//! error path. Malformed input degrades to omission or defaults.

mod blocks;
mod page;
mod rich_text;

pub use blocks::{map_block, transform};
pub use page::{extract_metadata, extract_property, extract_title};
pub use rich_text::extract_rich_text;

use crate::model::PageDocument;
use crate::source::str_at;
use serde_json::Value;

/// Assembles a page record and its block list into one `PageDocument`.
///
/// The block list must already be complete; pagination is the caller's job.
pub fn compose_page_document(page: &Value, blocks: &[Value]) -> PageDocument {
    PageDocument {
        id: str_at(page, &["id"]).unwrap_or_default().to_string(),
        title: extract_title(page),
        metadata: extract_metadata(page),
        body: transform(blocks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compose_page_document() {
        let page = json!({
            "object": "page",
            "id": "abc",
            "properties": {
                "Name": { "type": "title", "title": [{ "plain_text": "Doc" }] }
            }
        });
        let blocks = [json!({ "type": "divider", "divider": {} })];

        let document = compose_page_document(&page, &blocks);
        assert_eq!(document.id, "abc");
        assert_eq!(document.title, "Doc");
        assert_eq!(document.metadata.len(), 1);
        assert_eq!(document.body.len(), 1);
    }

    #[test]
    fn test_compose_without_page_record() {
        let document = compose_page_document(&Value::Null, &[]);
        assert_eq!(document.id, "");
        assert_eq!(document.title, "Untitled");
        assert!(document.metadata.is_empty());
        assert!(document.body.is_empty());
    }
}
