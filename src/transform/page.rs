//! Page-level extraction: title and property metadata.

use crate::constants::{PAGE_OBJECT_TYPE, TITLE_PROPERTY_NAMES, UNTITLED};
use crate::model::{PageMetadata, PropertyValue};
use crate::source::{
    array_at, is_truthy, joined_plain_text, path, property_kind, str_at, PropertyKind,
};
use serde_json::Value;

/// Resolves a page's display title. Never returns an empty string.
///
/// Tries, in order: the `Name` property's title spans, the `title` property's
/// title spans, the page's own `id` (only for records with
/// `"object": "page"`), and finally the literal `"Untitled"`. A tier that
/// would produce an empty string falls through to the next.
pub fn extract_title(page: &Value) -> String {
    let from_properties = TITLE_PROPERTY_NAMES.iter().find_map(|&name| {
        let spans = path(page, &["properties", name, "title"])?.as_array()?;
        let text = joined_plain_text(spans);
        (!text.is_empty()).then_some(text)
    });

    if let Some(title) = from_properties {
        return title;
    }

    let page_id = (str_at(page, &["object"]) == Some(PAGE_OBJECT_TYPE))
        .then(|| str_at(page, &["id"]))
        .flatten()
        .filter(|id| !id.is_empty());

    match page_id {
        Some(id) => {
            log::debug!("Page has no title property; falling back to id {}", id);
            id.to_string()
        }
        None => UNTITLED.to_string(),
    }
}

/// Extracts every recognized property into a name → value map.
///
/// Properties of unrecognized kinds are left out of the map entirely.
pub fn extract_metadata(page: &Value) -> PageMetadata {
    let Some(properties) = path(page, &["properties"]).and_then(Value::as_object) else {
        return PageMetadata::new();
    };

    properties
        .iter()
        .filter_map(|(name, property)| {
            extract_property(property).map(|value| (name.clone(), value))
        })
        .collect()
}

/// Dispatches on the property's declared kind.
pub fn extract_property(property: &Value) -> Option<PropertyValue> {
    let value = match property_kind(property) {
        PropertyKind::Title => {
            PropertyValue::Text(joined_plain_text(array_at(property, &["title"])))
        }
        PropertyKind::RichText => {
            PropertyValue::Text(joined_plain_text(array_at(property, &["rich_text"])))
        }
        PropertyKind::Select => optional_string(property, &["select", "name"]),
        PropertyKind::MultiSelect => PropertyValue::StringList(
            array_at(property, &["multi_select"])
                .iter()
                .filter_map(|option| str_at(option, &["name"]))
                .map(str::to_string)
                .collect(),
        ),
        PropertyKind::Date => optional_string(property, &["date", "start"]),
        PropertyKind::Url => optional_string(property, &["url"]),
        PropertyKind::Checkbox => PropertyValue::Boolean(is_truthy(path(property, &["checkbox"]))),
        PropertyKind::People => PropertyValue::StringList(
            array_at(property, &["people"])
                .iter()
                .filter_map(person_label)
                .collect(),
        ),
        PropertyKind::Files => PropertyValue::StringList(
            array_at(property, &["files"])
                .iter()
                .filter_map(file_location)
                .collect(),
        ),
        PropertyKind::Unrecognized(kind) => {
            log::trace!("Skipping property of unrecognized kind '{}'", kind);
            return None;
        }
    };

    Some(value)
}

fn optional_string(property: &Value, keys: &[&str]) -> PropertyValue {
    PropertyValue::OptionalString(str_at(property, keys).map(str::to_string))
}

/// A user's name, falling back to their id.
fn person_label(person: &Value) -> Option<String> {
    str_at(person, &["name"])
        .or_else(|| str_at(person, &["id"]))
        .map(str::to_string)
}

/// A file's name, falling back to its hosted or external URL.
fn file_location(file: &Value) -> Option<String> {
    str_at(file, &["name"])
        .or_else(|| str_at(file, &["file", "url"]))
        .or_else(|| str_at(file, &["external", "url"]))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_prefers_name_property() {
        let page = json!({
            "object": "page",
            "id": "page123",
            "properties": {
                "title": { "type": "title", "title": [{ "plain_text": "Fallback" }] },
                "Name": { "type": "title", "title": [{ "plain_text": "My " }, { "plain_text": "Page" }] }
            }
        });
        assert_eq!(extract_title(&page), "My Page");
    }

    #[test]
    fn test_title_falls_back_to_title_property() {
        let page = json!({
            "object": "page",
            "id": "page123",
            "properties": {
                "Name": { "type": "rich_text", "rich_text": [{ "plain_text": "not a title" }] },
                "title": { "type": "title", "title": [{ "plain_text": "Real Title" }] }
            }
        });
        assert_eq!(extract_title(&page), "Real Title");
    }

    #[test]
    fn test_empty_title_falls_back_to_page_id() {
        let page = json!({
            "object": "page",
            "id": "page123",
            "properties": { "Name": { "type": "title", "title": [] } }
        });
        assert_eq!(extract_title(&page), "page123");
    }

    #[test]
    fn test_non_page_without_title_is_untitled() {
        assert_eq!(extract_title(&json!({ "object": "database", "id": "db1" })), "Untitled");
        assert_eq!(extract_title(&json!({})), "Untitled");
        assert_eq!(extract_title(&Value::Null), "Untitled");
        assert_eq!(extract_title(&json!({ "object": "page", "id": "" })), "Untitled");
    }

    #[test]
    fn test_people_and_files_fallbacks() {
        let people = json!({
            "type": "people",
            "people": [{ "name": "Ada", "id": "u1" }, { "id": "u2" }, {}]
        });
        assert_eq!(
            extract_property(&people),
            Some(PropertyValue::StringList(vec!["Ada".into(), "u2".into()]))
        );

        let files = json!({
            "type": "files",
            "files": [
                { "name": "brief.pdf", "file": { "url": "https://s3/brief" } },
                { "type": "file", "file": { "url": "https://s3/raw" } },
                { "type": "external", "external": { "url": "https://cdn/x.png" } }
            ]
        });
        assert_eq!(
            extract_property(&files),
            Some(PropertyValue::StringList(vec![
                "brief.pdf".into(),
                "https://s3/raw".into(),
                "https://cdn/x.png".into()
            ]))
        );
    }

    #[test]
    fn test_empty_optionals() {
        let select = json!({ "type": "select", "select": null });
        assert_eq!(
            extract_property(&select),
            Some(PropertyValue::OptionalString(None))
        );

        let date = json!({ "type": "date", "date": { "start": "2024-03-01", "end": null } });
        assert_eq!(
            extract_property(&date),
            Some(PropertyValue::OptionalString(Some("2024-03-01".into())))
        );
    }

    #[test]
    fn test_unrecognized_kinds_are_omitted() {
        let page = json!({
            "properties": {
                "Score": { "type": "number", "number": 5 },
                "Formula": { "type": "formula", "formula": { "type": "string", "string": "x" } },
                "Untyped": { "value": 1 },
                "Done": { "type": "checkbox", "checkbox": false }
            }
        });
        let meta = extract_metadata(&page);
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("Done"), Some(&PropertyValue::Boolean(false)));
    }
}
