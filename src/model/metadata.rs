use indexmap::IndexMap;
use serde::Serialize;

/// Value extracted from one page property.
///
/// Serialized untagged, so the JSON form is a plain string, array,
/// boolean or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Concatenated plain text of a title or rich_text property.
    Text(String),
    /// Option names, people names or file locations.
    StringList(Vec<String>),
    Boolean(bool),
    /// Select name, date start or URL; `None` when the property is empty.
    OptionalString(Option<String>),
}

impl PropertyValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::OptionalString(value) => value.as_deref(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

/// Property name → extracted value, in declaration order.
pub type PageMetadata = IndexMap<String, PropertyValue>;
