//! Reading raw page and block records from the document store.
//!
//! Records arrive as untyped JSON. This module owns the two concerns of
//! turning them into something the transformer can dispatch on: parsing the
//! `type` discriminators into closed enums, and reading nested fields without
//! ever failing on an unexpected shape.

mod fields;
mod kinds;

pub use fields::{array_at, flag_at, is_truthy, joined_plain_text, path, str_at};
pub use kinds::{ImageHosting, PropertyKind, SourceBlockKind};

use serde_json::Value;

/// Parses a block record's `type` tag; a missing tag reads as unrecognized.
pub fn block_kind(record: &Value) -> SourceBlockKind {
    SourceBlockKind::from_type_tag(str_at(record, &["type"]).unwrap_or_default())
}

/// The type-specific payload stored under the key named by the record's tag.
pub fn block_payload<'a>(record: &'a Value, kind: &SourceBlockKind) -> Option<&'a Value> {
    path(record, &[kind.type_tag()])
}

/// Parses a property's declared `type`.
pub fn property_kind(property: &Value) -> PropertyKind {
    PropertyKind::from_type_tag(str_at(property, &["type"]).unwrap_or_default())
}
