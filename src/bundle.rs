// src/bundle.rs
//! Page bundles: a page record plus its fully paginated block list.
//!
//! This is the hand-off format between whatever fetched the content and the
//! transformer. Reading one is the only fallible step before conversion.

use crate::error::AppError;
use serde_json::Value;
use std::path::Path;

/// A page record together with its top-level blocks, in reading order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageBundle {
    /// `Value::Null` when the bundle carried blocks only.
    pub page: Value,
    pub blocks: Vec<Value>,
}

impl PageBundle {
    pub fn new(page: Value, blocks: Vec<Value>) -> Self {
        Self { page, blocks }
    }

    /// Interprets parsed JSON as a bundle.
    ///
    /// Accepts `{ "page": {...}, "blocks": [...] }` or a bare block array.
    /// In the object form a missing `page` is allowed but `blocks`, when
    /// present, must be an array.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Array(blocks) => Ok(Self::new(Value::Null, blocks)),
            Value::Object(mut fields) => {
                let page = fields.remove("page").unwrap_or(Value::Null);
                let blocks = match fields.remove("blocks") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(blocks)) => blocks,
                    Some(other) => {
                        return Err(AppError::MalformedBundle(format!(
                            "'blocks' must be an array, found {}",
                            json_type_name(&other)
                        )))
                    }
                };
                Ok(Self::new(page, blocks))
            }
            other => Err(AppError::MalformedBundle(format!(
                "expected an object or an array at the top level, found {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Reads and parses a bundle file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        log::debug!("Loading page bundle from {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|source| AppError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&text).map_err(|source| AppError::JsonParseError {
                path: path.to_path_buf(),
                source,
            })?;

        let bundle = Self::from_value(value)?;
        log::debug!(
            "Loaded {} block records from {}",
            bundle.blocks.len(),
            path.display()
        );
        Ok(bundle)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
