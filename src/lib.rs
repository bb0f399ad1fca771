// src/lib.rs
//! notion2html library: converts Notion page and block records into a
//! normalized content model, plain text and HTML.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Transformation**: `transform`, `map_block`, `extract_title`, `extract_metadata`,
//!   `extract_rich_text`, `compose_page_document`
//! - **Encoding**: `to_plain_text`, `to_html`, `render_standalone_html`
//! - **Content model**: `ContentBody`, `ContentBlock`, `RichText`, `PageDocument`, etc.
//! - **Input**: `PageBundle`, `SourceBlockKind`, `PropertyKind`
//! - **Error handling**: `AppError`
//! - **Configuration**: `RenderConfig`, `OutputFormat`
//!
//! ```
//! use notion2html::{to_html, to_plain_text, transform};
//! use serde_json::json;
//!
//! let body = transform(&[json!({
//!     "type": "heading_2",
//!     "heading_2": { "rich_text": [{ "plain_text": "Title" }] }
//! })]);
//!
//! assert_eq!(to_plain_text(&body), "Title");
//! assert_eq!(to_html(&body), "<h2>Title</h2>");
//! ```

mod bundle;
mod config;
mod constants;
mod error;
mod model;
mod output;
mod pipeline;
mod transform;

#[cfg(feature = "bench")]
pub mod formatting;
#[cfg(not(feature = "bench"))]
mod formatting;

#[cfg(feature = "bench")]
pub mod source;
#[cfg(not(feature = "bench"))]
mod source;

// --- Error Handling ---
pub use crate::error::AppError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, OutputFormat, RenderConfig};

// --- Content Model ---
pub use crate::model::{
    concat_plain_text, BlockContent, BlockMetadata, ContentBlock, ContentBody, HeadingLevel,
    PageDocument, PageMetadata, PropertyValue, RichText,
};

// --- Input ---
pub use crate::bundle::PageBundle;
pub use crate::source::{ImageHosting, PropertyKind, SourceBlockKind};

// --- Transformation ---
pub use crate::transform::{
    compose_page_document, extract_metadata, extract_property, extract_rich_text, extract_title,
    map_block, transform,
};

// --- Encoding ---
pub use crate::formatting::{render_standalone_html, to_html, to_plain_text};

// --- Output ---
pub use crate::output::{deliver, DeliveryTarget, FilenameRegistry, OutputPlan, OutputReport};

// --- Pipeline Traits ---
pub use crate::pipeline::{
    render_document, ContentSource, Conversion, DocumentComposer, DocumentDelivery,
    FileConverter, RenderedDocument,
};
