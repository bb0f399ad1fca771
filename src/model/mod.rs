//! Normalized content model produced by the transformer.
//!
//! Everything here is built fresh per call and never mutated afterwards;
//! none of it refers back to the raw source records.

mod block;
mod body;
mod document;
mod metadata;
mod rich_text;

pub use block::{BlockContent, BlockMetadata, ContentBlock, HeadingLevel};
pub use body::ContentBody;
pub use document::PageDocument;
pub use metadata::{PageMetadata, PropertyValue};
pub use rich_text::{concat_plain_text, RichText};
