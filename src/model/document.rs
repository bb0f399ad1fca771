use super::body::ContentBody;
use super::metadata::PageMetadata;
use serde::Serialize;

/// A page's identity, title, properties and normalized content together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDocument {
    pub id: String,
    pub title: String,
    pub metadata: PageMetadata,
    pub body: ContentBody,
}
