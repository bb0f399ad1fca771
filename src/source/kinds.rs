//! Closed vocabularies for the source format's `type` discriminators.
//!
//! Raw records tag themselves with a string. Instead of comparing strings at
//! every call site, the tag is parsed once into an enum whose match arms the
//! compiler checks for exhaustiveness. Tags nobody handles land in
//! `Unrecognized` and are dropped at the mapping boundary.

use crate::model::HeadingLevel;

/// Block types the transformer knows how to map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceBlockKind {
    Paragraph,
    Heading(HeadingLevel),
    BulletedListItem,
    NumberedListItem,
    Code,
    Image,
    Divider,
    Quote,
    Callout,
    Unrecognized(String),
}

impl SourceBlockKind {
    pub fn from_type_tag(tag: &str) -> Self {
        match tag {
            "paragraph" => Self::Paragraph,
            "heading_1" => Self::Heading(HeadingLevel::One),
            "heading_2" => Self::Heading(HeadingLevel::Two),
            "heading_3" => Self::Heading(HeadingLevel::Three),
            "bulleted_list_item" => Self::BulletedListItem,
            "numbered_list_item" => Self::NumberedListItem,
            "code" => Self::Code,
            "image" => Self::Image,
            "divider" => Self::Divider,
            "quote" => Self::Quote,
            "callout" => Self::Callout,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The tag as it appears in the record, which is also the payload key.
    pub fn type_tag(&self) -> &str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading(HeadingLevel::One) => "heading_1",
            Self::Heading(HeadingLevel::Two) => "heading_2",
            Self::Heading(HeadingLevel::Three) => "heading_3",
            Self::BulletedListItem => "bulleted_list_item",
            Self::NumberedListItem => "numbered_list_item",
            Self::Code => "code",
            Self::Image => "image",
            Self::Divider => "divider",
            Self::Quote => "quote",
            Self::Callout => "callout",
            Self::Unrecognized(tag) => tag,
        }
    }
}

/// Page property kinds with a defined extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    Title,
    RichText,
    Select,
    MultiSelect,
    Date,
    Url,
    Checkbox,
    People,
    Files,
    Unrecognized(String),
}

impl PropertyKind {
    pub fn from_type_tag(tag: &str) -> Self {
        match tag {
            "title" => Self::Title,
            "rich_text" => Self::RichText,
            "select" => Self::Select,
            "multi_select" => Self::MultiSelect,
            "date" => Self::Date,
            "url" => Self::Url,
            "checkbox" => Self::Checkbox,
            "people" => Self::People,
            "files" => Self::Files,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// Where an image record keeps its URL.
///
/// Uploaded files carry a short-lived signed URL under `file`; external
/// images carry a permanent one under `external`. Reading the wrong branch
/// yields a broken link rather than an error, so the discriminator decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageHosting {
    File,
    External,
}

impl ImageHosting {
    /// Anything other than `"file"` is read as an external reference.
    pub fn from_type_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("file") => Self::File,
            _ => Self::External,
        }
    }

    pub fn url_key(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::External => "external",
        }
    }
}
