// src/constants.rs
//! Named constants for the document model and its encoders.

// ---------------------------------------------------------------------------
// Source record vocabulary
// ---------------------------------------------------------------------------

/// Property names searched for a page title, in priority order.
pub const TITLE_PROPERTY_NAMES: [&str; 2] = ["Name", "title"];

/// The `object` discriminator that marks a record as a page.
pub const PAGE_OBJECT_TYPE: &str = "page";

/// Title used when neither a title property nor a page id is available.
pub const UNTITLED: &str = "Untitled";

// ---------------------------------------------------------------------------
// HTML output
// ---------------------------------------------------------------------------

/// CSS class carried by the `<div>` a callout block renders to.
pub const CALLOUT_CLASS: &str = "callout";

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

// ---------------------------------------------------------------------------
// Output files
// ---------------------------------------------------------------------------

/// Longest sanitized title kept in a generated filename.
pub const FILENAME_TITLE_MAX_LEN: usize = 100;
