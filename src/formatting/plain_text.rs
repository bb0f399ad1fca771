// src/formatting/plain_text.rs
//! Flattens a `ContentBody` to plain text, one line per block.

use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::model::{concat_plain_text, BlockContent, ContentBlock, ContentBody};
use std::borrow::Cow;

/// Renders one line per block, joined by single newlines.
///
/// Span text is concatenated without style markers, code is emitted
/// verbatim, and image/divider blocks produce an empty line. There is no
/// trailing newline. The conversion is lossy and has no inverse.
///
/// Newlines inside span text or code are copied through unchanged, so the
/// line count equals the block count only when no block text contains `\n`.
/// Split on block boundaries with the body itself, not on the output.
pub fn to_plain_text(body: &ContentBody) -> String {
    let mut output = String::with_capacity(body.len() * CHARS_PER_BLOCK_ESTIMATE);

    for (i, block) in body.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&block_text(block));
    }

    output
}

fn block_text(block: &ContentBlock) -> Cow<'_, str> {
    match block.content() {
        BlockContent::Spans(spans) => Cow::Owned(concat_plain_text(spans)),
        BlockContent::Text(text) => Cow::Borrowed(text),
        BlockContent::Empty => Cow::Borrowed(""),
    }
}
