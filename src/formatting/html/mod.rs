// src/formatting/html/mod.rs
//! Renders a `ContentBody` to an HTML fragment.
//!
//! | block        | markup                                     |
//! |--------------|--------------------------------------------|
//! | paragraph    | `<p>`                                      |
//! | heading N    | `<hN>`                                     |
//! | list item    | `<li>`, grouped into `<ul>` afterwards     |
//! | code         | `<pre><code>`, text only                   |
//! | image        | `<img src=".." alt=".." />`                |
//! | divider      | `<hr />`                                   |
//! | quote        | `<blockquote>`                             |
//! | callout      | `<div class="callout">`                    |
//!
//! Rendering happens in two phases: each block becomes a tagged fragment,
//! then [`lists::group_list_items`] joins the fragments and wraps list runs.

mod lists;
mod styles;

pub use lists::{group_list_items, Fragment};
pub use styles::{escape_html, HtmlStyleRenderer};

use crate::constants::{CALLOUT_CLASS, CHARS_PER_BLOCK_ESTIMATE};
use crate::model::{ContentBlock, ContentBody, RichText};

/// Renders the body to HTML, one block per line.
pub fn to_html(body: &ContentBody) -> String {
    let fragments: Vec<Fragment> = body.iter().map(render_block).collect();
    let html = group_list_items(&fragments, body.len() * CHARS_PER_BLOCK_ESTIMATE);

    log::debug!(
        "Rendered {} blocks to {} bytes of HTML",
        body.len(),
        html.len()
    );

    html
}

/// Renders a single block into its fragment.
pub fn render_block(block: &ContentBlock) -> Fragment {
    match block {
        ContentBlock::Paragraph(spans) => Fragment::block(wrap("p", spans)),
        ContentBlock::Heading { level, content } => {
            let tag = format!("h{}", level.as_number());
            Fragment::block(wrap(&tag, content))
        }
        ContentBlock::ListItem { content, .. } => Fragment::list_item(wrap("li", content)),
        ContentBlock::Code { content, .. } => {
            Fragment::block(format!("<pre><code>{}</code></pre>", escape_html(content)))
        }
        ContentBlock::Image { url, alt } => Fragment::block(format!(
            "<img src=\"{}\" alt=\"{}\" />",
            url.as_deref().unwrap_or_default(),
            escape_html(alt)
        )),
        ContentBlock::Divider => Fragment::block("<hr />".to_string()),
        ContentBlock::Quote(spans) => Fragment::block(wrap("blockquote", spans)),
        ContentBlock::Callout(spans) => Fragment::block(format!(
            "<div class=\"{}\">{}</div>",
            CALLOUT_CLASS,
            HtmlStyleRenderer::render_spans(spans)
        )),
    }
}

fn wrap(tag: &str, spans: &[RichText]) -> String {
    format!(
        "<{tag}>{}</{tag}>",
        HtmlStyleRenderer::render_spans(spans),
        tag = tag
    )
}
