// src/formatting/html/lists.rs
//! Groups consecutive list-item fragments into `<ul>` containers.
//!
//! The source block stream has no list container; items are just adjacent.
//! Grouping runs over the per-block fragments before they are joined, so it
//! never has to re-parse serialized markup.

/// One block's rendered markup, tagged with whether it is a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub markup: String,
    pub is_list_item: bool,
}

impl Fragment {
    pub fn block(markup: String) -> Self {
        Self {
            markup,
            is_list_item: false,
        }
    }

    pub fn list_item(markup: String) -> Self {
        Self {
            markup,
            is_list_item: true,
        }
    }
}

/// Joins fragments with newlines, wrapping each maximal run of list items
/// in exactly one `<ul>` ... `</ul>` pair.
///
/// Every container is unordered; whether the items came from a numbered
/// list does not matter at this stage.
pub fn group_list_items(fragments: &[Fragment], capacity_hint: usize) -> String {
    let mut output = String::with_capacity(capacity_hint);
    let mut in_list = false;

    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        match (in_list, fragment.is_list_item) {
            (false, true) => {
                output.push_str("<ul>\n");
                in_list = true;
            }
            (true, false) => {
                output.push_str("</ul>\n");
                in_list = false;
            }
            _ => {}
        }

        output.push_str(&fragment.markup);
    }

    if in_list {
        output.push_str("\n</ul>");
    }

    output
}
