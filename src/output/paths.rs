// src/output/paths.rs
//! Pure functions for output filename generation.

use crate::constants::{FILENAME_TITLE_MAX_LEN, UNTITLED};
use std::collections::HashSet;

/// Hands out filenames for one batch, never the same name twice.
///
/// Each name is the sanitized page title plus the first hyphen-separated
/// group of the page id; an empty id leaves that suffix off. A name already
/// handed out gets `_2`, `_3`, ... appended to its stem. Names are compared
/// case-insensitively so the batch is also safe on case-insensitive
/// filesystems.
#[derive(Debug, Default)]
pub struct FilenameRegistry {
    taken: HashSet<String>,
}

impl FilenameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves and returns the first free filename for this page.
    pub fn claim(&mut self, title: &str, id: &str, extension: &str) -> String {
        let stem = clean_stem(title, id);

        let mut candidate = format!("{}.{}", stem, extension);
        let mut counter = 2;
        while !self.taken.insert(candidate.to_lowercase()) {
            candidate = format!("{}_{}.{}", stem, counter, extension);
            counter += 1;
        }

        if counter > 2 {
            log::warn!(
                "Output name for '{}' already used in this batch; writing {} instead",
                title,
                candidate
            );
        }
        candidate
    }
}

fn clean_stem(title: &str, id: &str) -> String {
    let safe_title = sanitize_filename(title);
    let stem = if safe_title.is_empty() {
        UNTITLED.to_string()
    } else {
        safe_title
    };

    match id.split('-').next().filter(|part| !part.is_empty()) {
        Some(short_id) => format!("{}_{}", stem, short_id),
        None => stem,
    }
}

/// Sanitizes a string to be safe for use as a filename.
fn sanitize_filename(name: &str) -> String {
    let safe_name = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>();

    // Trim whitespace and dots, then cap the length on a char boundary
    safe_name
        .trim()
        .trim_matches('.')
        .chars()
        .take(FILENAME_TITLE_MAX_LEN)
        .collect()
}
