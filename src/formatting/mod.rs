// src/formatting/mod.rs
//! Encoders over the normalized content model: plain text and HTML.

pub mod html;
mod plain_text;
mod standalone;

pub use self::html::to_html;
pub use self::plain_text::to_plain_text;
pub use self::standalone::render_standalone_html;
