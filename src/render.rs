//! Text-to-HTML formatting for analysis results.
//!
//! Supports the small markup subset the analysis service emits: fenced code
//! blocks, `**bold**`, `- ` list items and line breaks.

pub mod escape;
pub mod html;
pub mod lexer;

pub use escape::escape_html;
pub use html::render;
pub use lexer::{Token, tokenize};

/// Converts analysis text to HTML.
pub fn format_markdown(text: &str) -> String {
    render(&tokenize(text))
}
