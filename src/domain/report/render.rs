//! Reference plain-text rendering of a document.

use super::{Block, Document};

/// Renders a document as plain text.
///
/// The one renderer the engine ships; marked-up and printable renderings
/// live with the presentation collaborators.
pub fn render_plain_text(document: &Document) -> String {
    let mut out = String::new();
    for block in document.blocks() {
        match block {
            Block::Heading { text, .. } => {
                out.push_str(text);
                out.push('\n');
            }
            Block::Paragraph { text } => {
                out.push_str(text);
                out.push('\n');
            }
            Block::Bullets { items } => {
                for item in items {
                    out.push_str("- ");
                    out.push_str(item);
                    out.push('\n');
                }
            }
            Block::Callout { text } => {
                out.push_str("! ");
                out.push_str(text);
                out.push('\n');
            }
            Block::Divider => out.push_str("---\n"),
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}
