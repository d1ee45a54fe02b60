//! Typed content blocks for narrative reports.

use serde::{Deserialize, Serialize};

/// One block of report content.
///
/// Renderers (plain text, marked-up text, print) consume these variants;
/// assembly logic never deals in formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Bullets { items: Vec<String> },
    Callout { text: String },
    Divider,
}

/// An ordered, render-target-agnostic narrative document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a heading block.
    pub fn heading(&mut self, level: u8, text: impl Into<String>) {
        self.blocks.push(Block::Heading { level, text: text.into() });
    }

    /// Appends a paragraph block.
    pub fn paragraph(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Paragraph { text: text.into() });
    }

    /// Appends a bulleted list block.
    pub fn bullets(&mut self, items: Vec<String>) {
        self.blocks.push(Block::Bullets { items });
    }

    /// Appends a highlighted callout block.
    pub fn callout(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Callout { text: text.into() });
    }

    /// Appends a divider block.
    pub fn divider(&mut self) {
        self.blocks.push(Block::Divider);
    }

    /// Returns the blocks in order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True when the document holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// True when any block's text contains the needle (test helper for
    /// structural assertions).
    pub fn mentions(&self, needle: &str) -> bool {
        self.blocks.iter().any(|block| match block {
            Block::Heading { text, .. } => text.contains(needle),
            Block::Paragraph { text } => text.contains(needle),
            Block::Bullets { items } => items.iter().any(|i| i.contains(needle)),
            Block::Callout { text } => text.contains(needle),
            Block::Divider => false,
        })
    }
}
