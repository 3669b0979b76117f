use serde::{Deserialize, Serialize};

/// Text given to headings created without explicit content
pub const DEFAULT_HEADING_TEXT: &str = "New heading";

/// Plain paragraph of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Single entry of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Ordered list of items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListElem {
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl ListElem {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self { items }
    }

    /// Build a list from raw item texts
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: texts.into_iter().map(ListItem::new).collect(),
        }
    }
}

/// Section heading. Owns the blocks nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,

    /// Nesting level (1 = top). Neither range nor actual depth is checked;
    /// renderers clamp it.
    pub level: u32,

    #[serde(default)]
    pub items: Vec<Block>,
}

impl Heading {
    pub fn new(text: impl Into<String>, level: u32) -> Self {
        Self {
            text: text.into(),
            level,
            items: Vec::new(),
        }
    }

    pub fn with_items(text: impl Into<String>, level: u32, items: Vec<Block>) -> Self {
        Self {
            text: text.into(),
            level,
            items,
        }
    }

    /// The heading appended by a default edit
    pub fn placeholder() -> Self {
        Self::new(DEFAULT_HEADING_TEXT, 1)
    }
}

/// Child of the root or of a heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    List(ListElem),
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<Heading> for Block {
    fn from(heading: Heading) -> Self {
        Block::Heading(heading)
    }
}

impl From<ListElem> for Block {
    fn from(list: ListElem) -> Self {
        Block::List(list)
    }
}

/// Root container of a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    #[serde(default)]
    pub items: Vec<Block>,
}

impl DocumentContent {
    pub fn new(items: Vec<Block>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a block at the end of the root
    pub fn push(&mut self, block: impl Into<Block>) {
        self.items.push(block.into());
    }
}
