//! # Traversal
//!
//! Depth-first, pre-order flattening of the content tree.
//!
//! Each call to [`Traverse::descendants`] builds a new [`Descendants`]
//! iterator that owns its own cursor stack, so any number of traversals over
//! the same tree can run side by side and a traversal can always be started
//! over from the node.
//!
//! What a node contributes:
//! - `Paragraph`, `ListItem`: itself
//! - `Heading`: itself, then everything below it
//! - `ListElem`, `DocumentContent`: everything below them, never themselves

use std::slice;

use crate::ast::{Block, DocumentContent, Heading, ListElem, ListItem, Paragraph};

/// Borrowed view of a node produced by a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Paragraph(&'a Paragraph),
    ListItem(&'a ListItem),
    Heading(&'a Heading),
}

impl<'a> Node<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Node::Paragraph(p) => p.text.as_str(),
            Node::ListItem(i) => i.text.as_str(),
            Node::Heading(h) => h.text.as_str(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Paragraph(_) => "paragraph",
            Node::ListItem(_) => "list_item",
            Node::Heading(_) => "heading",
        }
    }
}

enum Frame<'a> {
    /// A node queued to be yielded next
    Single(Option<Node<'a>>),
    Blocks(slice::Iter<'a, Block>),
    Items(slice::Iter<'a, ListItem>),
}

enum Step<'a> {
    Yield(Node<'a>),
    Descend(Frame<'a>),
    Exhausted,
}

/// Iterator over the nodes below (and possibly including) a starting node
pub struct Descendants<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Descendants<'a> {
    fn from_frame(frame: Frame<'a>) -> Self {
        Self { stack: vec![frame] }
    }

    fn single(node: Node<'a>) -> Self {
        Self::from_frame(Frame::Single(Some(node)))
    }

    fn blocks(blocks: &'a [Block]) -> Self {
        Self::from_frame(Frame::Blocks(blocks.iter()))
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Node<'a>> {
        loop {
            let step = match self.stack.last_mut()? {
                Frame::Single(node) => node.take().map_or(Step::Exhausted, Step::Yield),
                Frame::Items(items) => items
                    .next()
                    .map_or(Step::Exhausted, |item| Step::Yield(Node::ListItem(item))),
                Frame::Blocks(blocks) => match blocks.next() {
                    None => Step::Exhausted,
                    Some(Block::Paragraph(p)) => Step::Yield(Node::Paragraph(p)),
                    Some(Block::Heading(h)) => Step::Yield(Node::Heading(h)),
                    Some(Block::List(l)) => Step::Descend(Frame::Items(l.items.iter())),
                },
            };

            match step {
                Step::Yield(node) => {
                    // Children of a heading follow the heading itself
                    if let Node::Heading(h) = node {
                        if !h.items.is_empty() {
                            self.stack.push(Frame::Blocks(h.items.iter()));
                        }
                    }
                    return Some(node);
                }
                Step::Descend(frame) => self.stack.push(frame),
                Step::Exhausted => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Anything that can produce a fresh flattening of its subtree
pub trait Traverse {
    fn descendants(&self) -> Descendants<'_>;
}

impl Traverse for Paragraph {
    fn descendants(&self) -> Descendants<'_> {
        Descendants::single(Node::Paragraph(self))
    }
}

impl Traverse for ListItem {
    fn descendants(&self) -> Descendants<'_> {
        Descendants::single(Node::ListItem(self))
    }
}

impl Traverse for ListElem {
    fn descendants(&self) -> Descendants<'_> {
        Descendants::from_frame(Frame::Items(self.items.iter()))
    }
}

impl Traverse for Heading {
    fn descendants(&self) -> Descendants<'_> {
        Descendants::single(Node::Heading(self))
    }
}

impl Traverse for Block {
    fn descendants(&self) -> Descendants<'_> {
        match self {
            Block::Paragraph(p) => p.descendants(),
            Block::Heading(h) => h.descendants(),
            Block::List(l) => l.descendants(),
        }
    }
}

impl Traverse for DocumentContent {
    fn descendants(&self) -> Descendants<'_> {
        Descendants::blocks(&self.items)
    }
}

impl DocumentContent {
    /// Number of nodes a full traversal yields
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }
}

impl<'a> IntoIterator for &'a DocumentContent {
    type Item = Node<'a>;
    type IntoIter = Descendants<'a>;

    fn into_iter(self) -> Descendants<'a> {
        self.descendants()
    }
}
