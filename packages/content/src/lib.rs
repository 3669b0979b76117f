//! # Quire Content
//!
//! The structural tree behind a quire document.
//!
//! ```text
//! DocumentContent
//!  ├── Paragraph
//!  ├── Heading ── items: Paragraph | Heading | List
//!  └── List ───── items: ListItem
//! ```
//!
//! Every node can produce a fresh, depth-first pre-order sequence of the
//! nodes below it (see [`Traverse`]). Containers that carry no text of their
//! own (`ListElem`, `DocumentContent`) never appear in that sequence; a
//! `Heading` appears before its children.

pub mod ast;
pub mod iter;
pub mod serializer;

pub use ast::{Block, DocumentContent, Heading, ListElem, ListItem, Paragraph, DEFAULT_HEADING_TEXT};
pub use iter::{Descendants, Node, Traverse};
pub use serializer::{serialize, Serializer};
