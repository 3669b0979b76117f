//! # Quire Editor
//!
//! Observable documents with snapshot-based undo.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ EditBuffer: history of content snapshots    │
//! │  - snapshot, then mutate                    │
//! │  - undo/redo restore whole snapshots        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ Document: content tree + observer registry  │
//! │  - every mutation notifies observers        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ Observers (GUI, collaborators, ...)         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quire_editor::{Document, EditBuffer, Observable};
//!
//! let mut buffer = EditBuffer::new(Document::new(content));
//! buffer.document_mut().register_observer(gui);
//!
//! buffer.edit()?;             // snapshot, append a heading, notify
//! assert!(buffer.undo()?);    // restore the snapshot, notify
//! assert!(!buffer.undo()?);   // nothing left to undo
//! ```

mod document;
mod edit_buffer;
mod edits;
mod errors;

pub use document::{Document, DocumentEvent};
pub use edit_buffer::{EditBuffer, Snapshot};
pub use edits::{Edit, EditError};
pub use errors::EditorError;

// Re-export common types for convenience
pub use quire_common::{ContentStats, Observable, Observer, ObserverError, ObserverResult, Subject};
pub use quire_content::DocumentContent;
