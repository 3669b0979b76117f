//! # Edit Buffer
//!
//! Wraps a [`Document`] with an undo/redo history of whole-content snapshots.
//!
//! ## Design
//!
//! - Each edit pushes a deep copy of the content *before* mutating it
//! - Undo pops that copy and restores it through `Document::set_state`
//! - The state being undone is kept on the redo stack
//! - New edits clear the redo stack
//! - History is unbounded and lives only in memory
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut buffer = EditBuffer::new(Document::new(content));
//!
//! buffer.edit()?;
//! buffer.apply(Edit::RemoveBlock { index: 0 })?;
//!
//! buffer.undo()?;
//! buffer.redo()?;
//! ```

use quire_content::DocumentContent;
use tracing::info;

use crate::{Document, Edit, EditorError};

/// Content captured before an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub content: DocumentContent,

    /// What the edit that followed this snapshot did
    pub description: Option<String>,
}

impl Snapshot {
    pub fn new(content: DocumentContent) -> Self {
        Self {
            content,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Document plus its edit history
#[derive(Debug, Default)]
pub struct EditBuffer {
    document: Document,

    /// Snapshots taken before each edit (most recent last)
    undo_stack: Vec<Snapshot>,

    /// Snapshots taken before each undo (most recent last)
    redo_stack: Vec<Snapshot>,
}

impl EditBuffer {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for observer registration. Content changes made
    /// directly on the document are not recorded in the history.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Snapshot the content, then append the placeholder heading
    pub fn edit(&mut self) -> Result<(), EditorError> {
        self.record(Snapshot::new(self.document.get_state()).with_description("append heading"));
        self.document.append_heading()
    }

    /// Snapshot the content, then apply `edit`.
    ///
    /// Edits that fail validation are rejected before anything is recorded.
    pub fn apply(&mut self, edit: Edit) -> Result<(), EditorError> {
        edit.validate(self.document.content())?;

        self.record(Snapshot::new(self.document.get_state()).with_description(edit.describe()));
        self.document.apply(&edit)
    }

    /// Restore the most recent snapshot.
    ///
    /// Returns `Ok(false)` and leaves the document untouched when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        let Some(snapshot) = self.undo_stack.pop() else {
            info!("Nothing to undo");
            return Ok(false);
        };

        info!(
            "Undo {}",
            snapshot.description.as_deref().unwrap_or("edit")
        );
        self.redo_stack.push(Snapshot {
            content: self.document.get_state(),
            description: snapshot.description.clone(),
        });
        self.document.set_state(snapshot.content)?;

        Ok(true)
    }

    /// Restore the state most recently undone.
    ///
    /// Returns `Ok(false)` when there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool, EditorError> {
        let Some(snapshot) = self.redo_stack.pop() else {
            info!("Nothing to redo");
            return Ok(false);
        };

        info!(
            "Redo {}",
            snapshot.description.as_deref().unwrap_or("edit")
        );
        self.undo_stack.push(Snapshot {
            content: self.document.get_state(),
            description: snapshot.description.clone(),
        });
        self.document.set_state(snapshot.content)?;

        Ok(true)
    }

    fn record(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        // New edit invalidates the redo history
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Description of the edit the next undo would revert
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|snapshot| snapshot.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|snapshot| snapshot.description.as_deref())
    }

    /// Most recent snapshot, if any
    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.undo_stack.last()
    }

    /// Drop all undo/redo history
    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
