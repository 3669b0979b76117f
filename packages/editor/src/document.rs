//! # Document Handle
//!
//! A Document owns one content tree and one observer registry. Every change
//! to the content goes through the document, which notifies its observers
//! once the change is in place.
//!
//! ## Lifecycle
//!
//! ```text
//! Create → Edit / SetState → Notify
//!   ↓          ↓               ↓
//! Content   Content'       Observers
//! ```

use quire_common::{ContentStats, Observable, Subject};
use quire_content::{DocumentContent, Heading};
use tracing::info;

use crate::{Edit, EditorError};

/// What happened to the document, passed to every observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    /// The content was changed in place
    Edited,

    /// The content was replaced wholesale
    Restored,
}

/// Observable document
#[derive(Debug, Default)]
pub struct Document {
    /// Increments on each mutation or restore
    pub version: u64,

    content: DocumentContent,

    subject: Subject<DocumentEvent>,
}

impl Document {
    pub fn new(content: DocumentContent) -> Self {
        Self {
            version: 0,
            content,
            subject: Subject::new(),
        }
    }

    pub fn content(&self) -> &DocumentContent {
        &self.content
    }

    /// Append the placeholder heading, then notify observers.
    ///
    /// The heading is in place even if an observer fails.
    pub fn append_heading(&mut self) -> Result<(), EditorError> {
        info!("Edited document");
        self.content.push(Heading::placeholder());
        self.changed(DocumentEvent::Edited)
    }

    /// Apply an edit, then notify observers
    pub fn apply(&mut self, edit: &Edit) -> Result<(), EditorError> {
        edit.apply(&mut self.content)?;
        info!("Edited document: {}", edit.describe());
        self.changed(DocumentEvent::Edited)
    }

    /// Independent copy of the current content
    pub fn get_state(&self) -> DocumentContent {
        self.content.clone()
    }

    /// Replace the content wholesale, then notify observers
    pub fn set_state(&mut self, content: DocumentContent) -> Result<(), EditorError> {
        info!("Restored document state");
        self.content = content;
        self.changed(DocumentEvent::Restored)
    }

    pub fn stats(&self) -> ContentStats {
        ContentStats::collect(&self.content)
    }

    fn changed(&mut self, event: DocumentEvent) -> Result<(), EditorError> {
        self.version += 1;
        self.subject.notify(&event)?;
        Ok(())
    }
}

impl Observable<DocumentEvent> for Document {
    fn subject(&self) -> &Subject<DocumentEvent> {
        &self.subject
    }

    fn subject_mut(&mut self) -> &mut Subject<DocumentEvent> {
        &mut self.subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_common::{Observer, ObserverError, ObserverResult};
    use quire_content::{Block, Paragraph};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct EventLog {
        events: RefCell<Vec<DocumentEvent>>,
    }

    impl Observer<DocumentEvent> for EventLog {
        fn update(&self, event: &DocumentEvent) -> ObserverResult<()> {
            self.events.borrow_mut().push(*event);
            Ok(())
        }
    }

    struct Rejecting;

    impl Observer<DocumentEvent> for Rejecting {
        fn update(&self, _event: &DocumentEvent) -> ObserverResult<()> {
            Err(ObserverError::failed("rejecting", "offline"))
        }
    }

    #[test]
    fn test_append_heading_notifies() {
        let log = Rc::new(EventLog::default());
        let mut doc = Document::default();
        doc.register_observer(log.clone());

        doc.append_heading().unwrap();

        assert_eq!(doc.content().items, vec![Block::Heading(Heading::placeholder())]);
        assert_eq!(doc.version, 1);
        assert_eq!(*log.events.borrow(), vec![DocumentEvent::Edited]);
    }

    #[test]
    fn test_get_state_is_independent() {
        let mut doc = Document::new(DocumentContent::new(vec![Paragraph::new("Intro").into()]));
        let snapshot = doc.get_state();

        doc.append_heading().unwrap();

        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(doc.content().items.len(), 2);
    }

    #[test]
    fn test_set_state_replaces_and_notifies() {
        let log = Rc::new(EventLog::default());
        let mut doc = Document::new(DocumentContent::new(vec![Paragraph::new("old").into()]));
        doc.register_observer(log.clone());

        let replacement = DocumentContent::new(vec![Paragraph::new("new").into()]);
        doc.set_state(replacement.clone()).unwrap();

        assert_eq!(doc.content(), &replacement);
        assert_eq!(*log.events.borrow(), vec![DocumentEvent::Restored]);
    }

    #[test]
    fn test_rejected_edit_does_not_notify() {
        let log = Rc::new(EventLog::default());
        let mut doc = Document::default();
        doc.register_observer(log.clone());

        let result = doc.apply(&Edit::RemoveBlock { index: 0 });

        assert!(matches!(result, Err(EditorError::Edit(_))));
        assert_eq!(doc.version, 0);
        assert!(log.events.borrow().is_empty());
    }

    #[test]
    fn test_observer_failure_surfaces_after_mutation() {
        let mut doc = Document::default();
        doc.register_observer(Rc::new(Rejecting));

        let result = doc.append_heading();

        assert!(matches!(result, Err(EditorError::Observer(ObserverError::Failed { .. }))));
        assert_eq!(doc.content().items.len(), 1);
    }

    #[test]
    fn test_documents_have_separate_registries() {
        let mut first = Document::default();
        let second = Document::default();
        first.register_observer(Rc::new(EventLog::default()));

        assert_eq!(first.subject().len(), 1);
        assert!(second.subject().is_empty());
    }
}
