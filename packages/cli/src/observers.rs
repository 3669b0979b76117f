//! Stand-ins for the surfaces that watch a document. They only log.

use crate::config::Config;
use quire_editor::{Document, DocumentEvent, Observable, Observer, ObserverResult};
use std::rc::Rc;
use tracing::info;

/// Desktop surface
#[derive(Debug, Default)]
pub struct Gui;

impl Observer<DocumentEvent> for Gui {
    fn name(&self) -> &str {
        "GUI"
    }

    fn update(&self, _event: &DocumentEvent) -> ObserverResult<()> {
        info!("Notified GUI");
        Ok(())
    }
}

/// Remote collaborator
#[derive(Debug)]
pub struct Collaborator {
    pub name: String,
}

impl Collaborator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Collaborator {
    fn default() -> Self {
        Self::new("Anonymous")
    }
}

impl Observer<DocumentEvent> for Collaborator {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, _event: &DocumentEvent) -> ObserverResult<()> {
        info!("Notified collaborator '{}'", self.name);
        Ok(())
    }
}

/// Register the observers named in `config`, GUI first. Returns the handles
/// so callers can remove them later.
pub fn attach(document: &mut Document, config: &Config) -> Vec<Rc<dyn Observer<DocumentEvent>>> {
    let mut handles: Vec<Rc<dyn Observer<DocumentEvent>>> = Vec::new();

    if config.gui {
        handles.push(Rc::new(Gui));
    }
    for name in &config.collaborators {
        handles.push(Rc::new(Collaborator::new(name.as_str())));
    }

    for handle in &handles {
        document.register_observer(Rc::clone(handle));
    }

    handles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_follows_config_order() {
        let mut doc = Document::default();
        let config = Config {
            collaborators: vec!["alice".to_string(), "bob".to_string()],
            ..Config::default()
        };

        let handles = attach(&mut doc, &config);

        assert_eq!(handles.len(), 3);
        assert_eq!(doc.subject().observer_names(), vec!["GUI", "alice", "bob"]);
    }

    #[test]
    fn test_attach_without_gui() {
        let mut doc = Document::default();
        let config = Config {
            gui: false,
            collaborators: Vec::new(),
            ..Config::default()
        };

        assert!(attach(&mut doc, &config).is_empty());
        assert!(doc.subject().is_empty());
    }

    #[test]
    fn test_stub_observers_accept_every_event() {
        assert!(Gui.update(&DocumentEvent::Edited).is_ok());
        assert!(Collaborator::default().update(&DocumentEvent::Restored).is_ok());
        assert_eq!(Collaborator::default().name(), "Anonymous");
    }
}
