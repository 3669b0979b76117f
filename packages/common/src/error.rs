use thiserror::Error;

/// Errors raised by the observer registry and by observers themselves
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    #[error("Observer {observer} does not implement update")]
    Unimplemented { observer: String },

    #[error("Observer not in list: {observer}")]
    NotRegistered { observer: String },

    #[error("Observer {observer} failed: {message}")]
    Failed { observer: String, message: String },
}

impl ObserverError {
    pub fn failed(observer: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            observer: observer.into(),
            message: message.into(),
        }
    }
}
