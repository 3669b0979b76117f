//! Error types for the editor

use quire_common::ObserverError;
use thiserror::Error;

use crate::edits::EditError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Observer error: {0}")]
    Observer(#[from] ObserverError),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),
}
