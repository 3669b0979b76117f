//! # Content Edits
//!
//! Serializable operations on a document's root content.
//!
//! Edits are validated before they are applied, so a rejected edit never
//! touches the content (and never reaches the undo history).

use quire_content::{Block, DocumentContent, Heading};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    /// Append the placeholder heading to the root
    AppendHeading,

    /// Append an arbitrary block to the root
    AppendBlock { block: Block },

    /// Remove the root block at `index`
    RemoveBlock { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Block index {index} out of range (document has {len} blocks)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Edit {
    /// Check that this edit can be applied to `content`
    pub fn validate(&self, content: &DocumentContent) -> Result<(), EditError> {
        match self {
            Edit::AppendHeading | Edit::AppendBlock { .. } => Ok(()),
            Edit::RemoveBlock { index } => {
                if *index < content.items.len() {
                    Ok(())
                } else {
                    Err(EditError::IndexOutOfRange {
                        index: *index,
                        len: content.items.len(),
                    })
                }
            }
        }
    }

    /// Validate, then apply to `content`
    pub fn apply(&self, content: &mut DocumentContent) -> Result<(), EditError> {
        self.validate(content)?;

        match self {
            Edit::AppendHeading => content.push(Heading::placeholder()),
            Edit::AppendBlock { block } => content.push(block.clone()),
            Edit::RemoveBlock { index } => {
                content.items.remove(*index);
            }
        }

        Ok(())
    }

    /// Short label for logs and undo descriptions
    pub fn describe(&self) -> String {
        match self {
            Edit::AppendHeading => "append heading".to_string(),
            Edit::AppendBlock { block } => match block {
                Block::Paragraph(_) => "append paragraph".to_string(),
                Block::Heading(h) => format!("append heading '{}'", h.text),
                Block::List(_) => "append list".to_string(),
            },
            Edit::RemoveBlock { index } => format!("remove block {}", index),
        }
    }
}
