use anyhow::Context;
use quire_content::{DocumentContent, ListElem, Paragraph};
use quire_editor::Edit;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SCRIPT_NAME: &str = "quire.script.json";

/// Scripted editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Starting content. Falls back to the configured content when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<DocumentContent>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Default edit: append the placeholder heading
    Edit,

    /// Apply a specific edit
    Apply { edit: Edit },

    Undo,

    Redo,

    /// Print the current outline
    Print,
}

impl Script {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read script {}", path.display()))?;
        let script = serde_json::from_str(&source)
            .with_context(|| format!("Invalid script {}", path.display()))?;
        Ok(script)
    }

    /// Script written by `init`
    pub fn example() -> Self {
        Self {
            content: None,
            steps: vec![
                Step::Print,
                Step::Edit,
                Step::Apply {
                    edit: Edit::AppendBlock {
                        block: Paragraph::new("Appended paragraph").into(),
                    },
                },
                Step::Apply {
                    edit: Edit::AppendBlock {
                        block: ListElem::from_texts(["First", "Second"]).into(),
                    },
                },
                Step::Print,
                Step::Undo,
                Step::Undo,
                Step::Print,
                Step::Redo,
                Step::Print,
            ],
        }
    }
}
