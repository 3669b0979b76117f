use crate::config::Config;
use crate::display::print_outline;
use crate::observers;
use crate::script::{Script, Step};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use quire_editor::{Document, EditBuffer};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Script file (JSON)
    pub script: PathBuf,
}

/// Run every step of a script against a fresh buffer
pub fn run(args: RunArgs, config: &Config, cwd: &str) -> Result<()> {
    let path = PathBuf::from(cwd).join(&args.script);
    let script = Script::load(&path)?;

    println!(
        "{} {} ({} steps)",
        "▶".bright_blue(),
        args.script.display(),
        script.steps.len()
    );
    println!();

    let buffer = execute(script, config, cwd)?;
    print_outline("Final", &buffer);

    Ok(())
}

/// Apply the script's steps and return the resulting buffer
pub fn execute(script: Script, config: &Config, cwd: &str) -> Result<EditBuffer> {
    let content = match script.content {
        Some(content) => content,
        None => config.load_content(cwd)?,
    };

    let mut buffer = EditBuffer::new(Document::new(content));
    observers::attach(buffer.document_mut(), config);

    for (index, step) in script.steps.into_iter().enumerate() {
        match step {
            Step::Edit => buffer.edit()?,
            Step::Apply { edit } => buffer.apply(edit)?,
            Step::Undo => {
                if !buffer.undo()? {
                    println!("{} step {}: nothing to undo", "⚠️".yellow(), index);
                }
            }
            Step::Redo => {
                if !buffer.redo()? {
                    println!("{} step {}: nothing to redo", "⚠️".yellow(), index);
                }
            }
            Step::Print => print_outline(&format!("Step {}", index), &buffer),
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::example_content;
    use quire_content::{Block, DocumentContent, Heading, Paragraph};
    use quire_editor::Edit;

    fn quiet() -> Config {
        Config {
            gui: false,
            collaborators: Vec::new(),
            ..Config::default()
        }
    }

    #[test]
    fn test_execute_edits_and_undos() {
        let script = Script {
            content: None,
            steps: vec![Step::Edit, Step::Edit, Step::Undo, Step::Undo, Step::Undo],
        };

        let buffer = execute(script, &quiet(), ".").unwrap();

        assert_eq!(buffer.document().content(), &example_content());
        assert_eq!(buffer.redo_levels(), 2);
    }

    #[test]
    fn test_execute_uses_script_content() {
        let script = Script {
            content: Some(DocumentContent::new(vec![Paragraph::new("only").into()])),
            steps: vec![
                Step::Apply {
                    edit: Edit::RemoveBlock { index: 0 },
                },
                Step::Edit,
                Step::Undo,
                Step::Redo,
            ],
        };

        let buffer = execute(script, &quiet(), ".").unwrap();

        assert_eq!(
            buffer.document().content().items,
            vec![Block::from(Heading::placeholder())]
        );
    }

    #[test]
    fn test_execute_stops_on_bad_edit() {
        let script = Script {
            content: Some(Default::default()),
            steps: vec![Step::Apply {
                edit: Edit::RemoveBlock { index: 4 },
            }],
        };

        assert!(execute(script, &quiet(), ".").is_err());
    }

    #[test]
    fn test_run_reads_script_relative_to_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("steps.json"),
            r#"{ "steps": [ { "step": "edit" }, { "step": "print" } ] }"#,
        )
        .unwrap();

        let args = RunArgs {
            script: PathBuf::from("steps.json"),
        };
        assert!(run(args, &quiet(), dir.path().to_str().unwrap()).is_ok());
    }
}
