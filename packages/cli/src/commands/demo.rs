use crate::config::Config;
use crate::display::print_outline;
use crate::observers;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use quire_editor::{Document, EditBuffer, Observable, ObserverError};

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Number of edits to make
    #[arg(short, long, default_value_t = 1)]
    pub edits: usize,

    /// Number of undos to attempt afterwards (extra undos hit an empty history)
    #[arg(short, long, default_value_t = 2)]
    pub undos: usize,
}

/// Edit a document watched by the configured observers, then undo
pub fn demo(args: DemoArgs, config: &Config, cwd: &str) -> Result<()> {
    let content = config.load_content(cwd)?;
    let mut buffer = EditBuffer::new(Document::new(content));
    let handles = observers::attach(buffer.document_mut(), config);

    println!(
        "{} {} observer(s) attached",
        "👀".bright_blue(),
        handles.len()
    );
    println!();
    print_outline("Initial", &buffer);

    for _ in 0..args.edits {
        buffer.edit()?;
    }
    print_outline("After edit", &buffer);

    // Detach the last observer, then show that a second removal is handled
    if let Some(last) = handles.last() {
        let document = buffer.document_mut();
        document.remove_observer(last)?;
        match document.remove_observer(last) {
            Ok(_) => {}
            Err(ObserverError::NotRegistered { observer }) => {
                println!("{} {} was already detached", "⚠️".yellow(), observer);
                println!();
            }
            Err(err) => return Err(err.into()),
        }
    }

    for _ in 0..args.undos {
        if buffer.undo()? {
            print_outline("After undo", &buffer);
        } else {
            println!("{} Nothing to undo", "⚠️".yellow());
        }
    }

    Ok(())
}
