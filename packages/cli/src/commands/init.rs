use crate::config::{example_content, Config, DEFAULT_CONFIG_NAME};
use crate::script::{Script, DEFAULT_SCRIPT_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

const EXAMPLE_CONTENT_NAME: &str = "content.json";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Collaborator names to watch the document (repeatable)
    #[arg(short, long = "collaborator")]
    pub collaborators: Vec<String>,

    /// Do not attach the GUI observer
    #[arg(long)]
    pub no_gui: bool,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing quire workspace...".bright_blue().bold());

    // Example content the config points at
    let content_path = PathBuf::from(cwd).join(EXAMPLE_CONTENT_NAME);
    if !content_path.exists() || args.force {
        fs::write(&content_path, serde_json::to_string_pretty(&example_content())?)?;
        println!("  {} Created {}", "✓".green(), EXAMPLE_CONTENT_NAME);
    }

    let script_path = PathBuf::from(cwd).join(DEFAULT_SCRIPT_NAME);
    if !script_path.exists() || args.force {
        fs::write(&script_path, serde_json::to_string_pretty(&Script::example())?)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_SCRIPT_NAME);
    }

    let defaults = Config::default();
    let config = Config {
        gui: !args.no_gui,
        collaborators: if args.collaborators.is_empty() {
            defaults.collaborators.clone()
        } else {
            args.collaborators
        },
        content: Some(EXAMPLE_CONTENT_NAME.to_string()),
        ..defaults
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Workspace initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: quire demo");
    println!("  2. Edit {} and run: quire run {}", DEFAULT_SCRIPT_NAME, DEFAULT_SCRIPT_NAME);

    Ok(())
}
