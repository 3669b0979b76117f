mod commands;
mod config;
mod display;
mod logging;
mod observers;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{demo, init, run, DemoArgs, InitArgs, RunArgs};
use config::Config;

/// Quire - observable documents with undo
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a config, example content and an example script
    Init(InitArgs),

    /// Edit the configured document with observers attached, then undo
    Demo(DemoArgs),

    /// Run an editing script
    Run(RunArgs),
}

fn execute(cli: Cli, cwd: &str) -> Result<()> {
    // `init` must work even when the existing config is broken
    let config = match &cli.command {
        Command::Init(_) => Config::default(),
        _ => Config::load(cwd)?,
    };

    logging::init(cli.log_level.as_deref().unwrap_or(&config.log_level))?;

    match cli.command {
        Command::Init(args) => init(args, cwd),
        Command::Demo(args) => demo(args, &config, cwd),
        Command::Run(args) => run(args, &config, cwd),
    }
}

fn main() {
    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| execute(cli, &cwd.display().to_string()));

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
