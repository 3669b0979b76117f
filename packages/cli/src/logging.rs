use anyhow::{anyhow, Result};
use tracing::Level;

/// Install the global fmt subscriber at the given level
pub fn init(level: &str) -> Result<()> {
    let level = parse_level(level)?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    Ok(())
}

fn parse_level(level: &str) -> Result<Level> {
    level
        .parse::<Level>()
        .map_err(|_| anyhow!("Invalid log level: {}. Use: trace, debug, info, warn, or error", level))
}
