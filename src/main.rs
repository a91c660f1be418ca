use anyhow::Result;
use clap::Parser;
use exile_economy::application::{Cli, CommandExecutor};
use exile_economy::infrastructure::init_logging;
use exile_economy::shared::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: CLI flags > config file > defaults
    let mut config = ConfigLoader::load_or_default(cli.config.as_deref())?;
    cli.overrides.apply(&mut config);

    init_logging(&config.logging);

    CommandExecutor::execute(cli.command, config).await?;
    Ok(())
}
