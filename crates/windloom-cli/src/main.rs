use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use windloom_cli::{
    cli::{Cli, Commands},
    commands, config,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let log_level = cli.level_filter();
    let env_filter = format!("windloom_cli={},windloom_config={}", log_level, log_level);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .init();

    let working_dir = std::env::current_dir().context("Failed to read current directory")?;
    let dark_mode = cli.dark_mode;
    debug!("Running in {}", working_dir.display());

    let load = || config::CliConfig::load(&cli.config, dark_mode, &working_dir);

    match cli.command {
        Commands::Init { path, force, format } => {
            commands::init::execute(path, force, format, &working_dir).await
        }
        // Validation failures are reported per issue rather than as a load error
        Commands::Validate => commands::validate::execute(&cli.config, dark_mode, &working_dir).await,
        Commands::Show { format } => commands::show::execute(load().await?, format).await,
        Commands::Emit { kind, out } => {
            commands::emit::execute(load().await?, kind, out, &working_dir).await
        }
        Commands::Scan { root } => commands::scan::execute(load().await?, root).await,
        Commands::Shade { palette, key } => {
            commands::shade::execute(load().await?, palette, key).await
        }
    }
}
