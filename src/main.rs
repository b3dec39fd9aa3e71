//! Command-line interface for health-datagen.

use clap::Parser;
use health_datagen::commands::{analyze, generate, init_config, sample};
use health_datagen::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Generate(args) => generate::run_generate(args)?,
        Commands::Analyze(args) => analyze::run_analyze(args)?,
        Commands::Sample(args) => sample::run_sample(args)?,
        Commands::InitConfig(args) => init_config::run_init_config(args)?,
    }

    Ok(())
}
