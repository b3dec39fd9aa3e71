//! `init-config` command handler.

use crate::cli::InitConfigArgs;
use anyhow::Context;
use health_core::Config;

/// Write the default configuration to `args.path`.
pub fn run_init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    Config::default()
        .save(&args.path)
        .with_context(|| format!("Failed to write config to {}", args.path.display()))?;

    tracing::info!("Wrote default config to {}", args.path.display());
    println!("Created config file: {}", args.path.display());
    Ok(())
}
