//! Command handlers.

pub mod analyze;
pub mod generate;
pub mod init_config;
pub mod sample;

use crate::cli::CommonGenerateArgs;
use anyhow::Context;
use health_core::Config;
use health_generator::RecordGenerator;

/// Load the config file (or defaults) and apply command-line overrides.
pub(crate) fn load_config(common: &CommonGenerateArgs) -> anyhow::Result<Config> {
    let mut config = match &common.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(locale) = common.locale {
        config.generator.locale = locale.into();
    }
    Ok(config)
}

/// Build a seeded generator from the loaded config.
pub(crate) fn build_generator(
    config: &Config,
    common: &CommonGenerateArgs,
) -> anyhow::Result<RecordGenerator> {
    let generator = RecordGenerator::from_config(config.generator.clone(), common.seed)
        .context("Invalid generator configuration")?;

    Ok(match common.created_at {
        Some(created_at) => generator.with_created_at(created_at),
        None => generator,
    })
}
