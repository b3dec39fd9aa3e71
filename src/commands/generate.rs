//! `generate` command handler.

use super::{build_generator, load_config};
use crate::cli::GenerateArgs;
use anyhow::Context;
use health_populate::RecordPopulator;

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = load_config(&args.common)?;

    tracing::info!("Locale: {}", config.generator.locale);
    tracing::info!("Seed: {}", args.common.seed);

    let mut generator = build_generator(&config, &args.common)?;
    let mut populator = RecordPopulator::new(config.output);
    if let Some(output) = args.output {
        populator = populator.with_output_directory(output);
    }
    let output_dir = populator.output().output_directory.clone();

    let metrics = populator
        .populate(&mut generator, args.count)
        .with_context(|| format!("Failed to write records to {}", output_dir.display()))?;

    println!(
        "Generated {} records in {}",
        metrics.records_written,
        output_dir.display()
    );
    if let Some(csv_path) = &metrics.csv_path {
        println!("  Summary CSV: {}", csv_path.display());
    }
    if metrics.folders_created > 0 {
        println!(
            "  Person folders: {} ({} JSON files)",
            metrics.folders_created, metrics.json_files_written
        );
    }

    Ok(())
}
