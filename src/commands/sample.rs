//! `sample` command handler.

use super::{build_generator, load_config};
use crate::cli::SampleArgs;

/// Print one record as pretty JSON.
pub fn run_sample(args: SampleArgs) -> anyhow::Result<()> {
    let config = load_config(&args.common)?;
    let mut generator = build_generator(&config, &args.common)?;

    let record = generator.generate_one();
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
