//! `analyze` command handler.

use crate::cli::{AnalyzeArgs, ReportFormat};
use anyhow::Context;
use health_analyzer::{analyze_with, format_json, format_markdown, format_table, AnalyzeOptions};
use health_populate::load_records_with_source;
use std::path::PathBuf;

/// Default report file name inside the data directory.
pub const DEFAULT_REPORT_FILE: &str = "analysis_report.txt";

/// Run the analyze command.
pub fn run_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let (records, source) = load_records_with_source(&args.data_dir)
        .with_context(|| format!("Failed to load records from {}", args.data_dir.display()))?;
    tracing::info!("Loaded {} records ({:?})", records.len(), source);

    let options = AnalyzeOptions {
        top_k: (args.top_k > 0).then_some(args.top_k),
        ..Default::default()
    };
    let report = analyze_with(&records, &options).context("Analysis failed")?;

    let rendered = match args.format {
        ReportFormat::Table => format_table(&report),
        ReportFormat::Markdown => format_markdown(&report),
        ReportFormat::Json => format_json(&report)?,
    };

    let output = report_path(&args);
    std::fs::write(&output, &rendered)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;
    tracing::info!("Report saved to {}", output.display());

    if args.print {
        println!("{rendered}");
    } else {
        println!("Report saved to {}", output.display());
    }

    Ok(())
}

fn report_path(args: &AnalyzeArgs) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| args.data_dir.join(DEFAULT_REPORT_FILE))
}
