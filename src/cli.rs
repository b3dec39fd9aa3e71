//! Command-line argument definitions.

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use health_core::{Locale, CREATED_DATE_FORMAT};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "health-datagen")]
#[command(about = "Generate synthetic health records and analyze them")]
#[command(long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a batch of records and write them to disk
    Generate(GenerateArgs),

    /// Analyze a previously generated batch
    Analyze(AnalyzeArgs),

    /// Print one generated record as JSON
    Sample(SampleArgs),

    /// Write the default configuration file
    InitConfig(InitConfigArgs),
}

/// Arguments for `generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of people to generate
    #[arg(long = "number", short = 'n')]
    pub count: usize,

    /// Output directory (overrides `output_directory` from the config)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonGenerateArgs,
}

/// Arguments shared by every command that generates records.
#[derive(Args, Clone, Debug)]
pub struct CommonGenerateArgs {
    /// Path to a YAML or JSON config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Data locale (overrides `locale` from the config)
    #[arg(long, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Fixed creation timestamp, "YYYY-MM-DD HH:MM:SS" (default: now)
    #[arg(long, value_parser = parse_created_at)]
    pub created_at: Option<NaiveDateTime>,
}

/// Arguments for `analyze`.
#[derive(Args, Clone, Debug)]
pub struct AnalyzeArgs {
    /// Directory holding a generated batch
    #[arg(long = "directory", short = 'd')]
    pub data_dir: PathBuf,

    /// Report file (default: <directory>/analysis_report.txt)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Also print the report to stdout
    #[arg(long)]
    pub print: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "table")]
    pub format: ReportFormat,

    /// Most common history items listed per category (0 = all)
    #[arg(long, default_value = "5")]
    pub top_k: usize,
}

/// Arguments for `sample`.
#[derive(Args, Clone, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,
}

/// Arguments for `init-config`.
#[derive(Args, Clone, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config (`.yaml`/`.yml` for YAML, anything else for JSON)
    #[arg(long, default_value = "config.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Terminal tables
    Table,
    Markdown,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    /// Traditional Chinese (Taiwan)
    #[value(name = "zh-TW")]
    ZhTw,
    /// English (United States)
    #[value(name = "en-US")]
    EnUs,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::ZhTw => Locale::ZhTw,
            LocaleArg::EnUs => Locale::EnUs,
        }
    }
}

fn parse_created_at(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, CREATED_DATE_FORMAT)
        .map_err(|e| format!("expected \"YYYY-MM-DD HH:MM:SS\": {e}"))
}
