use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pagescore",
    version,
    about = "Deterministic content-quality scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Analyze(AnalyzeCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// File with the content markup to score, or `-` for stdin
    pub input: PathBuf,

    /// Focus keyword the content is optimized around
    #[arg(short, long, default_value = "")]
    pub keyword: String,

    /// Page title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Meta description
    #[arg(short, long, default_value = "")]
    pub meta_description: String,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Config file (defaults to pagescore.toml in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
