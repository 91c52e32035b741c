use clap::Parser;
use pagescore::types::report::{Impact, IssueKind};
use pagescore::{AnalysisRequest, ScoreError};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let content = read_input(&cmd.input)?;
            let config = match cmd.config {
                Some(path) => pagescore::config::load_config_file(&path)?,
                None => {
                    let loaded = pagescore::config::load_config(Path::new("."))?;
                    if loaded.is_none() {
                        tracing::info!("no pagescore.toml found, using default thresholds");
                    }
                    loaded.unwrap_or_default()
                }
            };

            let request = AnalysisRequest {
                title: cmd.title,
                content,
                meta_description: cmd.meta_description,
                focus_keyword: cmd.keyword,
                check_uniqueness: false,
                post_id: None,
            };
            let result = pagescore::analyze(&request, &config);

            let output_format = match cmd.format {
                cli::ReportFormat::Json => pagescore::report::OutputFormat::Json,
                cli::ReportFormat::Md => pagescore::report::OutputFormat::Md,
            };
            let rendered = pagescore::report::render(&result, output_format)?;
            println!("{rendered}");

            let mut has_blocking = result.overall_score < 40;
            let mut has_warnings = false;
            for category in result.category_results.values() {
                for issue in &category.issues {
                    has_warnings = true;
                    if issue.kind == IssueKind::Error && issue.impact == Impact::High {
                        has_blocking = true;
                    }
                }
            }

            if has_blocking {
                Ok(exit_code::BLOCKING)
            } else if has_warnings {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn read_input(input: &Path) -> Result<String, ScoreError> {
    if input == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    if !input.exists() {
        return Err(ScoreError::InputNotFound(input.display().to_string()));
    }
    Ok(std::fs::read_to_string(input)?)
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pagescore={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
