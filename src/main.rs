//! CLI entry point for the match-log statistics tool.
//!
//! Fetches (or reads) a squad's match-log page, runs the pipeline, and
//! reports, exports, or dumps plotting series.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use matchlog_stats::{
    extract::HeaderPolicy,
    fetch::{BasicClient, load_document},
    output::{export_csv, log_report, print_pretty, write_json, write_json_file},
    parser::DEFAULT_TABLE_ID,
    pipeline::{PipelineOptions, Season, run},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_URL: &str = "https://fbref.com/en/squads/206d90db/2022-2023/Barcelona-Stats";

#[derive(Parser)]
#[command(name = "matchlog_stats")]
#[command(about = "Season statistics from a football match-log table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Path to an HTML file or URL to fetch [default: $MATCHLOGS_URL or the built-in page]
    #[arg(value_name = "FILE_OR_URL")]
    source: Option<String>,

    /// id attribute of the match-log table
    #[arg(long, default_value = DEFAULT_TABLE_ID)]
    table_id: String,

    /// How a header row repeated in the table body is recognised
    #[arg(long, value_enum, default_value_t = HeaderPolicy::MatchLabels)]
    header_policy: HeaderPolicy,
}

impl SourceArgs {
    fn source(&self) -> String {
        self.source
            .clone()
            .or_else(|| std::env::var("MATCHLOGS_URL").ok())
            .unwrap_or_else(|| DEFAULT_URL.to_string())
    }

    fn options(&self) -> PipelineOptions {
        PipelineOptions {
            table_id: self.table_id.clone(),
            header_policy: self.header_policy,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline and log the season report
    Report {
        #[command(flatten)]
        input: SourceArgs,

        /// CSV file to export the match list to (date, opponent, venue, score)
        #[arg(short, long)]
        export: Option<String>,

        /// JSON file to write the full report to
        #[arg(long)]
        json: Option<String>,
    },
    /// Write the per-match numeric series used for plotting as JSON
    Series {
        #[command(flatten)]
        input: SourceArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/matchlog_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("matchlog_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            export,
            json,
        } => {
            let (source, season) = load_season(&input).await?;
            let report = season.report.clone().with_source(&source);

            print_pretty(&report);
            log_report(&report);

            if let Some(path) = export {
                export_csv(&path, &season.records)?;
                info!(path = %path, rows = season.records.len(), "CSV export written");
            }
            if let Some(path) = json {
                write_json_file(&path, &report)?;
                info!(path = %path, "JSON report written");
            }
        }
        Commands::Series { input, output } => {
            let (_, season) = load_season(&input).await?;
            let series = season.series();

            match output {
                Some(path) => {
                    write_json_file(&path, &series)?;
                    info!(path = %path, points = series.len(), "Series written");
                }
                None => write_json(std::io::stdout().lock(), &series)?,
            }
        }
    }

    Ok(())
}

/// Loads the document named by `input` and runs the pipeline over it.
async fn load_season(input: &SourceArgs) -> Result<(String, Season)> {
    let source = input.source();
    let client = BasicClient::new()?;
    let html = load_document(&client, &source).await?;
    let season = run(&html, &input.options())?;
    Ok((source, season))
}
