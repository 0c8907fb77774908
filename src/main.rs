mod client;
mod keywords;
mod parser;
mod render;
mod view;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::error;

use client::{BackendClient, ProcessRequest};
use keywords::Selection;
use view::ReportView;

#[derive(Parser)]
#[command(name = "fedscope", about = "Fed Landscape intelligence report client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a keyword/date selection and render the generated report
    Generate {
        /// Keyword to include (repeatable; see `fedscope keywords`)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,
        /// Select the entire keyword catalog
        #[arg(long, conflicts_with = "keywords")]
        all: bool,
        /// Search date range
        #[arg(long, value_enum, default_value = "w")]
        since: DateRange,
        /// Recipient for the emailed copy of the report
        #[arg(long, default_value = "tuff2603@gmail.com")]
        email: String,
        /// Backend base URL (otherwise FEDSCOPE_BACKEND, then localhost)
        #[arg(long)]
        backend: Option<String>,
        /// Emit the parsed report and articles as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Parse a saved report blob and render it offline
    Parse {
        /// Path to a file containing report text
        file: PathBuf,
        /// Emit parsed entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the keyword catalog
    Keywords,
}

#[derive(Clone, Copy, ValueEnum)]
enum DateRange {
    /// Past week
    #[value(name = "w")]
    Week,
    /// Past month
    #[value(name = "m")]
    Month,
    /// Past year
    #[value(name = "y")]
    Year,
}

impl DateRange {
    fn as_filter(self) -> &'static str {
        match self {
            DateRange::Week => "w",
            DateRange::Month => "m",
            DateRange::Year => "y",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            keywords,
            all,
            since,
            email,
            backend,
            json,
        } => generate(keywords, all, since, email, backend, json).await,
        Commands::Parse { file, json } => parse_file(&file, json),
        Commands::Keywords => {
            for (i, keyword) in keywords::CATALOG.iter().enumerate() {
                println!("{:>2}. {}", i + 1, keyword);
            }
            println!("\nPass --all to select the whole catalog at once.");
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

async fn generate(
    keywords: Vec<String>,
    all: bool,
    since: DateRange,
    email: String,
    backend: Option<String>,
    json: bool,
) -> Result<()> {
    let mut selection = Selection::new();
    if all {
        selection = selection.select_all();
    } else {
        for keyword in &keywords {
            selection = selection.toggle(keyword)?;
        }
    }

    if selection.is_empty() {
        println!("{}", view::EMPTY_SELECTION_STATUS);
        return Ok(());
    }

    let current = ReportView::idle().submit();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(current.status.clone());
    spinner.enable_steady_tick(Duration::from_millis(120));

    let request = ProcessRequest {
        recipient_email: email,
        selected_keywords: selection.request_keywords(),
        date_filter: since.as_filter().to_string(),
    };

    let backend_client = BackendClient::new(backend);
    let current = match backend_client.process(&request).await {
        Ok(response) if response.is_success() => current.receive_success(response),
        Ok(response) => {
            let status = if response.message.is_empty() {
                view::UNKNOWN_ERROR_STATUS.to_string()
            } else {
                response.message
            };
            current.receive_failure(status)
        }
        Err(e) => {
            error!("{:#}", e);
            current.receive_failure(view::REQUEST_FAILED_STATUS.to_string())
        }
    };

    spinner.finish_and_clear();

    if json {
        let payload = serde_json::json!({
            "status": current.status,
            "report": current.items,
            "articles": current.articles,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", current.status);
    if current.has_report() {
        println!();
        render::print_report(&current.items);
    }
    render::print_articles(&current.articles);

    Ok(())
}

fn parse_file(file: &PathBuf, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let items = parser::parse_report(&content);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No report entries found in {}", file.display());
        return Ok(());
    }

    render::print_report(&items);
    println!("\n{} entries", items.len());
    Ok(())
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
