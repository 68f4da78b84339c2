use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use wikimedia_rest::{ClientConfig, EventType, WikimediaClient};

#[derive(Parser)]
#[command(name = "wikimedia")]
#[command(about = "Query the Wikimedia REST v1 API and print the result as JSON")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Scheme and host of the target project
    #[arg(long, default_value = "https://en.wikipedia.org", global = true)]
    host: String,

    /// Request timeout in seconds, at least 1 (none by default)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// User-Agent sent with every request
    #[arg(long, global = true)]
    user_agent: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summary of a page
    Summary { title: String },
    /// Revision info for a page
    Title { title: String },
    /// Summary of a random page
    RandomSummary,
    /// Revision info for a random page
    RandomTitle,
    /// Events, births, deaths and holidays for a calendar day
    OnThisDay {
        month: u32,
        day: u32,
        /// all, selected, births, deaths, holidays or events
        #[arg(long, default_value_t = EventType::All)]
        kind: EventType,
    },
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to encode result")?;
    println!("{out}");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let client = WikimediaClient::with_config(&cli.host, &cli.client_config())
        .with_context(|| format!("Failed to create client for {}", cli.host))?;

    match cli.command {
        Commands::Summary { title } => {
            let summary = client
                .get_page_summary(&title)
                .with_context(|| format!("Failed to fetch summary for {title:?}"))?;
            print_json(&summary)
        }
        Commands::Title { title } => {
            let revisions = client
                .get_page_title(&title)
                .with_context(|| format!("Failed to fetch title info for {title:?}"))?;
            print_json(&revisions)
        }
        Commands::RandomSummary => {
            print_json(&client.get_page_summary_random().context("Failed to fetch random summary")?)
        }
        Commands::RandomTitle => {
            print_json(&client.get_page_title_random().context("Failed to fetch random title")?)
        }
        Commands::OnThisDay { month, day, kind } => {
            info!(month, day, %kind, "Fetching on-this-day feed");
            let feed = client
                .get_feed_on_this_day(month, day, kind)
                .with_context(|| format!("Failed to fetch {kind} for {month:02}/{day:02}"))?;
            print_json(&feed)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
