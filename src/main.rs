//! rusty-scan: command-line front end for the SecureNexus analysis service.
//! Plays the part of the web page: fills one input field, runs the analysis
//! and prints the result container.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing::info;

use rusty_scan_runner::{
    AnalysisClient, Credentials, DEFAULT_BASE_URL, InvalidMode, Mode, ResultState, ViewModel,
};

// Read from the environment only, never from a flag, to keep it out of shell history.
const API_KEY_ENV: &str = "RUSTY_SCAN_API_KEY";

#[derive(Parser, Debug)]
#[command(
    name = "rusty-scan",
    version,
    about = "Submit code, a message or a URL to SecureNexus and print the rendered result"
)]
struct Cli {
    /// Analysis to run: code, phishing or web
    #[arg(value_parser = parse_mode)]
    mode: Mode,

    /// Input text; read from --file or stdin when omitted
    input: Option<String>,

    /// Read the input from a file
    #[arg(long, conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Service base URL, e.g. <http://127.0.0.1:8080/>
    #[arg(long, env = "RUSTY_SCAN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Where to save a scan report; defaults to the name the service suggests
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the result container as JSON instead of raw markup
    #[arg(long)]
    json: bool,

    /// Log requests to stderr (filter with RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn parse_mode(name: &str) -> Result<Mode, InvalidMode> {
    name.parse()
}

async fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if let Some(input) = &cli.input {
        return Ok(input.clone());
    }
    if let Some(path) = &cli.file {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }
    if std::io::stdin().is_terminal() {
        return Ok(String::new());
    }
    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read input from stdin")?;
    Ok(input)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let credentials = std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .map(Credentials::new);
    let client = AnalysisClient::new(&cli.base_url, credentials, cli.verbose)?;

    let input = read_input(&cli).await?;
    let mut view = ViewModel::new().with_input(cli.mode, input);
    client.run_analysis(cli.mode, &mut view).await;

    if let Some(report) = view.report() {
        let path = cli
            .report
            .clone()
            .unwrap_or_else(|| PathBuf::from(&report.filename));
        tokio::fs::write(&path, &report.bytes)
            .await
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        info!(path = %path.display(), "Scan report saved");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view.snapshot())?);
    } else {
        println!("{}", view.result_html());
    }

    if !matches!(view.result(), ResultState::Rendered(_)) {
        std::process::exit(1);
    }
    Ok(())
}
