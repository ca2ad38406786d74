//! CLI command definitions for prompt-forge.
//!
//! One command, one shot: `prompt-forge convert` reads the CSV, runs a small
//! preview batch, asks the operator to confirm, then converts the full input
//! and writes the catalog. Paths, model, pacing and the preview/confirm gate
//! are all flags rather than constants.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::catalog::{to_catalog_json, write_catalog};
use crate::config::{load_api_key, Settings};
use crate::convert::Converter;
use crate::llm::AnthropicClient;

/// Default model to use for metadata synthesis.
const DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";

/// Affirmative answers accepted by the confirmation gate.
const AFFIRMATIVE: &[&str] = &["yes", "y", "evet", "e"];

/// CSV prompt-template catalog converter.
#[derive(Parser)]
#[command(name = "prompt-forge")]
#[command(about = "Convert a CSV of prompt templates into an enriched JSON catalog")]
#[command(version)]
#[command(
    long_about = "prompt-forge reads a CSV of prompt templates (act/prompt columns), asks an LLM\nfor per-prompt metadata (category, description, tags, form fields), and writes\nthe result as a single JSON catalog.\n\nExample usage:\n  prompt-forge convert --input prompts.csv --output prompts-new.json --env-file .env.local"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Convert a prompts CSV into the enriched JSON catalog.
    #[command(alias = "conv")]
    Convert(ConvertArgs),
}

/// Arguments for `prompt-forge convert`.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input CSV file with `act` and `prompt` columns.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output path for the JSON catalog.
    #[arg(short, long, default_value = "prompts-new.json")]
    pub output: PathBuf,

    /// Dotenv-style file holding ANTHROPIC_API_KEY.
    #[arg(long, default_value = ".env.local")]
    pub env_file: PathBuf,

    /// Anthropic API key (overrides --env-file when set).
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model to use for metadata synthesis.
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// First catalog id; entries are numbered contiguously from here.
    #[arg(long, default_value = "1000")]
    pub start_id: u64,

    /// Only convert the first N rows.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Number of rows in the preview batch shown before the full run.
    #[arg(long, default_value = "3")]
    pub preview_count: usize,

    /// Pause between records in milliseconds.
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,

    /// HTTP request timeout in seconds.
    #[arg(long, default_value = "60")]
    pub timeout_secs: u64,

    /// Maximum output tokens per metadata request.
    #[arg(long, default_value = "500")]
    pub max_tokens: u32,

    /// Skip the preview confirmation gate and convert everything.
    #[arg(short, long)]
    pub yes: bool,
}

/// Parse CLI arguments without running a command.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run a command with pre-parsed CLI arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Convert(args) => run_convert(args).await,
    }
}

/// Orchestrates the preview-then-confirm conversion flow.
async fn run_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let api_key = match args.api_key {
        Some(key) => key,
        None => load_api_key(&args.env_file)?,
    };

    let settings = Settings {
        input: args.input,
        output: args.output,
        model: args.model,
        start_id: args.start_id,
        max_tokens: args.max_tokens,
        delay: Duration::from_millis(args.delay_ms),
        timeout: Duration::from_secs(args.timeout_secs),
    };

    let client = AnthropicClient::with_config(
        api_key,
        "https://api.anthropic.com".to_string(),
        settings.timeout,
    );
    let converter = Converter::new(&settings, &client);

    println!("{}", "=".repeat(50));
    println!("CSV to Prompts JSON Converter");
    println!("{}", "=".repeat(50));

    if !args.yes && args.preview_count > 0 {
        println!("\nTest mode: Processing first {} prompts...", args.preview_count);
        let preview = converter.run(Some(args.preview_count)).await?;

        println!("\n{}", "=".repeat(50));
        println!("TEST RESULTS:");
        println!("{}", "=".repeat(50));
        println!("{}", to_catalog_json(&preview)?);

        let row_count = crate::catalog::read_rows(&settings.input)?.len();
        let total = args.limit.map_or(row_count, |limit| limit.min(row_count));
        println!("\n{}", "=".repeat(50));
        if !confirm(&format!("Continue with all {total} prompts? (yes/no): "))? {
            println!("Cancelled.");
            return Ok(());
        }
        println!("\nProcessing all prompts...");
    }

    // The preview rows are intentionally re-processed here; re-running a
    // handful of records is cheaper than carrying resume state.
    let entries = converter.run(args.limit).await?;
    write_catalog(&settings.output, &entries)?;

    info!(count = entries.len(), output = %settings.output.display(), "Catalog written");
    println!(
        "\nDone! Saved {} prompts to {}",
        entries.len(),
        settings.output.display()
    );
    Ok(())
}

/// Prompts the operator and reads one line from stdin.
fn confirm(question: &str) -> io::Result<bool> {
    print!("{question}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(AFFIRMATIVE.contains(&answer.trim().to_lowercase().as_str()))
}
