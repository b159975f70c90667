use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use colloquy::{
    read_transcript, write_transcript, ChunkConfig, CleanerConfig, LlmClient, LlmConfig,
    RunReport, TranscriptCleaner, DEFAULT_MODEL,
};

#[derive(Parser)]
#[command(name = "colloquy")]
#[command(author, version, about = "Meeting transcript cleaning pipeline", long_about = None)]
struct Cli {
    /// Input transcript file (plain text)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the cleaned transcript
    #[arg(short, long)]
    output: PathBuf,

    /// Optional JSON run report file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Model to use
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature (0-1, lower = more deterministic)
    #[arg(long, default_value = "0.1")]
    temperature: f64,

    /// API key (falls back to the ANTHROPIC_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    /// Maximum chunk size in characters
    #[arg(long, default_value = "3000")]
    chunk_size: usize,

    /// Overlap between adjacent chunks in characters
    #[arg(long, default_value = "500")]
    chunk_overlap: usize,

    /// Number of chunks processed concurrently
    #[arg(long, default_value = "4")]
    workers: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    clean_transcript(cli).await
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn clean_transcript(cli: Cli) -> Result<()> {
    info!("Reading transcript from {:?}", cli.input);
    let transcript_text = read_transcript(&cli.input)?;
    info!(
        "Loaded {} characters, {} lines",
        transcript_text.len(),
        transcript_text.lines().count()
    );

    let mut llm_config = match cli.api_key {
        Some(key) => LlmConfig::new(key, cli.model.clone()),
        None => LlmConfig::from_env()?,
    };
    llm_config.model = cli.model;
    llm_config.temperature = cli.temperature;

    let cleaner_config = CleanerConfig {
        chunking: ChunkConfig {
            max_chunk_chars: cli.chunk_size,
            overlap_chars: cli.chunk_overlap,
        },
        workers: cli.workers,
        ..CleanerConfig::default()
    };

    let client = Arc::new(LlmClient::new(llm_config));
    let cleaner = TranscriptCleaner::new(client, cleaner_config);

    let outcome = cleaner.clean(&transcript_text).await;

    info!("Writing cleaned transcript to {:?}", cli.output);
    write_transcript(&cli.output, &outcome.cleaned_text)?;

    match &outcome.quality {
        Some(report) => {
            if report.content_loss_detected {
                warn!("Quality check flagged possible content loss");
            }
            info!(
                "Quality score {} with {} issues",
                report.quality_score,
                report.issues.len()
            );
        }
        None => warn!("No quality report available for this run"),
    }

    if let Some(report_path) = &cli.report {
        info!("Writing run report to {:?}", report_path);
        RunReport::from_outcome(&outcome).write_json(report_path)?;
    }

    info!(
        "Complete: {} chunks processed, {} passed through unmodified",
        outcome.chunk_count, outcome.fallback_count
    );

    Ok(())
}
