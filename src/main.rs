//! Motion Entropy CLI
//!
//! Command-line driver for the entropy pool engine: reads bit-text
//! files produced by the tracking pipeline, ingests them, and
//! demonstrates the pool consumers.

use clap::Parser;
use motion_entropy::{BitBatch, EngineConfig, EntropyEngine};
use std::path::PathBuf;
use tracing::{info, warn};

/// Whiten tracked-motion bit files into a random pool and draw from it.
#[derive(Debug, Parser)]
#[command(name = "motion-entropy", version)]
struct Args {
    /// Bit-text files ('0'/'1' characters, whitespace ignored) to ingest.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Optional TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a snapshot of the final pool to this file.
    #[arg(long)]
    pool_out: Option<PathBuf>,

    /// Largest dice value for the demo roll.
    #[arg(long, default_value_t = 5)]
    dice_max: u64,

    /// Number of dice to roll.
    #[arg(long, default_value_t = 3)]
    dice_count: usize,

    /// Stir the pool once before drawing.
    #[arg(long)]
    stir: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!("Motion Entropy v{}", motion_entropy::VERSION);

    let config = match &args.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let mut engine = EntropyEngine::new(config);

    for path in &args.inputs {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let batch = match BitBatch::parse(&text) {
            Ok(batch) => batch,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        match engine.ingest(&batch) {
            Ok(report) => {
                info!(
                    "{}: {} bits, entropy {:.4}, chunk size {}, {} chunks whitened ({} dropped)",
                    path.display(),
                    batch.len(),
                    report.statistics.entropy_bits,
                    report.statistics.corrected_chunk_size,
                    report.chunks_whitened,
                    report.dropped_bits
                );
            }
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    info!("Pool holds {} whitened bits", engine.pool_size());

    if args.stir {
        match engine.stir() {
            Ok(()) => info!("Pool stirred down to {} bits", engine.pool_size()),
            Err(e) => warn!("Stir failed: {}", e),
        }
    }

    // Demo draws
    match engine.roll_dice(args.dice_max, args.dice_count) {
        Ok(rolls) => println!("Dice (0..={}): {:?}", args.dice_max, rolls),
        Err(e) => warn!("Dice roll failed: {}", e),
    }

    match engine.eight_ball() {
        Ok(answer) => println!("Eight-ball says: {}", answer),
        Err(e) => warn!("Eight-ball draw failed: {}", e),
    }

    match engine.coin_flip() {
        Ok(symbols) => println!("Coin-flip symbols: {}", symbols),
        Err(e) => warn!("Coin-flip draw failed: {}", e),
    }

    if let Some(path) = &args.pool_out {
        let snapshot: String = engine
            .export_pool()
            .iter()
            .map(|&b| if b == 1 { '1' } else { '0' })
            .collect();
        match std::fs::write(path, snapshot) {
            Ok(()) => info!("Wrote pool snapshot to {}", path.display()),
            Err(e) => {
                eprintln!("Failed to write pool snapshot: {}", e);
                std::process::exit(1);
            }
        }
    }

    info!("Done. Remaining pool size: {} bits", engine.pool_size());
}
