//! `lz77` command-line tool.
//!
//! ```text
//! lz77 compress <input> <output>
//! lz77 decompress <input> <output>
//! lz77                      # interactive menu
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lz77rs::app::{compress_file, decompress_file, run_interactive};
use lz77rs::config::{CodecConfig, MatchStrategy, DEFAULT_LOOKAHEAD_SIZE, DEFAULT_WINDOW_SIZE};

/// LZ77 sliding-window compressor.
#[derive(Parser, Debug)]
#[command(author, version, about = "LZ77 sliding-window compressor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Maximum back-reference distance.
    #[arg(long, global = true, default_value_t = DEFAULT_WINDOW_SIZE)]
    window_size: usize,

    /// Maximum match length.
    #[arg(long, global = true, default_value_t = DEFAULT_LOOKAHEAD_SIZE)]
    lookahead_size: usize,

    /// Search matches through hash chains instead of a full window scan.
    #[arg(long, global = true)]
    hash_chain: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file into a token stream.
    Compress { input: PathBuf, output: PathBuf },
    /// Restore a file from a token stream.
    Decompress { input: PathBuf, output: PathBuf },
}

impl Cli {
    fn config(&self) -> CodecConfig {
        let strategy = if self.hash_chain {
            MatchStrategy::HashChain
        } else {
            MatchStrategy::Linear
        };
        CodecConfig::default()
            .with_window_size(self.window_size)
            .with_lookahead_size(self.lookahead_size)
            .with_strategy(strategy)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LZ77_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.config();
    config.validate()?;

    match cli.command {
        Some(Command::Compress { input, output }) => {
            let summary = compress_file(&input, &output, &config)
                .with_context(|| format!("compression of {} failed", input.display()))?;
            println!("Compression completed successfully!");
            println!("{summary}");
        }
        Some(Command::Decompress { input, output }) => {
            let bytes = decompress_file(&input, &output, &config)
                .with_context(|| format!("decompression of {} failed", input.display()))?;
            println!("Decompression completed successfully!");
            println!("Decompressed size: {bytes} bytes");
            println!("Saved to: {}", output.display());
        }
        None => {
            let stdin = io::stdin();
            run_interactive(stdin.lock(), io::stdout(), io::stderr(), config)?;
        }
    }

    Ok(())
}
