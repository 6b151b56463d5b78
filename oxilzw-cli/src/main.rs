//! OxiLZW CLI
//!
//! Compress, decompress and inspect raw LZW streams (MSB-first, 9-12 bit
//! codewords, CLEAR_TABLE / END_OF_DATA).

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_compress, cmd_decompress, cmd_inspect};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utils::StreamOptions;

#[derive(Parser)]
#[command(name = "oxilzw")]
#[command(author, version, about = "Variable-width LZW compression utility")]
#[command(long_about = "
OxiLZW compresses files into raw LZW streams: MSB-first codewords growing
from 9 to 12 bits, with CLEAR_TABLE resets and an END_OF_DATA terminator.

Examples:
  oxilzw compress page.bin
  oxilzw compress a.bin b.bin c.bin
  oxilzw compress strip.raw -o strip.lzw --no-early-change
  oxilzw decompress page.bin.lzw
  oxilzw inspect page.bin.lzw --json
")]
struct Cli {
    /// Log codec activity (same as RUST_LOG=oxilzw=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress one or more files
    #[command(alias = "c")]
    Compress {
        /// Files to compress; several files are compressed in parallel
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (single input only; default: <input>.lzw)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Widen codewords one code later than the default
        #[arg(long)]
        no_early_change: bool,

        /// Compare stored sequences on every dictionary lookup
        #[arg(long)]
        verified: bool,
    },

    /// Decompress an LZW stream
    #[command(alias = "d")]
    Decompress {
        /// Stream to decompress
        input: PathBuf,

        /// Output file (default: input without .lzw, or <input>.out)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stream was written with late codeword widening
        #[arg(long)]
        no_early_change: bool,
    },

    /// Decode a stream and report its layout
    #[command(alias = "i")]
    Inspect {
        /// Stream to inspect
        input: PathBuf,

        /// Stream was written with late codeword widening
        #[arg(long)]
        no_early_change: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "oxilzw=debug" } else { "oxilzw=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            inputs,
            output,
            no_early_change,
            verified,
        } => cmd_compress(
            &inputs,
            output.as_deref(),
            StreamOptions {
                early_change: !no_early_change,
                verified,
            },
        ),
        Commands::Decompress {
            input,
            output,
            no_early_change,
        } => cmd_decompress(
            &input,
            output.as_deref(),
            StreamOptions {
                early_change: !no_early_change,
                verified: false,
            },
        ),
        Commands::Inspect {
            input,
            no_early_change,
            json,
        } => cmd_inspect(
            &input,
            StreamOptions {
                early_change: !no_early_change,
                verified: false,
            },
            json,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
