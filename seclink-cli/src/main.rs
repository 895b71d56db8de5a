use anyhow::Result;
use seclink_cli::commands;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "seclink")]
#[command(about = "Seclink - Encrypted link-layer framing codec", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fragment a payload file into encrypted frames
    Pack {
        /// Input payload file
        #[arg(short, long)]
        input: String,

        /// Output file for the frame stream
        #[arg(short, long)]
        output: String,

        /// Pre-shared key as 32 hex digits
        #[arg(short, long)]
        key: String,

        /// Application opcode stamped into every frame
        #[arg(long)]
        opcode: Option<u16>,

        /// Upper bound on the number of frames
        #[arg(long)]
        max_frames: Option<usize>,
    },

    /// Decrypt and reassemble a frame stream into the original payload
    Unpack {
        /// Input frame stream file
        #[arg(short, long)]
        input: String,

        /// Output payload file
        #[arg(short, long)]
        output: String,

        /// Pre-shared key as 32 hex digits
        #[arg(short, long)]
        key: String,
    },

    /// Parse a frame stream and print header fields without decrypting
    Inspect {
        /// Input frame stream file
        #[arg(short, long)]
        input: String,

        /// Emit frames as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Pack {
            input,
            output,
            key,
            opcode,
            max_frames,
        } => commands::pack::execute(&input, &output, &key, opcode, max_frames),

        Commands::Unpack { input, output, key } => {
            commands::unpack::execute(&input, &output, &key)
        }

        Commands::Inspect { input, json } => commands::inspect::execute(&input, json),
    }
}
