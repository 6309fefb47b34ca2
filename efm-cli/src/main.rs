mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "efm")]
#[command(about = "EFM - Decode optical disc channel T-values into F3 frames", long_about = None)]
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
    /// Decode T-values into F3 frames
    Decode {
        /// Input JSON file (array of frames, each an array of T-values), or - for stdin
        #[arg(short, long)]
        input: String,

        /// Output JSON file for decoded frames
        #[arg(short, long)]
        output: Option<String>,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,
    },

    /// Dump the EFM translation table
    Table {
        /// Output JSON file for the table
        #[arg(short, long)]
        output: Option<String>,
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
        Commands::Decode {
            input,
            output,
            stats_only,
        } => commands::decode::execute(&input, output.as_deref(), stats_only).map(|_| ()),

        Commands::Table { output } => commands::table::execute(output.as_deref()),
    }
}
