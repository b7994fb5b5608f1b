//! Tagmesh CLI - windowed tag co-occurrence graphs from the command line.

mod commands;
mod config;
mod tweet;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tagmesh")]
#[command(author, version, about = "Tagmesh - windowed tag co-occurrence graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Stream posts through the engine, one average-degree row per post
    Process {
        /// JSON-lines input file
        input: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Window length in seconds (overrides tagmesh.toml)
        #[arg(short, long)]
        window: Option<i64>,
    },

    /// Summarise the graph a stream leaves behind
    Stats {
        /// JSON-lines input file
        input: String,

        /// Window length in seconds (overrides tagmesh.toml)
        #[arg(short, long)]
        window: Option<i64>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            window,
        } => commands::process::run(&input, output.as_deref(), window, cli.verbose),
        Commands::Stats {
            input,
            window,
            format,
        } => commands::stats::run(&input, window, &format),
    }
}
