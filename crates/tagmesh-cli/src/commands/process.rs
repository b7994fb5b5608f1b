//! Stream posts through the engine and emit average-degree rows.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tagmesh_core::prelude::*;

use crate::config::Config;
use crate::tweet;

pub fn run(input: &str, output: Option<&str>, window: Option<i64>, verbose: bool) -> Result<()> {
    let input_path = Path::new(input);
    if !input_path.exists() {
        bail!("Input does not exist: {}", input_path.display());
    }

    let config = Config::load()?;
    let window_secs = config.window_secs(window);
    let mut engine = Engine::with_config(EngineConfig { window_secs })
        .context("Invalid engine configuration")?;

    let reader = BufReader::new(
        File::open(input_path)
            .with_context(|| format!("Failed to open input: {}", input_path.display()))?,
    );

    // Rows go to the file when one is given, otherwise to stdout. The
    // summary is only printed in the file case, so a piped stream stays
    // exactly one row per post.
    let mut sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output: {path}"))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    let spinner = if verbose {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Invalid progress template")?,
        );
        Some(pb)
    } else {
        None
    };

    let mut processed = 0usize;
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;

        let Some(post) = tweet::parse_line(&line) else {
            skipped += 1;
            continue;
        };

        let avg = engine.insert(post.timestamp, &post.tags)?;
        writeln!(sink, "{avg:.2}")?;
        processed += 1;

        if let Some(pb) = &spinner {
            pb.set_message(format!("{processed} posts"));
            pb.tick();
        }
    }
    sink.flush()?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if let Some(path) = output {
        let stats = engine.stats();
        println!(
            "{} Processed {} posts ({} skipped)",
            "✓".green().bold(),
            processed.to_string().cyan(),
            skipped
        );
        println!("  Output:   {}", path.cyan());
        println!("  Vertices: {}", stats.vertex_count.to_string().cyan());
        println!("  Edges:    {}", stats.edge_count.to_string().cyan());
        println!("  Average degree: {:.2}", stats.average_degree);
    }

    Ok(())
}
