//! Summarise the graph a stream leaves behind.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tagmesh_core::prelude::*;

use crate::config::Config;
use crate::tweet;

pub fn run(input: &str, window: Option<i64>, format: &str) -> Result<()> {
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

    let mut processed = 0usize;
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let Some(post) = tweet::parse_line(&line) else {
            skipped += 1;
            continue;
        };
        engine.insert(post.timestamp, &post.tags)?;
        processed += 1;
    }

    let stats = engine.stats();

    match format.to_lowercase().as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        "text" => print_report(&engine, &stats, processed, skipped),
        _ => {
            bail!("Unsupported format: {}. Use 'text' or 'json'.", format);
        }
    }

    Ok(())
}

fn print_report(engine: &Engine, stats: &EngineStats, processed: usize, skipped: usize) {
    println!("{}", "Tagmesh Graph Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Stream".blue().bold());
    println!("  Posts processed:   {}", processed.to_string().cyan());
    println!("  Lines skipped:     {}", skipped.to_string().cyan());
    println!();

    println!("{}", "Window".blue().bold());
    println!("  Length:            {}s", stats.window_secs);
    match (stats.latest_timestamp, stats.window_floor) {
        (Some(latest), Some(floor)) => {
            println!("  Latest timestamp:  {latest}");
            println!("  Floor:             {floor}");
        }
        _ => println!("  Latest timestamp:  {}", "none".dimmed()),
    }
    println!();

    println!("{}", "Graph Structure".blue().bold());
    println!("  Vertices:          {}", stats.vertex_count.to_string().cyan());
    println!("  Edges:             {}", stats.edge_count.to_string().cyan());
    println!("  Tracked pairs:     {}", stats.tracked_pairs.to_string().cyan());
    println!("  Live supports:     {}", stats.live_supports.to_string().cyan());
    println!("  Average degree:    {:.2}", stats.average_degree);
    println!();

    let top = engine.graph().top_degrees(5);
    if !top.is_empty() {
        println!("{}", "Densest Tags".blue().bold());
        for (tag, degree) in top {
            println!("  {:<18} {}", tag, degree.to_string().cyan());
        }
        println!();
    }

    println!("{}", "═".repeat(40).dimmed());
}
