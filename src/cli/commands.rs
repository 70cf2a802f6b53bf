//! Command implementations for the csvbind CLI
//!
//! This module contains the command execution logic, row formatting and the
//! logging setup for the CLI interface.

use crate::binder::Binder;
use crate::binder::stats::ReadStats;
use crate::cli::args::{Args, Commands, InspectArgs};
use crate::options::Metadata;
use crate::row::Row;
use anyhow::{Context, Result};
use colored::*;
use std::collections::HashSet;
use std::ops::ControlFlow;
use tracing::{debug, info};

/// Main command runner for csvbind
pub fn run(args: Args) -> Result<ReadStats> {
    match args.command {
        Commands::Inspect(inspect_args) => run_inspect(&inspect_args),
    }
}

/// Print the resolved header and the sparse rows of one file
pub fn run_inspect(args: &InspectArgs) -> Result<ReadStats> {
    setup_logging(args.get_log_level(), args.quiet)?;
    debug!("Command line arguments: {:?}", args);

    let options = args.load_options()?;
    let mut binder = Binder::from_path(&args.file, Some(options))
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    let metadata = binder.metadata().clone();
    println!("{}", "Columns".bold());
    for (index, name) in &metadata {
        println!("  {:>3}  {}", index, name.cyan());
    }
    println!();

    let limit = args.limit;
    let mut shown = 0usize;
    binder.for_each(|row| {
        shown += 1;
        println!("{:>5}  {}", shown.to_string().dimmed(), format_row(&row, &metadata));

        if limit.is_some_and(|limit| shown >= limit) {
            info!("Row limit of {} reached", shown);
            return Ok::<_, anyhow::Error>(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    })?;

    let stats = binder.stats().clone();
    print_summary(&stats);
    Ok(stats)
}

/// Render populated columns as `name=value` pairs in column order
pub fn format_row(row: &Row, metadata: &Metadata) -> String {
    let mut seen = HashSet::new();
    let mut parts = Vec::with_capacity(row.len());

    for name in metadata.values() {
        if !seen.insert(name.as_str()) {
            continue;
        }
        if let Some(value) = row.get(name) {
            parts.push(format!("{}={}", name, value));
        }
    }

    if parts.is_empty() {
        "(no values)".to_string()
    } else {
        parts.join("  ")
    }
}

fn print_summary(stats: &ReadStats) {
    println!();
    println!(
        "{} {} rows, {} cells populated, {} omitted ({:.1}% filled)",
        "Summary:".green().bold(),
        stats.rows_read,
        stats.cells_populated,
        stats.cells_omitted,
        stats.fill_rate()
    );
}

/// Set up structured logging on stderr
fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csvbind={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
