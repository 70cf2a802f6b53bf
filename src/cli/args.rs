//! Command-line argument definitions for csvbind
//!
//! This module defines the CLI interface using the clap derive API. Options
//! come from an optional TOML file first; flags given on the command line
//! override the file's values.

use crate::constants::{DEFAULT_LOG_LEVEL, HEADER_FLAG_SEPARATOR};
use crate::options::Options;
use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the csvbind tool
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csvbind",
    version,
    about = "Read CSV files as sparse, null-aware rows",
    long_about = "Reads delimited text with a header record or explicit column names, \
                  drops empty and null-marker values and shows the resulting rows. \
                  Useful for checking how a file will bind before wiring it into code."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the resolved header and the sparse rows of a CSV file
    Inspect(InspectArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// CSV file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// TOML file with separator, null_marker, timezone and header keys
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Field separator (single ASCII character)
    #[arg(short = 's', long = "separator", value_name = "CHAR")]
    pub separator: Option<char>,

    /// Value treated as null in addition to empty fields
    #[arg(short = 'n', long = "null-marker", value_name = "MARKER")]
    pub null_marker: Option<String>,

    /// IANA timezone name for date/time values (e.g. Europe/London)
    #[arg(short = 't', long = "timezone", value_name = "TZ")]
    pub timezone: Option<String>,

    /// Explicit comma-separated column names; the first record is then data
    #[arg(long = "header", value_name = "NAMES")]
    pub header: Option<HeaderList>,

    /// Stop after this many rows
    #[arg(short = 'l', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl InspectArgs {
    /// Get the log level implied by --verbose / --quiet
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build options from the config file (if any) and command-line flags
    pub fn load_options(&self) -> Result<Options> {
        let base = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => Options::new(),
        };

        self.apply_overrides(base)
    }

    /// Apply command-line flags on top of `options`
    pub fn apply_overrides(&self, mut options: Options) -> Result<Options> {
        if let Some(separator) = self.separator {
            options.separator = Some(separator);
        }

        if let Some(null_marker) = &self.null_marker {
            options.null_marker = null_marker.clone();
        }

        if let Some(timezone) = &self.timezone {
            let timezone = timezone
                .parse::<Tz>()
                .map_err(|e| anyhow!("Invalid timezone '{}': {}", timezone, e))?;
            options.timezone = Some(timezone);
        }

        if let Some(header) = &self.header {
            options = options.with_header(header.names.iter().cloned());
        }

        Ok(options)
    }
}

/// Wrapper for parsing the comma-separated --header list
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderList {
    pub names: Vec<String>,
}

impl FromStr for HeaderList {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let names = s
            .split(HEADER_FLAG_SEPARATOR)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        Ok(HeaderList { names })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> InspectArgs {
        let mut full = vec!["csvbind", "inspect"];
        full.extend_from_slice(args);
        match Args::parse_from(full).command {
            Commands::Inspect(inspect) => inspect,
        }
    }

    #[test]
    fn test_header_list_parsing() {
        let list = HeaderList::from_str("id, name ,joined").unwrap();
        assert_eq!(list.names, vec!["id", "name", "joined"]);

        // Nothing usable still yields an explicit (empty) header
        let list = HeaderList::from_str(" , ").unwrap();
        assert!(list.names.is_empty());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = parse(&[
            "data.csv",
            "--separator",
            ";",
            "--null-marker",
            "NA",
            "--timezone",
            "Europe/London",
            "--header",
            "a,b",
        ]);
        let options = args.load_options().unwrap();

        assert_eq!(options.separator, Some(';'));
        assert_eq!(options.null_marker, "NA");
        assert_eq!(options.timezone, Some(Tz::Europe__London));
        assert_eq!(options.header.unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_timezone_rejected() {
        let args = parse(&["data.csv", "--timezone", "Mars/Olympus"]);
        let error = args.load_options().unwrap_err();
        assert!(error.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn test_config_file_then_flags() {
        let mut config = NamedTempFile::new().unwrap();
        writeln!(
            config,
            "separator = \"|\"\nnull_marker = \"NULL\"\nheader = [\"x\", \"y\"]"
        )
        .unwrap();

        let path = config.path().to_str().unwrap().to_string();
        let args = parse(&["data.csv", "--config", &path, "--null-marker", "none"]);
        let options = args.load_options().unwrap();

        assert_eq!(options.separator, Some('|'));
        assert_eq!(options.null_marker, "none");
        assert_eq!(
            options.header.unwrap().get(&1).map(String::as_str),
            Some("y")
        );
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(parse(&["data.csv"]).get_log_level(), "info");
        assert_eq!(parse(&["data.csv", "-v"]).get_log_level(), "debug");
        assert_eq!(parse(&["data.csv", "-vv"]).get_log_level(), "trace");
        assert_eq!(parse(&["data.csv", "-q"]).get_log_level(), "error");
    }
}
