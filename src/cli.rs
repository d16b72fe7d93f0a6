//! CLI argument parsing for glnorm

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for resolved symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "glnorm")]
#[command(version)]
#[command(about = "Normalize GL registry symbols into canonical binding names", long_about = None)]
pub struct Cli {
    /// Registry dump (JSON) to resolve
    #[arg(value_name = "REGISTRY", required_unless_present = "check_config")]
    pub registry: Option<PathBuf>,

    /// Configuration tables (TOML); the built-in desktop GL tables are used if omitted
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Number of worker threads for the resolution pass
    #[arg(short = 'j', long = "jobs", value_name = "N", default_value = "1")]
    pub jobs: usize,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the SHA-256 fingerprint of the JSON rendering to stderr
    #[arg(long = "fingerprint")]
    pub fingerprint: bool,

    /// Validate the configuration tables and exit
    #[arg(long = "check-config")]
    pub check_config: bool,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
