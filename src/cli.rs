//! Command line interface.

use clap::Parser;
use std::path::PathBuf;

/// A three-screen navigation-stack demo with analytics event logging.
#[derive(Parser, Debug)]
#[command(name = "screenflow", version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append navigation events to this JSONL file instead of the
    /// tracing log
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// UI theme: dark, light, or nocolor
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Log filter (overridden by RUST_LOG when set)
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}
