//! Command-line configuration

use crate::sift::constants::{DEFAULT_INTERVAL_MS, DEFAULT_VALUES, MIN_INTERVAL_MS};
use crate::sift::types::HeapOrder;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Step through heap sort one comparison at a time
#[derive(Parser, Debug)]
#[command(name = "heapstep")]
#[command(about = "Interactive step-by-step heap-sort visualizer")]
#[command(version)]
pub struct Cli {
    /// Comma-separated sequence to sort
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Start a run immediately with this heap order (max = ascending, min = descending)
    #[arg(long)]
    pub order: Option<HeapOrder>,

    /// Autoplay cadence in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Print the full trace to stdout instead of opening the TUI
    #[arg(long)]
    pub headless: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Sequence to sort, falling back to the canonical one
    pub fn initial_values(&self) -> Vec<i64> {
        if self.values.is_empty() {
            DEFAULT_VALUES.to_vec()
        } else {
            self.values.clone()
        }
    }

    /// Autoplay cadence, never faster than the driver can redraw
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }
}
