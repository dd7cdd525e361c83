//! Common CLI argument definitions shared by all populators.

use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

/// Common arguments shared by all populators.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// YAML file overriding the built-in word lists and id pools
    #[arg(long, value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,

    /// Dry-run mode: generate and log payloads without sending any request
    #[arg(long)]
    pub dry_run: bool,

    /// Per-request timeout in seconds (client default when unset)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl CommonPopulateArgs {
    /// Request timeout, if one was given.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
