//! Generate command handler.
//!
//! Writes generated records to a JSON Lines file instead of uploading them,
//! one record per line, in the exact shape the populators would POST.

use anyhow::Context;
use clap::{Args, ValueEnum};
use seed_core::{RecordKind, MAX_RECORD_COUNT};
use seed_generator::RecordGenerator;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::populate::{check_record_count, load_vocabulary};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Record kind to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GenerateKind {
    Orders,
    Products,
    Users,
}

impl GenerateKind {
    fn default_count(&self) -> u64 {
        match self {
            Self::Orders => 120,
            Self::Products => 100,
            Self::Users => 10,
        }
    }
}

/// Arguments for the generate command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Kind of record to generate
    #[arg(value_enum)]
    pub kind: GenerateKind,

    /// Output JSONL file
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Number of records (orders: 120, products: 100; users are a fixed list)
    #[arg(long, value_parser = clap::value_parser!(u64).range(..=MAX_RECORD_COUNT))]
    pub count: Option<u64>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// YAML file overriding the built-in word lists and id pools
    #[arg(long, value_name = "PATH")]
    pub vocabulary: Option<PathBuf>,
}

/// Metrics from a generate operation.
#[derive(Debug, Clone, Default)]
pub struct GenerateMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

/// Run the generate command.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<GenerateMetrics> {
    let start_time = Instant::now();
    let count = args.count.unwrap_or_else(|| args.kind.default_count());
    match args.kind {
        GenerateKind::Orders => check_record_count(RecordKind::Order, count)?,
        GenerateKind::Products => check_record_count(RecordKind::Product, count)?,
        GenerateKind::Users => {}
    }
    let vocabulary = load_vocabulary(args.vocabulary.as_deref())?;
    let mut generator = RecordGenerator::new(vocabulary, args.seed).context("Invalid vocabulary")?;

    let records: Vec<Value> = match args.kind {
        GenerateKind::Orders => generator
            .orders(count)
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()?,
        GenerateKind::Products => generator
            .products(count)
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()?,
        GenerateKind::Users => {
            if args.count.is_some() {
                tracing::warn!("--count is ignored for users; the fixed user list is written");
            }
            generator
                .users()
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<_, _>>()?
        }
    };

    tracing::info!(
        "Generating JSONL file '{}' with {} {:?} record(s) (seed={})",
        args.output.display(),
        records.len(),
        args.kind,
        args.seed
    );

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create output file {:?}", args.output))?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

    let mut metrics = GenerateMetrics::default();
    for record in &records {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
        metrics.records_written += 1;
    }

    writer.flush()?;
    drop(writer);

    metrics.file_size_bytes = std::fs::metadata(&args.output)?.len();
    metrics.total_duration = start_time.elapsed();

    tracing::info!(
        "JSONL generation complete: {} records, {} bytes in {:?}",
        metrics.records_written,
        metrics.file_size_bytes,
        metrics.total_duration
    );

    Ok(metrics)
}
