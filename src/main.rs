//! Command-line interface for shop-seed
//!
//! # Usage Examples
//!
//! ## Populate
//! ```bash
//! # 120 orders, 100 ms apart, to http://localhost:8000/api/orders/
//! shop-seed populate orders --access-token "$API_KEY"
//!
//! # Products against another host, reproducible with a seed
//! shop-seed populate products \
//!   --endpoint http://staging:9000/api/products/ \
//!   --count 25 --seed 7
//!
//! # See what would be sent without sending it
//! shop-seed populate all --dry-run
//! ```
//!
//! ## Generate
//! ```bash
//! shop-seed generate products --output products.jsonl --count 10
//! ```
//!
//! Set `RUST_LOG=debug` to log every generated payload.

use clap::{Parser, Subcommand};
use shop_seed::seed::generate::{run_generate, GenerateArgs};
use shop_seed::seed::populate::run_populate;
use shop_seed::PopulateTarget;

#[derive(Parser)]
#[command(name = "shop-seed")]
#[command(about = "Seed an e-commerce REST backend with synthetic orders, products and users")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records and POST them to the backend, one request per record
    Populate {
        #[command(subcommand)]
        target: PopulateTarget,
    },

    /// Generate records and write them to a JSONL file
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Populate { target } => run_populate(target).await?,
        Commands::Generate { args } => {
            run_generate(&args)?;
        }
    }

    Ok(())
}
