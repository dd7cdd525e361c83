//! Populate command runner.

use anyhow::Context;
use seed_core::{RecordKind, Vocabulary, MAX_RECORD_COUNT};
use seed_generator::RecordGenerator;
use seed_populate_http::{
    AllPopulateArgs, Delay, HttpClient, HttpPopulator, OrdersPopulateArgs, PopulateMetrics,
    ProductsPopulateArgs, ReqwestClient, TokioDelay, UploadTarget, UsersPopulateArgs,
};
use std::path::Path;
use std::time::Duration;

use super::{mask_access_token, mask_endpoint_credentials};
use crate::PopulateTarget;

/// Metrics of a `populate all` run, one entry per record kind.
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    pub users: PopulateMetrics,
    pub products: PopulateMetrics,
    pub orders: PopulateMetrics,
}

/// Load the vocabulary file if one was given, or the built-in defaults.
pub fn load_vocabulary(path: Option<&Path>) -> anyhow::Result<Vocabulary> {
    match path {
        Some(path) => Vocabulary::from_file(path)
            .with_context(|| format!("Failed to load vocabulary from {path:?}")),
        None => Ok(Vocabulary::default()),
    }
}

/// Reject counts the generator cannot materialize in one run.
pub fn check_record_count(kind: RecordKind, count: u64) -> anyhow::Result<()> {
    anyhow::ensure!(
        count <= MAX_RECORD_COUNT,
        "Cannot generate {count} {kind} records; at most {MAX_RECORD_COUNT} are allowed"
    );
    Ok(())
}

/// Run populate command to seed the backend with synthetic records
pub async fn run_populate(target: PopulateTarget) -> anyhow::Result<()> {
    match target {
        PopulateTarget::Orders { args } => {
            let client = build_client(args.common.timeout())?;
            populate_orders(&args, client, TokioDelay).await?;
        }
        PopulateTarget::Products { args } => {
            let client = build_client(args.common.timeout())?;
            populate_products(&args, client, TokioDelay).await?;
        }
        PopulateTarget::Users { args } => {
            let client = build_client(args.common.timeout())?;
            populate_users(&args, client, TokioDelay).await?;
        }
        PopulateTarget::All { args } => {
            let client = build_client(args.common.timeout())?;
            let summary = populate_all(&args, client, TokioDelay).await?;
            tracing::info!(
                "Seeding complete: {} user(s), {} product(s), {} order(s) added",
                summary.users.records_added,
                summary.products.records_added,
                summary.orders.records_added
            );
        }
    }

    Ok(())
}

fn build_client(timeout: Option<Duration>) -> anyhow::Result<ReqwestClient> {
    ReqwestClient::new(timeout).context("Failed to build HTTP client")
}

/// Generate orders and upload them one by one.
pub async fn populate_orders<C: HttpClient, D: Delay>(
    args: &OrdersPopulateArgs,
    client: C,
    delay: D,
) -> anyhow::Result<PopulateMetrics> {
    check_record_count(RecordKind::Order, args.count)?;
    let vocabulary = load_vocabulary(args.common.vocabulary.as_deref())?;
    let mut generator =
        RecordGenerator::new(vocabulary, args.common.seed).context("Invalid vocabulary")?;
    let orders: Vec<_> = generator.orders(args.count).collect();

    tracing::info!(
        "Populating {} orders (seed={})",
        args.count,
        args.common.seed
    );
    let target = args.target();
    log_target(&target);

    let populator = HttpPopulator::new(client, delay, target).with_dry_run(args.common.dry_run);
    let metrics = populator.populate(&orders).await;
    report(RecordKind::Order, &metrics);

    Ok(metrics)
}

/// Generate products and upload them one by one.
pub async fn populate_products<C: HttpClient, D: Delay>(
    args: &ProductsPopulateArgs,
    client: C,
    delay: D,
) -> anyhow::Result<PopulateMetrics> {
    check_record_count(RecordKind::Product, args.count)?;
    let vocabulary = load_vocabulary(args.common.vocabulary.as_deref())?;
    let mut generator =
        RecordGenerator::new(vocabulary, args.common.seed).context("Invalid vocabulary")?;
    let products: Vec<_> = generator.products(args.count).collect();

    tracing::info!(
        "Populating {} products (seed={})",
        args.count,
        args.common.seed
    );
    let target = args.target();
    log_target(&target);

    let populator = HttpPopulator::new(client, delay, target).with_dry_run(args.common.dry_run);
    let metrics = populator.populate(&products).await;
    report(RecordKind::Product, &metrics);

    Ok(metrics)
}

/// Register the fixed user accounts one by one.
pub async fn populate_users<C: HttpClient, D: Delay>(
    args: &UsersPopulateArgs,
    client: C,
    delay: D,
) -> anyhow::Result<PopulateMetrics> {
    let vocabulary = load_vocabulary(args.common.vocabulary.as_deref())?;
    let generator =
        RecordGenerator::new(vocabulary, args.common.seed).context("Invalid vocabulary")?;
    let users = generator.users();

    tracing::info!("Registering {} users", users.len());
    let target = args.target();
    log_target(&target);

    let populator = HttpPopulator::new(client, delay, target).with_dry_run(args.common.dry_run);
    let metrics = populator.populate(&users).await;
    report(RecordKind::User, &metrics);

    Ok(metrics)
}

/// Seed users, then products, then orders.
///
/// Orders reference the users and products the backend accepted earlier in
/// the same run. When none of a kind were accepted (or in dry-run mode) the
/// vocabulary's own id pool is used instead.
pub async fn populate_all<C, D>(
    args: &AllPopulateArgs,
    client: C,
    delay: D,
) -> anyhow::Result<SeedSummary>
where
    C: HttpClient + Clone,
    D: Delay + Clone,
{
    check_record_count(RecordKind::Product, args.product_count)?;
    check_record_count(RecordKind::Order, args.order_count)?;
    let vocabulary = load_vocabulary(args.common.vocabulary.as_deref())?;
    let dry_run = args.common.dry_run;

    // Users
    let generator =
        RecordGenerator::new(vocabulary.clone(), args.common.seed).context("Invalid vocabulary")?;
    let users = generator.users();
    let target = args.users_target();
    log_target(&target);
    let users_metrics = HttpPopulator::new(client.clone(), delay.clone(), target)
        .with_dry_run(dry_run)
        .populate(&users)
        .await;
    report(RecordKind::User, &users_metrics);

    // Products
    let mut generator =
        RecordGenerator::new(vocabulary.clone(), args.common.seed).context("Invalid vocabulary")?;
    let products: Vec<_> = generator.products(args.product_count).collect();
    let target = args.products_target();
    log_target(&target);
    let products_metrics = HttpPopulator::new(client.clone(), delay.clone(), target)
        .with_dry_run(dry_run)
        .populate(&products)
        .await;
    report(RecordKind::Product, &products_metrics);

    // Orders draw from what the backend now holds
    let mut order_vocabulary = vocabulary;
    if users_metrics.added_ids.is_empty() {
        tracing::warn!("No users were added; orders reference the vocabulary's user ids");
    } else {
        order_vocabulary = order_vocabulary.with_user_ids(users_metrics.added_ids.clone());
    }
    if products_metrics.added_ids.is_empty() {
        tracing::warn!("No products were added; orders reference the vocabulary's product ids");
    } else {
        order_vocabulary = order_vocabulary.with_product_ids(products_metrics.added_ids.clone());
    }

    let mut generator =
        RecordGenerator::new(order_vocabulary, args.common.seed).context("Invalid vocabulary")?;
    let orders: Vec<_> = generator.orders(args.order_count).collect();
    let target = args.orders_target();
    log_target(&target);
    let orders_metrics = HttpPopulator::new(client, delay, target)
        .with_dry_run(dry_run)
        .populate(&orders)
        .await;
    report(RecordKind::Order, &orders_metrics);

    Ok(SeedSummary {
        users: users_metrics,
        products: products_metrics,
        orders: orders_metrics,
    })
}

fn log_target(target: &UploadTarget) {
    tracing::info!(
        "Endpoint: {} (access_token: {}, delay: {:?})",
        mask_endpoint_credentials(&target.endpoint),
        target
            .access_token
            .as_deref()
            .map(mask_access_token)
            .unwrap_or_else(|| "none".to_string()),
        target.delay
    );
}

fn report(kind: RecordKind, metrics: &PopulateMetrics) {
    if metrics.error_count() > 0 {
        tracing::warn!(
            "{} of {} {} record(s) could not be added",
            metrics.error_count(),
            metrics.records_attempted,
            kind
        );
    }
}
