//! CLI argument definitions for the HTTP populator.

use crate::populator::UploadTarget;
use clap::Args;
use seed_core::MAX_RECORD_COUNT;
use seed_populate::CommonPopulateArgs;
use std::time::Duration;

/// Default endpoint for orders.
pub const DEFAULT_ORDERS_ENDPOINT: &str = "http://localhost:8000/api/orders/";
/// Default endpoint for products.
pub const DEFAULT_PRODUCTS_ENDPOINT: &str = "http://localhost:9000/api/products/";
/// Default endpoint for user registration.
pub const DEFAULT_USERS_ENDPOINT: &str = "http://localhost:9000/api/users/register";
/// Placeholder API key; replace it with the backend's real key.
pub const DEFAULT_ACCESS_TOKEN: &str = "your-secret-api-key";

/// Arguments for seeding orders.
#[derive(Args, Clone, Debug)]
pub struct OrdersPopulateArgs {
    /// Orders endpoint
    #[arg(long, default_value = DEFAULT_ORDERS_ENDPOINT, env = "SEED_ORDERS_ENDPOINT")]
    pub endpoint: String,

    /// Value of the `access_token` header
    #[arg(long, default_value = DEFAULT_ACCESS_TOKEN, env = "SEED_ACCESS_TOKEN")]
    pub access_token: String,

    /// Number of orders to generate
    #[arg(
        long,
        default_value = "120",
        value_parser = clap::value_parser!(u64).range(..=MAX_RECORD_COUNT)
    )]
    pub count: u64,

    /// Pause between consecutive requests, in milliseconds
    #[arg(long, default_value = "100")]
    pub delay_ms: u64,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

impl OrdersPopulateArgs {
    pub fn target(&self) -> UploadTarget {
        UploadTarget::new(&self.endpoint)
            .with_access_token(&self.access_token)
            .with_delay(Duration::from_millis(self.delay_ms))
    }
}

/// Arguments for seeding products.
#[derive(Args, Clone, Debug)]
pub struct ProductsPopulateArgs {
    /// Products endpoint
    #[arg(long, default_value = DEFAULT_PRODUCTS_ENDPOINT, env = "SEED_PRODUCTS_ENDPOINT")]
    pub endpoint: String,

    /// Value of the `access_token` header
    #[arg(long, default_value = DEFAULT_ACCESS_TOKEN, env = "SEED_ACCESS_TOKEN")]
    pub access_token: String,

    /// Number of products to generate
    #[arg(
        long,
        default_value = "100",
        value_parser = clap::value_parser!(u64).range(..=MAX_RECORD_COUNT)
    )]
    pub count: u64,

    /// Pause between consecutive requests, in milliseconds
    #[arg(long, default_value = "0")]
    pub delay_ms: u64,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

impl ProductsPopulateArgs {
    pub fn target(&self) -> UploadTarget {
        UploadTarget::new(&self.endpoint)
            .with_access_token(&self.access_token)
            .with_delay(Duration::from_millis(self.delay_ms))
    }
}

/// Arguments for registering the fixed users.
///
/// Registration is unauthenticated, so no access token is sent.
#[derive(Args, Clone, Debug)]
pub struct UsersPopulateArgs {
    /// User registration endpoint
    #[arg(long, default_value = DEFAULT_USERS_ENDPOINT, env = "SEED_USERS_ENDPOINT")]
    pub endpoint: String,

    /// Pause between consecutive requests, in milliseconds
    #[arg(long, default_value = "0")]
    pub delay_ms: u64,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

impl UsersPopulateArgs {
    pub fn target(&self) -> UploadTarget {
        UploadTarget::new(&self.endpoint).with_delay(Duration::from_millis(self.delay_ms))
    }
}

/// Arguments for seeding users, then products, then orders.
#[derive(Args, Clone, Debug)]
pub struct AllPopulateArgs {
    /// User registration endpoint
    #[arg(long, default_value = DEFAULT_USERS_ENDPOINT, env = "SEED_USERS_ENDPOINT")]
    pub users_endpoint: String,

    /// Products endpoint
    #[arg(long, default_value = DEFAULT_PRODUCTS_ENDPOINT, env = "SEED_PRODUCTS_ENDPOINT")]
    pub products_endpoint: String,

    /// Orders endpoint
    #[arg(long, default_value = DEFAULT_ORDERS_ENDPOINT, env = "SEED_ORDERS_ENDPOINT")]
    pub orders_endpoint: String,

    /// Value of the `access_token` header for products and orders
    #[arg(long, default_value = DEFAULT_ACCESS_TOKEN, env = "SEED_ACCESS_TOKEN")]
    pub access_token: String,

    /// Number of products to generate
    #[arg(
        long,
        default_value = "100",
        value_parser = clap::value_parser!(u64).range(..=MAX_RECORD_COUNT)
    )]
    pub product_count: u64,

    /// Number of orders to generate
    #[arg(
        long,
        default_value = "120",
        value_parser = clap::value_parser!(u64).range(..=MAX_RECORD_COUNT)
    )]
    pub order_count: u64,

    /// Pause between consecutive order requests, in milliseconds
    #[arg(long, default_value = "100")]
    pub order_delay_ms: u64,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

impl AllPopulateArgs {
    pub fn users_target(&self) -> UploadTarget {
        UploadTarget::new(&self.users_endpoint)
    }

    pub fn products_target(&self) -> UploadTarget {
        UploadTarget::new(&self.products_endpoint).with_access_token(&self.access_token)
    }

    pub fn orders_target(&self) -> UploadTarget {
        UploadTarget::new(&self.orders_endpoint)
            .with_access_token(&self.access_token)
            .with_delay(Duration::from_millis(self.order_delay_ms))
    }
}
