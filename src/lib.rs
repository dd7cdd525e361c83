//! shop-seed library
//!
//! Seeds an e-commerce REST backend with synthetic orders, products and
//! users for manual testing.
//!
//! # Crates
//!
//! - `seed_core` - Record shapes and vocabularies
//! - `seed_generator` - Seeded synthetic record generator
//! - `seed_populate` - Arguments shared by every command
//! - `seed_populate_http` - Sequential HTTP uploader
//!
//! # CLI Usage
//!
//! ```bash
//! # Register the fixed users
//! shop-seed populate users
//!
//! # Seed 50 products with a real API key
//! shop-seed populate products --count 50 --access-token "$API_KEY"
//!
//! # Seed everything, orders referencing the users and products just added
//! shop-seed populate all
//!
//! # Write orders to a JSONL file instead of uploading them
//! shop-seed generate orders --output orders.jsonl
//! ```

use clap::Subcommand;
use seed_populate_http::{
    AllPopulateArgs, OrdersPopulateArgs, ProductsPopulateArgs, UsersPopulateArgs,
};

pub mod seed;

/// Record kind to seed the backend with
#[derive(Subcommand, Clone, Debug)]
pub enum PopulateTarget {
    /// Generate orders and POST them to the orders endpoint
    #[command(name = "orders")]
    Orders {
        #[command(flatten)]
        args: OrdersPopulateArgs,
    },
    /// Generate products and POST them to the products endpoint
    #[command(name = "products")]
    Products {
        #[command(flatten)]
        args: ProductsPopulateArgs,
    },
    /// Register the fixed list of users
    #[command(name = "users")]
    Users {
        #[command(flatten)]
        args: UsersPopulateArgs,
    },
    /// Seed users, then products, then orders referencing them
    #[command(name = "all")]
    All {
        #[command(flatten)]
        args: AllPopulateArgs,
    },
}
