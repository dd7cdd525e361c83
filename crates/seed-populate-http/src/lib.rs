//! HTTP populator for seeding a REST backend.
//!
//! This crate sends generated records to a backend one at a time, one
//! `POST` per record, and classifies every response. A failed record is
//! logged and skipped; the run always continues with the next record.
//!
//! The transport and the pause between requests sit behind the
//! [`HttpClient`] and [`Delay`] traits so tests can run without a network
//! or a wall clock.
//!
//! # Example
//!
//! ```ignore
//! use seed_populate_http::{HttpPopulator, ReqwestClient, TokioDelay, UploadTarget};
//!
//! let client = ReqwestClient::new(None)?;
//! let target = UploadTarget::new("http://localhost:9000/api/products/")
//!     .with_access_token("your-secret-api-key");
//! let populator = HttpPopulator::new(client, TokioDelay, target);
//!
//! let metrics = populator.populate(&products).await;
//! println!("{} added, {} errors", metrics.records_added, metrics.error_count());
//! ```

pub mod args;
pub mod client;
pub mod delay;
pub mod error;
pub mod populator;

pub use args::{
    AllPopulateArgs, OrdersPopulateArgs, ProductsPopulateArgs, UsersPopulateArgs,
    DEFAULT_ACCESS_TOKEN, DEFAULT_ORDERS_ENDPOINT, DEFAULT_PRODUCTS_ENDPOINT,
    DEFAULT_USERS_ENDPOINT,
};
pub use client::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};
pub use delay::{Delay, TokioDelay};
pub use error::HttpPopulatorError;
pub use populator::{HttpPopulator, PopulateMetrics, UploadOutcome, UploadTarget};
