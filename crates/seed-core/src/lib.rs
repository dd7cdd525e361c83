//! Core types for the shop-seed tool.
//!
//! This crate provides the foundational types shared by the generator and
//! the populators:
//!
//! - [`Order`], [`Product`], [`User`] - The record shapes sent to the backend
//! - [`SeedRecord`] - Common behaviour needed to upload and log a record
//! - [`Vocabulary`] - Fixed word lists and id pools records are drawn from
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator      (draws records from a Vocabulary)
//!    │
//!    └─── seed-populate-http  (serializes SeedRecords and POSTs them)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::{RecordKind, Vocabulary};
//!
//! let vocabulary = Vocabulary::default();
//! assert_eq!(vocabulary.users.len(), 10);
//! assert_eq!(RecordKind::Order.title(), "Order");
//! ```

pub mod records;
pub mod vocabulary;

// Re-exports for convenience
pub use records::{
    Order, OrderStatus, Product, ProductCategory, RecordKind, SeedRecord, User, MAX_RECORD_COUNT,
    ORDER_PRODUCTS_MAX, ORDER_PRODUCTS_MIN, ORDER_TOTAL_MAX, ORDER_TOTAL_MIN, PRODUCT_PRICE_MAX,
    PRODUCT_PRICE_MIN, PRODUCT_STOCK_MAX, PRODUCT_STOCK_MIN,
};
pub use vocabulary::{UserProfile, Vocabulary, VocabularyError};
