//! Synthetic record generator for shop-seed.
//!
//! This crate provides the [`RecordGenerator`] which produces orders,
//! products and users from a [`seed_core::Vocabulary`]. The generator uses a
//! seeded RNG so the same seed and vocabulary reproduce the same records.
//!
//! # Architecture
//!
//! ```text
//! Vocabulary
//!        │
//!        ▼
//! ┌─────────────────┐
//! │ RecordGenerator │
//! │                 │
//! │  - vocabulary   │
//! │  - rng (StdRng) │
//! │  - index        │
//! └────────┬────────┘
//!          │
//!          ▼
//!    Order / Product / User
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_generator::RecordGenerator;
//! use seed_core::Vocabulary;
//!
//! let mut generator = RecordGenerator::new(Vocabulary::default(), 42).unwrap();
//! let order = generator.next_order();
//! assert_eq!(order.id, "order001");
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{GeneratorError, OrderIterator, ProductIterator, RecordGenerator};
