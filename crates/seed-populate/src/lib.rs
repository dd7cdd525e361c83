//! Common types and utilities for shop-seed populators.
//!
//! This crate provides the argument types shared by every populate and
//! generate command, so all of them accept the same seed, vocabulary and
//! dry-run flags.

pub mod args;

pub use args::CommonPopulateArgs;
