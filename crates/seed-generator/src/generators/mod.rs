//! Individual value generators for record fields.
//!
//! Each generator draws from the caller's RNG so a seeded generator stays
//! reproducible across runs.

pub mod array;
pub mod numeric;
pub mod pattern;
pub mod timestamp;

pub use array::{generate_unique_sample, pick};
pub use numeric::{generate_decimal_range, generate_int_range};
pub use pattern::{generate_base36_id, generate_padded_index_id};
pub use timestamp::generate_timestamp_now;
