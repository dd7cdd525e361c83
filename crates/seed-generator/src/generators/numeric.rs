//! Numeric value generators.

use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}

/// Generate a random decimal in the given range.
///
/// The value is rounded to 2 decimal places, matching how prices are
/// entered into the backend.
pub fn generate_decimal_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let value = rng.gen_range(min..=max);
    let rounded = (value * 100.0).round() / 100.0;
    rounded.clamp(min, max)
}
