//! Identifier generators.

use rand::Rng;

const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate `prefix` followed by `length` random lowercase base-36 characters.
pub fn generate_base36_id<R: Rng>(rng: &mut R, prefix: &str, length: usize) -> String {
    let mut result = String::with_capacity(prefix.len() + length);
    result.push_str(prefix);
    for _ in 0..length {
        let digit = BASE36_DIGITS[rng.gen_range(0..BASE36_DIGITS.len())];
        result.push(char::from(digit));
    }
    result
}

/// Generate `prefix` followed by the 1-based index, zero padded to `width`.
pub fn generate_padded_index_id(prefix: &str, index: u64, width: usize) -> String {
    format!("{prefix}{:0width$}", index + 1)
}
