//! Main record generator.

use crate::generators::{
    generate_base36_id, generate_decimal_range, generate_int_range, generate_padded_index_id,
    generate_timestamp_now, generate_unique_sample, pick,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_core::{
    Order, OrderStatus, Product, ProductCategory, User, Vocabulary, VocabularyError,
    ORDER_PRODUCTS_MAX, ORDER_PRODUCTS_MIN, ORDER_TOTAL_MAX, ORDER_TOTAL_MIN, PRODUCT_PRICE_MAX,
    PRODUCT_PRICE_MIN, PRODUCT_STOCK_MAX, PRODUCT_STOCK_MIN,
};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Vocabulary cannot be used for generation
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),
}

/// Generator that produces synthetic records.
///
/// The generator uses a seeded random number generator so the same seed and
/// vocabulary reproduce the same records. Timestamps come from the wall
/// clock unless pinned with [`RecordGenerator::with_fixed_time`].
pub struct RecordGenerator {
    /// Word lists and id pools
    vocabulary: Vocabulary,
    /// Base seed
    seed: u64,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Current record index
    index: u64,
    /// Timestamp used instead of the current time
    fixed_time: Option<DateTime<Utc>>,
}

impl RecordGenerator {
    /// Create a new generator with the given vocabulary and seed.
    pub fn new(vocabulary: Vocabulary, seed: u64) -> Result<Self, GeneratorError> {
        vocabulary.validate()?;
        Ok(Self {
            vocabulary,
            seed,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
            fixed_time: None,
        })
    }

    /// Set the starting index for record generation.
    ///
    /// Note: This also re-seeds the RNG so that generation from index N is
    /// deterministic regardless of how many records were produced before.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self.rng = StdRng::seed_from_u64(self.compute_rng_seed_for_index(index));
        self
    }

    /// Pin `created_at` / `updated_at` to a fixed timestamp.
    pub fn with_fixed_time(mut self, time: DateTime<Utc>) -> Self {
        self.fixed_time = Some(time);
        self
    }

    fn compute_rng_seed_for_index(&self, index: u64) -> u64 {
        self.seed.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Get the current record index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn now(&self) -> DateTime<Utc> {
        self.fixed_time.unwrap_or_else(generate_timestamp_now)
    }

    /// Generate the next order.
    pub fn next_order(&mut self) -> Order {
        let index = self.index;
        let user_id = pick(&mut self.rng, &self.vocabulary.user_ids).clone();
        let total_price = generate_decimal_range(&mut self.rng, ORDER_TOTAL_MIN, ORDER_TOTAL_MAX);
        let status = *pick(&mut self.rng, &OrderStatus::ALL);
        let products = generate_unique_sample(
            &mut self.rng,
            &self.vocabulary.product_ids,
            ORDER_PRODUCTS_MIN,
            ORDER_PRODUCTS_MAX,
        );
        let now = self.now();

        self.index += 1;

        Order {
            id: generate_padded_index_id("order", index, 3),
            user_id,
            products,
            total_price,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Generate the next product.
    pub fn next_product(&mut self) -> Product {
        let category = *pick(&mut self.rng, &ProductCategory::ALL);
        let adjective = pick(&mut self.rng, &self.vocabulary.adjectives).clone();
        let noun = pick(&mut self.rng, &self.vocabulary.product_nouns).clone();
        let price = generate_decimal_range(&mut self.rng, PRODUCT_PRICE_MIN, PRODUCT_PRICE_MAX);
        let stock = generate_int_range(&mut self.rng, PRODUCT_STOCK_MIN, PRODUCT_STOCK_MAX);
        let id = generate_base36_id(&mut self.rng, "prod-", 9);
        let now = self.now();

        self.index += 1;

        let description = format!(
            "{adjective} {} {}",
            noun.to_lowercase(),
            self.vocabulary.description_suffix
        );

        Product {
            id,
            name: format!("{adjective} {noun}"),
            description: description.trim_end().to_string(),
            price,
            stock,
            category,
            is_available: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// The fixed user accounts, ready for registration.
    pub fn users(&self) -> Vec<User> {
        let now = self.now();
        self.vocabulary
            .users
            .iter()
            .map(|profile| User {
                id: profile.id.clone(),
                username: profile.username.clone(),
                email: profile.email.clone(),
                full_name: profile.full_name.clone(),
                token: None,
                is_activated: true,
                created_at: now,
                updated_at: now,
            })
            .collect()
    }

    /// Generate `count` orders lazily.
    pub fn orders(&mut self, count: u64) -> OrderIterator<'_> {
        OrderIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate `count` products lazily.
    pub fn products(&mut self, count: u64) -> ProductIterator<'_> {
        ProductIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates orders.
pub struct OrderIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for OrderIterator<'_> {
    type Item = Order;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_order())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OrderIterator<'_> {}

/// Iterator that lazily generates products.
pub struct ProductIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for ProductIterator<'_> {
    type Item = Product;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_product())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProductIterator<'_> {}
