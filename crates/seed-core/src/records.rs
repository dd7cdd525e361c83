//! Record shapes sent to the backend.
//!
//! Every record is a flat JSON object. Field names match the backend's
//! request models exactly, so the serde derives here are the wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest order total, inclusive.
pub const ORDER_TOTAL_MIN: f64 = 500.0;
/// Highest order total, inclusive.
pub const ORDER_TOTAL_MAX: f64 = 10_500.0;
/// Fewest products referenced by one order.
pub const ORDER_PRODUCTS_MIN: usize = 1;
/// Most products referenced by one order.
pub const ORDER_PRODUCTS_MAX: usize = 100;
/// Lowest product price, inclusive.
pub const PRODUCT_PRICE_MIN: f64 = 50.0;
/// Highest product price, inclusive.
pub const PRODUCT_PRICE_MAX: f64 = 5_050.0;
/// Lowest initial stock.
pub const PRODUCT_STOCK_MIN: u32 = 1;
/// Highest initial stock.
pub const PRODUCT_STOCK_MAX: u32 = 100;
/// Most records of one kind generated in a single run.
pub const MAX_RECORD_COUNT: u64 = 1_000_000;

/// The kind of record being generated or uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Order,
    Product,
    User,
}

impl RecordKind {
    /// Capitalized name used at the start of log lines.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Order => "Order",
            Self::Product => "Product",
            Self::User => "User",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order => write!(f, "order"),
            Self::Product => write!(f, "product"),
            Self::User => write!(f, "user"),
        }
    }
}

/// Behaviour shared by all records the populators can upload.
pub trait SeedRecord: Serialize {
    /// Kind of this record, used for log messages.
    const KIND: RecordKind;

    /// Identifier the backend stores the record under.
    fn id(&self) -> &str;

    /// Human readable label used in log lines.
    fn label(&self) -> &str;
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in declaration order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::New,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Product category as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "nábytek")]
    Furniture,
    #[serde(rename = "psací potřeby")]
    WritingSupplies,
    #[serde(rename = "papír")]
    Paper,
    #[serde(rename = "organizace")]
    Organization,
    #[serde(rename = "technika")]
    Electronics,
    #[serde(rename = "doplňky")]
    Accessories,
}

impl ProductCategory {
    /// All six categories.
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Furniture,
        ProductCategory::WritingSupplies,
        ProductCategory::Paper,
        ProductCategory::Organization,
        ProductCategory::Electronics,
        ProductCategory::Accessories,
    ];

    /// Wire value of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Furniture => "nábytek",
            Self::WritingSupplies => "psací potřeby",
            Self::Paper => "papír",
            Self::Organization => "organizace",
            Self::Electronics => "technika",
            Self::Accessories => "doplňky",
        }
    }
}

/// A customer order referencing a user and a set of products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub products: Vec<String>,
    pub total_price: f64,
    pub status: OrderStatus,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl SeedRecord for Order {
    const KIND: RecordKind = RecordKind::Order;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.id
    }
}

/// A catalogue product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: ProductCategory,
    pub is_available: bool,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl SeedRecord for Product {
    const KIND: RecordKind = RecordKind::Product;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// A registered user. The token is assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub token: Option<String>,
    pub is_activated: bool,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl SeedRecord for User {
    const KIND: RecordKind = RecordKind::User;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.username
    }
}

/// ISO 8601 timestamps with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
