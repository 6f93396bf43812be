use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as read from the catalog.
///
/// The field names are the stable contract keys of the catalog source;
/// a renamed column must surface as a fetch error, never a silent default.
/// Snapshots are never cached across flows — the catalog may change between
/// conversations, so every flow fetches its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product name, the lookup key for line items.
    pub name: String,
    /// Unit price before any discount.
    pub unit_price: Decimal,
    /// Supplier, carried verbatim into ledger rows.
    pub supplier: String,
}

impl Product {
    pub fn new(name: impl Into<String>, unit_price: Decimal, supplier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_price,
            supplier: supplier.into(),
        }
    }
}
