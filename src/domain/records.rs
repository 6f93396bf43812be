use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One collected item of the full-payment flow.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product: String,
    pub quantity: u32,
}

/// One collected item of the prepayment flow.
#[derive(Debug, Clone, PartialEq)]
pub struct PrepaidLineItem {
    pub product: String,
    pub quantity: u32,
    pub prepayment: Decimal,
}

/// A completed sale, one row of the Sales table.
///
/// Field order is the row schema of the external store; appended once per
/// line item and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub client_name: String,
    pub phone: String,
    pub city: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub discount_percent: Decimal,
    pub total: Decimal,
    pub supplier: String,
    pub doctor: String,
    pub sale_date: NaiveDate,
    pub settlement_date: NaiveDate,
}

/// An open prepayment, one row of the Prepayments table.
///
/// Lives until it is promoted into a [`SaleRecord`], at which point the row
/// is deleted. Equality is used to re-validate a promotion target right
/// before deletion, so every field takes part in `PartialEq`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepaymentRecord {
    pub client_name: String,
    pub phone: String,
    pub city: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub supplier: String,
    pub prepayment: Decimal,
    pub date: NaiveDate,
    pub doctor: String,
}

impl PrepaymentRecord {
    /// Label shown on the promotion selection button.
    pub fn summary_label(&self) -> String {
        format!(
            "{} - {} - {}тг - {}",
            self.client_name, self.product, self.prepayment, self.date
        )
    }
}
