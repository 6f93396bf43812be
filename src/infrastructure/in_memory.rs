use crate::domain::catalog::Product;
use crate::domain::ports::{CatalogGateway, LedgerStore};
use crate::domain::records::{PrepaymentRecord, SaleRecord};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-memory product catalog.
///
/// `Clone` shares the underlying product list, so a test can mutate the
/// catalog mid-conversation and observe the effect of a fresh fetch.
#[derive(Default, Clone)]
pub struct InMemoryCatalog {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    pub async fn set_products(&self, products: Vec<Product>) {
        *self.products.write().await = products;
    }
}

#[async_trait]
impl CatalogGateway for InMemoryCatalog {
    async fn products(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }
}

/// An in-memory ledger holding the Sales and Prepayments tables as ordered
/// row vectors, matching the positional semantics of the external store.
#[derive(Default, Clone)]
pub struct InMemoryLedger {
    sales: Arc<RwLock<Vec<SaleRecord>>>,
    prepayments: Arc<RwLock<Vec<PrepaymentRecord>>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sales(&self) -> Vec<SaleRecord> {
        self.sales.read().await.clone()
    }

    pub async fn prepayments(&self) -> Vec<PrepaymentRecord> {
        self.prepayments.read().await.clone()
    }

    /// Removes a prepayment row out-of-band, bypassing the engine. Used by
    /// tests to simulate a concurrent mutation of the shared table.
    pub async fn remove_prepayment_out_of_band(&self, index: usize) {
        self.prepayments.write().await.remove(index);
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    async fn append_sale(&self, record: SaleRecord) -> Result<()> {
        self.sales.write().await.push(record);
        Ok(())
    }

    async fn append_prepayment(&self, record: PrepaymentRecord) -> Result<()> {
        self.prepayments.write().await.push(record);
        Ok(())
    }

    async fn list_prepayments(&self) -> Result<Vec<PrepaymentRecord>> {
        Ok(self.prepayments.read().await.clone())
    }

    async fn delete_prepayment(&self, index: usize) -> Result<()> {
        let mut prepayments = self.prepayments.write().await;
        if index >= prepayments.len() {
            return Err(crate::error::SalesError::Store(format!(
                "prepayment row {index} out of range"
            )));
        }
        prepayments.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn prepayment(client: &str) -> PrepaymentRecord {
        PrepaymentRecord {
            client_name: client.to_string(),
            phone: "+7 700 000 00 00".to_string(),
            city: "Алматы".to_string(),
            product: "Продукт".to_string(),
            quantity: 1,
            unit_price: dec!(100),
            supplier: "Поставщик".to_string(),
            prepayment: dec!(50),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            doctor: "Mamibiomed".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ledger_append_and_list() {
        let ledger = InMemoryLedger::new();
        ledger.append_prepayment(prepayment("A")).await.unwrap();
        ledger.append_prepayment(prepayment("B")).await.unwrap();

        let rows = ledger.list_prepayments().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].client_name, "A");
        assert_eq!(rows[1].client_name, "B");
    }

    #[tokio::test]
    async fn test_ledger_delete_shifts_positions() {
        let ledger = InMemoryLedger::new();
        ledger.append_prepayment(prepayment("A")).await.unwrap();
        ledger.append_prepayment(prepayment("B")).await.unwrap();

        ledger.delete_prepayment(0).await.unwrap();
        let rows = ledger.list_prepayments().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].client_name, "B");
    }

    #[tokio::test]
    async fn test_ledger_delete_out_of_range() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.delete_prepayment(0).await.is_err());
    }

    #[tokio::test]
    async fn test_catalog_reflects_updates() {
        let catalog = InMemoryCatalog::new(vec![Product::new("X", dec!(10), "S")]);
        assert_eq!(catalog.products().await.unwrap().len(), 1);

        catalog.set_products(vec![]).await;
        assert!(catalog.products().await.unwrap().is_empty());
    }
}
