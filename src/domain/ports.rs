use super::catalog::Product;
use super::records::{PrepaymentRecord, SaleRecord};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only access to the product catalog.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetches the current catalog snapshot.
    async fn products(&self) -> Result<Vec<Product>>;
}

/// Append/list/delete access to the two logical ledger tables.
///
/// Rows are identified by position; a position is only meaningful between a
/// `list_prepayments` call and the next mutation of the Prepayments table.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn append_sale(&self, record: SaleRecord) -> Result<()>;
    async fn append_prepayment(&self, record: PrepaymentRecord) -> Result<()>;
    async fn list_prepayments(&self) -> Result<Vec<PrepaymentRecord>>;
    /// Deletes the prepayment row at `index` (0-based list position).
    async fn delete_prepayment(&self, index: usize) -> Result<()>;
}

pub type CatalogGatewayBox = Box<dyn CatalogGateway>;
pub type LedgerStoreBox = Box<dyn LedgerStore>;
