use crate::domain::catalog::Product;
use crate::domain::ports::CatalogGateway;
use crate::error::{Result, SalesError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A product catalog backed by a CSV file with `name,unit_price,supplier`
/// headers.
///
/// The file is re-read on every fetch, so edits to the catalog become
/// visible to the next flow. Reads are header-keyed: a renamed column
/// surfaces as a fetch error instead of a silently defaulted field.
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogGateway for CsvCatalog {
    async fn products(&self) -> Result<Vec<Product>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| SalesError::Catalog(format!("{}: {e}", self.path.display())))?;

        let mut products = Vec::new();
        for row in reader.deserialize() {
            let product: Product =
                row.map_err(|e| SalesError::Catalog(format!("{}: {e}", self.path.display())))?;
            products.push(product);
        }
        Ok(products)
    }
}
