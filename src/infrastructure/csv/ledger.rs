use crate::domain::ports::LedgerStore;
use crate::domain::records::{PrepaymentRecord, SaleRecord};
use crate::error::{Result, SalesError};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::debug;

const SALES_FILE: &str = "sales.csv";
const PREPAYMENTS_FILE: &str = "prepayments.csv";

const SALES_HEADERS: [&str; 12] = [
    "client_name",
    "phone",
    "city",
    "product",
    "quantity",
    "unit_price",
    "discount_percent",
    "total",
    "supplier",
    "doctor",
    "sale_date",
    "settlement_date",
];

const PREPAYMENT_HEADERS: [&str; 10] = [
    "client_name",
    "phone",
    "city",
    "product",
    "quantity",
    "unit_price",
    "supplier",
    "prepayment",
    "date",
    "doctor",
];

/// A ledger persisted as two CSV files, `sales.csv` and `prepayments.csv`,
/// inside one directory.
///
/// Appends go straight to the end of the file; deleting a prepayment row
/// rewrites `prepayments.csv` through a temp file in the same directory so a
/// crash mid-delete never leaves a half-written table behind.
pub struct CsvLedger {
    dir: PathBuf,
}

impl CsvLedger {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn sales_path(&self) -> PathBuf {
        self.dir.join(SALES_FILE)
    }

    fn prepayments_path(&self) -> PathBuf {
        self.dir.join(PREPAYMENTS_FILE)
    }

    fn append_row<T: Serialize>(&self, path: &Path, headers: &[&str], record: &T) -> Result<()> {
        let needs_headers = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_headers {
            writer.write_record(headers)?;
        }
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }

    fn read_rows<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }
}

#[async_trait]
impl LedgerStore for CsvLedger {
    async fn append_sale(&self, record: SaleRecord) -> Result<()> {
        debug!(product = %record.product, "appending sale row");
        self.append_row(&self.sales_path(), &SALES_HEADERS, &record)
    }

    async fn append_prepayment(&self, record: PrepaymentRecord) -> Result<()> {
        debug!(product = %record.product, "appending prepayment row");
        self.append_row(&self.prepayments_path(), &PREPAYMENT_HEADERS, &record)
    }

    async fn list_prepayments(&self) -> Result<Vec<PrepaymentRecord>> {
        self.read_rows(&self.prepayments_path())
    }

    async fn delete_prepayment(&self, index: usize) -> Result<()> {
        let mut rows: Vec<PrepaymentRecord> = self.read_rows(&self.prepayments_path())?;
        if index >= rows.len() {
            return Err(SalesError::Store(format!(
                "prepayment row {index} out of range (table has {} rows)",
                rows.len()
            )));
        }
        rows.remove(index);

        let tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file());
            writer.write_record(PREPAYMENT_HEADERS)?;
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        tmp.persist(self.prepayments_path())
            .map_err(|e| SalesError::Store(format!("rewriting prepayments table: {e}")))?;
        debug!(index, remaining = rows.len(), "deleted prepayment row");
        Ok(())
    }
}
