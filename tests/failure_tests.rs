mod common;

use async_trait::async_trait;
use common::{authenticate, products, say};
use rust_decimal_macros::dec;
use chrono::NaiveDate;
use salesbot::application::access::AccessGate;
use salesbot::application::dialog::Input;
use salesbot::application::engine::{
    MENU_FULL_PAYMENT, MENU_PREPAYMENT, MENU_PROMOTION, PROMPT_CLIENT_NAME, PROMPT_MENU,
    SalesEngine,
};
use salesbot::domain::catalog::Product;
use salesbot::domain::ports::{CatalogGateway, LedgerStore};
use salesbot::domain::records::{PrepaymentRecord, SaleRecord};
use salesbot::error::{Result, SalesError};
use salesbot::infrastructure::in_memory::{InMemoryCatalog, InMemoryLedger};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// A ledger that accepts a fixed number of appends and fails every one after
/// that, while still serving reads from the rows it did take.
#[derive(Clone)]
struct FailingLedger {
    inner: InMemoryLedger,
    appends_left: Arc<AtomicUsize>,
}

impl FailingLedger {
    fn accepting(appends: usize) -> Self {
        Self {
            inner: InMemoryLedger::new(),
            appends_left: Arc::new(AtomicUsize::new(appends)),
        }
    }

    fn take_slot(&self) -> Result<()> {
        self.appends_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                left.checked_sub(1)
            })
            .map(|_| ())
            .map_err(|_| SalesError::Store("соединение с таблицей потеряно".to_string()))
    }
}

#[async_trait]
impl LedgerStore for FailingLedger {
    async fn append_sale(&self, record: SaleRecord) -> Result<()> {
        self.take_slot()?;
        self.inner.append_sale(record).await
    }

    async fn append_prepayment(&self, record: PrepaymentRecord) -> Result<()> {
        self.take_slot()?;
        self.inner.append_prepayment(record).await
    }

    async fn list_prepayments(&self) -> Result<Vec<PrepaymentRecord>> {
        self.inner.list_prepayments().await
    }

    async fn delete_prepayment(&self, index: usize) -> Result<()> {
        self.inner.delete_prepayment(index).await
    }
}

/// A catalog that serves normally until told to start failing.
#[derive(Clone)]
struct FailingCatalog {
    inner: InMemoryCatalog,
    failing: Arc<AtomicBool>,
}

impl FailingCatalog {
    fn new(products: Vec<Product>) -> Self {
        Self {
            inner: InMemoryCatalog::new(products),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    fn fail_from_now_on(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CatalogGateway for FailingCatalog {
    async fn products(&self) -> Result<Vec<Product>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SalesError::Catalog("каталог недоступен".to_string()));
        }
        self.inner.products().await
    }
}

fn engine_over(
    catalog: impl CatalogGateway + 'static,
    ledger: impl LedgerStore + 'static,
) -> SalesEngine {
    SalesEngine::new(
        Box::new(catalog),
        Box::new(ledger),
        AccessGate::new(common::CODE),
    )
}

#[tokio::test]
async fn test_sale_store_failure_keeps_prior_rows_and_resets_to_menu() {
    // The second of two appends fails mid-commit.
    let ledger = FailingLedger::accepting(1);
    let mut engine = engine_over(InMemoryCatalog::new(products()), ledger.clone());
    authenticate(&mut engine, 1).await;

    say(&mut engine, 1, MENU_FULL_PAYMENT).await;
    say(&mut engine, 1, "Иван").await;
    say(&mut engine, 1, "+7").await;
    say(&mut engine, 1, "Алматы").await;
    say(&mut engine, 1, "2").await;
    say(&mut engine, 1, "Аспирин").await;
    say(&mut engine, 1, "1").await;
    say(&mut engine, 1, "Ибупрофен").await;
    say(&mut engine, 1, "2").await;
    say(&mut engine, 1, "0").await;
    let replies = say(&mut engine, 1, "Mamibiomed").await;

    assert!(replies[0].text.starts_with("Продажа:"));
    assert!(
        replies
            .iter()
            .any(|r| r.text.starts_with("❌ Произошла ошибка")
                && r.text.contains("соединение с таблицей потеряно"))
    );
    assert_eq!(replies.last().unwrap().text, PROMPT_MENU);

    // The row appended before the failure stays.
    let sales = ledger.inner.sales().await;
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].product, "Аспирин");

    // The session is back at the menu and can start over.
    let replies = say(&mut engine, 1, MENU_FULL_PAYMENT).await;
    assert_eq!(replies[0].text, PROMPT_CLIENT_NAME);
}

#[tokio::test]
async fn test_prepayment_store_failure_reports_and_resets_to_menu() {
    let ledger = FailingLedger::accepting(1);
    let mut engine = engine_over(InMemoryCatalog::new(products()), ledger.clone());
    authenticate(&mut engine, 1).await;

    say(&mut engine, 1, MENU_PREPAYMENT).await;
    say(&mut engine, 1, "Мария").await;
    say(&mut engine, 1, "+7").await;
    say(&mut engine, 1, "Астана").await;
    say(&mut engine, 1, "2").await;
    say(&mut engine, 1, "Аспирин").await;
    say(&mut engine, 1, "1").await;
    say(&mut engine, 1, "100").await;
    say(&mut engine, 1, "Ибупрофен").await;
    say(&mut engine, 1, "2").await;
    say(&mut engine, 1, "200").await;
    say(&mut engine, 1, "0").await;
    let replies = say(&mut engine, 1, "Mamibiomed").await;

    assert!(
        replies
            .iter()
            .any(|r| r.text.contains("✅ Добавлена запись для Аспирин"))
    );
    assert!(
        replies
            .iter()
            .any(|r| r.text.starts_with("❌ Ошибка при сохранении данных"))
    );
    assert_eq!(replies.last().unwrap().text, PROMPT_MENU);

    let rows = ledger.inner.prepayments().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].product, "Аспирин");

    let replies = say(&mut engine, 1, MENU_PREPAYMENT).await;
    assert_eq!(replies[0].text, PROMPT_CLIENT_NAME);
}

#[tokio::test]
async fn test_catalog_failure_mid_flow_aborts_to_menu() {
    let catalog = FailingCatalog::new(products());
    let ledger = InMemoryLedger::new();
    let mut engine = engine_over(catalog.clone(), ledger.clone());
    authenticate(&mut engine, 1).await;

    say(&mut engine, 1, MENU_FULL_PAYMENT).await;
    say(&mut engine, 1, "Иван").await;
    say(&mut engine, 1, "+7").await;
    say(&mut engine, 1, "Алматы").await;

    // The item-count answer triggers the first catalog fetch.
    catalog.fail_from_now_on();
    let replies = say(&mut engine, 1, "1").await;

    assert!(replies[0].text.starts_with("❌ Произошла ошибка"));
    assert!(replies[0].text.contains("каталог недоступен"));
    assert_eq!(replies.last().unwrap().text, PROMPT_MENU);
    assert!(ledger.sales().await.is_empty());

    let replies = say(&mut engine, 1, MENU_FULL_PAYMENT).await;
    assert_eq!(replies[0].text, PROMPT_CLIENT_NAME);
}

#[tokio::test]
async fn test_catalog_failure_at_commit_writes_nothing() {
    let catalog = FailingCatalog::new(products());
    let ledger = InMemoryLedger::new();
    let mut engine = engine_over(catalog.clone(), ledger.clone());
    authenticate(&mut engine, 1).await;

    say(&mut engine, 1, MENU_FULL_PAYMENT).await;
    say(&mut engine, 1, "Иван").await;
    say(&mut engine, 1, "+7").await;
    say(&mut engine, 1, "Алматы").await;
    say(&mut engine, 1, "1").await;
    say(&mut engine, 1, "Аспирин").await;
    say(&mut engine, 1, "2").await;
    say(&mut engine, 1, "0").await;

    // The commit re-fetch fails after the flow collected everything.
    catalog.fail_from_now_on();
    let replies = say(&mut engine, 1, "Mamibiomed").await;

    assert!(replies[0].text.starts_with("Продажа:"));
    assert!(
        replies
            .iter()
            .any(|r| r.text.starts_with("❌ Произошла ошибка"))
    );
    assert_eq!(replies.last().unwrap().text, PROMPT_MENU);
    assert!(ledger.sales().await.is_empty());
}

#[tokio::test]
async fn test_prepayment_total_failure_writes_nothing() {
    let ledger = FailingLedger::accepting(0);
    let mut engine = engine_over(InMemoryCatalog::new(products()), ledger.clone());
    authenticate(&mut engine, 1).await;

    say(&mut engine, 1, MENU_PREPAYMENT).await;
    say(&mut engine, 1, "Мария").await;
    say(&mut engine, 1, "+7").await;
    say(&mut engine, 1, "Астана").await;
    say(&mut engine, 1, "1").await;
    say(&mut engine, 1, "Аспирин").await;
    say(&mut engine, 1, "1").await;
    say(&mut engine, 1, "50").await;
    say(&mut engine, 1, "0").await;
    let replies = say(&mut engine, 1, "Mamibiomed").await;

    assert!(
        replies
            .iter()
            .any(|r| r.text.starts_with("❌ Ошибка при сохранении данных"))
    );
    assert!(ledger.inner.prepayments().await.is_empty());
}

#[tokio::test]
async fn test_promotion_append_failure_deletes_nothing() {
    // A failed append must not be followed by the row deletion.
    let ledger = FailingLedger::accepting(1);
    ledger
        .append_prepayment(PrepaymentRecord {
            client_name: "Иван".to_string(),
            phone: "+7".to_string(),
            city: "Алматы".to_string(),
            product: "Аспирин".to_string(),
            quantity: 1,
            unit_price: dec!(100),
            supplier: "ФармКо".to_string(),
            prepayment: dec!(50),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            doctor: "Mamibiomed".to_string(),
        })
        .await
        .unwrap();
    // That seed used up the only append slot.
    let mut engine = engine_over(InMemoryCatalog::new(products()), ledger.clone());
    authenticate(&mut engine, 1).await;

    say(&mut engine, 1, MENU_PROMOTION).await;
    engine
        .dispatch(1, Input::Callback("promotion_0".to_string()))
        .await
        .unwrap();
    let replies = say(&mut engine, 1, "25").await;

    assert!(replies[0].text.starts_with("❌ Произошла ошибка"));
    assert!(ledger.inner.sales().await.is_empty());
    assert_eq!(ledger.inner.prepayments().await.len(), 1);
}
