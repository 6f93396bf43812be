use rust_decimal_macros::dec;
use salesbot::application::access::AccessGate;
use salesbot::application::dialog::{ChatId, Input, Reply};
use salesbot::application::engine::SalesEngine;
use salesbot::domain::catalog::Product;
use salesbot::infrastructure::in_memory::{InMemoryCatalog, InMemoryLedger};

pub const CODE: &str = "1234";

pub fn products() -> Vec<Product> {
    vec![
        Product::new("Аспирин", dec!(100), "ФармКо"),
        Product::new("Ибупрофен", dec!(50), "МедСнаб"),
    ]
}

/// Builds an engine over shared in-memory backends so tests can inspect and
/// mutate the stores behind the engine's back.
pub fn engine() -> (SalesEngine, InMemoryCatalog, InMemoryLedger) {
    let catalog = InMemoryCatalog::new(products());
    let ledger = InMemoryLedger::new();
    let engine = SalesEngine::new(
        Box::new(catalog.clone()),
        Box::new(ledger.clone()),
        AccessGate::new(CODE),
    );
    (engine, catalog, ledger)
}

pub async fn authenticate(engine: &mut SalesEngine, chat: ChatId) {
    engine.dispatch(chat, Input::Start).await.unwrap();
    let replies = engine
        .dispatch(chat, Input::Text(CODE.to_string()))
        .await
        .unwrap();
    assert!(replies[0].text.contains("доступ открыт"));
}

pub async fn say(engine: &mut SalesEngine, chat: ChatId, text: &str) -> Vec<Reply> {
    engine
        .dispatch(chat, Input::Text(text.to_string()))
        .await
        .unwrap()
}
