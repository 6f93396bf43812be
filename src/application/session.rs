use super::dialog::ChatId;
use crate::domain::records::{LineItem, PrepaidLineItem, PrepaymentRecord};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Client contact fields shared by both collection flows.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub client_name: String,
    pub phone: String,
    pub city: String,
}

/// The current state of one conversation.
///
/// Every variant carries exactly the data accumulated so far, so a
/// transition is a function of the step and the incoming input alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Step {
    /// First contact, nothing prompted yet.
    #[default]
    Idle,
    AwaitAccessCode,
    Menu,
    Sale(SaleStep),
    Prepay(PrepayStep),
    Promote(PromoteStep),
}

/// Steps of the full-payment flow, in conversation order.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleStep {
    ClientName,
    Phone {
        client_name: String,
    },
    City {
        client_name: String,
        phone: String,
    },
    ItemCount {
        contact: Contact,
    },
    /// `product_names` is the per-flow catalog snapshot used for the choice
    /// keyboard and membership validation; staleness is bounded by one flow.
    ItemName {
        contact: Contact,
        count: usize,
        items: Vec<LineItem>,
        product_names: Vec<String>,
    },
    ItemQuantity {
        contact: Contact,
        count: usize,
        items: Vec<LineItem>,
        product_names: Vec<String>,
        product: String,
    },
    Discount {
        contact: Contact,
        items: Vec<LineItem>,
    },
    Doctor {
        contact: Contact,
        items: Vec<LineItem>,
        discount: Decimal,
    },
}

/// Steps of the prepayment flow. Mirrors [`SaleStep`] with an extra
/// prepayment amount collected per item.
#[derive(Debug, Clone, PartialEq)]
pub enum PrepayStep {
    ClientName,
    Phone {
        client_name: String,
    },
    City {
        client_name: String,
        phone: String,
    },
    ItemCount {
        contact: Contact,
    },
    ItemName {
        contact: Contact,
        count: usize,
        items: Vec<PrepaidLineItem>,
        product_names: Vec<String>,
    },
    ItemQuantity {
        contact: Contact,
        count: usize,
        items: Vec<PrepaidLineItem>,
        product_names: Vec<String>,
        product: String,
    },
    Amount {
        contact: Contact,
        count: usize,
        items: Vec<PrepaidLineItem>,
        product_names: Vec<String>,
        product: String,
        quantity: u32,
    },
    Discount {
        contact: Contact,
        items: Vec<PrepaidLineItem>,
    },
    Doctor {
        contact: Contact,
        items: Vec<PrepaidLineItem>,
        discount: Decimal,
    },
}

/// Steps of the prepayment-surcharge (promotion) flow.
#[derive(Debug, Clone, PartialEq)]
pub enum PromoteStep {
    /// Waiting for a `promotion_<index>` selection.
    Select,
    /// A row was picked; `selected` is the snapshot taken at selection time
    /// and is re-validated against the live table before any mutation.
    Surcharge {
        index: usize,
        selected: PrepaymentRecord,
    },
}

/// Per-chat conversational state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub authenticated: bool,
    pub step: Step,
}

/// Owns one [`Session`] per chat identity.
///
/// Sessions are created on first contact and mutated only by the transition
/// of their current step.
#[derive(Default)]
pub struct SessionManager {
    sessions: HashMap<ChatId, Session>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for `chat`, creating an idle unauthenticated one
    /// on first contact.
    pub fn session_mut(&mut self, chat: ChatId) -> &mut Session {
        self.sessions.entry(chat).or_default()
    }

    pub fn get(&self, chat: ChatId) -> Option<&Session> {
        self.sessions.get(&chat)
    }
}
