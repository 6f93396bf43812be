use crate::application::access::AccessGate;
use crate::application::dialog::{ChatId, Input, Reply};
use crate::application::session::{
    Contact, PrepayStep, PromoteStep, SaleStep, SessionManager, Step,
};
use crate::domain::ports::{CatalogGatewayBox, LedgerStoreBox};
use crate::domain::pricing::compute_total;
use crate::domain::records::{LineItem, PrepaidLineItem, PrepaymentRecord, SaleRecord};
use crate::error::{Result, SalesError};
use chrono::Local;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info, warn};

pub const MENU_FULL_PAYMENT: &str = "Полная оплата";
pub const MENU_PREPAYMENT: &str = "Предоплата";
pub const MENU_PROMOTION: &str = "Доплата предоплаты";

/// The fixed doctor choice set.
pub const DOCTORS: [&str; 3] = ["Mamibiomed", "Регина Аян", "Азиза А"];

const PROMOTION_TOKEN_PREFIX: &str = "promotion_";

pub const PROMPT_MENU: &str = "Выберите тип платежа:";
pub const PROMPT_ACCESS_CODE: &str = "Введите код доступа:";
pub const ACCESS_GRANTED: &str = "Здравствуйте, доступ открыт.";
pub const ACCESS_DENIED: &str = "Код доступа не правильный, попробуйте заново.";
pub const ACCESS_REQUIRED: &str = "Пожалуйста, введите код доступа сначала: /start";
pub const PROMPT_CLIENT_NAME: &str = "Введите имя клиента:";
pub const PROMPT_PHONE: &str = "Введите номер телефона:";
pub const PROMPT_CITY: &str = "Введите город:";
pub const PROMPT_ITEM_COUNT: &str = "Введите количество наименований:";
pub const INVALID_ITEM_COUNT: &str =
    "Пожалуйста, введите корректное количество наименований (число).";
pub const PROMPT_ITEM_NAME: &str = "Выберите наименование (имя препарата):";
pub const PROMPT_NEXT_ITEM: &str = "Выберите наименование следующего препарата:";
pub const PROMPT_NEXT_ITEM_NAME: &str = "Введите имя следующего препарата:";
pub const INVALID_PRODUCT: &str = "Препарат не найден в каталоге, выберите из списка.";
pub const PROMPT_QUANTITY: &str = "Введите количество препарата:";
pub const INVALID_QUANTITY: &str = "Пожалуйста, введите корректное количество (число).";
pub const PROMPT_DISCOUNT: &str = "Введите процент скидки:";
pub const INVALID_DISCOUNT: &str =
    "Пожалуйста, введите корректный процент скидки (число от 0 до 100).";
pub const PROMPT_DOCTOR: &str = "Выберите врача:";
pub const PROMPT_DOCTOR_NAME: &str = "Введите имя врача:";
pub const PROMPT_PREPAYMENT_AMOUNT: &str = "Введите сумму предоплаты:";
pub const INVALID_PREPAYMENT_AMOUNT: &str =
    "Пожалуйста, введите корректную сумму предоплаты (число).";
pub const INVALID_SURCHARGE: &str = "❌ Пожалуйста, введите корректную сумму доплаты (число)";
pub const PROMPT_SELECT_PREPAYMENT: &str = "Выберите предоплату:";
pub const NO_PREPAYMENTS: &str = "Нет записей о предоплатах.";
pub const PREPAYMENT_NOT_FOUND: &str = "Ошибка: запись не найдена";

/// The conversational state machine.
///
/// `SalesEngine` owns the per-chat sessions and the storage ports, and turns
/// each incoming event into a new step plus a batch of replies. One event is
/// processed to completion before the next; `dispatch` takes `&mut self`, so
/// no two transitions ever interleave.
pub struct SalesEngine {
    sessions: SessionManager,
    catalog: CatalogGatewayBox,
    ledger: LedgerStoreBox,
    gate: AccessGate,
}

impl SalesEngine {
    pub fn new(catalog: CatalogGatewayBox, ledger: LedgerStoreBox, gate: AccessGate) -> Self {
        Self {
            sessions: SessionManager::new(),
            catalog,
            ledger,
            gate,
        }
    }

    /// Routes one input event to the step currently registered for `chat`.
    ///
    /// Store and catalog failures never escape as `Err`: they are surfaced
    /// to the operator as `❌` replies and the session is reset to the menu.
    pub async fn dispatch(&mut self, chat: ChatId, input: Input) -> Result<Vec<Reply>> {
        // /start always restarts the conversation.
        if matches!(input, Input::Start) {
            let session = self.sessions.session_mut(chat);
            return Ok(if session.authenticated {
                session.step = Step::Menu;
                vec![menu_reply()]
            } else {
                session.step = Step::AwaitAccessCode;
                vec![Reply::text(PROMPT_ACCESS_CODE)]
            });
        }

        let session = self.sessions.session_mut(chat);
        if !session.authenticated {
            return Ok(match (&session.step, &input) {
                (Step::AwaitAccessCode, Input::Text(code)) => {
                    if self.gate.check(code) {
                        session.authenticated = true;
                        session.step = Step::Menu;
                        info!(chat, "access granted");
                        vec![Reply::text(ACCESS_GRANTED), menu_reply()]
                    } else {
                        warn!(chat, "access code rejected");
                        vec![Reply::text(ACCESS_DENIED)]
                    }
                }
                _ => vec![Reply::text(ACCESS_REQUIRED)],
            });
        }

        let step = std::mem::take(&mut session.step);
        let (next, replies) = self.step_transition(step, input).await?;
        self.sessions.session_mut(chat).step = next;
        Ok(replies)
    }

    async fn step_transition(&self, step: Step, input: Input) -> Result<(Step, Vec<Reply>)> {
        match step {
            // An authenticated session never legitimately sits at Idle or
            // AwaitAccessCode; treat both as the menu.
            Step::Idle | Step::AwaitAccessCode | Step::Menu => self.menu_transition(input).await,
            Step::Sale(step) => self.sale_transition(step, input).await,
            Step::Prepay(step) => self.prepay_transition(step, input).await,
            Step::Promote(step) => self.promote_transition(step, input).await,
        }
    }

    async fn menu_transition(&self, input: Input) -> Result<(Step, Vec<Reply>)> {
        match input.into_text().as_str() {
            MENU_FULL_PAYMENT => Ok((
                Step::Sale(SaleStep::ClientName),
                vec![Reply::text(PROMPT_CLIENT_NAME)],
            )),
            MENU_PREPAYMENT => Ok((
                Step::Prepay(PrepayStep::ClientName),
                vec![Reply::text(PROMPT_CLIENT_NAME)],
            )),
            MENU_PROMOTION => self.start_promotion().await,
            _ => Ok((Step::Menu, vec![menu_reply()])),
        }
    }

    async fn sale_transition(&self, step: SaleStep, input: Input) -> Result<(Step, Vec<Reply>)> {
        let text = input.into_text();
        match step {
            SaleStep::ClientName => Ok((
                Step::Sale(SaleStep::Phone { client_name: text }),
                vec![Reply::text(PROMPT_PHONE)],
            )),
            SaleStep::Phone { client_name } => Ok((
                Step::Sale(SaleStep::City {
                    client_name,
                    phone: text,
                }),
                vec![Reply::text(PROMPT_CITY)],
            )),
            SaleStep::City { client_name, phone } => Ok((
                Step::Sale(SaleStep::ItemCount {
                    contact: Contact {
                        client_name,
                        phone,
                        city: text,
                    },
                }),
                vec![Reply::text(PROMPT_ITEM_COUNT)],
            )),
            SaleStep::ItemCount { contact } => match parse_item_count(&text) {
                Some(count) => match self.catalog.products().await {
                    Ok(products) => {
                        let product_names: Vec<String> =
                            products.into_iter().map(|p| p.name).collect();
                        let reply = Reply::with_buttons(PROMPT_ITEM_NAME, product_names.clone());
                        Ok((
                            Step::Sale(SaleStep::ItemName {
                                contact,
                                count,
                                items: Vec::new(),
                                product_names,
                            }),
                            vec![reply],
                        ))
                    }
                    Err(e) => Ok(abort_to_menu(&e)),
                },
                None => Ok((
                    Step::Sale(SaleStep::ItemCount { contact }),
                    vec![Reply::text(INVALID_ITEM_COUNT)],
                )),
            },
            SaleStep::ItemName {
                contact,
                count,
                items,
                product_names,
            } => {
                if product_names.iter().any(|name| *name == text) {
                    Ok((
                        Step::Sale(SaleStep::ItemQuantity {
                            contact,
                            count,
                            items,
                            product_names,
                            product: text,
                        }),
                        vec![Reply::text(PROMPT_QUANTITY)],
                    ))
                } else {
                    let reply = Reply::with_buttons(INVALID_PRODUCT, product_names.clone());
                    Ok((
                        Step::Sale(SaleStep::ItemName {
                            contact,
                            count,
                            items,
                            product_names,
                        }),
                        vec![reply],
                    ))
                }
            }
            SaleStep::ItemQuantity {
                contact,
                count,
                mut items,
                product_names,
                product,
            } => match parse_quantity(&text) {
                Some(quantity) => {
                    items.push(LineItem { product, quantity });
                    if items.len() < count {
                        // The full-payment loop asks by name, without a
                        // choice keyboard; membership is still validated.
                        Ok((
                            Step::Sale(SaleStep::ItemName {
                                contact,
                                count,
                                items,
                                product_names,
                            }),
                            vec![Reply::text(PROMPT_NEXT_ITEM_NAME)],
                        ))
                    } else {
                        Ok((
                            Step::Sale(SaleStep::Discount { contact, items }),
                            vec![Reply::text(PROMPT_DISCOUNT)],
                        ))
                    }
                }
                None => Ok((
                    Step::Sale(SaleStep::ItemQuantity {
                        contact,
                        count,
                        items,
                        product_names,
                        product,
                    }),
                    vec![Reply::text(INVALID_QUANTITY)],
                )),
            },
            SaleStep::Discount { contact, items } => match parse_discount(&text) {
                Some(discount) => Ok((
                    Step::Sale(SaleStep::Doctor {
                        contact,
                        items,
                        discount,
                    }),
                    vec![doctor_reply(PROMPT_DOCTOR)],
                )),
                None => Ok((
                    Step::Sale(SaleStep::Discount { contact, items }),
                    vec![Reply::text(INVALID_DISCOUNT)],
                )),
            },
            SaleStep::Doctor {
                contact,
                items,
                discount,
            } => self.commit_sale(contact, items, discount, text).await,
        }
    }

    async fn commit_sale(
        &self,
        contact: Contact,
        items: Vec<LineItem>,
        discount: Decimal,
        doctor: String,
    ) -> Result<(Step, Vec<Reply>)> {
        let today = Local::now().date_naive();

        let mut summary = format!(
            "Продажа:\nДата: {today}\nИмя клиента: {}\nНомер телефона: {}\nГород: {}\nНаименование и количество:\n",
            contact.client_name, contact.phone, contact.city
        );
        for item in &items {
            summary.push_str(&format!("- {}: {} шт\n", item.product, item.quantity));
        }
        summary.push_str(&format!("Процент скидки: {discount}\nВрач: {doctor}"));
        let mut replies = vec![Reply::text(summary)];

        // Fresh fetch: the per-flow snapshot may be stale by commit time.
        let products = match self.catalog.products().await {
            Ok(products) => products,
            Err(e) => {
                let (step, mut failure) = abort_to_menu(&e);
                replies.append(&mut failure);
                return Ok((step, replies));
            }
        };

        for item in items {
            let Some(product) = products.iter().find(|p| p.name == item.product) else {
                replies.push(Reply::text(format!(
                    "❌ Не найдена информация о товаре: {}",
                    item.product
                )));
                continue;
            };
            let total = compute_total(item.quantity, product.unit_price, discount)?;
            let record = SaleRecord {
                client_name: contact.client_name.clone(),
                phone: contact.phone.clone(),
                city: contact.city.clone(),
                product: product.name.clone(),
                quantity: item.quantity,
                unit_price: product.unit_price,
                discount_percent: discount,
                total,
                supplier: product.supplier.clone(),
                doctor: doctor.clone(),
                sale_date: today,
                settlement_date: today,
            };
            if let Err(e) = self.ledger.append_sale(record).await {
                // Already-appended rows stay: at-least-once per commit batch.
                let (step, mut failure) = abort_to_menu(&e);
                replies.append(&mut failure);
                return Ok((step, replies));
            }
            info!(product = %item.product, quantity = item.quantity, "sale recorded");
        }

        replies.push(menu_reply());
        Ok((Step::Menu, replies))
    }

    async fn prepay_transition(
        &self,
        step: PrepayStep,
        input: Input,
    ) -> Result<(Step, Vec<Reply>)> {
        let text = input.into_text();
        match step {
            PrepayStep::ClientName => Ok((
                Step::Prepay(PrepayStep::Phone { client_name: text }),
                vec![Reply::text(PROMPT_PHONE)],
            )),
            PrepayStep::Phone { client_name } => Ok((
                Step::Prepay(PrepayStep::City {
                    client_name,
                    phone: text,
                }),
                vec![Reply::text(PROMPT_CITY)],
            )),
            PrepayStep::City { client_name, phone } => Ok((
                Step::Prepay(PrepayStep::ItemCount {
                    contact: Contact {
                        client_name,
                        phone,
                        city: text,
                    },
                }),
                vec![Reply::text(PROMPT_ITEM_COUNT)],
            )),
            PrepayStep::ItemCount { contact } => match parse_item_count(&text) {
                Some(count) => match self.catalog.products().await {
                    Ok(products) => {
                        let product_names: Vec<String> =
                            products.into_iter().map(|p| p.name).collect();
                        let reply = Reply::with_buttons(PROMPT_ITEM_NAME, product_names.clone());
                        Ok((
                            Step::Prepay(PrepayStep::ItemName {
                                contact,
                                count,
                                items: Vec::new(),
                                product_names,
                            }),
                            vec![reply],
                        ))
                    }
                    Err(e) => Ok(abort_to_menu(&e)),
                },
                None => Ok((
                    Step::Prepay(PrepayStep::ItemCount { contact }),
                    vec![Reply::text(INVALID_ITEM_COUNT)],
                )),
            },
            PrepayStep::ItemName {
                contact,
                count,
                items,
                product_names,
            } => {
                if product_names.iter().any(|name| *name == text) {
                    Ok((
                        Step::Prepay(PrepayStep::ItemQuantity {
                            contact,
                            count,
                            items,
                            product_names,
                            product: text,
                        }),
                        vec![Reply::text(PROMPT_QUANTITY)],
                    ))
                } else {
                    let reply = Reply::with_buttons(INVALID_PRODUCT, product_names.clone());
                    Ok((
                        Step::Prepay(PrepayStep::ItemName {
                            contact,
                            count,
                            items,
                            product_names,
                        }),
                        vec![reply],
                    ))
                }
            }
            PrepayStep::ItemQuantity {
                contact,
                count,
                items,
                product_names,
                product,
            } => match parse_quantity(&text) {
                Some(quantity) => Ok((
                    Step::Prepay(PrepayStep::Amount {
                        contact,
                        count,
                        items,
                        product_names,
                        product,
                        quantity,
                    }),
                    vec![Reply::text(PROMPT_PREPAYMENT_AMOUNT)],
                )),
                None => Ok((
                    Step::Prepay(PrepayStep::ItemQuantity {
                        contact,
                        count,
                        items,
                        product_names,
                        product,
                    }),
                    vec![Reply::text(INVALID_QUANTITY)],
                )),
            },
            PrepayStep::Amount {
                contact,
                count,
                mut items,
                product_names,
                product,
                quantity,
            } => match parse_amount(&text) {
                Some(prepayment) => {
                    items.push(PrepaidLineItem {
                        product,
                        quantity,
                        prepayment,
                    });
                    if items.len() < count {
                        let reply = Reply::with_buttons(PROMPT_NEXT_ITEM, product_names.clone());
                        Ok((
                            Step::Prepay(PrepayStep::ItemName {
                                contact,
                                count,
                                items,
                                product_names,
                            }),
                            vec![reply],
                        ))
                    } else {
                        Ok((
                            Step::Prepay(PrepayStep::Discount { contact, items }),
                            vec![Reply::text(PROMPT_DISCOUNT)],
                        ))
                    }
                }
                None => Ok((
                    Step::Prepay(PrepayStep::Amount {
                        contact,
                        count,
                        items,
                        product_names,
                        product,
                        quantity,
                    }),
                    vec![Reply::text(INVALID_PREPAYMENT_AMOUNT)],
                )),
            },
            PrepayStep::Discount { contact, items } => match parse_discount(&text) {
                Some(discount) => Ok((
                    Step::Prepay(PrepayStep::Doctor {
                        contact,
                        items,
                        discount,
                    }),
                    vec![doctor_reply(PROMPT_DOCTOR_NAME)],
                )),
                None => Ok((
                    Step::Prepay(PrepayStep::Discount { contact, items }),
                    vec![Reply::text(INVALID_DISCOUNT)],
                )),
            },
            PrepayStep::Doctor {
                contact,
                items,
                discount,
            } => self.commit_prepayment(contact, items, discount, text).await,
        }
    }

    async fn commit_prepayment(
        &self,
        contact: Contact,
        items: Vec<PrepaidLineItem>,
        discount: Decimal,
        doctor: String,
    ) -> Result<(Step, Vec<Reply>)> {
        let today = Local::now().date_naive();

        let products = match self.catalog.products().await {
            Ok(products) => products,
            Err(e) => return Ok(abort_to_menu(&e)),
        };

        let mut lines = Vec::new();
        for item in &items {
            match products.iter().find(|p| p.name == item.product) {
                Some(product) => lines.push(format!(
                    "- {}: {} шт\n  Цена: {} тг\n  Поставщик: {}\n  Предоплата: {} тг",
                    item.product, item.quantity, product.unit_price, product.supplier,
                    item.prepayment
                )),
                None => lines.push(format!(
                    "- {}: {} шт\n  ❌ Информация о товаре не найдена\n  Предоплата: {} тг",
                    item.product, item.quantity, item.prepayment
                )),
            }
        }
        // Discount is shown in the summary only; the Prepayments row schema
        // has no discount column.
        let summary = format!(
            "Предоплата:\nДата: {today}\nИмя клиента: {}\nНомер телефона: {}\nГород: {}\nТовары:\n{}\nПроцент скидки: {discount}\nВрач: {doctor}",
            contact.client_name,
            contact.phone,
            contact.city,
            lines.join("\n")
        );
        let mut replies = vec![Reply::text(summary)];

        for item in items {
            let Some(product) = products.iter().find(|p| p.name == item.product) else {
                replies.push(Reply::text(format!(
                    "❌ Не найдена информация о товаре: {}",
                    item.product
                )));
                continue;
            };
            let record = PrepaymentRecord {
                client_name: contact.client_name.clone(),
                phone: contact.phone.clone(),
                city: contact.city.clone(),
                product: product.name.clone(),
                quantity: item.quantity,
                unit_price: product.unit_price,
                supplier: product.supplier.clone(),
                prepayment: item.prepayment,
                date: today,
                doctor: doctor.clone(),
            };
            if let Err(e) = self.ledger.append_prepayment(record).await {
                replies.push(Reply::text(format!("❌ Ошибка при сохранении данных: {e}")));
                replies.push(menu_reply());
                return Ok((Step::Menu, replies));
            }
            info!(product = %item.product, "prepayment recorded");
            replies.push(Reply::text(format!(
                "✅ Добавлена запись для {}",
                item.product
            )));
        }

        replies.push(menu_reply());
        Ok((Step::Menu, replies))
    }

    async fn start_promotion(&self) -> Result<(Step, Vec<Reply>)> {
        let records = match self.ledger.list_prepayments().await {
            Ok(records) => records,
            Err(e) => return Ok(abort_to_menu(&e)),
        };
        if records.is_empty() {
            return Ok((
                Step::Menu,
                vec![Reply::text(NO_PREPAYMENTS), menu_reply()],
            ));
        }
        let entries = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                (
                    record.summary_label(),
                    format!("{PROMOTION_TOKEN_PREFIX}{index}"),
                )
            })
            .collect();
        Ok((
            Step::Promote(PromoteStep::Select),
            vec![Reply::with_inline(PROMPT_SELECT_PREPAYMENT, entries)],
        ))
    }

    async fn promote_transition(
        &self,
        step: PromoteStep,
        input: Input,
    ) -> Result<(Step, Vec<Reply>)> {
        match step {
            PromoteStep::Select => {
                let token = input.into_text();
                let Some(index) = parse_promotion_token(&token) else {
                    // Rebuild the selection keyboard from a fresh listing so
                    // the operator can still pick a record.
                    return self.start_promotion().await;
                };
                // The token encodes a list position, so bounds-check it
                // against a fresh listing before trusting it.
                let records = match self.ledger.list_prepayments().await {
                    Ok(records) => records,
                    Err(e) => return Ok(abort_to_menu(&e)),
                };
                let Some(selected) = records.get(index).cloned() else {
                    return Ok((
                        Step::Menu,
                        vec![Reply::text(PREPAYMENT_NOT_FOUND), menu_reply()],
                    ));
                };
                let prompt = format!(
                    "Выбрана запись:\nКлиент: {}\nПрепарат: {}\nСумма предоплаты: {}тг\nДата: {}\n\nВведите сумму доплаты:",
                    selected.client_name, selected.product, selected.prepayment, selected.date
                );
                Ok((
                    Step::Promote(PromoteStep::Surcharge { index, selected }),
                    vec![Reply::text(prompt)],
                ))
            }
            PromoteStep::Surcharge { index, selected } => {
                let Some(surcharge) = parse_amount(&input.into_text()) else {
                    return Ok((
                        Step::Promote(PromoteStep::Surcharge { index, selected }),
                        vec![Reply::text(INVALID_SURCHARGE)],
                    ));
                };
                match self.execute_promotion(index, &selected).await {
                    Ok(()) => {
                        let done = format!(
                            "✅ Доплата успешно обработана\nКлиент: {}\nПрепарат: {}\nСумма доплаты: {}тг\nЗапись перемещена в таблицу продаж",
                            selected.client_name, selected.product, surcharge
                        );
                        Ok((Step::Menu, vec![Reply::text(done), menu_reply()]))
                    }
                    Err(e) => Ok(abort_to_menu(&e)),
                }
            }
        }
    }

    /// Moves one prepayment row into the Sales table.
    ///
    /// The row's identity is re-validated against the live table immediately
    /// before mutating anything; any drift since selection aborts the attempt
    /// with a conflict and leaves both tables unchanged.
    async fn execute_promotion(&self, index: usize, selected: &PrepaymentRecord) -> Result<()> {
        let records = self.ledger.list_prepayments().await?;
        match records.get(index) {
            Some(current) if current == selected => {}
            _ => {
                debug!(index, "promotion target drifted since selection");
                return Err(SalesError::PromotionConflict(format!(
                    "запись '{}' была изменена или удалена",
                    selected.summary_label()
                )));
            }
        }

        let record = SaleRecord {
            client_name: selected.client_name.clone(),
            phone: selected.phone.clone(),
            city: selected.city.clone(),
            product: selected.product.clone(),
            quantity: selected.quantity,
            unit_price: selected.unit_price,
            discount_percent: Decimal::ZERO,
            total: selected.unit_price * Decimal::from(selected.quantity),
            supplier: selected.supplier.clone(),
            doctor: selected.doctor.clone(),
            sale_date: selected.date,
            settlement_date: Local::now().date_naive(),
        };
        self.ledger.append_sale(record).await?;
        self.ledger.delete_prepayment(index).await?;
        info!(product = %selected.product, client = %selected.client_name, "prepayment promoted to sale");
        Ok(())
    }
}

fn menu_reply() -> Reply {
    Reply::with_buttons(
        PROMPT_MENU,
        vec![
            MENU_FULL_PAYMENT.to_string(),
            MENU_PREPAYMENT.to_string(),
            MENU_PROMOTION.to_string(),
        ],
    )
}

fn doctor_reply(prompt: &str) -> Reply {
    Reply::with_buttons(prompt, DOCTORS.map(String::from).to_vec())
}

fn abort_to_menu(error: &SalesError) -> (Step, Vec<Reply>) {
    warn!(%error, "flow aborted");
    (
        Step::Menu,
        vec![
            Reply::text(format!("❌ Произошла ошибка: {error}")),
            menu_reply(),
        ],
    )
}

fn parse_item_count(text: &str) -> Option<usize> {
    text.trim().parse().ok().filter(|count| *count >= 1)
}

fn parse_quantity(text: &str) -> Option<u32> {
    text.trim().parse().ok().filter(|quantity| *quantity >= 1)
}

fn parse_discount(text: &str) -> Option<Decimal> {
    text.trim()
        .parse()
        .ok()
        .filter(|discount| *discount >= Decimal::ZERO && *discount <= dec!(100))
}

fn parse_amount(text: &str) -> Option<Decimal> {
    text.trim()
        .parse()
        .ok()
        .filter(|amount| *amount >= Decimal::ZERO)
}

fn parse_promotion_token(token: &str) -> Option<usize> {
    token.strip_prefix(PROMOTION_TOKEN_PREFIX)?.parse().ok()
}
