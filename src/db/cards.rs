//! Mock virtual card issuance
//!
//! Card numbers and CVVs are random demo values, not real PANs.

use super::{ListQuery, RecordStore};
use crate::core::{
    CardStatus, CardType, FundingSource, Result, Transaction, TransactionStatus, TransactionType,
    VirtualCard,
};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde_json::json;

/// Cards stop working this long after issuance
pub const CARD_VALIDITY_HOURS: i64 = 24;

pub const CARD_CURRENCY: &str = "AED";

/// Parameters for a new virtual card
#[derive(Debug, Clone)]
pub struct CardRequest {
    pub user_id: String,
    pub amount: f64,
    pub funding_source: FundingSource,
    pub card_type: CardType,
}

impl CardRequest {
    pub fn new(user_id: &str, amount: f64, funding_source: FundingSource) -> Self {
        Self {
            user_id: user_id.to_string(),
            amount,
            funding_source,
            card_type: CardType::Visa,
        }
    }

    pub fn card_type(mut self, card_type: CardType) -> Self {
        self.card_type = card_type;
        self
    }
}

/// Issue a card and record the purchase transaction that funds it
pub fn generate_card(store: &RecordStore, request: &CardRequest) -> Result<(VirtualCard, Transaction)> {
    let expires_at = Utc::now() + Duration::hours(CARD_VALIDITY_HOURS);
    let digits = random_digits(15);

    let card = store.insert(&VirtualCard {
        id: String::new(),
        user_id: request.user_id.clone(),
        card_number: card_number(request.card_type, &digits[..12]),
        cvv: digits[12..15].to_string(),
        expiry_date: expires_at.format("%m/%y").to_string(),
        card_type: request.card_type,
        amount: request.amount,
        status: CardStatus::Active,
        funding_source: request.funding_source,
        expires_at,
        created_at: None,
    })?;

    let transaction = store.insert(&Transaction {
        id: String::new(),
        user_id: request.user_id.clone(),
        card_id: Some(card.id.clone()),
        amount: request.amount,
        currency: CARD_CURRENCY.to_string(),
        merchant_name: None,
        transaction_type: TransactionType::Purchase,
        status: TransactionStatus::Completed,
        description: Some(format!(
            "Virtual card generated from {}",
            request.funding_source.label()
        )),
        created_at: None,
    })?;

    log::info!("Issued {} card {} for {}", CARD_CURRENCY, card.id, request.user_id);

    Ok((card, transaction))
}

/// Mark active cards whose validity ended before `now` as expired.
///
/// Returns the number of cards changed.
pub fn expire_cards(store: &RecordStore, now: DateTime<Utc>) -> Result<usize> {
    let active: Vec<VirtualCard> = store.list_as(&ListQuery::new().filter("status", "active"))?;

    let mut expired = 0;
    for card in active.iter().filter(|c| c.expires_at <= now) {
        store.update_as::<VirtualCard>(&card.id, json!({ "status": CardStatus::Expired }))?;
        expired += 1;
    }

    if expired > 0 {
        log::info!("Expired {} virtual card(s)", expired);
    }
    Ok(expired)
}

fn card_number(card_type: CardType, digits: &str) -> String {
    let bin = match card_type {
        CardType::Visa => "4532",
        CardType::Mastercard => "5425",
    };
    format!("{} {} {} {}", bin, &digits[0..4], &digits[4..8], &digits[8..12])
}

/// `count` uniformly distributed decimal digits
fn random_digits(count: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
