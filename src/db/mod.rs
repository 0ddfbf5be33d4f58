//! Database module for the wallet's record collections
//!
//! Uses SQLite as a local stand-in for the hosted record store the dashboard
//! talks to. Every collection shares one table of JSON documents:
//! - users, virtual cards, transactions
//! - credit options, support tickets

mod auth;
mod cards;

pub use auth::AuthSession;
pub use cards::{expire_cards, generate_card, CardRequest, CARD_CURRENCY, CARD_VALIDITY_HOURS};

use crate::core::{
    Config, CreditOption, Error, Result, SupportTicket, Transaction, User, VirtualCard,
};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use std::str::FromStr;

/// Named record collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Users,
    VirtualCards,
    Transactions,
    CreditOptions,
    SupportTickets,
}

impl Collection {
    pub fn all() -> &'static [Collection] {
        &[
            Collection::Users,
            Collection::VirtualCards,
            Collection::Transactions,
            Collection::CreditOptions,
            Collection::SupportTickets,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::VirtualCards => "virtual_cards",
            Collection::Transactions => "transactions",
            Collection::CreditOptions => "credit_options",
            Collection::SupportTickets => "support_tickets",
        }
    }

    /// Prefix for generated identifiers (`card_…`, `txn_…`)
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Collection::Users => "user",
            Collection::VirtualCards => "card",
            Collection::Transactions => "txn",
            Collection::CreditOptions => "credit",
            Collection::SupportTickets => "ticket",
        }
    }
}

impl FromStr for Collection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Collection::all()
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::UnknownCollection(s.to_string()))
    }
}

/// A stored JSON document.
///
/// `data` always carries `id`, `createdAt` and `updatedAt` alongside the
/// caller's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub collection: Collection,
    pub id: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Deserialize the document into a typed wallet record
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }
}

/// Typed records and the collection they live in
pub trait WalletRecord: Serialize + DeserializeOwned {
    const COLLECTION: Collection;
}

impl WalletRecord for User {
    const COLLECTION: Collection = Collection::Users;
}

impl WalletRecord for VirtualCard {
    const COLLECTION: Collection = Collection::VirtualCards;
}

impl WalletRecord for Transaction {
    const COLLECTION: Collection = Collection::Transactions;
}

impl WalletRecord for CreditOption {
    const COLLECTION: Collection = Collection::CreditOptions;
}

impl WalletRecord for SupportTicket {
    const COLLECTION: Collection = Collection::SupportTickets;
}

/// Equality filter plus limit for [`RecordStore::list`]
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    filter: Vec<(String, Value)>,
    limit: Option<usize>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep records whose top-level `field` equals `value`
    pub fn filter(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filter.push((field.to_string(), value.into()));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, data: &Value) -> bool {
        self.filter
            .iter()
            .all(|(field, value)| data.get(field) == Some(value))
    }
}

const RESERVED_FIELDS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// Record store manager
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open the store at the location named by `config`
    pub fn new(config: &Config) -> Result<Self> {
        Self::open(&config.database_path()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Store that lives only as long as this value
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS records (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                data TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                UNIQUE (collection, id)
            );

            CREATE INDEX IF NOT EXISTS idx_records_collection ON records(collection, seq);
            "#,
        )?;

        Ok(())
    }

    /// Insert a new document with a generated identifier.
    ///
    /// `fields` must be a JSON object; any `id`/`createdAt`/`updatedAt` it
    /// carries is replaced.
    pub fn create(&self, collection: Collection, fields: Value) -> Result<Record> {
        let mut data = into_object(fields)?;
        for field in RESERVED_FIELDS {
            data.remove(field);
        }

        let id = format!("{}_{}", collection.id_prefix(), uuid::Uuid::new_v4().simple());
        let now = current_time();
        stamp(&mut data, &id, now, now);
        let data = Value::Object(data);

        self.conn.execute(
            "INSERT INTO records (collection, id, data, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![collection.name(), id, data.to_string(), timestamp(now), timestamp(now)],
        )?;

        log::debug!("Created {} record {}", collection.name(), id);

        Ok(Record {
            collection,
            id,
            data,
            created_at: now,
            updated_at: now,
        })
    }

    /// Fetch a single document
    pub fn get(&self, collection: Collection, id: &str) -> Result<Option<Record>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, data, created_at, updated_at FROM records WHERE collection = ?1 AND id = ?2",
                params![collection.name(), id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;

        row.map(|(id, data, created, updated)| to_record(collection, id, &data, &created, &updated))
            .transpose()
    }

    /// List documents matching `query`, newest first
    pub fn list(&self, collection: Collection, query: &ListQuery) -> Result<Vec<Record>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, data, created_at, updated_at
             FROM records
             WHERE collection = ?1
             ORDER BY seq DESC",
        )?;

        let rows = stmt
            .query_map(params![collection.name()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut records = Vec::new();
        for (id, data, created, updated) in rows {
            if query.limit.is_some_and(|limit| records.len() >= limit) {
                break;
            }
            let record = to_record(collection, id, &data, &created, &updated)?;
            if query.matches(&record.data) {
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Shallow-merge `patch` into an existing document.
    ///
    /// Returns `None` when no document has that identifier.
    pub fn update(&self, collection: Collection, id: &str, patch: Value) -> Result<Option<Record>> {
        let Some(existing) = self.get(collection, id)? else {
            return Ok(None);
        };

        let mut data = into_object(existing.data)?;
        for (field, value) in into_object(patch)? {
            if RESERVED_FIELDS.contains(&field.as_str()) {
                continue;
            }
            data.insert(field, value);
        }

        let now = current_time();
        stamp(&mut data, id, existing.created_at, now);
        let data = Value::Object(data);

        self.conn.execute(
            "UPDATE records SET data = ?1, updated_at = ?2 WHERE collection = ?3 AND id = ?4",
            params![data.to_string(), timestamp(now), collection.name(), id],
        )?;

        Ok(Some(Record {
            collection,
            id: id.to_string(),
            data,
            created_at: existing.created_at,
            updated_at: now,
        }))
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: Collection) -> Result<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM records WHERE collection = ?1",
            params![collection.name()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    // ===== Typed access =====

    /// Store a typed record, returning it with its generated id and timestamps
    pub fn insert<T: WalletRecord>(&self, record: &T) -> Result<T> {
        let fields = serde_json::to_value(record)?;
        self.create(T::COLLECTION, fields)?.decode()
    }

    pub fn find<T: WalletRecord>(&self, id: &str) -> Result<Option<T>> {
        self.get(T::COLLECTION, id)?.map(|r| r.decode()).transpose()
    }

    pub fn list_as<T: WalletRecord>(&self, query: &ListQuery) -> Result<Vec<T>> {
        self.list(T::COLLECTION, query)?
            .iter()
            .map(Record::decode)
            .collect()
    }

    pub fn update_as<T: WalletRecord>(&self, id: &str, patch: Value) -> Result<Option<T>> {
        self.update(T::COLLECTION, id, patch)?
            .map(|r| r.decode())
            .transpose()
    }
}

fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::Serialization(format!("expected a JSON object, got {}", other))),
    }
}

fn stamp(data: &mut Map<String, Value>, id: &str, created: DateTime<Utc>, updated: DateTime<Utc>) {
    data.insert("id".to_string(), Value::String(id.to_string()));
    data.insert("createdAt".to_string(), Value::String(timestamp(created)));
    data.insert("updatedAt".to_string(), Value::String(timestamp(updated)));
}

/// Current time at the precision timestamps are stored with
fn current_time() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::Serialization(format!("bad timestamp '{}': {}", raw, e)))
}

fn to_record(collection: Collection, id: String, data: &str, created: &str, updated: &str) -> Result<Record> {
    Ok(Record {
        collection,
        id,
        data: serde_json::from_str(data)?,
        created_at: parse_timestamp(created)?,
        updated_at: parse_timestamp(updated)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CreditOptionType, TicketStatus};
    use serde_json::json;

    fn create_test_store() -> RecordStore {
        RecordStore::in_memory().unwrap()
    }

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let store = create_test_store();
        let record = store
            .create(Collection::SupportTickets, json!({ "subject": "Card declined", "id": "forged" }))
            .unwrap();

        assert!(record.id.starts_with("ticket_"));
        assert_ne!(record.id, "forged");
        assert_eq!(record.data["id"], record.id.as_str());
        assert_eq!(record.data["subject"], "Card declined");
        assert!(record.data["createdAt"].is_string());
        assert_eq!(store.count(Collection::SupportTickets).unwrap(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = create_test_store();
        let a = store.create(Collection::Transactions, json!({})).unwrap();
        let b = store.create(Collection::Transactions, json!({})).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_create_rejects_non_object() {
        let store = create_test_store();
        let result = store.create(Collection::Users, json!(["not", "an", "object"]));
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_list_filters_and_orders_newest_first() {
        let store = create_test_store();
        store.create(Collection::VirtualCards, json!({ "userId": "u1", "status": "active", "n": 1 })).unwrap();
        store.create(Collection::VirtualCards, json!({ "userId": "u2", "status": "active", "n": 2 })).unwrap();
        store.create(Collection::VirtualCards, json!({ "userId": "u1", "status": "used", "n": 3 })).unwrap();
        store.create(Collection::VirtualCards, json!({ "userId": "u1", "status": "active", "n": 4 })).unwrap();

        let query = ListQuery::new().filter("userId", "u1").filter("status", "active");
        let cards = store.list(Collection::VirtualCards, &query).unwrap();
        let order: Vec<_> = cards.iter().map(|c| c.data["n"].as_i64().unwrap()).collect();
        assert_eq!(order, vec![4, 1]);

        let limited = store
            .list(Collection::VirtualCards, &ListQuery::new().filter("userId", "u1").limit(1))
            .unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].data["n"], 4);
    }

    #[test]
    fn test_collections_are_isolated() {
        let store = create_test_store();
        store.create(Collection::Users, json!({ "userId": "u1" })).unwrap();

        let tickets = store.list(Collection::SupportTickets, &ListQuery::new()).unwrap();
        assert!(tickets.is_empty());
    }

    #[test]
    fn test_update_merges_fields() {
        let store = create_test_store();
        let created = store
            .create(Collection::Users, json!({ "phoneNumber": "+971500000000", "simOperator": "du" }))
            .unwrap();

        let updated = store
            .update(Collection::Users, &created.id, json!({ "simOperator": "virgin", "id": "other" }))
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.data["id"], created.id.as_str());
        assert_eq!(updated.data["phoneNumber"], "+971500000000");
        assert_eq!(updated.data["simOperator"], "virgin");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let reloaded = store.get(Collection::Users, &created.id).unwrap().unwrap();
        assert_eq!(reloaded, updated);
    }

    #[test]
    fn test_update_missing_record() {
        let store = create_test_store();
        let result = store.update(Collection::Users, "user_missing", json!({ "a": 1 })).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_typed_round_trip() {
        let store = create_test_store();
        let option = store
            .insert(&CreditOption::new("u1", CreditOptionType::AirtimeSplitpay, 200.0))
            .unwrap();

        assert!(option.id.starts_with("credit_"));
        assert!(option.created_at.is_some());

        let found: CreditOption = store.find(&option.id).unwrap().unwrap();
        assert_eq!(found, option);

        let ticket = store.insert(&SupportTicket::new("u1", "Help", "Card declined")).unwrap();
        let resolved: SupportTicket = store
            .update_as(&ticket.id, json!({ "status": "resolved" }))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.status, TicketStatus::Resolved);
    }

    #[test]
    fn test_collection_names() {
        assert_eq!("virtual_cards".parse::<Collection>().unwrap(), Collection::VirtualCards);
        assert!(matches!("wallets".parse::<Collection>(), Err(Error::UnknownCollection(_))));
    }
}
