//! Record store adapter.
//!
//! Every entity table is addressed through the [`RecordStore`] trait so the
//! services never see the backing database. Two implementations ship:
//! [`DynamoStore`] for AWS and [`MemoryStore`] for local runs and tests.

mod dynamo;
mod error;
mod memory;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

pub use domain::RecordKey;
pub use dynamo::DynamoStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

/// A stored record as a JSON object.
pub type Item = Map<String, Value>;

/// Conjunction of attribute equality conditions applied to a scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanFilter {
    conditions: Vec<(String, Value)>,
}

impl ScanFilter {
    /// Match every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Match records whose `attribute` equals `value`.
    pub fn matching(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and(attribute, value)
    }

    pub fn and(mut self, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((attribute.into(), value.into()));
        self
    }

    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate the filter against an in-memory record.
    pub fn matches(&self, item: &Item) -> bool {
        self.conditions
            .iter()
            .all(|(attr, expected)| item.get(attr) == Some(expected))
    }
}

/// Key-value record store operations used by the repositories.
///
/// No operation is retried; failures surface as [`StoreError`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch one record by key.
    async fn get_item(&self, table: &str, key: &RecordKey) -> StoreResult<Option<Item>>;

    /// Write a record, replacing anything stored under `key`.
    async fn put_item(&self, table: &str, key: &RecordKey, item: Item) -> StoreResult<()>;

    /// Set `changes` on an existing record and return the full updated
    /// record, or `None` when nothing is stored under `key`.
    async fn update_item(
        &self,
        table: &str,
        key: &RecordKey,
        changes: Item,
    ) -> StoreResult<Option<Item>>;

    /// Full-table scan, following pagination to the end.
    async fn scan(&self, table: &str, filter: &ScanFilter) -> StoreResult<Vec<Item>>;
}

/// Convert an entity into a storable record.
pub fn to_record<T: Serialize>(entity: &T) -> StoreResult<Item> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::serialization(format!(
            "expected an object, got {}",
            other
        ))),
    }
}

/// Convert a stored record back into an entity. Key attributes are ignored.
pub fn from_record<T: DeserializeOwned>(item: Item) -> StoreResult<T> {
    Ok(serde_json::from_value(Value::Object(item))?)
}

/// Copy the key attributes into a record before it is written.
pub(crate) fn with_key(mut item: Item, key: &RecordKey) -> Item {
    item.insert(domain::PARTITION_KEY_ATTR.to_string(), Value::String(key.pk.clone()));
    item.insert(domain::SORT_KEY_ATTR.to_string(), Value::String(key.sk.clone()));
    item
}
