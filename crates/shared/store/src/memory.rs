//! In-process record store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{with_key, Item, RecordKey, RecordStore, ScanFilter, StoreResult};

type Table = BTreeMap<RecordKey, Item>;

/// Record store held entirely in memory.
///
/// Tables are created on first write. Scans return records in key order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held in `table`.
    pub async fn len(&self, table: &str) -> usize {
        self.tables.read().await.get(table).map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get_item(&self, table: &str, key: &RecordKey) -> StoreResult<Option<Item>> {
        let tables = self.tables.read().await;
        Ok(tables.get(table).and_then(|t| t.get(key)).cloned())
    }

    async fn put_item(&self, table: &str, key: &RecordKey, item: Item) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .entry(table.to_string())
            .or_default()
            .insert(key.clone(), with_key(item, key));
        debug!(table = %table, key = %key, "Stored record");
        Ok(())
    }

    async fn update_item(
        &self,
        table: &str,
        key: &RecordKey,
        changes: Item,
    ) -> StoreResult<Option<Item>> {
        let mut tables = self.tables.write().await;
        let Some(record) = tables.get_mut(table).and_then(|t| t.get_mut(key)) else {
            return Ok(None);
        };

        record.extend(changes);
        Ok(Some(record.clone()))
    }

    async fn scan(&self, table: &str, filter: &ScanFilter) -> StoreResult<Vec<Item>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(table)
            .map(|t| t.values().filter(|item| filter.matches(item)).cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn item(value: Value) -> Item {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryStore::new();
        let key = RecordKey::referral("r1");

        store
            .put_item("referrals", &key, item(json!({"id": "r1", "status": "IN_PROGRESS"})))
            .await
            .unwrap();

        let found = store.get_item("referrals", &key).await.unwrap().unwrap();
        assert_eq!(found["status"], "IN_PROGRESS");
        assert_eq!(found["PK"], "REFERRAL#r1");

        assert!(store.get_item("payments", &key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_whole_record() {
        let store = MemoryStore::new();
        let key = RecordKey::customer("c1");

        store.put_item("customers", &key, item(json!({"id": "c1", "name": "A", "email": "a@x.io"}))).await.unwrap();
        store.put_item("customers", &key, item(json!({"id": "c1", "name": "B"}))).await.unwrap();

        let found = store.get_item("customers", &key).await.unwrap().unwrap();
        assert_eq!(found["name"], "B");
        assert!(found.get("email").is_none());
        assert_eq!(store.len("customers").await, 1);
    }

    #[tokio::test]
    async fn test_update_existing_record() {
        let store = MemoryStore::new();
        let key = RecordKey::referral("r1");
        store
            .put_item("referrals", &key, item(json!({"id": "r1", "status": "IN_PROGRESS", "clientName": "Acme"})))
            .await
            .unwrap();

        let updated = store
            .update_item("referrals", &key, item(json!({"status": "PAID"})))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated["status"], "PAID");
        assert_eq!(updated["clientName"], "Acme");
    }

    #[tokio::test]
    async fn test_update_missing_record_writes_nothing() {
        let store = MemoryStore::new();
        let key = RecordKey::referral("ghost");

        let result = store
            .update_item("referrals", &key, item(json!({"status": "PAID"})))
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(store.get_item("referrals", &key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scan_with_filter() {
        let store = MemoryStore::new();
        for (id, user) in [("p1", "u1"), ("p2", "u2"), ("p3", "u1")] {
            store
                .put_item("payments", &RecordKey::payment(id, user), item(json!({"id": id, "userId": user})))
                .await
                .unwrap();
        }

        let mine = store.scan("payments", &ScanFilter::matching("userId", "u1")).await.unwrap();
        assert_eq!(mine.len(), 2);

        let everything = store.scan("payments", &ScanFilter::all()).await.unwrap();
        assert_eq!(everything.len(), 3);

        assert!(store.scan("unknown", &ScanFilter::all()).await.unwrap().is_empty());
    }
}
