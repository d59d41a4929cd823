//! Payment repository over the record store.

use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use domain::{Payment, RecordKey};
use store::{from_record, to_record, Item, RecordStore, ScanFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Payment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Payments made to a user
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Payment>>;

    async fn list_all(&self) -> AppResult<Vec<Payment>>;

    /// Payments are keyed by owner, so lookup by id scans for the first match.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Payment>>;

    /// Write a payment, replacing any record with the same id and owner
    async fn save(&self, payment: &Payment) -> AppResult<()>;
}

/// Concrete implementation of PaymentRepository
pub struct PaymentStore {
    store: Arc<dyn RecordStore>,
    table: String,
}

impl PaymentStore {
    pub fn new(store: Arc<dyn RecordStore>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }

    async fn scan(&self, filter: ScanFilter) -> AppResult<Vec<Payment>> {
        let items = self.store.scan(&self.table, &filter).await?;
        Ok(decode(items)?)
    }
}

fn decode(items: Vec<Item>) -> store::StoreResult<Vec<Payment>> {
    items.into_iter().map(from_record).collect()
}

#[async_trait]
impl PaymentRepository for PaymentStore {
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Payment>> {
        self.scan(ScanFilter::matching("userId", user_id)).await
    }

    async fn list_all(&self) -> AppResult<Vec<Payment>> {
        self.scan(ScanFilter::all()).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Payment>> {
        Ok(self.scan(ScanFilter::matching("id", id)).await?.into_iter().next())
    }

    async fn save(&self, payment: &Payment) -> AppResult<()> {
        let key = RecordKey::payment(&payment.id, &payment.user_id);
        self.store.put_item(&self.table, &key, to_record(payment)?).await?;
        Ok(())
    }
}
