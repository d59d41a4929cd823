//! Referral repository over the record store.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use common::AppResult;
use domain::{RecordKey, Referral};
use store::{from_record, to_record, Item, RecordStore, ScanFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Referral repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReferralRepository: Send + Sync {
    /// All referrals owned by a user
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Referral>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Referral>>;

    /// Persist a new referral
    async fn create(&self, referral: &Referral) -> AppResult<()>;

    /// Set `status` and `updatedAt`; `None` when the referral does not exist
    async fn update_status(
        &self,
        id: &str,
        status: &str,
        updated_at: &str,
    ) -> AppResult<Option<Referral>>;
}

/// Concrete implementation of ReferralRepository
pub struct ReferralStore {
    store: Arc<dyn RecordStore>,
    table: String,
}

impl ReferralStore {
    pub fn new(store: Arc<dyn RecordStore>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }
}

#[async_trait]
impl ReferralRepository for ReferralStore {
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Referral>> {
        let items = self
            .store
            .scan(&self.table, &ScanFilter::matching("userId", user_id))
            .await?;

        let referrals = items
            .into_iter()
            .map(from_record)
            .collect::<Result<Vec<Referral>, _>>()?;
        Ok(referrals)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Referral>> {
        let item = self.store.get_item(&self.table, &RecordKey::referral(id)).await?;
        Ok(item.map(from_record).transpose()?)
    }

    async fn create(&self, referral: &Referral) -> AppResult<()> {
        let item = to_record(referral)?;
        self.store
            .put_item(&self.table, &RecordKey::referral(&referral.id), item)
            .await?;
        Ok(())
    }

    async fn update_status(
        &self,
        id: &str,
        status: &str,
        updated_at: &str,
    ) -> AppResult<Option<Referral>> {
        let mut changes = Item::new();
        changes.insert("status".to_string(), Value::from(status));
        changes.insert("updatedAt".to_string(), Value::from(updated_at));

        let item = self
            .store
            .update_item(&self.table, &RecordKey::referral(id), changes)
            .await?;
        Ok(item.map(from_record).transpose()?)
    }
}
