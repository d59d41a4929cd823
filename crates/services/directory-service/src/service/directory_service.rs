//! Directory service - customers, partners, user profiles and lead users.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult, OptionExt};
use domain::{Clock, Customer, LeadUser, Partner, UserProfile};

use crate::repository::{DirectoryEntity, DirectoryRepository};

#[async_trait]
pub trait DirectoryService: Send + Sync {
    async fn list_customers(&self) -> AppResult<Vec<Customer>>;
    async fn create_customer(&self, customer: Customer) -> AppResult<Customer>;
    async fn get_customer(&self, id: &str) -> AppResult<Customer>;
    async fn put_customer(&self, id: &str, customer: Customer) -> AppResult<Customer>;

    async fn list_partners(&self) -> AppResult<Vec<Partner>>;
    async fn create_partner(&self, partner: Partner) -> AppResult<Partner>;
    async fn get_partner(&self, id: &str) -> AppResult<Partner>;
    async fn put_partner(&self, id: &str, partner: Partner) -> AppResult<Partner>;

    async fn get_user_profile(&self, id: &str) -> AppResult<UserProfile>;
    async fn put_user_profile(&self, id: &str, profile: UserProfile) -> AppResult<UserProfile>;

    /// Every user profile reduced to `id`, `name` and `email`
    async fn list_lead_users(&self) -> AppResult<Vec<LeadUser>>;
}

pub struct DirectoryManager {
    customers: Arc<dyn DirectoryRepository<Customer>>,
    partners: Arc<dyn DirectoryRepository<Partner>>,
    profiles: Arc<dyn DirectoryRepository<UserProfile>>,
    clock: Arc<dyn Clock>,
}

impl DirectoryManager {
    pub fn new(
        customers: Arc<dyn DirectoryRepository<Customer>>,
        partners: Arc<dyn DirectoryRepository<Partner>>,
        profiles: Arc<dyn DirectoryRepository<UserProfile>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            customers,
            partners,
            profiles,
            clock,
        }
    }

    /// New record: generated id when none is given, both timestamps set to now.
    async fn create<T: DirectoryEntity>(
        &self,
        repo: &dyn DirectoryRepository<T>,
        mut entity: T,
    ) -> AppResult<T> {
        validate(&entity)?;

        if entity.id().trim().is_empty() {
            entity.set_id(Uuid::new_v4().to_string());
        }
        let now = self.clock.timestamp();
        entity.set_timestamps(now.clone(), now);

        repo.save(&entity).await?;
        info!(kind = T::KIND, id = %entity.id(), "Created");
        Ok(entity)
    }

    /// Upsert under `id`. `createdAt` survives from the stored record, then
    /// from the payload, else it is now.
    async fn put<T: DirectoryEntity>(
        &self,
        repo: &dyn DirectoryRepository<T>,
        id: &str,
        mut entity: T,
    ) -> AppResult<T> {
        validate(&entity)?;
        entity.set_id(id.to_string());

        let stored = repo.find_by_id(id).await?;
        let now = self.clock.timestamp();
        let created_at = stored
            .as_ref()
            .and_then(|s| s.created_at())
            .or_else(|| entity.created_at())
            .map(str::to_string)
            .unwrap_or_else(|| now.clone());
        entity.set_timestamps(created_at, now);

        repo.save(&entity).await?;
        debug!(kind = T::KIND, id, replaced = stored.is_some(), "Saved");
        Ok(entity)
    }
}

fn validate<T: Validate>(entity: &T) -> AppResult<()> {
    entity
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

#[async_trait]
impl DirectoryService for DirectoryManager {
    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.customers.list().await
    }

    async fn create_customer(&self, customer: Customer) -> AppResult<Customer> {
        self.create(self.customers.as_ref(), customer).await
    }

    async fn get_customer(&self, id: &str) -> AppResult<Customer> {
        self.customers.find_by_id(id).await?.ok_or_not_found()
    }

    async fn put_customer(&self, id: &str, customer: Customer) -> AppResult<Customer> {
        self.put(self.customers.as_ref(), id, customer).await
    }

    async fn list_partners(&self) -> AppResult<Vec<Partner>> {
        self.partners.list().await
    }

    async fn create_partner(&self, partner: Partner) -> AppResult<Partner> {
        self.create(self.partners.as_ref(), partner).await
    }

    async fn get_partner(&self, id: &str) -> AppResult<Partner> {
        self.partners.find_by_id(id).await?.ok_or_not_found()
    }

    async fn put_partner(&self, id: &str, partner: Partner) -> AppResult<Partner> {
        self.put(self.partners.as_ref(), id, partner).await
    }

    async fn get_user_profile(&self, id: &str) -> AppResult<UserProfile> {
        self.profiles.find_by_id(id).await?.ok_or_not_found()
    }

    async fn put_user_profile(&self, id: &str, profile: UserProfile) -> AppResult<UserProfile> {
        self.put(self.profiles.as_ref(), id, profile).await
    }

    async fn list_lead_users(&self) -> AppResult<Vec<LeadUser>> {
        let profiles = self.profiles.list().await?;
        Ok(profiles.into_iter().map(LeadUser::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::TableStore;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use domain::{FixedClock, RecordKey, SteppingClock};
    use store::{Item, MemoryStore, RecordStore, ScanFilter, StoreError, StoreResult};

    fn manager_with(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>) -> DirectoryManager {
        DirectoryManager::new(
            Arc::new(TableStore::<Customer>::new(store.clone(), "customers")),
            Arc::new(TableStore::<Partner>::new(store.clone(), "partners")),
            Arc::new(TableStore::<UserProfile>::new(store, "profiles")),
            clock,
        )
    }

    fn manager() -> DirectoryManager {
        let clock = SteppingClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Duration::minutes(1),
        );
        manager_with(Arc::new(MemoryStore::new()), Arc::new(clock))
    }

    fn customer(name: &str, email: &str) -> Customer {
        Customer {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_customer_generates_id_and_timestamps() {
        let service = manager();

        let created = service.create_customer(customer("Ann", "ann@example.com")).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.created_at.as_deref(), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(service.get_customer(&created.id).await.unwrap(), created);
        assert_eq!(service.list_customers().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_keeps_supplied_id() {
        let service = manager();
        let created = service
            .create_partner(Partner {
                id: "solar".into(),
                name: "Solar Co".into(),
                email: "hi@solar.example".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.id, "solar");
        assert_eq!(service.get_partner("solar").await.unwrap().name, "Solar Co");
    }

    #[tokio::test]
    async fn test_invalid_payload_is_rejected_before_write() {
        let memory = Arc::new(MemoryStore::new());
        let service = manager_with(memory.clone(), Arc::new(FixedClock(Utc::now())));

        let result = service.create_customer(customer("", "ann@example.com")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = service.put_customer("c1", customer("Ann", "not-an-email")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        assert_eq!(memory.len("customers").await, 0);
    }

    #[tokio::test]
    async fn test_put_keeps_stored_created_at() {
        let service = manager();
        let created = service.create_customer(customer("Ann", "ann@example.com")).await.unwrap();

        let mut replacement = customer("Ann B", "ann@example.com");
        replacement.created_at = Some("1999-01-01T00:00:00Z".into());
        let updated = service.put_customer(&created.id, replacement).await.unwrap();

        assert_eq!(updated.name, "Ann B");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_put_new_record_uses_payload_created_at_or_now() {
        let service = manager();

        let mut with_created = customer("Ann", "ann@example.com");
        with_created.created_at = Some("2023-06-01T00:00:00Z".into());
        let first = service.put_customer("c1", with_created).await.unwrap();
        assert_eq!(first.id, "c1");
        assert_eq!(first.created_at.as_deref(), Some("2023-06-01T00:00:00Z"));

        let second = service.put_customer("c2", customer("Bo", "bo@example.com")).await.unwrap();
        assert_eq!(second.created_at, second.updated_at);
    }

    #[tokio::test]
    async fn test_missing_entities_are_not_found() {
        let service = manager();
        assert!(matches!(service.get_customer("nope").await, Err(AppError::NotFound)));
        assert!(matches!(service.get_partner("nope").await, Err(AppError::NotFound)));
        assert!(matches!(service.get_user_profile("nope").await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_lead_users_project_profiles() {
        let service = manager();
        service
            .put_user_profile(
                "u1",
                UserProfile {
                    name: "Dana".into(),
                    email: "dana@example.com".into(),
                    phone: Some("555-0100".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let leads = service.list_lead_users().await.unwrap();
        assert_eq!(
            leads,
            vec![LeadUser {
                id: "u1".into(),
                name: "Dana".into(),
                email: "dana@example.com".into(),
            }]
        );
    }

    struct FailingStore;

    #[async_trait]
    impl RecordStore for FailingStore {
        async fn get_item(&self, table: &str, _key: &RecordKey) -> StoreResult<Option<Item>> {
            Err(StoreError::backend(table, "get_item", "unavailable"))
        }

        async fn put_item(&self, table: &str, _key: &RecordKey, _item: Item) -> StoreResult<()> {
            Err(StoreError::backend(table, "put_item", "unavailable"))
        }

        async fn update_item(
            &self,
            table: &str,
            _key: &RecordKey,
            _changes: Item,
        ) -> StoreResult<Option<Item>> {
            Err(StoreError::backend(table, "update_item", "unavailable"))
        }

        async fn scan(&self, table: &str, _filter: &ScanFilter) -> StoreResult<Vec<Item>> {
            Err(StoreError::backend(table, "scan", "unavailable"))
        }
    }

    #[tokio::test]
    async fn test_store_failures_surface_as_store_errors() {
        let service = manager_with(Arc::new(FailingStore), Arc::new(FixedClock(Utc::now())));

        let err = service.list_customers().await.unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
        assert_eq!(err.user_message(), "A storage error occurred");
    }
}
