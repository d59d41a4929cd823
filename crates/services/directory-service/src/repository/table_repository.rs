//! Generic one-table repository for directory entities.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use store::{from_record, to_record, RecordStore, ScanFilter};

use super::DirectoryEntity;

#[async_trait]
pub trait DirectoryRepository<T: DirectoryEntity>: Send + Sync {
    /// Every record in the table
    async fn list(&self) -> AppResult<Vec<T>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<T>>;

    /// Write the entity under its own id, replacing any existing record
    async fn save(&self, entity: &T) -> AppResult<()>;
}

/// Record-store backed [`DirectoryRepository`] for one table.
pub struct TableStore<T> {
    store: Arc<dyn RecordStore>,
    table: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T> TableStore<T> {
    pub fn new(store: Arc<dyn RecordStore>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: DirectoryEntity> DirectoryRepository<T> for TableStore<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        let items = self.store.scan(&self.table, &ScanFilter::all()).await?;
        let entities = items
            .into_iter()
            .map(from_record)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(entities)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let item = self.store.get_item(&self.table, &T::key(id)).await?;
        Ok(item.map(from_record).transpose()?)
    }

    async fn save(&self, entity: &T) -> AppResult<()> {
        let item = to_record(entity)?;
        self.store.put_item(&self.table, &T::key(entity.id()), item).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Customer, Partner};
    use store::MemoryStore;

    #[tokio::test]
    async fn test_entities_land_under_their_own_keys() {
        let memory = Arc::new(MemoryStore::new());
        let customers = TableStore::<Customer>::new(memory.clone(), "directory");
        let partners = TableStore::<Partner>::new(memory.clone(), "directory");

        customers
            .save(&Customer {
                id: "x1".into(),
                name: "Ann".into(),
                email: "ann@example.com".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        partners
            .save(&Partner {
                id: "x1".into(),
                name: "Solar Co".into(),
                email: "hello@solar.example".into(),
                tags: Some(vec!["solar".into()]),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(customers.find_by_id("x1").await.unwrap().unwrap().name, "Ann");
        assert_eq!(partners.find_by_id("x1").await.unwrap().unwrap().name, "Solar Co");
        assert!(memory
            .get_item("directory", &domain::RecordKey::customer("x1"))
            .await
            .unwrap()
            .is_some());
    }
}
