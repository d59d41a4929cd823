//! Directory Service Library
//!
//! Customers, partners, user profiles and the lead-user listing. Embedded by
//! the gateway behind the REST routes.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use domain::{Clock, Customer, Partner, UserProfile};
use store::RecordStore;

use crate::config::DirectoryConfig;
use crate::repository::TableStore;
use crate::service::{DirectoryManager, DirectoryService};

/// Build the directory service over `store`.
pub fn build_service(
    store: Arc<dyn RecordStore>,
    config: &DirectoryConfig,
    clock: Arc<dyn Clock>,
) -> Arc<dyn DirectoryService> {
    Arc::new(DirectoryManager::new(
        Arc::new(TableStore::<Customer>::new(store.clone(), &config.customers_table)),
        Arc::new(TableStore::<Partner>::new(store.clone(), &config.partners_table)),
        Arc::new(TableStore::<UserProfile>::new(store, &config.user_profile_table)),
        clock,
    ))
}
