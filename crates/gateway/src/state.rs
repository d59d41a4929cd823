//! Application state for dependency injection.

use std::sync::Arc;

use directory_service_lib::service::DirectoryService;
use domain::Clock;
use referral_service_lib::resolver::Resolver;
use referral_service_lib::service::PaymentService;
use referral_service_lib::ReferralServices;
use store::RecordStore;

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn DirectoryService>,
    pub payments: Arc<dyn PaymentService>,
    pub resolver: Resolver,
}

impl AppState {
    /// Wire every service over one record store.
    pub fn new(store: Arc<dyn RecordStore>, config: &GatewayConfig, clock: Arc<dyn Clock>) -> Self {
        let referral = ReferralServices::new(store.clone(), &config.referral, clock.clone());

        Self {
            directory: directory_service_lib::build_service(store, &config.directory, clock),
            payments: referral.payments.clone(),
            resolver: referral.resolver(),
        }
    }
}
