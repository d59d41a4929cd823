//! Referral Service Library
//!
//! Referral and payment repositories, the analytics engine and the
//! query-layer resolver. The resolver runs under the AWS Lambda runtime or is
//! embedded by the gateway behind `POST /graphql`.

pub mod config;
pub mod repository;
pub mod resolver;
pub mod service;

use std::path::Path;
use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing::info;

use domain::{Clock, SystemClock};
use store::RecordStore;

use crate::config::ReferralServiceConfig;
use crate::repository::{PaymentStore, ReferralStore};
use crate::resolver::{Resolver, ResolverEvent};
use crate::service::{
    AnalyticsEngine, AnalyticsService, PaymentManager, PaymentService, ReferralManager,
    ReferralService,
};

pub use lambda_runtime::Error;

/// Wired referral, payment and analytics services.
#[derive(Clone)]
pub struct ReferralServices {
    pub referrals: Arc<dyn ReferralService>,
    pub payments: Arc<dyn PaymentService>,
    pub analytics: Arc<dyn AnalyticsService>,
}

impl ReferralServices {
    /// Build repositories and services over `store`.
    pub fn new(
        store: Arc<dyn RecordStore>,
        config: &ReferralServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let referral_repo = Arc::new(ReferralStore::new(store.clone(), &config.referrals_table));
        let payment_repo = Arc::new(PaymentStore::new(store, &config.payments_table));

        Self {
            referrals: Arc::new(ReferralManager::new(referral_repo.clone(), clock.clone())),
            payments: Arc::new(PaymentManager::new(payment_repo.clone(), clock)),
            analytics: Arc::new(AnalyticsEngine::new(referral_repo, payment_repo)),
        }
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::new(
            self.referrals.clone(),
            self.payments.clone(),
            self.analytics.clone(),
        )
    }
}

async fn build_resolver(config: &ReferralServiceConfig) -> Resolver {
    let store = config.store_backend.connect().await;
    ReferralServices::new(store, config, Arc::new(SystemClock)).resolver()
}

/// Serve resolver events from the Lambda runtime until it shuts down.
pub async fn run_lambda(config: ReferralServiceConfig) -> Result<(), Error> {
    let resolver = build_resolver(&config).await;
    info!(
        referrals_table = %config.referrals_table,
        payments_table = %config.payments_table,
        "Referral resolver ready"
    );

    lambda_runtime::run(service_fn(|event: LambdaEvent<ResolverEvent>| {
        let resolver = resolver.clone();
        async move {
            resolver
                .resolve(&event.payload)
                .await
                .map_err(|e| Error::from(e.user_message()))
        }
    }))
    .await
}

/// Resolve a single event read from a JSON file.
pub async fn invoke_file(config: ReferralServiceConfig, path: &Path) -> Result<Value, Error> {
    let raw = tokio::fs::read_to_string(path).await?;
    let event: ResolverEvent = serde_json::from_str(&raw)?;
    let resolver = build_resolver(&config).await;

    Ok(resolver.resolve(&event).await?)
}
