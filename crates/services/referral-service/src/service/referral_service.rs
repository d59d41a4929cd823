//! Referral service - creation, lookup and status changes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use common::AppResult;
use domain::{require_non_empty, Clock, CreateReferral, Referral, UpdateReferralStatus};

use crate::repository::ReferralRepository;

#[async_trait]
pub trait ReferralService: Send + Sync {
    async fn list_referrals(&self, user_id: &str) -> AppResult<Vec<Referral>>;

    /// Missing referrals are `None`, not an error
    async fn get_referral(&self, id: &str) -> AppResult<Option<Referral>>;

    /// Create an `IN_PROGRESS` referral owned by `user_id`
    async fn create_referral(&self, user_id: &str, input: CreateReferral) -> AppResult<Referral>;

    /// Set a new status; the status string is stored as given.
    /// A missing referral is `None`.
    async fn update_referral_status(
        &self,
        input: UpdateReferralStatus,
    ) -> AppResult<Option<Referral>>;
}

/// Concrete implementation of ReferralService using repository.
pub struct ReferralManager {
    repo: Arc<dyn ReferralRepository>,
    clock: Arc<dyn Clock>,
}

impl ReferralManager {
    pub fn new(repo: Arc<dyn ReferralRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl ReferralService for ReferralManager {
    async fn list_referrals(&self, user_id: &str) -> AppResult<Vec<Referral>> {
        self.repo.list_for_user(user_id).await
    }

    async fn get_referral(&self, id: &str) -> AppResult<Option<Referral>> {
        self.repo.find_by_id(id).await
    }

    async fn create_referral(&self, user_id: &str, input: CreateReferral) -> AppResult<Referral> {
        require_non_empty("identity", user_id)?;

        let referral = Referral::new(
            Uuid::new_v4().to_string(),
            user_id.to_string(),
            input.company_id,
            input.client_name,
            self.clock.timestamp(),
        );

        self.repo.create(&referral).await?;
        info!(referral_id = %referral.id, user_id, "Referral created");
        Ok(referral)
    }

    async fn update_referral_status(
        &self,
        input: UpdateReferralStatus,
    ) -> AppResult<Option<Referral>> {
        require_non_empty("id", &input.id)?;

        let updated = self
            .repo
            .update_status(&input.id, &input.status, &self.clock.timestamp())
            .await?;

        match &updated {
            Some(referral) => {
                info!(referral_id = %referral.id, status = %referral.status, "Referral status updated")
            }
            None => debug!(referral_id = %input.id, "Status update for unknown referral"),
        }
        Ok(updated)
    }
}
