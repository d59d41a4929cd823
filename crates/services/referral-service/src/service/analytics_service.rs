//! Analytics engine - dashboard metrics and monthly earnings.
//!
//! Both operations read the caller's referrals and payments concurrently and
//! hand them to the pure aggregation in `domain::analytics`.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::try_join;
use tracing::debug;

use common::AppResult;
use domain::{DashboardMetrics, MonthlyEarning, Payment, Referral};

use crate::repository::{PaymentRepository, ReferralRepository};

#[async_trait]
pub trait AnalyticsService: Send + Sync {
    /// Headline numbers for a user's dashboard
    async fn dashboard_metrics(&self, user_id: &str) -> AppResult<DashboardMetrics>;

    /// Paid earnings bucketed by `YYYY-MM`.
    ///
    /// `months` is accepted for API compatibility and does not limit the result.
    async fn earnings_by_month(
        &self,
        user_id: &str,
        months: Option<i64>,
    ) -> AppResult<Vec<MonthlyEarning>>;
}

pub struct AnalyticsEngine {
    referrals: Arc<dyn ReferralRepository>,
    payments: Arc<dyn PaymentRepository>,
}

impl AnalyticsEngine {
    pub fn new(referrals: Arc<dyn ReferralRepository>, payments: Arc<dyn PaymentRepository>) -> Self {
        Self { referrals, payments }
    }

    /// Either failure aborts the whole call.
    async fn fetch(&self, user_id: &str) -> AppResult<(Vec<Referral>, Vec<Payment>)> {
        try_join!(
            self.referrals.list_for_user(user_id),
            self.payments.list_for_user(user_id)
        )
    }
}

#[async_trait]
impl AnalyticsService for AnalyticsEngine {
    async fn dashboard_metrics(&self, user_id: &str) -> AppResult<DashboardMetrics> {
        let (referrals, payments) = self.fetch(user_id).await?;
        Ok(DashboardMetrics::compute(&referrals, &payments))
    }

    async fn earnings_by_month(
        &self,
        user_id: &str,
        months: Option<i64>,
    ) -> AppResult<Vec<MonthlyEarning>> {
        if let Some(months) = months {
            debug!(user_id, months, "months argument ignored");
        }

        let (referrals, payments) = self.fetch(user_id).await?;
        Ok(domain::earnings_by_month(&referrals, &payments))
    }
}
