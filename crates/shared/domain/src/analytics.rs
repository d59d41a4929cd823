//! Dashboard and earnings aggregation over a user's referrals and payments.
//!
//! Aggregation is permissive: malformed or short dates are skipped rather
//! than reported.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::MONTH_KEY_LEN;
use crate::payment::Payment;
use crate::referral::Referral;

/// Headline numbers for a user's dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Sum of `Paid` payment amounts
    pub total_earnings: f64,
    /// Referrals still `IN_PROGRESS` or `IN_REVIEW`
    pub pending_commissions: usize,
    pub total_referrals: usize,
    /// Percentage of referrals that are `PAID`, in `[0, 100]`
    pub success_rate: f64,
}

impl DashboardMetrics {
    pub fn compute(referrals: &[Referral], payments: &[Payment]) -> Self {
        let total_earnings = payments
            .iter()
            .filter(|p| p.is_paid())
            .map(|p| p.amount)
            .sum();

        let mut metrics = DashboardMetrics {
            total_earnings,
            ..Default::default()
        };
        let mut paid_count = 0usize;

        for referral in referrals {
            metrics.total_referrals += 1;
            let status = referral.status_kind();
            if status.is_paid() {
                paid_count += 1;
            } else if status.is_pending() {
                metrics.pending_commissions += 1;
            }
        }

        if metrics.total_referrals > 0 {
            metrics.success_rate = paid_count as f64 / metrics.total_referrals as f64 * 100.0;
        }

        metrics
    }
}

/// Earnings total for one `YYYY-MM` month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MonthlyEarning {
    pub month: String,
    pub earnings: f64,
}

/// First seven characters of an ISO-8601 timestamp, if it has that many.
pub fn month_key(timestamp: &str) -> Option<&str> {
    timestamp.get(..MONTH_KEY_LEN)
}

/// Bucket paid payments (by `date`) and paid referrals (by `createdAt`) into
/// months. Entries come out in ascending month order.
pub fn earnings_by_month(referrals: &[Referral], payments: &[Payment]) -> Vec<MonthlyEarning> {
    let mut buckets: BTreeMap<&str, f64> = BTreeMap::new();

    for payment in payments.iter().filter(|p| p.is_paid()) {
        if let Some(month) = month_key(&payment.date) {
            *buckets.entry(month).or_default() += payment.amount;
        }
    }

    for referral in referrals {
        let Some(amount) = referral.earned_amount() else {
            continue;
        };
        if let Some(month) = month_key(&referral.created_at) {
            *buckets.entry(month).or_default() += amount;
        }
    }

    buckets
        .into_iter()
        .map(|(month, earnings)| MonthlyEarning {
            month: month.to_string(),
            earnings,
        })
        .collect()
}
