//! Referral domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::{REFERRAL_STATUS_IN_PROGRESS, REFERRAL_STATUS_IN_REVIEW, REFERRAL_STATUS_PAID};

/// Referral status enumeration.
///
/// Status strings are stored exactly as received; anything unrecognised maps
/// to `Unknown` and is ignored by metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferralStatus {
    InProgress,
    InReview,
    Paid,
    Unknown,
}

impl ReferralStatus {
    /// Counts toward pending commissions
    pub fn is_pending(&self) -> bool {
        matches!(self, ReferralStatus::InProgress | ReferralStatus::InReview)
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, ReferralStatus::Paid)
    }
}

impl From<&str> for ReferralStatus {
    fn from(s: &str) -> Self {
        match s {
            REFERRAL_STATUS_IN_PROGRESS => ReferralStatus::InProgress,
            REFERRAL_STATUS_IN_REVIEW => ReferralStatus::InReview,
            REFERRAL_STATUS_PAID => ReferralStatus::Paid,
            _ => ReferralStatus::Unknown,
        }
    }
}

/// Referral domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub company_id: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub status: String,
    /// Commission amount, set once the referral is paid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Referral {
    /// Create a new in-progress referral stamped with `now`.
    pub fn new(id: String, user_id: String, company_id: String, client_name: String, now: String) -> Self {
        Self {
            id,
            user_id,
            company_id,
            client_name,
            status: REFERRAL_STATUS_IN_PROGRESS.to_string(),
            amount: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Classified status
    pub fn status_kind(&self) -> ReferralStatus {
        ReferralStatus::from(self.status.as_str())
    }

    /// Amount that counts toward monthly earnings (paid and positive).
    pub fn earned_amount(&self) -> Option<f64> {
        match self.amount {
            Some(amount) if self.status_kind().is_paid() && amount > 0.0 => Some(amount),
            _ => None,
        }
    }
}

/// Referral creation input
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReferral {
    #[serde(default)]
    pub company_id: String,
    #[serde(default)]
    pub client_name: String,
}

/// Referral status change input
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReferralStatus {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
}
