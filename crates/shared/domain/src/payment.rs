//! Payment domain entity.

use serde::{Deserialize, Serialize};

use crate::constants::PAYMENT_STATUS_PAID;

/// Payment domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub referral_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub amount: f64,
    /// ISO-8601 date, also the month bucket source
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: String,
}

impl Payment {
    /// Only the exact literal `"Paid"` counts.
    pub fn is_paid(&self) -> bool {
        self.status == PAYMENT_STATUS_PAID
    }
}

/// Payment write payload (create and update).
///
/// Absent fields fall back to generated values on create and to the stored
/// values on update.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    pub id: Option<String>,
    pub referral_id: Option<String>,
    pub user_id: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub status: Option<String>,
}
