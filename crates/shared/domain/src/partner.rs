//! Partner domain entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Commission split percentages for a partner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smd_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evc_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_pool_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrn_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_percentage: Option<f64>,
}

/// Human-readable commission summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CommissionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<String>,
}

/// Partner company record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[serde(default)]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compensation: Option<Compensation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission_info: Option<CommissionInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_links: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
