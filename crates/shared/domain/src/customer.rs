//! Customer domain entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Generated on create when empty
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[serde(default)]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
