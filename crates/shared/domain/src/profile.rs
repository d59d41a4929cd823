//! User profile entity and its lead-user projection.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile of a referring user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[serde(default)]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "uplineEVC", default, skip_serializing_if = "Option::is_none")]
    pub upline_evc: Option<String>,
    #[serde(rename = "uplineSMD", default, skip_serializing_if = "Option::is_none")]
    pub upline_smd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_info_document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Minimal user listing used by the lead portal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LeadUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl From<UserProfile> for LeadUser {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upline_fields_keep_original_casing() {
        let profile: UserProfile = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "name": "Dana",
            "email": "dana@example.com",
            "uplineEVC": "evc-1",
            "bankInfoDocument": "s3://docs/bank.pdf"
        }))
        .unwrap();

        assert_eq!(profile.upline_evc.as_deref(), Some("evc-1"));
        assert_eq!(profile.bank_info_document.as_deref(), Some("s3://docs/bank.pdf"));

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["uplineEVC"], "evc-1");
        assert!(json.get("uplineSMD").is_none());
    }

    #[test]
    fn test_profile_validation() {
        let mut profile = UserProfile {
            id: "u1".into(),
            name: "Dana".into(),
            email: "dana@example.com".into(),
            ..Default::default()
        };
        assert!(profile.validate().is_ok());

        profile.email = "not-an-email".into();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_lead_user_projection() {
        let lead = LeadUser::from(UserProfile {
            id: "u1".into(),
            name: "Dana".into(),
            email: "dana@example.com".into(),
            phone: Some("555".into()),
            ..Default::default()
        });
        assert_eq!(serde_json::to_value(lead).unwrap(), serde_json::json!({
            "id": "u1",
            "name": "Dana",
            "email": "dana@example.com"
        }));
    }
}
