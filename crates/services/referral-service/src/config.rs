//! Referral service configuration.

use common::config::{required_env, ConfigError, StoreBackend};

/// Referral service configuration.
#[derive(Debug, Clone)]
pub struct ReferralServiceConfig {
    /// Table holding referral records
    pub referrals_table: String,
    /// Table holding payment records
    pub payments_table: String,
    pub store_backend: StoreBackend,
}

impl ReferralServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Both table names are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            referrals_table: required_env("REFERRALS_TABLE")?,
            payments_table: required_env("PAYMENTS_TABLE")?,
            store_backend: StoreBackend::from_env()?,
        })
    }
}
