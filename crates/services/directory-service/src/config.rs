//! Directory service configuration.

use common::config::{required_env, ConfigError};

/// Table names for the directory entities.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub customers_table: String,
    pub partners_table: String,
    /// Also backs the lead-user listing
    pub user_profile_table: String,
}

impl DirectoryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            customers_table: required_env("CUSTOMERS_TABLE")?,
            partners_table: required_env("PARTNERS_TABLE")?,
            user_profile_table: required_env("USER_PROFILE_TABLE")?,
        })
    }
}
