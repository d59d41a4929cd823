//! Gateway configuration.

use common::config::{env_or, env_parse, ConfigError, StoreBackend};
use directory_service_lib::config::DirectoryConfig;
use referral_service_lib::config::ReferralServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    pub store_backend: StoreBackend,
    pub referral: ReferralServiceConfig,
    pub directory: DirectoryConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Every table name must be set; host and port have defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let referral = ReferralServiceConfig::from_env()?;

        Ok(Self {
            host: env_or("GATEWAY_HOST", "0.0.0.0"),
            port: env_parse("GATEWAY_PORT", 3000)?,
            store_backend: referral.store_backend,
            referral,
            directory: DirectoryConfig::from_env()?,
        })
    }
}
