//! Shared configuration helpers.
//!
//! Configuration is read from the environment once at start-up and handed to
//! each service as a typed struct.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors. Any of these is fatal at start-up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(String),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: String, value: String },
}

/// Read a required variable; empty values count as missing.
pub fn required_env(key: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key.to_string())),
    }
}

/// Read an optional variable, falling back to `default`.
pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an optional variable, falling back to `default` when unset.
pub fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Which record store implementation to wire in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// AWS DynamoDB (production)
    #[default]
    DynamoDb,
    /// In-process map (local development and tests)
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dynamodb" | "dynamo" => Ok(StoreBackend::DynamoDb),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::Invalid {
                key: "STORE_BACKEND".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl StoreBackend {
    /// Load from `STORE_BACKEND` (defaults to DynamoDB).
    pub fn from_env() -> Result<Self, ConfigError> {
        env_parse("STORE_BACKEND", StoreBackend::DynamoDb)
    }
}

#[cfg(feature = "store")]
impl StoreBackend {
    /// Build the selected record store.
    ///
    /// `DYNAMODB_ENDPOINT` overrides the DynamoDB endpoint (local testing).
    pub async fn connect(self) -> std::sync::Arc<dyn store::RecordStore> {
        match self {
            StoreBackend::DynamoDb => {
                let endpoint = env::var("DYNAMODB_ENDPOINT").ok();
                std::sync::Arc::new(store::DynamoStore::connect(endpoint.as_deref()).await)
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory record store, data is lost on exit");
                std::sync::Arc::new(store::MemoryStore::new())
            }
        }
    }
}
