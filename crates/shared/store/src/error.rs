//! Store errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The backing database rejected or failed the call
    #[error("{operation} on {table} failed: {message}")]
    Backend {
        table: String,
        operation: &'static str,
        message: String,
    },

    /// A record could not be converted to or from its stored form
    #[error("record conversion failed: {0}")]
    Serialization(String),
}

impl StoreError {
    pub fn backend(table: &str, operation: &'static str, message: impl ToString) -> Self {
        StoreError::Backend {
            table: table.to_string(),
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        StoreError::Serialization(message.to_string())
    }
}

impl From<serde_dynamo::Error> for StoreError {
    fn from(err: serde_dynamo::Error) -> Self {
        StoreError::serialization(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::serialization(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
