//! Composite record keys.
//!
//! Every entity lives under a partition key `<ENTITY>#<id>` and a sort key
//! `<SUBTYPE>#<id>`.

use std::fmt;

use crate::constants::{
    CUSTOMER_PREFIX, KEY_SEPARATOR, METADATA_PREFIX, PARTNER_PREFIX, PAYMENT_PREFIX,
    PROFILE_PREFIX, REFERRAL_PREFIX, USER_PREFIX,
};

/// Partition + sort key locating a single record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub pk: String,
    pub sk: String,
}

fn compose(prefix: &str, id: &str) -> String {
    format!("{}{}{}", prefix, KEY_SEPARATOR, id)
}

impl RecordKey {
    pub fn new(pk: impl Into<String>, sk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            sk: sk.into(),
        }
    }

    /// `REFERRAL#<id>` / `METADATA#<id>`
    pub fn referral(id: &str) -> Self {
        Self::new(compose(REFERRAL_PREFIX, id), compose(METADATA_PREFIX, id))
    }

    /// `PAYMENT#<id>` / `USER#<user_id>`
    pub fn payment(id: &str, user_id: &str) -> Self {
        Self::new(compose(PAYMENT_PREFIX, id), compose(USER_PREFIX, user_id))
    }

    /// `CUSTOMER#<id>` / `PROFILE#<id>`
    pub fn customer(id: &str) -> Self {
        Self::new(compose(CUSTOMER_PREFIX, id), compose(PROFILE_PREFIX, id))
    }

    /// `PARTNER#<id>` / `PROFILE#<id>`
    pub fn partner(id: &str) -> Self {
        Self::new(compose(PARTNER_PREFIX, id), compose(PROFILE_PREFIX, id))
    }

    /// `USER#<id>` / `PROFILE#<id>`
    pub fn user_profile(id: &str) -> Self {
        Self::new(compose(USER_PREFIX, id), compose(PROFILE_PREFIX, id))
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.pk, self.sk)
    }
}
