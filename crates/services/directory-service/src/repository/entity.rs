//! Record shape shared by customers, partners and user profiles.

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use domain::{Customer, Partner, RecordKey, UserProfile};

/// An entity stored one record per id with optional timestamps.
pub trait DirectoryEntity:
    Serialize + DeserializeOwned + Validate + Clone + Send + Sync + 'static
{
    /// Name used in log lines
    const KIND: &'static str;

    fn key(id: &str) -> RecordKey;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    fn created_at(&self) -> Option<&str>;

    fn set_timestamps(&mut self, created_at: String, updated_at: String);
}

macro_rules! directory_entity {
    ($ty:ty, $kind:literal, $key:path) => {
        impl DirectoryEntity for $ty {
            const KIND: &'static str = $kind;

            fn key(id: &str) -> RecordKey {
                $key(id)
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn created_at(&self) -> Option<&str> {
                self.created_at.as_deref().filter(|v| !v.is_empty())
            }

            fn set_timestamps(&mut self, created_at: String, updated_at: String) {
                self.created_at = Some(created_at);
                self.updated_at = Some(updated_at);
            }
        }
    };
}

directory_entity!(Customer, "customer", RecordKey::customer);
directory_entity!(Partner, "partner", RecordKey::partner);
directory_entity!(UserProfile, "user profile", RecordKey::user_profile);
