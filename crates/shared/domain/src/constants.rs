//! Domain-level constants.
//!
//! These constants define the wire literals and record-key conventions that
//! the stored data depends on. Changing any of them changes how existing
//! records are read.

// =============================================================================
// Referral Status
// =============================================================================

/// Referral is being worked on
pub const REFERRAL_STATUS_IN_PROGRESS: &str = "IN_PROGRESS";

/// Referral is awaiting review
pub const REFERRAL_STATUS_IN_REVIEW: &str = "IN_REVIEW";

/// Referral commission has been paid
pub const REFERRAL_STATUS_PAID: &str = "PAID";

// =============================================================================
// Payment Status
// =============================================================================

/// The only payment status that counts toward earnings.
///
/// Note the casing differs from [`REFERRAL_STATUS_PAID`].
pub const PAYMENT_STATUS_PAID: &str = "Paid";

// =============================================================================
// Record Keys
// =============================================================================

/// Partition key attribute name
pub const PARTITION_KEY_ATTR: &str = "PK";

/// Sort key attribute name
pub const SORT_KEY_ATTR: &str = "SK";

/// Separator between a key prefix and its identifier
pub const KEY_SEPARATOR: char = '#';

pub const REFERRAL_PREFIX: &str = "REFERRAL";
pub const METADATA_PREFIX: &str = "METADATA";
pub const CUSTOMER_PREFIX: &str = "CUSTOMER";
pub const PARTNER_PREFIX: &str = "PARTNER";
pub const USER_PREFIX: &str = "USER";
pub const PROFILE_PREFIX: &str = "PROFILE";
pub const PAYMENT_PREFIX: &str = "PAYMENT";

// =============================================================================
// Analytics
// =============================================================================

/// Length of a `YYYY-MM` month key
pub const MONTH_KEY_LEN: usize = 7;
