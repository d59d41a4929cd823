//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! entities, record keys, the clock abstraction and the analytics
//! aggregation shared by the services.

pub mod analytics;
pub mod clock;
pub mod constants;
pub mod customer;
pub mod error;
pub mod keys;
pub mod partner;
pub mod payment;
pub mod profile;
pub mod referral;

pub use analytics::{earnings_by_month, month_key, DashboardMetrics, MonthlyEarning};
pub use clock::{format_timestamp, Clock, FixedClock, SteppingClock, SystemClock};
pub use constants::*;
pub use customer::Customer;
pub use error::{require_non_empty, DomainError, DomainResult};
pub use keys::RecordKey;
pub use partner::{CommissionInfo, Compensation, Partner};
pub use payment::{Payment, PaymentInput};
pub use profile::{LeadUser, UserProfile};
pub use referral::{CreateReferral, Referral, ReferralStatus, UpdateReferralStatus};
