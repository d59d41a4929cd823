//! Service layer - Business logic.

mod analytics_service;
mod payment_service;
mod referral_service;

pub use analytics_service::{AnalyticsEngine, AnalyticsService};
pub use payment_service::{PaymentManager, PaymentService};
pub use referral_service::{ReferralManager, ReferralService};
