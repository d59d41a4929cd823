//! Repository layer for data access.

mod payment_repository;
mod referral_repository;

pub use payment_repository::{PaymentRepository, PaymentStore};
pub use referral_repository::{ReferralRepository, ReferralStore};

#[cfg(any(test, feature = "test-utils"))]
pub use payment_repository::MockPaymentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use referral_repository::MockReferralRepository;
