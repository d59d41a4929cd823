//! Payment service - payment records for users and the back office.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{require_non_empty, Clock, Payment, PaymentInput};

use crate::repository::PaymentRepository;

#[async_trait]
pub trait PaymentService: Send + Sync {
    async fn list_payments_for_user(&self, user_id: &str) -> AppResult<Vec<Payment>>;

    async fn list_all_payments(&self) -> AppResult<Vec<Payment>>;

    async fn get_payment(&self, id: &str) -> AppResult<Payment>;

    /// Record a payment. `id` defaults to a new UUID and `date` to now.
    async fn create_payment(&self, input: PaymentInput) -> AppResult<Payment>;

    /// Replace the fields present in `input` on an existing payment.
    async fn update_payment(&self, id: &str, input: PaymentInput) -> AppResult<Payment>;
}

pub struct PaymentManager {
    repo: Arc<dyn PaymentRepository>,
    clock: Arc<dyn Clock>,
}

impl PaymentManager {
    pub fn new(repo: Arc<dyn PaymentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn validate_amount(amount: f64) -> AppResult<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(AppError::validation("amount must be a non-negative number"))
    }
}

/// Present and non-blank, else `None`.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl PaymentService for PaymentManager {
    async fn list_payments_for_user(&self, user_id: &str) -> AppResult<Vec<Payment>> {
        self.repo.list_for_user(user_id).await
    }

    async fn list_all_payments(&self) -> AppResult<Vec<Payment>> {
        self.repo.list_all().await
    }

    async fn get_payment(&self, id: &str) -> AppResult<Payment> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_payment(&self, input: PaymentInput) -> AppResult<Payment> {
        let user_id = input.user_id.unwrap_or_default();
        require_non_empty("userId", &user_id)?;
        let amount = input.amount.unwrap_or_default();
        validate_amount(amount)?;

        let payment = Payment {
            id: non_blank(input.id).unwrap_or_else(|| Uuid::new_v4().to_string()),
            referral_id: input.referral_id.unwrap_or_default(),
            user_id,
            amount,
            date: non_blank(input.date).unwrap_or_else(|| self.clock.timestamp()),
            status: input.status.unwrap_or_default(),
        };

        self.repo.save(&payment).await?;
        info!(payment_id = %payment.id, user_id = %payment.user_id, "Payment recorded");
        Ok(payment)
    }

    async fn update_payment(&self, id: &str, input: PaymentInput) -> AppResult<Payment> {
        let existing = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        // The owner is part of the record key.
        if let Some(user_id) = non_blank(input.user_id) {
            if user_id != existing.user_id {
                return Err(AppError::validation("userId cannot be changed"));
            }
        }
        if let Some(amount) = input.amount {
            validate_amount(amount)?;
        }

        let payment = Payment {
            id: existing.id,
            referral_id: input.referral_id.unwrap_or(existing.referral_id),
            user_id: existing.user_id,
            amount: input.amount.unwrap_or(existing.amount),
            date: non_blank(input.date).unwrap_or(existing.date),
            status: input.status.unwrap_or(existing.status),
        };

        self.repo.save(&payment).await?;
        info!(payment_id = %payment.id, "Payment updated");
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockPaymentRepository, PaymentStore};
    use chrono::{TimeZone, Utc};
    use domain::FixedClock;
    use mockall::predicate::eq;
    use store::MemoryStore;

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()))
    }

    fn memory_service() -> PaymentManager {
        PaymentManager::new(
            Arc::new(PaymentStore::new(Arc::new(MemoryStore::new()), "payments")),
            clock(),
        )
    }

    #[tokio::test]
    async fn test_create_payment_fills_defaults() {
        let service = memory_service();

        let payment = service
            .create_payment(PaymentInput {
                user_id: Some("u1".into()),
                amount: Some(120.0),
                status: Some("Paid".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(!payment.id.is_empty());
        assert_eq!(payment.date, "2024-03-15T09:30:00.000Z");
        assert_eq!(service.get_payment(&payment.id).await.unwrap(), payment);
    }

    #[tokio::test]
    async fn test_create_payment_validation() {
        let mut repo = MockPaymentRepository::new();
        repo.expect_save().times(0);
        let service = PaymentManager::new(Arc::new(repo), clock());

        let missing_user = service.create_payment(PaymentInput::default()).await;
        assert!(matches!(missing_user, Err(AppError::Validation(_))));

        let negative = service
            .create_payment(PaymentInput {
                user_id: Some("u1".into()),
                amount: Some(-1.0),
                ..Default::default()
            })
            .await;
        assert!(matches!(negative, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_payment() {
        let mut repo = MockPaymentRepository::new();
        repo.expect_find_by_id().with(eq("p404")).returning(|_| Ok(None));
        let service = PaymentManager::new(Arc::new(repo), clock());

        assert!(matches!(service.get_payment("p404").await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_keeps_absent_fields() {
        let service = memory_service();
        let created = service
            .create_payment(PaymentInput {
                id: Some("p1".into()),
                referral_id: Some("r1".into()),
                user_id: Some("u1".into()),
                amount: Some(100.0),
                date: Some("2024-03-01T00:00:00Z".into()),
                status: Some("Pending".into()),
            })
            .await
            .unwrap();

        let updated = service
            .update_payment(
                "p1",
                PaymentInput {
                    status: Some("Paid".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, "Paid");
        assert_eq!(updated.amount, created.amount);
        assert_eq!(updated.referral_id, "r1");
        assert_eq!(updated.date, "2024-03-01T00:00:00Z");
        assert_eq!(service.list_all_payments().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_unknown_payment_is_not_found() {
        let service = memory_service();
        let result = service.update_payment("nope", PaymentInput::default()).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_rejects_owner_change() {
        let service = memory_service();
        service
            .create_payment(PaymentInput {
                id: Some("p1".into()),
                user_id: Some("u1".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        let result = service
            .update_payment(
                "p1",
                PaymentInput {
                    user_id: Some("u2".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(service.list_payments_for_user("u2").await.unwrap().is_empty());
    }
}
