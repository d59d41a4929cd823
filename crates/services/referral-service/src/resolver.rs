//! Query-layer resolver.
//!
//! Receives direct-Lambda resolver events of the shape
//! `{ "info": { "fieldName" }, "arguments": { .. }, "identity": { "sub" } }`
//! and dispatches on the field name.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use common::{AppError, AppResult};
use domain::{CreateReferral, UpdateReferralStatus};

use crate::service::{AnalyticsService, PaymentService, ReferralService};

/// Resolver invocation payload
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolverEvent {
    pub info: ResolverInfo,
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
    #[serde(default)]
    pub identity: Option<Identity>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverInfo {
    pub field_name: String,
}

/// Authenticated caller, as supplied by the upstream authorizer
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Identity {
    #[serde(default)]
    pub sub: String,
}

impl ResolverEvent {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            info: ResolverInfo {
                field_name: field_name.into(),
            },
            ..Default::default()
        }
    }

    pub fn with_identity(mut self, sub: impl Into<String>) -> Self {
        self.identity = Some(Identity { sub: sub.into() });
        self
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments
            .get_or_insert_with(Map::new)
            .insert(name.into(), value);
        self
    }

    /// Caller id; required by every caller-scoped field.
    fn caller(&self) -> AppResult<&str> {
        match self.identity.as_ref().map(|i| i.sub.trim()) {
            Some(sub) if !sub.is_empty() => Ok(sub),
            _ => Err(AppError::validation("caller identity is required")),
        }
    }

    fn raw_argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .as_ref()
            .and_then(|args| args.get(name))
            .filter(|v| !v.is_null())
    }

    fn argument<T: DeserializeOwned>(&self, name: &str) -> AppResult<T> {
        let value = self
            .raw_argument(name)
            .ok_or_else(|| AppError::validation(format!("missing argument {}", name)))?;
        decode(name, value)
    }

    fn optional_argument<T: DeserializeOwned>(&self, name: &str) -> AppResult<Option<T>> {
        self.raw_argument(name).map(|v| decode(name, v)).transpose()
    }
}

fn decode<T: DeserializeOwned>(name: &str, value: &Value) -> AppResult<T> {
    T::deserialize(value)
        .map_err(|e| AppError::validation(format!("invalid argument {}: {}", name, e)))
}

fn to_json<T: Serialize>(value: T) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Field dispatcher over the referral, payment and analytics services.
#[derive(Clone)]
pub struct Resolver {
    referrals: Arc<dyn ReferralService>,
    payments: Arc<dyn PaymentService>,
    analytics: Arc<dyn AnalyticsService>,
}

impl Resolver {
    pub fn new(
        referrals: Arc<dyn ReferralService>,
        payments: Arc<dyn PaymentService>,
        analytics: Arc<dyn AnalyticsService>,
    ) -> Self {
        Self {
            referrals,
            payments,
            analytics,
        }
    }

    pub async fn resolve(&self, event: &ResolverEvent) -> AppResult<Value> {
        let field = event.info.field_name.as_str();
        debug!(field, "Resolving field");

        match field {
            "referrals" => to_json(self.referrals.list_referrals(event.caller()?).await?),
            "referral" => {
                let id: String = event.argument("id")?;
                to_json(self.referrals.get_referral(&id).await?)
            }
            "payments" => to_json(self.payments.list_payments_for_user(event.caller()?).await?),
            "dashboardMetrics" => to_json(self.analytics.dashboard_metrics(event.caller()?).await?),
            "earningsByMonth" => {
                let user_id = event.caller()?;
                let months: Option<i64> = event.optional_argument("months")?;
                to_json(self.analytics.earnings_by_month(user_id, months).await?)
            }
            "createReferral" => {
                let user_id = event.caller()?;
                let input: CreateReferral = event.argument("input")?;
                to_json(self.referrals.create_referral(user_id, input).await?)
            }
            "updateReferralStatus" => {
                let input: UpdateReferralStatus = event.argument("input")?;
                to_json(self.referrals.update_referral_status(input).await?)
            }
            other => Err(AppError::bad_request(format!("unknown field {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{PaymentStore, ReferralStore};
    use crate::service::{AnalyticsEngine, PaymentManager, ReferralManager};
    use chrono::{Duration, TimeZone, Utc};
    use domain::{Payment, SteppingClock};
    use serde_json::json;
    use store::MemoryStore;

    fn resolver() -> (Resolver, Arc<dyn PaymentService>) {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(SteppingClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            Duration::seconds(1),
        ));
        let referral_repo = Arc::new(ReferralStore::new(store.clone(), "referrals"));
        let payment_repo = Arc::new(PaymentStore::new(store, "payments"));

        let payments: Arc<dyn PaymentService> =
            Arc::new(PaymentManager::new(payment_repo.clone(), clock.clone()));
        let resolver = Resolver::new(
            Arc::new(ReferralManager::new(referral_repo.clone(), clock)),
            payments.clone(),
            Arc::new(AnalyticsEngine::new(referral_repo, payment_repo)),
        );
        (resolver, payments)
    }

    fn create_event(company_id: &str, client_name: &str) -> ResolverEvent {
        ResolverEvent::new("createReferral")
            .with_identity("u1")
            .with_argument("input", json!({"companyId": company_id, "clientName": client_name}))
    }

    #[test]
    fn test_event_deserialization() {
        let event: ResolverEvent = serde_json::from_value(json!({
            "info": {"fieldName": "earningsByMonth", "parentTypeName": "Query"},
            "arguments": {"months": 6},
            "identity": {"sub": "u1", "username": "dana"},
            "source": null
        }))
        .unwrap();

        assert_eq!(event.info.field_name, "earningsByMonth");
        assert_eq!(event.caller().unwrap(), "u1");
        assert_eq!(event.optional_argument::<i64>("months").unwrap(), Some(6));
    }

    #[tokio::test]
    async fn test_create_then_fetch_referral() {
        let (resolver, _) = resolver();

        let created = resolver.resolve(&create_event("c1", "Acme")).await.unwrap();
        assert_eq!(created["status"], "IN_PROGRESS");
        assert_eq!(created["userId"], "u1");
        assert_eq!(created["createdAt"], created["updatedAt"]);

        let id = created["id"].as_str().unwrap().to_string();
        let fetched = resolver
            .resolve(&ResolverEvent::new("referral").with_argument("id", json!(id)))
            .await
            .unwrap();
        assert_eq!(fetched, created);

        let listed = resolver
            .resolve(&ResolverEvent::new("referrals").with_identity("u1"))
            .await
            .unwrap();
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_missing_referral_resolves_to_null() {
        let (resolver, _) = resolver();
        let result = resolver
            .resolve(&ResolverEvent::new("referral").with_argument("id", json!("ghost")))
            .await
            .unwrap();
        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_update_status_flow() {
        let (resolver, _) = resolver();
        let created = resolver.resolve(&create_event("c1", "Acme")).await.unwrap();

        let updated = resolver
            .resolve(
                &ResolverEvent::new("updateReferralStatus")
                    .with_argument("input", json!({"id": created["id"], "status": "PAID"})),
            )
            .await
            .unwrap();

        assert_eq!(updated["status"], "PAID");
        assert!(updated["updatedAt"].as_str() > created["createdAt"].as_str());
    }

    #[tokio::test]
    async fn test_update_status_of_unknown_referral_is_null() {
        let (resolver, _) = resolver();
        let result = resolver
            .resolve(
                &ResolverEvent::new("updateReferralStatus")
                    .with_argument("input", json!({"id": "ghost", "status": "PAID"})),
            )
            .await
            .unwrap();
        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_update_status_accepts_empty_status() {
        let (resolver, _) = resolver();
        let created = resolver.resolve(&create_event("c1", "Acme")).await.unwrap();

        let updated = resolver
            .resolve(
                &ResolverEvent::new("updateReferralStatus")
                    .with_argument("input", json!({"id": created["id"], "status": ""})),
            )
            .await
            .unwrap();
        assert_eq!(updated["status"], "");
    }

    #[tokio::test]
    async fn test_analytics_fields() {
        let (resolver, payments) = resolver();
        payments
            .create_payment(domain::PaymentInput {
                user_id: Some("u1".into()),
                amount: Some(100.0),
                date: Some("2024-03-15T00:00:00Z".into()),
                status: Some("Paid".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        resolver.resolve(&create_event("c1", "Acme")).await.unwrap();

        let metrics = resolver
            .resolve(&ResolverEvent::new("dashboardMetrics").with_identity("u1"))
            .await
            .unwrap();
        assert_eq!(
            metrics,
            json!({
                "totalEarnings": 100.0,
                "pendingCommissions": 1,
                "totalReferrals": 1,
                "successRate": 0.0
            })
        );

        let earnings = resolver
            .resolve(
                &ResolverEvent::new("earningsByMonth")
                    .with_identity("u1")
                    .with_argument("months", json!(3)),
            )
            .await
            .unwrap();
        assert_eq!(earnings, json!([{"month": "2024-03", "earnings": 100.0}]));

        let listed: Vec<Payment> = serde_json::from_value(
            resolver
                .resolve(&ResolverEvent::new("payments").with_identity("u1"))
                .await
                .unwrap(),
        )
        .unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_field_is_bad_request() {
        let (resolver, _) = resolver();
        let result = resolver.resolve(&ResolverEvent::new("deleteEverything")).await;
        assert!(matches!(result, Err(AppError::BadRequest(ref m)) if m == "unknown field deleteEverything"));
    }

    #[tokio::test]
    async fn test_caller_scoped_fields_need_identity() {
        let (resolver, _) = resolver();
        let result = resolver.resolve(&ResolverEvent::new("dashboardMetrics")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_malformed_arguments_are_validation_errors() {
        let (resolver, _) = resolver();

        let bad_input = ResolverEvent::new("createReferral")
            .with_identity("u1")
            .with_argument("input", json!("not an object"));
        assert!(matches!(resolver.resolve(&bad_input).await, Err(AppError::Validation(_))));

        let bad_months = ResolverEvent::new("earningsByMonth")
            .with_identity("u1")
            .with_argument("months", json!("six"));
        assert!(matches!(resolver.resolve(&bad_months).await, Err(AppError::Validation(_))));

        let missing_input = ResolverEvent::new("updateReferralStatus");
        assert!(matches!(resolver.resolve(&missing_input).await, Err(AppError::Validation(_))));
    }
}
