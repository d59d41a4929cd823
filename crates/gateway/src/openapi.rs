//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{
    CommissionInfo, Compensation, Customer, LeadUser, Partner, Payment, PaymentInput, UserProfile,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::customer_handler::list_customers,
        crate::handlers::customer_handler::create_customer,
        crate::handlers::customer_handler::get_customer,
        crate::handlers::customer_handler::put_customer,
        crate::handlers::partner_handler::list_partners,
        crate::handlers::partner_handler::create_partner,
        crate::handlers::partner_handler::get_partner,
        crate::handlers::partner_handler::put_partner,
        crate::handlers::profile_handler::get_profile,
        crate::handlers::profile_handler::put_profile,
        crate::handlers::profile_handler::list_user_payments,
        crate::handlers::payment_handler::list_payments,
        crate::handlers::payment_handler::create_payment,
        crate::handlers::payment_handler::get_payment,
        crate::handlers::payment_handler::update_payment,
        crate::handlers::lead_handler::list_lead_users,
    ),
    components(
        schemas(
            Customer,
            Partner,
            Compensation,
            CommissionInfo,
            UserProfile,
            LeadUser,
            Payment,
            PaymentInput,
        )
    ),
    tags(
        (name = "Customers", description = "Customer directory"),
        (name = "Partners", description = "Partner companies"),
        (name = "Users", description = "User profiles and their payments"),
        (name = "Payments", description = "Payment records"),
        (name = "Lead", description = "Lead portal"),
    )
)]
pub struct ApiDoc;
