//! HTTP request handlers.

pub mod customer_handler;
pub mod graphql_handler;
pub mod health_handler;
pub mod lead_handler;
pub mod partner_handler;
pub mod payment_handler;
pub mod profile_handler;

pub use customer_handler::customer_routes;
pub use graphql_handler::graphql_routes;
pub use health_handler::health_routes;
pub use lead_handler::lead_routes;
pub use partner_handler::partner_routes;
pub use payment_handler::payment_routes;
pub use profile_handler::profile_routes;
